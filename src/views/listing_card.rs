// ============================================================================
// LISTING CARD VIEW - Tarjeta de anuncio como fragmento HTML
// ============================================================================

use chrono::{DateTime, Utc};
use crate::config::CONFIG;
use crate::models::Listing;
use crate::utils::html_escape;
use crate::views::Section;

/// Etiqueta relativa para `lastViewed`: minutos (<60), horas (<24) o días
/// Las fechas futuras cuentan como 0 minutos.
pub fn time_ago(last_viewed: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed_ms = now
        .signed_duration_since(last_viewed)
        .num_milliseconds()
        .max(0);
    let minutes = elapsed_ms / 60_000;
    if minutes < 60 {
        return format!("{} minutes ago", minutes);
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{} hours ago", hours);
    }
    format!("{} days ago", hours / 24)
}

/// Renderizar tarjeta de anuncio
///
/// - Editar/Eliminar solo en la sección de subidos
/// - "Viewed ... ago" solo en vistos recientemente (y solo si hay `lastViewed`)
/// - `favorite-btn active` según pertenencia actual a favoritos
pub fn render_listing_card(
    listing: &Listing,
    section: Section,
    is_favorite: bool,
    now: DateTime<Utc>,
) -> String {
    let image = listing
        .image_url()
        .unwrap_or(CONFIG.placeholder_image_url.as_str());
    let title = html_escape(&listing.title);

    let view_count = match (section, listing.last_viewed) {
        (Section::RecentlyViewed, Some(viewed)) => format!(
            r#"<p class="view-count">Viewed {}</p>"#,
            time_ago(viewed, now)
        ),
        _ => String::new(),
    };

    let actions = if section == Section::Uploaded {
        concat!(
            r#"<div class="property-actions">"#,
            r#"<button class="action-btn edit-btn">Edit</button>"#,
            r#"<button class="action-btn delete-btn">Delete</button>"#,
            "</div>"
        )
    } else {
        ""
    };

    let favorite_class = if is_favorite { "favorite-btn active" } else { "favorite-btn" };

    format!(
        concat!(
            r#"<div class="property-item" data-id="{id}">"#,
            r#"<div class="property-thumbnail"><img src="{image}" alt="{title}"></div>"#,
            r#"<div class="property-details">"#,
            r#"<h3 class="property-title">{title}</h3>"#,
            r#"<p class="property-location">{location}</p>"#,
            r#"<p class="property-price">{price}</p>"#,
            "{view_count}",
            "</div>",
            "{actions}",
            r#"<button class="{favorite_class}" aria-label="Toggle favorite">♥</button>"#,
            "</div>"
        ),
        id = html_escape(&listing.id),
        image = html_escape(image),
        title = title,
        location = html_escape(&listing.location),
        price = html_escape(&listing.price),
        view_count = view_count,
        actions = actions,
        favorite_class = favorite_class,
    )
}
