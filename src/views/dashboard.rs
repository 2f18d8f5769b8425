// ============================================================================
// DASHBOARD VIEW - Proyección pura estado → fragmentos HTML + contadores
// ============================================================================

use chrono::{DateTime, Utc};
use crate::models::DashboardState;
use crate::views::listing_card::render_listing_card;

/// Las tres secciones del dashboard
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Uploaded,
    RecentlyViewed,
    Favorites,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Uploaded, Section::RecentlyViewed, Section::Favorites];

    /// Clase CSS del contenedor de la sección en la página
    pub fn class_name(self) -> &'static str {
        match self {
            Section::Uploaded => "uploaded-properties",
            Section::RecentlyViewed => "recently-viewed",
            Section::Favorites => "favorited-properties",
        }
    }

    pub fn list_selector(self) -> String {
        format!(".{} .property-list", self.class_name())
    }

    pub fn count_selector(self) -> String {
        format!(".{} .section-count", self.class_name())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionView {
    pub html: String,
    pub count: usize,
}

/// Resultado de renderizar el dashboard; el host lo aplica al DOM
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardView {
    pub uploaded: SectionView,
    pub recently_viewed: SectionView,
    pub favorites: SectionView,
}

impl DashboardView {
    pub fn section(&self, section: Section) -> &SectionView {
        match section {
            Section::Uploaded => &self.uploaded,
            Section::RecentlyViewed => &self.recently_viewed,
            Section::Favorites => &self.favorites,
        }
    }
}

/// Renderizar las tres secciones. No modifica el estado.
///
/// El contador de favoritos es `favorites.len()`, incluidos los ids huérfanos
/// que no producen tarjeta.
pub fn render_dashboard(state: &DashboardState, now: DateTime<Utc>) -> DashboardView {
    let uploaded = state
        .uploaded_properties
        .iter()
        .map(|l| render_listing_card(l, Section::Uploaded, state.is_favorite(&l.id), now))
        .collect::<String>();

    let recently_viewed = state
        .recently_viewed
        .iter()
        .map(|l| render_listing_card(l, Section::RecentlyViewed, state.is_favorite(&l.id), now))
        .collect::<String>();

    let favorites = state
        .favorite_listings()
        .map(|l| render_listing_card(l, Section::Favorites, true, now))
        .collect::<String>();

    DashboardView {
        uploaded: SectionView {
            html: uploaded,
            count: state.uploaded_properties.len(),
        },
        recently_viewed: SectionView {
            html: recently_viewed,
            count: state.recently_viewed.len(),
        },
        favorites: SectionView {
            html: favorites,
            count: state.favorites.len(),
        },
    }
}
