// ============================================================================
// VIEWS MODULE - Renderizado puro (estado → HTML) y cableado de formularios
// ============================================================================

pub mod listing_card;
pub mod dashboard;
pub mod booking;
pub mod login;

pub use listing_card::{render_listing_card, time_ago};
pub use dashboard::{render_dashboard, DashboardView, Section, SectionView};
pub use booking::render_viewing_time_options;
pub use login::wire_login_form;
