pub mod listing;
pub mod dashboard;

pub use listing::{Listing, ListingUpdate};
pub use dashboard::DashboardState;
