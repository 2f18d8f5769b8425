// ============================================================================
// STATE MODULE - Store del dashboard con Rc<RefCell> + notificaciones
// ============================================================================

pub mod listing_store;

pub use listing_store::*;
