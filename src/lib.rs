// ============================================================================
// PROPERTY DASHBOARD - FRONTEND RUST PURO + WASM
// ============================================================================
// - Models: Listing / DashboardState (formato de localStorage)
// - Services: persistencia del estado completo bajo una clave
// - State: ListingStore con Rc<RefCell> + subscribers
// - Views: funciones puras estado → HTML (+ cableado del login)
// - App: eventos DOM → store → render
// ============================================================================

pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod views;
pub mod dom;
mod app;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use crate::app::{App, DashboardStore};
use crate::config::CONFIG;
use crate::errors::StoreError;
use crate::models::Listing;

// Instancia global de App (una por carga de página)
thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("🏠 Property Dashboard - Rust Puro + WASM");

    let app = App::new()?;
    app.wire_events()?;
    app.render_initial()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-render completo del dashboard
pub fn rerender_app() {
    APP.with(|app_cell| match app_cell.borrow().as_ref() {
        Some(app) => {
            if let Err(e) = app.render() {
                log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
            }
        }
        None => log::warn!("⚠️ [RERENDER] App no está inicializada"),
    });
}

/// Ejecutar una operación sobre el store sin mantener prestado APP
fn with_store<T>(op: impl FnOnce(&DashboardStore) -> Result<T, StoreError>) -> Result<T, JsValue> {
    let store = APP
        .with(|app_cell| app_cell.borrow().as_ref().map(App::store))
        .ok_or_else(|| JsValue::from_str("App no está inicializada"))?;
    op(&store).map_err(JsValue::from)
}

fn parse_listing(json: &str) -> Result<Listing, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Anuncio inválido: {}", e)))
}

/// Re-render llamable desde JavaScript
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}

/// Añadir un anuncio subido (JSON con el formato de `Listing`)
#[wasm_bindgen]
pub fn add_uploaded_listing(json: &str) -> Result<(), JsValue> {
    let listing = parse_listing(json)?;
    with_store(|store| store.add_listing(listing))
}

/// Registrar que el usuario vio un anuncio (JSON con el formato de `Listing`)
#[wasm_bindgen]
pub fn record_listing_view(json: &str) -> Result<(), JsValue> {
    let listing = parse_listing(json)?;
    with_store(|store| store.record_view(listing))
}
