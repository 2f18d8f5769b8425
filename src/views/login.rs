// ============================================================================
// LOGIN VIEW - Formulario de login (sin lógica: no hay autenticación)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Event;
use crate::dom::{get_element_by_id, on_click, on_submit};
use crate::utils::{FORGOT_PASSWORD_ID, LOGIN_FORM_ID};

/// Intercepta submit y "forgot password" para que la página no navegue.
/// Si la página no tiene `#loginForm` no hace nada.
pub fn wire_login_form() -> Result<(), JsValue> {
    let Some(form) = get_element_by_id(LOGIN_FORM_ID) else {
        return Ok(());
    };

    on_submit(&form, |_e: Event| {
        log::debug!("🔐 [LOGIN] Submit interceptado (login no implementado)");
    })?;

    if let Some(link) = get_element_by_id(FORGOT_PASSWORD_ID) {
        on_click(&link, |e: Event| {
            e.prevent_default();
            log::debug!("🔐 [LOGIN] Forgot password interceptado (no implementado)");
        })?;
    }

    log::info!("✅ [LOGIN] Formulario de login conectado");
    Ok(())
}
