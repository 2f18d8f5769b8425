// ============================================================================
// EVENT HANDLING - Registro de listeners
// ============================================================================
// Los listeners globales (document/window) se registran UNA sola vez en
// App::wire_events; los botones de las tarjetas se resuelven por delegación,
// así re-renderizar las listas con set_inner_html no acumula listeners.
// closure.forget() mantiene vivo el closure durante toda la página.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget};

/// Registrar handler genérico sobre cualquier EventTarget
pub fn on_event<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Helper para click
pub fn on_click<F>(target: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    on_event(target, "click", handler)
}

/// Helper para submit: siempre hace preventDefault antes de llamar al handler
pub fn on_submit<F>(target: &EventTarget, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    on_event(target, "submit", move |e: Event| {
        e.prevent_default();
        handler(e);
    })
}
