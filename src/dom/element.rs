// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement, Window};
use crate::utils::PROPERTY_ITEM_SELECTOR;

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Query selector (buscar elemento por selector CSS)
pub fn query_selector(selector: &str) -> Result<Option<Element>, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))?
        .query_selector(selector)
}

/// Establecer inner HTML
pub fn set_inner_html(element: &Element, html: &str) {
    element.set_inner_html(html);
}

/// Establecer text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Ocultar elemento (`style.display = "none"`)
pub fn hide_element(element: &Element) -> Result<(), JsValue> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("Element is not an HtmlElement"))?
        .style()
        .set_property("display", "none")
}

/// Ancestro más cercano (incluido el propio elemento) que cumple el selector
pub fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).ok().flatten()
}

/// Elemento que originó el evento
pub fn event_target_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

/// Id del anuncio: `data-id` de la `.property-item` que contiene al elemento
pub fn listing_id_for(element: &Element) -> Option<String> {
    closest(element, PROPERTY_ITEM_SELECTOR)?
        .get_attribute("data-id")
        .filter(|id| !id.is_empty())
}

/// `window.confirm` bloqueante; false si no hay window o falla
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Obtener formulario por ID
pub fn get_form_by_id(id: &str) -> Option<HtmlFormElement> {
    get_element_by_id(id)?.dyn_into::<HtmlFormElement>().ok()
}

fn form_input(form: &HtmlFormElement, name: &str) -> Option<HtmlInputElement> {
    form.elements()
        .named_item(name)?
        .dyn_into::<HtmlInputElement>()
        .ok()
}

/// Leer valor de un input del formulario por `name`
pub fn form_value(form: &HtmlFormElement, name: &str) -> Option<String> {
    form_input(form, name).map(|input| input.value())
}

/// Escribir valor de un input del formulario por `name` (ignora inputs inexistentes)
pub fn set_form_value(form: &HtmlFormElement, name: &str, value: &str) {
    if let Some(input) = form_input(form, name) {
        input.set_value(value);
    }
}
