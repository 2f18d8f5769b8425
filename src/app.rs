// ============================================================================
// APP - Aplicación principal: store + cableado DOM + aplicación de la vista
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Event;
use crate::dom::*;
use crate::errors::StoreError;
use crate::models::ListingUpdate;
use crate::services::DashboardService;
use crate::state::ListingStore;
use crate::utils::*;
use crate::views::{render_viewing_time_options, wire_login_form, Section};

type AppStorage = Box<dyn KeyValueStorage>;

/// Store tal como lo usa la página
pub type DashboardStore = ListingStore<AppStorage>;

/// Aplicación principal
pub struct App {
    store: Rc<DashboardStore>,
    /// Anuncio cargado en `#editPropertyForm`
    editing_id: Rc<RefCell<Option<String>>>,
}

impl App {
    /// Crear aplicación: abre localStorage (o memoria si no está disponible) y carga el estado
    pub fn new() -> Result<Self, JsValue> {
        let storage: AppStorage = match LocalStorage::open() {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                log::warn!("⚠️ [APP] {}: los cambios no sobrevivirán a una recarga", e);
                Box::new(MemoryStorage::new())
            }
        };

        let store = Rc::new(ListingStore::open(
            DashboardService::with_configured_key(storage),
            SystemClock,
        ));
        log::info!(
            "🏠 [APP] Estado bajo '{}' ({})",
            store.storage_key(),
            if store.has_saved_state() { "restaurado" } else { "sin guardar" }
        );

        // Re-render en el siguiente tick: agrupa mutaciones seguidas y evita
        // re-entrar en APP mientras un handler sigue en curso
        store.subscribe(|| {
            Timeout::new(0, crate::rerender_app).forget();
        });

        Ok(Self {
            store,
            editing_id: Rc::new(RefCell::new(None)),
        })
    }

    pub fn store(&self) -> Rc<DashboardStore> {
        self.store.clone()
    }

    /// Render inicial solo si había estado guardado; si no, se conserva el
    /// marcado de la página hasta la primera mutación
    pub fn render_initial(&self) -> Result<(), JsValue> {
        if !self.store.has_saved_state() {
            log::debug!("[APP] Sin estado guardado, se conserva el marcado inicial");
            return Ok(());
        }
        self.render()
    }

    /// Aplicar la vista actual: tres listas y tres contadores.
    /// Una región que no existe en la página se omite.
    pub fn render(&self) -> Result<(), JsValue> {
        let view = self.store.render();
        for section in Section::ALL {
            let section_view = view.section(section);

            match query_selector(&section.list_selector())? {
                Some(container) => set_inner_html(&container, &section_view.html),
                None => log::debug!("[APP] Sin contenedor para {}, se omite", section.class_name()),
            }

            if let Some(count) = query_selector(&section.count_selector())? {
                set_text_content(&count, &section_view.count.to_string());
            }
        }
        log::debug!(
            "🎬 [APP] Render: {} subidos, {} vistos, {} favoritos",
            view.uploaded.count,
            view.recently_viewed.count,
            view.favorites.count
        );
        Ok(())
    }

    /// Registrar listeners globales. Llamar una sola vez.
    pub fn wire_events(&self) -> Result<(), JsValue> {
        let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;

        {
            let store = self.store.clone();
            let editing_id = self.editing_id.clone();
            on_click(&doc, move |e: Event| {
                handle_document_click(&store, &editing_id, &e);
            })?;
        }

        if let Some(form) = get_form_by_id(EDIT_FORM_ID) {
            let store = self.store.clone();
            let editing_id = self.editing_id.clone();
            let form_ref = form.clone();
            on_submit(&form, move |_e: Event| {
                let Some(id) = editing_id.borrow().clone() else {
                    log::debug!("[APP] Submit de edición sin anuncio seleccionado");
                    return;
                };
                let update = ListingUpdate::from_form(
                    form_value(&form_ref, "title").unwrap_or_default(),
                    form_value(&form_ref, "location").unwrap_or_default(),
                    form_value(&form_ref, "price").unwrap_or_default(),
                );
                report(store.update_listing(&id, update).map(|_| ()));
            })?;
        }

        if let Some(select) = query_selector(BOOKING_TIME_SELECTOR)? {
            if select.child_element_count() == 0 {
                set_inner_html(&select, &render_viewing_time_options());
            }
        }

        wire_login_form()?;

        log::info!("✅ [APP] Eventos conectados");
        Ok(())
    }
}

fn report(result: Result<(), StoreError>) {
    if let Err(e) = result {
        log::error!("❌ [APP] {}", e);
    }
}

/// Click delegado: botones de modales y botones de las tarjetas
fn handle_document_click(store: &DashboardStore, editing_id: &RefCell<Option<String>>, event: &Event) {
    let Some(target) = event_target_element(event) else {
        return;
    };

    if closest(&target, CLOSE_MODAL_SELECTOR).is_some() {
        hide_modal(BOOKING_MODAL_ID);
        hide_modal(MESSAGE_MODAL_ID);
        return;
    }

    // Click en el fondo del modal (fuera del contenido)
    let target_id = target.id();
    if target_id == BOOKING_MODAL_ID || target_id == MESSAGE_MODAL_ID {
        hide_modal(&target_id);
        return;
    }

    let Some(id) = listing_id_for(&target) else {
        return;
    };

    if closest(&target, EDIT_BUTTON_SELECTOR).is_some() {
        start_edit(store, editing_id, &id);
    } else if closest(&target, DELETE_BUTTON_SELECTOR).is_some() {
        if confirm(DELETE_CONFIRM_MESSAGE) {
            report(store.delete_listing(&id).map(|_| ()));
        } else {
            log::debug!("[APP] Eliminación de {} cancelada", id);
        }
    } else if closest(&target, FAVORITE_BUTTON_SELECTOR).is_some() {
        report(store.toggle_favorite(&id).map(|_| ()));
    }
}

/// Rellenar `#editPropertyForm` con el anuncio y recordarlo para el submit
fn start_edit(store: &DashboardStore, editing_id: &RefCell<Option<String>>, id: &str) {
    let Some(listing) = store.find_listing(id) else {
        return;
    };
    let Some(form) = get_form_by_id(EDIT_FORM_ID) else {
        log::debug!("[APP] No hay #{} en la página", EDIT_FORM_ID);
        return;
    };

    set_form_value(&form, "title", &listing.title);
    set_form_value(&form, "location", &listing.location);
    set_form_value(&form, "price", &listing.price);
    *editing_id.borrow_mut() = Some(listing.id);
}

fn hide_modal(id: &str) {
    let Some(modal) = get_element_by_id(id) else {
        return;
    };
    if let Err(e) = hide_element(&modal) {
        log::warn!("⚠️ [APP] No se pudo ocultar #{}: {:?}", id, e);
    }
}
