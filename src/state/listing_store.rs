// ============================================================================
// LISTING STORE - Estado del dashboard + persistencia + notificaciones
// ============================================================================
// Cada mutación: modifica el estado en memoria → guarda el estado completo →
// notifica a los subscribers (el App re-renderiza). Las mutaciones sobre ids
// inexistentes son no-ops silenciosos: devuelven Ok sin guardar ni notificar.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use chrono::{DateTime, Utc};
use crate::errors::StoreError;
use crate::models::{DashboardState, Listing, ListingUpdate};
use crate::services::DashboardService;
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::storage::KeyValueStorage;
use crate::views::{render_dashboard, DashboardView};

type Subscriber = Rc<dyn Fn()>;

pub struct ListingStore<S: KeyValueStorage, C: Clock = SystemClock> {
    state: Rc<RefCell<DashboardState>>,
    service: DashboardService<S>,
    clock: C,
    subscribers: RefCell<Vec<Subscriber>>,
    /// `open` encontró un estado guardado válido
    restored: bool,
}

impl<S: KeyValueStorage, C: Clock> ListingStore<S, C> {
    /// Abrir el store cargando el estado guardado.
    /// Si el blob está corrupto se registra el error y se arranca vacío.
    pub fn open(service: DashboardService<S>, clock: C) -> Self {
        let (state, restored) = match service.load_saved() {
            Ok(Some(state)) => (state, true),
            Ok(None) => (DashboardState::default(), false),
            Err(e) => {
                log::error!("❌ [STORE] {}: se usa un estado vacío", e);
                (DashboardState::default(), false)
            }
        };
        let mut store = Self::with_state(service, clock, state);
        store.restored = restored;
        store
    }

    /// Store con un estado inicial explícito (no lee el storage)
    pub fn with_state(service: DashboardService<S>, clock: C, state: DashboardState) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
            service,
            clock,
            subscribers: RefCell::new(Vec::new()),
            restored: false,
        }
    }

    /// `true` si `open` restauró un estado guardado. Sin él, la página
    /// conserva su propio marcado hasta la primera mutación.
    pub fn has_saved_state(&self) -> bool {
        self.restored
    }

    pub fn storage_key(&self) -> &str {
        self.service.key()
    }

    /// Releer el storage y reemplazar el estado en memoria
    pub fn load(&self) -> Result<DashboardState, StoreError> {
        let state = self.service.load()?;
        *self.state.borrow_mut() = state.clone();
        Ok(state)
    }

    /// Guardar el estado completo
    pub fn save(&self) -> Result<(), StoreError> {
        self.service.save(&self.state.borrow())
    }

    /// Copia del estado actual
    pub fn snapshot(&self) -> DashboardState {
        self.state.borrow().clone()
    }

    pub fn find_listing(&self, id: &str) -> Option<Listing> {
        self.state.borrow().find_uploaded(id).cloned()
    }

    /// Variante estricta de `find_listing`
    pub fn require_listing(&self, id: &str) -> Result<Listing, StoreError> {
        self.find_listing(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.state.borrow().is_favorite(id)
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    fn notify(&self) {
        // Copia para que un subscriber pueda suscribir a otros sin pánico
        let subscribers: Vec<Subscriber> = self.subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }

    /// Guardar y notificar. Se notifica aunque falle el guardado: el estado
    /// en memoria ya cambió y la vista debe reflejarlo.
    fn commit(&self) -> Result<(), StoreError> {
        let saved = self.save();
        if let Err(ref e) = saved {
            log::error!("❌ [STORE] Error guardando estado: {}", e);
        }
        self.notify();
        saved
    }

    /// Añadir un anuncio subido. El id debe ser único y no vacío.
    pub fn add_listing(&self, listing: Listing) -> Result<(), StoreError> {
        if listing.id.trim().is_empty() {
            return Err(StoreError::MissingField("id"));
        }
        {
            let mut state = self.state.borrow_mut();
            if state.find_uploaded(&listing.id).is_some() {
                return Err(StoreError::DuplicateId(listing.id));
            }
            log::info!("➕ [STORE] Anuncio añadido: {}", listing.id);
            state.uploaded_properties.push(listing);
        }
        self.commit()
    }

    /// Mezclar `update` sobre el anuncio y sellar `lastModified`.
    /// Devuelve `Ok(false)` si el id no existe.
    pub fn update_listing(&self, id: &str, update: ListingUpdate) -> Result<bool, StoreError> {
        let now = self.clock.now();
        {
            let mut state = self.state.borrow_mut();
            let Some(listing) = state.find_uploaded_mut(id) else {
                log::debug!("[STORE] update_listing: {} no existe, se ignora", id);
                return Ok(false);
            };
            update.apply_to(listing);
            listing.last_modified = Some(now);
        }
        log::info!("✏️ [STORE] Anuncio actualizado: {}", id);
        self.commit()?;
        Ok(true)
    }

    /// Eliminar el anuncio y su favorito. Devuelve `Ok(false)` si no había nada que quitar.
    pub fn delete_listing(&self, id: &str) -> Result<bool, StoreError> {
        let removed = self.state.borrow_mut().remove_listing(id);
        if !removed {
            log::debug!("[STORE] delete_listing: {} no existe, se ignora", id);
            return Ok(false);
        }
        log::info!("🗑️ [STORE] Anuncio eliminado: {}", id);
        self.commit()?;
        Ok(true)
    }

    /// Alternar favorito. `Ok(None)` si el anuncio no existe; si no, el nuevo estado.
    pub fn toggle_favorite(&self, id: &str) -> Result<Option<bool>, StoreError> {
        let is_favorite = {
            let mut state = self.state.borrow_mut();
            if state.find_uploaded(id).is_none() {
                log::debug!("[STORE] toggle_favorite: {} no existe, se ignora", id);
                return Ok(None);
            }
            state.flip_favorite(id)
        };
        log::info!(
            "♥ [STORE] {} {}",
            id,
            if is_favorite { "añadido a favoritos" } else { "quitado de favoritos" }
        );
        self.commit()?;
        Ok(Some(is_favorite))
    }

    /// Registrar una visita: sella `lastViewed` y lo pone primero en vistos recientemente
    pub fn record_view(&self, mut listing: Listing) -> Result<(), StoreError> {
        if listing.id.trim().is_empty() {
            return Err(StoreError::MissingField("id"));
        }
        listing.last_viewed = Some(self.clock.now());
        log::debug!("👁️ [STORE] Visita registrada: {}", listing.id);
        self.state.borrow_mut().push_recently_viewed(listing);
        self.commit()
    }

    /// Renderizar el estado actual para un instante dado (puro)
    pub fn render_at(&self, now: DateTime<Utc>) -> DashboardView {
        render_dashboard(&self.state.borrow(), now)
    }

    /// Renderizar el estado actual con la hora del reloj
    pub fn render(&self) -> DashboardView {
        self.render_at(self.clock.now())
    }
}
