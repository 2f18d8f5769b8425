use crate::config::CONFIG;
use crate::errors::StoreError;
use crate::models::DashboardState;
use crate::utils::storage::KeyValueStorage;

/// Persistencia del dashboard: un único blob JSON bajo una clave fija
pub struct DashboardService<S: KeyValueStorage> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> DashboardService<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Servicio con la clave configurada (`DASHBOARD_STORAGE_KEY`)
    pub fn with_configured_key(storage: S) -> Self {
        Self::new(storage, CONFIG.storage_key.clone())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Cargar estado: sin blob → estado vacío; blob inválido → `StorageCorrupt`
    pub fn load(&self) -> Result<DashboardState, StoreError> {
        Ok(self.load_saved()?.unwrap_or_default())
    }

    /// Como `load`, pero distingue "no hay blob" (`None`) de un estado guardado vacío
    pub fn load_saved(&self) -> Result<Option<DashboardState>, StoreError> {
        let Some(json) = self.storage.get_item(&self.key)? else {
            log::info!("ℹ️ [STORAGE] No hay estado guardado bajo '{}'", self.key);
            return Ok(None);
        };
        let state = serde_json::from_str::<DashboardState>(&json)
            .map_err(|e| StoreError::StorageCorrupt(e.to_string()))?;
        log::info!(
            "📋 [STORAGE] Estado cargado de '{}': {} subidos, {} vistos, {} favoritos",
            self.key,
            state.uploaded_properties.len(),
            state.recently_viewed.len(),
            state.favorites.len()
        );
        Ok(Some(state))
    }

    /// Guardar estado completo (sobrescribe siempre, no hay parches)
    pub fn save(&self, state: &DashboardState) -> Result<(), StoreError> {
        let json = serde_json::to_string(state)
            .map_err(|e| StoreError::Serialize(e.to_string()))?;
        self.storage.set_item(&self.key, &json)?;
        log::debug!("💾 [STORAGE] Estado guardado ({} bytes)", json.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Listing;
    use crate::utils::storage::MemoryStorage;

    fn sample_state() -> DashboardState {
        let mut viewed = Listing::new("v1", "Studio", "Paris", "900");
        viewed.last_viewed = Some("2024-05-01T08:30:00Z".parse().unwrap());
        DashboardState {
            uploaded_properties: vec![
                Listing::new("p1", "A", "X", "100").with_image("/img/p1.jpg"),
                Listing::new("p2", "B", "Y", "200"),
            ],
            recently_viewed: vec![viewed],
            favorites: vec!["p2".into()],
        }
    }

    #[test]
    fn test_load_without_blob_is_empty() {
        let service = DashboardService::new(MemoryStorage::new(), "dashboardState");
        assert_eq!(service.load().unwrap(), DashboardState::default());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let service = DashboardService::new(MemoryStorage::new(), "dashboardState");
        let state = sample_state();
        service.save(&state).unwrap();
        assert_eq!(service.load().unwrap(), state);
    }

    #[test]
    fn test_save_overwrites_previous_blob() {
        let storage = MemoryStorage::new();
        let service = DashboardService::new(storage.clone(), "dashboardState");
        service.save(&sample_state()).unwrap();
        service.save(&DashboardState::default()).unwrap();
        assert_eq!(storage.len(), 1);
        assert_eq!(service.load().unwrap(), DashboardState::default());
    }

    #[test]
    fn test_invalid_blob_is_storage_corrupt() {
        let storage = MemoryStorage::new();
        storage.set_item("dashboardState", "{not json").unwrap();
        let service = DashboardService::new(storage, "dashboardState");
        assert!(matches!(service.load(), Err(StoreError::StorageCorrupt(_))));
    }

    #[test]
    fn test_load_saved_tells_missing_blob_from_empty_state() {
        let storage = MemoryStorage::new();
        let service = DashboardService::new(storage.clone(), "dashboardState");
        assert_eq!(service.load_saved().unwrap(), None);

        service.save(&DashboardState::default()).unwrap();
        assert_eq!(service.load_saved().unwrap(), Some(DashboardState::default()));
        assert_eq!(service.key(), "dashboardState");
    }
}
