use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use web_sys::{window, Storage};
use crate::errors::StoreError;

/// Almacenamiento clave-valor síncrono (contrato de localStorage)
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove_item(key)
    }
}

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// `window.localStorage` del navegador
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self, StoreError> {
        let storage = get_local_storage().ok_or(StoreError::StorageUnavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage
            .get_item(key)
            .map_err(|_| StoreError::StorageUnavailable)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        // set_item falla con QuotaExceededError cuando el storage está lleno
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::Write(format!("{:?}", e)))
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.storage
            .remove_item(key)
            .map_err(|e| StoreError::Write(format!("{:?}", e)))
    }
}

/// Storage en memoria: tests y navegadores sin localStorage (modo privado)
/// Los clones comparten el mismo mapa.
#[derive(Clone, Default, Debug)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_clones_share_items() {
        let storage = MemoryStorage::new();
        let view = storage.clone();
        storage.set_item("k", "v").unwrap();
        assert_eq!(view.get_item("k").unwrap().as_deref(), Some("v"));

        storage.set_item("k", "w").unwrap();
        assert_eq!(view.len(), 1);
        assert_eq!(view.get_item("k").unwrap().as_deref(), Some("w"));

        view.remove_item("k").unwrap();
        assert!(storage.is_empty());
        assert_eq!(storage.get_item("k").unwrap(), None);
    }

    #[test]
    fn test_boxed_storage_delegates() {
        let inner = MemoryStorage::new();
        let boxed: Box<dyn KeyValueStorage> = Box::new(inner.clone());
        boxed.set_item("a", "1").unwrap();
        assert_eq!(inner.get_item("a").unwrap().as_deref(), Some("1"));
    }
}
