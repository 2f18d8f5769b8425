// ============================================================================
// ERRORS - Errores del store y del almacenamiento
// ============================================================================

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("localStorage no disponible")]
    StorageUnavailable,
    #[error("estado guardado corrupto: {0}")]
    StorageCorrupt(String),
    #[error("error serializando estado: {0}")]
    Serialize(String),
    #[error("error escribiendo en storage: {0}")]
    Write(String),
    #[error("anuncio no encontrado: {0}")]
    NotFound(String),
    #[error("ya existe un anuncio con id {0}")]
    DuplicateId(String),
    #[error("campo obligatorio vacío: {0}")]
    MissingField(&'static str),
}

impl From<StoreError> for JsValue {
    fn from(err: StoreError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_include_context() {
        assert_eq!(
            StoreError::NotFound("p1".into()).to_string(),
            "anuncio no encontrado: p1"
        );
        assert_eq!(
            StoreError::MissingField("title").to_string(),
            "campo obligatorio vacío: title"
        );
    }
}
