// ============================================================================
// CONFIG - Configuración en tiempo de compilación (ver build.rs y .env.example)
// ============================================================================

const DEFAULT_STORAGE_KEY: &str = "dashboardState";
const DEFAULT_PLACEHOLDER_IMAGE: &str = "/api/placeholder/100/80";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Clave única de localStorage para el estado del dashboard
    pub storage_key: String,
    /// Imagen mostrada cuando un anuncio no tiene `image`
    pub placeholder_image_url: String,
    pub enable_logging: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            placeholder_image_url: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("DASHBOARD_STORAGE_KEY"),
            option_env!("PLACEHOLDER_IMAGE_URL"),
            option_env!("ENABLE_LOGGING"),
            option_env!("LOG_LEVEL"),
        )
    }

    fn from_values(
        storage_key: Option<&str>,
        placeholder_image_url: Option<&str>,
        enable_logging: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            storage_key: storage_key
                .filter(|k| !k.trim().is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.storage_key),
            placeholder_image_url: placeholder_image_url
                .filter(|u| !u.trim().is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.placeholder_image_url),
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: log_level
                .map(str::to_lowercase)
                .unwrap_or(defaults.log_level),
        }
    }

    /// Nivel de log para wasm_logger (`info` si el valor no es válido)
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
