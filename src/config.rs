use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub enable_logging: bool,
    pub brand_name: String,
    pub contact_email: String,
    pub contact_phone: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            enable_logging: true,
            brand_name: "NestJourneys".to_string(),
            contact_email: "hello@nestjourneys.example".to_string(),
            contact_phone: "+1 (555) 123-4567".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
            option_env!("BRAND_NAME"),
            option_env!("CONTACT_EMAIL"),
            option_env!("CONTACT_PHONE"),
        )
    }

    /// Construye la configuración a partir de valores opcionales; lo que falte
    /// o no se pueda parsear toma el valor por defecto
    fn from_values(
        environment: Option<&str>,
        enable_logging: Option<&str>,
        brand_name: Option<&str>,
        contact_email: Option<&str>,
        contact_phone: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            environment: environment
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: enable_logging
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.enable_logging),
            brand_name: brand_name
                .map(str::to_string)
                .unwrap_or(defaults.brand_name),
            contact_email: contact_email
                .map(str::to_string)
                .unwrap_or(defaults.contact_email),
            contact_phone: contact_phone
                .map(str::to_string)
                .unwrap_or(defaults.contact_phone),
        }
    }

    /// Nivel para wasm_logger: Info con logging activo, Warn si no
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Info
        } else {
            log::Level::Warn
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_values_fall_back_to_defaults() {
        let config = AppConfig::from_values(None, None, None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = AppConfig::from_values(
            Some("production"),
            Some("false"),
            Some("Acme Care"),
            Some("hi@acme.example"),
            Some("+34 600 000 000"),
        );
        assert_eq!(config.environment, "production");
        assert!(!config.enable_logging);
        assert_eq!(config.log_level(), log::Level::Warn);
        assert_eq!(config.brand_name, "Acme Care");
        assert_eq!(config.contact_email, "hi@acme.example");
        assert_eq!(config.contact_phone, "+34 600 000 000");
    }

    #[test]
    fn test_unparseable_logging_flag_keeps_default() {
        let config = AppConfig::from_values(None, Some("yes please"), None, None, None);
        assert!(config.enable_logging);
    }
}
