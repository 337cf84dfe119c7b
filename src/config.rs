use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::utils::pagination::PagingMode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub base_api: String,
    pub images_url: String,
    pub stripe_publishable_key: String,
    pub default_user_image: String,
    pub enable_logging: bool,
    pub log_level: String,
    pub lookup_debounce_ms: u32,
    pub paging: PagingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagingConfig {
    pub flights_mode: PagingMode,
    pub hotels_mode: PagingMode,
    pub flights_per_page: usize,
    pub hotels_per_page: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_api: "http://localhost:8080/api/v1".to_string(),
            images_url: "http://localhost:8080/images".to_string(),
            stripe_publishable_key: String::new(),
            default_user_image: "default-user.png".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            lookup_debounce_ms: 1000,
            paging: PagingConfig::default(),
        }
    }
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            flights_mode: PagingMode::ClientSliced { fetch_limit: 100 },
            hotels_mode: PagingMode::ClientSliced { fetch_limit: 100 },
            flights_per_page: 10,
            hotels_per_page: 6,
        }
    }
}

fn parse_or<T: FromStr>(value: Option<&str>, default: T) -> T {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

impl AppConfig {
    /// Builds the configuration from compile-time environment variables
    /// (populated from `.env` by build.rs).
    pub fn from_env() -> Self {
        Self::from_values(|key| match key {
            "BASE_API" => option_env!("BASE_API"),
            "IMAGES_URL" => option_env!("IMAGES_URL"),
            "STRIPE_PUBLISHABLE_KEY" => option_env!("STRIPE_PUBLISHABLE_KEY"),
            "DEFAULT_USER_IMAGE" => option_env!("DEFAULT_USER_IMAGE"),
            "ENABLE_LOGGING" => option_env!("ENABLE_LOGGING"),
            "LOG_LEVEL" => option_env!("LOG_LEVEL"),
            "LOOKUP_DEBOUNCE_MS" => option_env!("LOOKUP_DEBOUNCE_MS"),
            "PAGING_MODE" => option_env!("PAGING_MODE"),
            "FLIGHTS_PAGING_MODE" => option_env!("FLIGHTS_PAGING_MODE"),
            "HOTELS_PAGING_MODE" => option_env!("HOTELS_PAGING_MODE"),
            "FETCH_LIMIT" => option_env!("FETCH_LIMIT"),
            "FLIGHTS_PER_PAGE" => option_env!("FLIGHTS_PER_PAGE"),
            "HOTELS_PER_PAGE" => option_env!("HOTELS_PER_PAGE"),
            _ => None,
        })
    }

    pub fn from_values<'a>(get: impl Fn(&str) -> Option<&'a str>) -> Self {
        let defaults = Self::default();
        let default_paging = PagingConfig::default();

        let fetch_limit = parse_or(get("FETCH_LIMIT"), 100usize).max(1);
        // Per-list key first, then the shared PAGING_MODE
        let mode_for = |key: &str| match get(key)
            .or_else(|| get("PAGING_MODE"))
            .map(|m| m.trim().to_ascii_lowercase())
        {
            Some(m) if m == "server" => PagingMode::ServerPaged,
            _ => PagingMode::ClientSliced { fetch_limit },
        };

        Self {
            base_api: get("BASE_API")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_api),
            images_url: get("IMAGES_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.images_url),
            stripe_publishable_key: get("STRIPE_PUBLISHABLE_KEY")
                .map(str::to_string)
                .unwrap_or(defaults.stripe_publishable_key),
            default_user_image: get("DEFAULT_USER_IMAGE")
                .map(str::to_string)
                .unwrap_or(defaults.default_user_image),
            enable_logging: parse_or(get("ENABLE_LOGGING"), defaults.enable_logging),
            log_level: get("LOG_LEVEL")
                .map(|s| s.to_ascii_lowercase())
                .unwrap_or(defaults.log_level),
            lookup_debounce_ms: parse_or(get("LOOKUP_DEBOUNCE_MS"), defaults.lookup_debounce_ms),
            paging: PagingConfig {
                flights_mode: mode_for("FLIGHTS_PAGING_MODE"),
                hotels_mode: mode_for("HOTELS_PAGING_MODE"),
                flights_per_page: parse_or(get("FLIGHTS_PER_PAGE"), default_paging.flights_per_page).max(1),
                hotels_per_page: parse_or(get("HOTELS_PER_PAGE"), default_paging.hotels_per_page).max(1),
            },
        }
    }

    /// Absolute URL of an image stored by the backend
    pub fn image_url(&self, name: &str) -> String {
        if name.starts_with("http://") || name.starts_with("https://") {
            return name.to_string();
        }
        format!("{}/{}", self.images_url, name.trim_start_matches('/'))
    }

    pub fn log_level(&self) -> log::Level {
        if !self.enable_logging {
            return log::Level::Error;
        }
        match self.log_level.as_str() {
            "trace" => log::Level::Trace,
            "debug" => log::Level::Debug,
            "warn" => log::Level::Warn,
            "error" => log::Level::Error,
            _ => log::Level::Info,
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&'static str, &'static str)]) -> AppConfig {
        let map: HashMap<&str, &str> = pairs.iter().copied().collect();
        AppConfig::from_values(|key| map.get(key).copied())
    }

    #[test]
    fn falls_back_to_defaults_when_unset() {
        let config = config_from(&[]);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.lookup_debounce_ms, 1000);
        assert_eq!(config.paging.flights_per_page, 10);
        assert_eq!(config.paging.hotels_per_page, 6);
    }

    #[test]
    fn reads_overrides_and_ignores_garbage() {
        let config = config_from(&[
            ("BASE_API", "https://api.example.com/"),
            ("PAGING_MODE", "Server"),
            ("LOOKUP_DEBOUNCE_MS", "not-a-number"),
            ("HOTELS_PER_PAGE", "0"),
        ]);
        assert_eq!(config.base_api, "https://api.example.com");
        assert_eq!(config.paging.flights_mode, PagingMode::ServerPaged);
        assert_eq!(config.paging.hotels_mode, PagingMode::ServerPaged);
        assert_eq!(config.lookup_debounce_ms, 1000);
        assert_eq!(config.paging.hotels_per_page, 1);
    }

    #[test]
    fn client_sliced_uses_fetch_limit() {
        let config = config_from(&[("PAGING_MODE", "client"), ("FETCH_LIMIT", "250")]);
        assert_eq!(config.paging.flights_mode, PagingMode::ClientSliced { fetch_limit: 250 });
    }

    #[test]
    fn each_list_can_pick_its_own_paging_mode() {
        let config = config_from(&[("PAGING_MODE", "server"), ("HOTELS_PAGING_MODE", "client")]);
        assert_eq!(config.paging.flights_mode, PagingMode::ServerPaged);
        assert_eq!(config.paging.hotels_mode, PagingMode::ClientSliced { fetch_limit: 100 });
    }

    #[test]
    fn image_url_joins_names_and_keeps_absolute_urls() {
        let config = config_from(&[("IMAGES_URL", "https://cdn.example.com/img/")]);
        assert_eq!(config.image_url("paris.jpg"), "https://cdn.example.com/img/paris.jpg");
        assert_eq!(config.image_url("/rome.jpg"), "https://cdn.example.com/img/rome.jpg");
        assert_eq!(config.image_url("https://x.test/a.png"), "https://x.test/a.png");
    }

    #[test]
    fn disabled_logging_only_keeps_errors() {
        let config = config_from(&[("ENABLE_LOGGING", "false"), ("LOG_LEVEL", "debug")]);
        assert_eq!(config.log_level(), log::Level::Error);
    }
}
