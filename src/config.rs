//! Application Configuration
//!
//! Defaults, overridden by the `POULTRY_API_BASE_URL` build variable and
//! then by a `window.__POULTRY_CONFIG__` object set by the hosting page.

use log::LevelFilter;
use serde::Deserialize;
use wasm_bindgen::JsValue;

use group_tree::GroupMatcher;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
const CONFIG_GLOBAL: &str = "__POULTRY_CONFIG__";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend base URL, no trailing slash
    pub api_base_url: String,
    /// Root of the groups customers may be filed under
    pub customer_root: GroupMatcher,
    /// Root of the groups vendors may be filed under
    pub vendor_root: GroupMatcher,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("POULTRY_API_BASE_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            customer_root: GroupMatcher::slug("sundry-debtors"),
            vendor_root: GroupMatcher::slug("sundry-creditors"),
            log_level: LevelFilter::Info,
        }
    }
}

/// Partial config, every field optional
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigOverrides {
    api_base_url: Option<String>,
    customer_root: Option<GroupMatcher>,
    vendor_root: Option<GroupMatcher>,
    log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidBaseUrl(String),
    InvalidLogLevel(String),
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidBaseUrl(url) => write!(f, "Invalid API base URL: {}", url),
            ConfigError::InvalidLogLevel(level) => write!(f, "Invalid log level: {}", level),
            ConfigError::Parse(msg) => write!(f, "Config parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl AppConfig {
    /// Defaults plus whatever the hosting page provides
    pub fn load() -> Result<Self, ConfigError> {
        match read_window_overrides()? {
            Some(overrides) => Self::default().apply(overrides),
            None => Ok(Self::default()),
        }
    }

    /// Defaults plus a partial JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let overrides: ConfigOverrides =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Self::default().apply(overrides)
    }

    fn apply(mut self, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        if let Some(url) = overrides.api_base_url {
            self.api_base_url = validate_base_url(&url)?;
        }
        if let Some(root) = overrides.customer_root {
            self.customer_root = root;
        }
        if let Some(root) = overrides.vendor_root {
            self.vendor_root = root;
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level
                .parse()
                .map_err(|_| ConfigError::InvalidLogLevel(level.clone()))?;
        }
        Ok(self)
    }
}

fn validate_base_url(url: &str) -> Result<String, ConfigError> {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(ConfigError::InvalidBaseUrl(url.to_string()))
    }
}

fn read_window_overrides() -> Result<Option<ConfigOverrides>, ConfigError> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|_| ConfigError::Parse(format!("cannot read window.{}", CONFIG_GLOBAL)))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(value)
        .map(Some)
        .map_err(|e| ConfigError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(!config.api_base_url.ends_with('/'));
        assert_eq!(config.customer_root, GroupMatcher::slug("sundry-debtors"));
        assert_eq!(config.vendor_root, GroupMatcher::slug("sundry-creditors"));
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_partial_json_overrides() {
        let config = AppConfig::from_json(
            r#"{
                "apiBaseUrl": "https://erp.example.com/api/",
                "customerRoot": { "name": "Sundry Debtors" },
                "logLevel": "debug"
            }"#,
        )
        .unwrap();

        assert_eq!(config.api_base_url, "https://erp.example.com/api");
        assert_eq!(config.customer_root, GroupMatcher::name("Sundry Debtors"));
        assert_eq!(config.vendor_root, GroupMatcher::slug("sundry-creditors"));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert_eq!(
            AppConfig::from_json(r#"{"apiBaseUrl": "ftp://x"}"#),
            Err(ConfigError::InvalidBaseUrl("ftp://x".to_string()))
        );
        assert_eq!(
            AppConfig::from_json(r#"{"logLevel": "loud"}"#),
            Err(ConfigError::InvalidLogLevel("loud".to_string()))
        );
        assert!(matches!(AppConfig::from_json("not json"), Err(ConfigError::Parse(_))));
    }
}
