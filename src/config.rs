use std::env;
use std::error;
use std::fs;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, error, info, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::models::page::{DEFAULT_PAGE_SIZE, normalize_page_size};
use crate::utils::get_assets_path;

/// Overrides `api_url` from the config file when set.
pub const API_URL_ENV: &str = "VALIDATOR_API_URL";

/// Main structure holding runtime settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub config: Config,
}

impl Settings {
    /// Loads settings from disk or uses defaults if the file is missing or invalid
    pub fn load() -> Self {
        let mut config = Self::load_config();
        config.roas_per_page = normalize_page_size(config.roas_per_page);
        if let Ok(api_url) = env::var(API_URL_ENV) {
            info!("Using validator API url from {}", API_URL_ENV);
            config.api_url = api_url;
        }
        config.api_url = checked_api_url(config.api_url);
        Settings { config }
    }

    /// Reads config.json and deserializes into Config
    fn load_config() -> Config {
        let config_path = get_assets_path().join("config.json");

        fs::read_to_string(&config_path)
            .and_then(|content| serde_json::from_str(&content).map_err(Into::into))
            .unwrap_or_else(|err| {
                error!("Failed to load config.json: {}. Using default config.", err);
                Config::default()
            })
    }

    /// Saves the current settings to config.json
    pub fn save(&self) -> Result<(), Box<dyn error::Error>> {
        let config_path = get_assets_path().join("config.json");
        let config_json = serde_json::to_string_pretty(&self.config)?;

        debug!("Saving config to {}", config_path.display());
        debug!("Config JSON: {}", config_json);

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&config_path, config_json)?;
        info!("Config saved");
        Ok(())
    }
}

/// Accepts absolute http(s) urls only.
pub fn validate_api_url(raw: &str) -> Result<(), String> {
    let url = Url::parse(raw).map_err(|e| t!("preferences.error.api_url", error = e).to_string())?;
    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(()),
        _ => Err(t!("preferences.error.api_url_scheme").to_string()),
    }
}

/// Returns `api_url`, or the default url when it is not usable.
fn checked_api_url(api_url: String) -> String {
    match validate_api_url(api_url.trim()) {
        Ok(()) => api_url.trim().to_string(),
        Err(err) => {
            let fallback = Config::default().api_url;
            warn!("Ignoring api_url {:?} ({}), using {}", api_url, err, fallback);
            fallback
        }
    }
}

/// Serializable structure for app config
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub theme: String,
    pub language: String,
    pub roas_per_page: u64,
    pub api_url: String,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "Dark".to_string(),
            language: "en".to_string(),
            roas_per_page: DEFAULT_PAGE_SIZE,
            api_url: "http://localhost:8080".to_string(),
            request_timeout_secs: 30,
        }
    }
}

// ===================================
//         GLOBAL CONFIG SINGLETON
// ===================================

static SETTINGS: Lazy<RwLock<Settings>> = Lazy::new(|| {
    let settings = Settings::load();
    RwLock::new(settings)
});

/// Gets a read-only lock on the global Settings
pub fn get_settings() -> RwLockReadGuard<'static, Settings> {
    SETTINGS
        .read()
        .expect("Failed to acquire read lock on SETTINGS")
}

/// Gets a writable lock on the global Settings
pub fn get_settings_mut() -> RwLockWriteGuard<'static, Settings> {
    SETTINGS
        .write()
        .expect("Failed to acquire write lock on SETTINGS")
}
