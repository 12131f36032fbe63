// SPDX-License-Identifier: MPL-2.0
//! This module handles the kiosk configuration, loaded from a `settings.toml`
//! file in the config directory.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[media_host]` - Media host account, endpoints and search limits
//! - `[gallery]` - Default category, refresh cadence, placeholders
//! - `[showcase]` - Hero carousel and contact links
//! - `[cache]` - Rendition cache bounds
//!
//! Secrets are never read from or written to this file: the media host API
//! credentials come from `SUPERGLASS_API_KEY` / `SUPERGLASS_API_SECRET`.
//!
//! # Examples
//!
//! ```no_run
//! use superglass::config;
//!
//! let (mut config, _warning) = config::load();
//! config.gallery.refresh_interval_secs = Some(120);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Environment variable overriding `[media_host] cloud_name`.
pub const ENV_CLOUD_NAME: &str = "SUPERGLASS_CLOUD_NAME";

/// Environment variable holding the media host API key.
pub const ENV_API_KEY: &str = "SUPERGLASS_API_KEY";

/// Environment variable holding the media host API secret.
pub const ENV_API_SECRET: &str = "SUPERGLASS_API_SECRET";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "hi").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Media host account and endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaHostConfig {
    /// Account ("cloud") name used in every delivery and API URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_name: Option<String>,

    /// Base URL renditions are delivered from.
    #[serde(default = "default_delivery_base")]
    pub delivery_base: String,

    /// Base URL of the search API.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Parent folder of every category folder.
    #[serde(default = "default_folder_prefix")]
    pub folder_prefix: String,

    /// Maximum resources fetched per category.
    #[serde(default = "default_max_results", skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
}

impl Default for MediaHostConfig {
    fn default() -> Self {
        Self {
            cloud_name: None,
            delivery_base: default_delivery_base(),
            api_base: default_api_base(),
            folder_prefix: default_folder_prefix(),
            max_results: default_max_results(),
        }
    }
}

impl MediaHostConfig {
    /// Cloud name, with the environment variable taking precedence over the file.
    #[must_use]
    pub fn resolved_cloud_name(&self) -> String {
        match std::env::var(ENV_CLOUD_NAME) {
            Ok(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => self.cloud_name.clone().unwrap_or_default(),
        }
    }

    /// Search page size, clamped to what the API accepts.
    #[must_use]
    pub fn max_results(&self) -> u32 {
        self.max_results
            .unwrap_or(DEFAULT_MAX_RESULTS)
            .clamp(1, MAX_MAX_RESULTS)
    }
}

/// API credentials for the search endpoint. Only ever built from the environment.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

impl Credentials {
    /// Reads the credentials from the environment, if both halves are present.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var(ENV_API_KEY).ok().filter(|v| !v.is_empty())?;
        let api_secret = std::env::var(ENV_API_SECRET).ok().filter(|v| !v.is_empty())?;
        Some(Self {
            api_key,
            api_secret,
        })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

/// Gallery behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Category key selected at start-up.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_category: Option<String>,

    /// Seconds between catalog refreshes.
    #[serde(
        default = "default_refresh_interval_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub refresh_interval_secs: Option<u64>,

    /// Whether to fetch blur placeholders for every item at load time.
    #[serde(default = "default_true")]
    pub generate_placeholders: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            default_category: Some(DEFAULT_CATEGORY.to_string()),
            refresh_interval_secs: default_refresh_interval_secs(),
            generate_placeholders: true,
        }
    }
}

impl GalleryConfig {
    /// Refresh interval, clamped so a typo cannot hammer the media host.
    #[must_use]
    pub fn refresh_interval(&self) -> Duration {
        let secs = self
            .refresh_interval_secs
            .unwrap_or(DEFAULT_REFRESH_INTERVAL_SECS)
            .clamp(MIN_REFRESH_INTERVAL_SECS, MAX_REFRESH_INTERVAL_SECS);
        Duration::from_secs(secs)
    }
}

/// Marketing content around the gallery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShowcaseConfig {
    /// Media-host identifiers of the hero slides (rendered as JPEG).
    #[serde(default = "default_hero_images")]
    pub hero_images: Vec<String>,

    /// Milliseconds between hero slides.
    #[serde(
        default = "default_hero_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub hero_interval_ms: Option<u64>,

    #[serde(default = "default_phone")]
    pub phone: String,

    #[serde(default = "default_whatsapp")]
    pub whatsapp: String,

    #[serde(default = "default_instagram")]
    pub instagram: String,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            hero_images: default_hero_images(),
            hero_interval_ms: default_hero_interval_ms(),
            phone: default_phone(),
            whatsapp: default_whatsapp(),
            instagram: default_instagram(),
        }
    }
}

impl ShowcaseConfig {
    #[must_use]
    pub fn hero_interval(&self) -> Duration {
        let ms = self
            .hero_interval_ms
            .unwrap_or(DEFAULT_HERO_INTERVAL_MS)
            .clamp(MIN_HERO_INTERVAL_MS, MAX_HERO_INTERVAL_MS);
        Duration::from_millis(ms)
    }
}

/// Rendition cache bounds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CacheConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_bytes: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_entries: Option<usize>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_bytes: Some(DEFAULT_CACHE_BYTES),
            max_entries: Some(DEFAULT_CACHE_ENTRIES),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Kiosk configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub media_host: MediaHostConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub showcase: ShowcaseConfig,

    #[serde(default)]
    pub cache: CacheConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_true() -> bool {
    true
}

fn default_delivery_base() -> String {
    DEFAULT_DELIVERY_BASE.to_string()
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_folder_prefix() -> String {
    DEFAULT_FOLDER_PREFIX.to_string()
}

fn default_max_results() -> Option<u32> {
    Some(DEFAULT_MAX_RESULTS)
}

fn default_refresh_interval_secs() -> Option<u64> {
    Some(DEFAULT_REFRESH_INTERVAL_SECS)
}

fn default_hero_images() -> Vec<String> {
    DEFAULT_HERO_IMAGES.iter().map(|s| (*s).to_string()).collect()
}

fn default_hero_interval_ms() -> Option<u64> {
    Some(DEFAULT_HERO_INTERVAL_MS)
}

fn default_phone() -> String {
    DEFAULT_PHONE.to_string()
}

fn default_whatsapp() -> String {
    DEFAULT_WHATSAPP.to_string()
}

fn default_instagram() -> String {
    DEFAULT_INSTAGRAM.to_string()
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), "falling back to default config: {err}");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let mut config = Config::default();
        config.general.language = Some("hi".to_string());
        config.general.theme_mode = ThemeMode::Light;
        config.media_host.cloud_name = Some("superglass".to_string());
        config.gallery.refresh_interval_secs = Some(120);
        config.showcase.hero_images = vec!["showcase/a".into(), "showcase/b".into()];

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "this is not = = toml").expect("write");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"en-US\"\n").unwrap();
        assert_eq!(config.media_host, MediaHostConfig::default());
        assert_eq!(config.gallery.refresh_interval(), Duration::from_secs(60));
        assert_eq!(config.showcase.hero_interval(), Duration::from_millis(3500));
    }

    #[test]
    fn load_with_override_reports_corrupt_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[gallery\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn refresh_interval_is_clamped() {
        let gallery = GalleryConfig {
            refresh_interval_secs: Some(1),
            ..GalleryConfig::default()
        };
        assert_eq!(
            gallery.refresh_interval(),
            Duration::from_secs(MIN_REFRESH_INTERVAL_SECS)
        );

        let gallery = GalleryConfig {
            refresh_interval_secs: Some(u64::MAX),
            ..GalleryConfig::default()
        };
        assert_eq!(
            gallery.refresh_interval(),
            Duration::from_secs(MAX_REFRESH_INTERVAL_SECS)
        );
    }

    #[test]
    fn max_results_is_clamped() {
        let host = MediaHostConfig {
            max_results: Some(10_000),
            ..MediaHostConfig::default()
        };
        assert_eq!(host.max_results(), MAX_MAX_RESULTS);
    }

    #[test]
    fn credentials_debug_redacts_secret() {
        let creds = Credentials {
            api_key: "key".into(),
            api_secret: "hunter2".into(),
        };
        let printed = format!("{creds:?}");
        assert!(!printed.contains("hunter2"));
    }
}
