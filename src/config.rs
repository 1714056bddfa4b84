//! Application configuration.
//!
//! Runtime settings come from `assets/config.toml`, embedded at compile
//! time. Constants that are not meant to be changed per deployment live
//! here as plain `const`s.

use alfdocs_core::ClientConfig;
use log::LevelFilter;
use serde::Deserialize;

// =============================================================================
// Embedded Assets
// =============================================================================

/// Settings file compiled into the bundle.
pub const CONFIG_TOML: &str = include_str!("../assets/config.toml");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the navbar and on the login card.
pub const APP_NAME: &str = "alfdocs";

/// Subtitle of the login card.
pub const APP_TAGLINE: &str = "Alfresco document manager";

/// Id of the element the app is mounted into.
pub const MOUNT_ELEMENT_ID: &str = "app";

// =============================================================================
// Runtime Settings
// =============================================================================

/// localStorage keys holding the session.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionKeys {
    pub ticket_key: String,
    pub user_key: String,
}

impl Default for SessionKeys {
    fn default() -> Self {
        Self {
            ticket_key: "alf_ticket".to_string(),
            user_key: "alf_user".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long a toast stays up, in milliseconds.
    pub notice_timeout_ms: u32,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

impl UiConfig {
    /// Parsed log level; unknown names fall back to `info`.
    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notice_timeout_ms: 4000,
            log_level: "info".to_string(),
        }
    }
}

/// Everything read from `config.toml`. Missing sections and keys take
/// their defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub backend: ClientConfig,
    pub session: SessionKeys,
    pub ui: UiConfig,
}

impl AppConfig {
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// The embedded configuration.
    pub fn embedded() -> Result<Self, toml::de::Error> {
        Self::parse(CONFIG_TOML)
    }
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// - `Bootstrap` - filled, slightly bolder (default)
/// - `Lucide` - thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
