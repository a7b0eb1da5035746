use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_MARKER_MAX_AGE_DAYS: i64 = 7;

pub const ENV_API_URL: &str = "GPDI_API_URL";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "GPDI_REQUEST_TIMEOUT_SECS";
pub const ENV_MARKER_MAX_AGE_DAYS: &str = "GPDI_MARKER_MAX_AGE_DAYS";

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_marker_max_age_days() -> i64 {
    DEFAULT_MARKER_MAX_AGE_DAYS
}

/// `[api]` table of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiSection {
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// `[markers]` table of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarkerSection {
    #[serde(default = "default_marker_max_age_days")]
    pub max_age_days: i64,
}

impl Default for MarkerSection {
    fn default() -> Self {
        Self {
            max_age_days: default_marker_max_age_days(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConfigFile {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub markers: MarkerSection,
}

/// Resolved client settings.
///
/// A missing or partial config file falls back to defaults; environment
/// variables win over the file.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub marker_max_age_days: i64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ConfigFile::default().into()
    }
}

impl From<ConfigFile> for ClientConfig {
    fn from(file: ConfigFile) -> Self {
        Self {
            api_base_url: file.api.base_url,
            request_timeout_secs: file.api.request_timeout_secs,
            marker_max_age_days: file.markers.max_age_days,
        }
    }
}

impl ClientConfig {
    /// Apply overrides from a variable lookup. Unparseable numbers are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            self.api_base_url = url.trim().to_string();
        }
        if let Some(secs) = lookup(ENV_REQUEST_TIMEOUT_SECS).and_then(|v| v.trim().parse().ok()) {
            self.request_timeout_secs = secs;
        }
        if let Some(days) = lookup(ENV_MARKER_MAX_AGE_DAYS).and_then(|v| v.trim().parse().ok()) {
            self.marker_max_age_days = days;
        }
        self
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }

    /// Per-request timeout; a zero setting falls back to the default.
    pub fn request_timeout(&self) -> Duration {
        let secs = if self.request_timeout_secs == 0 {
            DEFAULT_REQUEST_TIMEOUT_SECS
        } else {
            self.request_timeout_secs
        };
        Duration::from_secs(secs)
    }
}
