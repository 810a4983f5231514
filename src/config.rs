//! Configuration System
//!
//! Client settings loaded from a TOML document bundled with the app, with
//! an optional API base override kept in browser storage.

use serde::Deserialize;

use crate::feedback::DEFAULT_FEEDBACK_TIMEOUT_MS;
use crate::models::DEFAULT_ICON;

/// Storage key for the API base override
pub const API_BASE_STORAGE_KEY: &str = "signup_api_url";

/// Client configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the signup service. Empty means same origin as the page.
    #[serde(default)]
    pub api_base: String,

    /// How long signup feedback stays visible
    #[serde(default = "default_feedback_timeout")]
    pub feedback_timeout_ms: u32,

    /// Width and height of each availability chart canvas
    #[serde(default = "default_chart_size")]
    pub chart_size: u32,

    /// Icon for activities that do not send one
    #[serde(default = "default_icon")]
    pub default_icon: String,
}

fn default_feedback_timeout() -> u32 {
    DEFAULT_FEEDBACK_TIMEOUT_MS
}

fn default_chart_size() -> u32 {
    80
}

fn default_icon() -> String {
    DEFAULT_ICON.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            feedback_timeout_ms: default_feedback_timeout(),
            chart_size: default_chart_size(),
            default_icon: default_icon(),
        }
    }
}

impl ClientConfig {
    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut config: ClientConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.api_base = normalize_api_base(&config.api_base);
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document, falling back to defaults on any error
    pub fn load_or_default(content: &str) -> Self {
        match Self::from_toml_str(content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "Using default client config");
                Self::default()
            }
        }
    }

    /// Replace the API base with a stored override, when one is set
    pub fn with_api_base_override(mut self, api_base: Option<String>) -> Self {
        if let Some(url) = api_base.filter(|u| !u.trim().is_empty()) {
            tracing::info!(api_base = %url, "Using stored API base");
            self.api_base = normalize_api_base(&url);
        }
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.feedback_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "feedback_timeout_ms must be greater than zero".to_string(),
            ));
        }
        if self.chart_size < 2 * crate::chart::EDGE_PADDING as u32 {
            return Err(ConfigError::Invalid(format!(
                "chart_size {} is too small to draw a chart",
                self.chart_size
            )));
        }
        Ok(())
    }
}

fn normalize_api_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Activity signup client configuration

# Base URL of the signup service. Leave empty to use the page's own origin.
# A value stored in localStorage under "signup_api_url" takes precedence.
api_base = ""

# How long the signup success/error message stays visible (ms)
feedback_timeout_ms = 5000

# Availability chart canvas size (px)
chart_size = 80

# Icon for activities without one
default_icon = "🎯"
"#
    .to_string()
}
