//! Gateway configuration loaded from TOML.

use crate::HistoryRetention;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, instrument};
use wonka_error::{ConfigError, ConfigErrorKind, WonkaResult};
use wonka_models::DEFAULT_ANTHROPIC_MODELS;

/// Prefix for environment overrides, e.g. `WONKA__ANTHROPIC__MAX_TOKENS`.
const ENV_PREFIX: &str = "WONKA";
const ENV_SEPARATOR: &str = "__";

/// Top-level gateway configuration.
///
/// Every section is optional; an empty file yields the defaults.
///
/// ```toml
/// [history]
/// retention = { last_turns = 8 }
///
/// [anthropic]
/// max_tokens = 4096
/// known_models = ["claude-3-5-sonnet-latest"]
///
/// [endpoints]
/// groq = "https://api.groq.com/openai/v1"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// History replay settings
    #[serde(default)]
    pub history: HistorySettings,
    /// Anthropic request settings
    #[serde(default)]
    pub anthropic: AnthropicSettings,
    /// Default base URL per provider name
    #[serde(default)]
    pub endpoints: HashMap<String, String>,
}

impl GatewayConfig {
    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or a value has the wrong type.
    ///
    /// # Examples
    ///
    /// ```
    /// use wonka_gateway::{GatewayConfig, HistoryRetention};
    ///
    /// let config = GatewayConfig::from_toml_str("[history]\nretention = { last_turns = 4 }").unwrap();
    /// assert_eq!(config.history.retention, HistoryRetention::LastTurns(4));
    /// assert_eq!(config.anthropic.max_tokens, 4096);
    /// ```
    pub fn from_toml_str(contents: &str) -> WonkaResult<Self> {
        let config = toml::from_str(contents)
            .map_err(|e| ConfigError::new(ConfigErrorKind::Invalid(e.to_string())))?;
        Ok(config)
    }

    /// Loads configuration from an optional TOML file plus `WONKA__…`
    /// environment overrides.
    ///
    /// A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be parsed or a value has the
    /// wrong type.
    #[instrument(fields(path = ?path))]
    pub fn load(path: Option<&Path>) -> WonkaResult<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(false));
        }

        let config: Self = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Load(e.to_string())))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(ConfigErrorKind::Invalid(e.to_string())))?;

        debug!(
            retention = ?config.history.retention,
            endpoints = config.endpoints.len(),
            "Loaded gateway configuration"
        );

        Ok(config)
    }

    /// Returns the configured base URL for a provider, if any.
    pub fn endpoint(&self, provider: &str) -> Option<&str> {
        self.endpoints
            .get(&provider.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// History replay settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistorySettings {
    /// Retention policy applied to every request
    #[serde(default)]
    pub retention: HistoryRetention,
}

/// Anthropic request settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnthropicSettings {
    /// Required `max_tokens` value sent with every request
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Model roster returned by discovery
    #[serde(default = "default_known_models")]
    pub known_models: Vec<String>,
}

impl Default for AnthropicSettings {
    fn default() -> Self {
        Self {
            max_tokens: default_max_tokens(),
            known_models: default_known_models(),
        }
    }
}

fn default_max_tokens() -> u32 {
    4096
}

fn default_known_models() -> Vec<String> {
    DEFAULT_ANTHROPIC_MODELS
        .iter()
        .map(|model| model.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wonka_error::WonkaErrorKind;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = GatewayConfig::from_toml_str("").expect("empty config");
        assert_eq!(config, GatewayConfig::default());
        assert_eq!(config.history.retention, HistoryRetention::Full);
        assert_eq!(config.anthropic.max_tokens, 4096);
        assert_eq!(config.anthropic.known_models.len(), 6);
    }

    #[test]
    fn test_full_config() {
        let config = GatewayConfig::from_toml_str(
            r#"
            [history]
            retention = { max_chars = 20000 }

            [anthropic]
            max_tokens = 1024
            known_models = ["claude-3-haiku-20240307"]

            [endpoints]
            groq = "http://localhost:9000/v1"
            "#,
        )
        .expect("valid config");

        assert_eq!(config.history.retention, HistoryRetention::MaxChars(20000));
        assert_eq!(config.anthropic.max_tokens, 1024);
        assert_eq!(config.anthropic.known_models, vec!["claude-3-haiku-20240307"]);
        assert_eq!(config.endpoint("groq"), Some("http://localhost:9000/v1"));
        assert_eq!(config.endpoint("Groq"), Some("http://localhost:9000/v1"));
        assert_eq!(config.endpoint("gemini"), None);
    }

    #[test]
    fn test_partial_anthropic_section_keeps_roster() {
        let config =
            GatewayConfig::from_toml_str("[anthropic]\nmax_tokens = 2048").expect("valid config");
        assert_eq!(config.anthropic.max_tokens, 2048);
        assert_eq!(config.anthropic.known_models, default_known_models());
    }

    #[test]
    fn test_invalid_retention_is_config_error() {
        let err = GatewayConfig::from_toml_str("[history]\nretention = \"forever\"").unwrap_err();
        match err.kind() {
            WonkaErrorKind::Config(config) => {
                assert!(matches!(config.kind, ConfigErrorKind::Invalid(_)));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_load_reads_file() {
        let path = std::env::temp_dir().join(format!("wonka-config-{}.toml", std::process::id()));
        std::fs::write(&path, "[history]\nretention = { last_turns = 3 }\n").expect("write");

        let config = GatewayConfig::load(Some(&path)).expect("loaded");
        let _ = std::fs::remove_file(&path);

        assert_eq!(config.history.retention, HistoryRetention::LastTurns(3));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("wonka-config-does-not-exist.toml");
        let config = GatewayConfig::load(Some(&path)).expect("defaults");
        assert_eq!(config.anthropic.max_tokens, 4096);
    }
}
