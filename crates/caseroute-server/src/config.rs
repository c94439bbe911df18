//! Configuration file parsing for the case routing service.
//!
//! Loads settings from TOML files including bind address, request limits,
//! and extra lexicon signals appended to the built-in set.

use caseroute_domain::{
    CaseAnalyzer, Category, ConfigurationError, KeywordSignal, Lexicon, MatchMode, RoutingTable,
};
use caseroute_gatekeeper::ValidationConfig;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Service configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Field has an unusable value
    #[error("Invalid configuration field {field}: {reason}")]
    InvalidField {
        /// Field name
        field: String,
        /// Description of the issue
        reason: String,
    },

    /// Lexicon or routing table is incomplete
    #[error(transparent)]
    Engine(#[from] ConfigurationError),
}

/// Service configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Bind port (e.g., 8000)
    #[serde(default = "default_bind_port")]
    pub bind_port: u16,

    /// Subject length limit in characters
    #[serde(default = "default_max_subject_chars")]
    pub max_subject_chars: usize,

    /// Description length limit in characters
    #[serde(default = "default_max_description_chars")]
    pub max_description_chars: usize,

    /// Extra lexicon signals
    #[serde(default)]
    pub signals: Vec<SignalConfig>,
}

/// Extra keyword signal declared in configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SignalConfig {
    /// Category name (e.g., "payroll")
    pub category: String,

    /// Keyword or phrase
    pub phrase: String,

    /// Weight per occurrence (default: 1.0)
    #[serde(default = "default_signal_weight")]
    pub weight: f64,

    /// Require word boundaries around the phrase
    #[serde(default)]
    pub whole_word: bool,
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

/// Default port: 8000
fn default_bind_port() -> u16 {
    8000
}

fn default_max_subject_chars() -> usize {
    ValidationConfig::default()
        .max_subject_chars
        .unwrap_or(500)
}

fn default_max_description_chars() -> usize {
    ValidationConfig::default()
        .max_description_chars
        .unwrap_or(10_000)
}

fn default_signal_weight() -> f64 {
    1.0
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_address: default_bind_address(),
            bind_port: default_bind_port(),
            max_subject_chars: default_max_subject_chars(),
            max_description_chars: default_max_description_chars(),
            signals: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&contents)?;

        // Fail at startup rather than on the first request
        config.build_analyzer()?;

        Ok(config)
    }

    /// Default configuration with the port taken from `PORT` if set
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::with_port_var(std::env::var("PORT").ok().as_deref())
    }

    /// Default configuration with the port taken from a `PORT` value
    fn with_port_var(port: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(port) = port {
            config.bind_port = port.trim().parse().map_err(|_| ConfigError::InvalidField {
                field: "PORT".to_string(),
                reason: format!("'{}' is not a valid port", port),
            })?;
        }
        Ok(config)
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }

    /// Gatekeeper rules for this configuration
    pub fn validation_config(&self) -> ValidationConfig {
        ValidationConfig::default().with_limits(self.max_subject_chars, self.max_description_chars)
    }

    /// Build the analyzer: built-in lexicon plus configured signals
    pub fn build_analyzer(&self) -> Result<CaseAnalyzer, ConfigError> {
        let extra = self
            .signals
            .iter()
            .map(SignalConfig::to_signal)
            .collect::<Result<Vec<_>, _>>()?;

        let lexicon = Lexicon::builtin_with(extra)?;
        Ok(CaseAnalyzer::new(lexicon, RoutingTable::builtin())?)
    }
}

impl SignalConfig {
    fn to_signal(&self) -> Result<(Category, KeywordSignal), ConfigError> {
        let category = Category::parse(&self.category).ok_or_else(|| ConfigError::InvalidField {
            field: "signals.category".to_string(),
            reason: format!("unknown category '{}'", self.category),
        })?;
        let mode = if self.whole_word {
            MatchMode::WholeWord
        } else {
            MatchMode::Substring
        };
        Ok((category, KeywordSignal::with_mode(&self.phrase, self.weight, mode)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.bind_port, 8000);
        assert_eq!(config.max_subject_chars, 500);
        assert_eq!(config.max_description_chars, 10_000);
        assert!(config.signals.is_empty());
    }

    #[test]
    fn test_port_var_fallback() {
        assert_eq!(ServerConfig::with_port_var(None).unwrap().bind_port, 8000);
        assert_eq!(ServerConfig::with_port_var(Some("9100")).unwrap().bind_port, 9100);
    }

    #[test]
    fn test_invalid_port_var() {
        for port in ["http", "70000", ""] {
            assert!(matches!(
                ServerConfig::with_port_var(Some(port)),
                Err(ConfigError::InvalidField { ref field, .. }) if field == "PORT"
            ));
        }
    }

    #[test]
    fn test_bind_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            bind_address = "127.0.0.1"
            bind_port = 9000
            max_description_chars = 2000

            [[signals]]
            category = "payroll"
            phrase = "direct deposit stub"
            weight = 2.0

            [[signals]]
            category = "compliance"
            phrase = "ofac"
            whole_word = true
        "#;

        let config: ServerConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.bind_port, 9000);
        assert_eq!(config.max_subject_chars, 500);
        assert_eq!(config.max_description_chars, 2000);
        assert_eq!(config.signals.len(), 2);
        assert_eq!(config.signals[1].weight, 1.0);
        assert!(config.signals[1].whole_word);
    }

    #[test]
    fn test_build_analyzer_with_signals() {
        let toml = r#"
            [[signals]]
            category = "Compliance"
            phrase = "OFAC"
            weight = 3.0
            whole_word = true
        "#;

        let config: ServerConfig = toml::from_str(toml).unwrap();
        let analyzer = config.build_analyzer().unwrap();
        let result = analyzer.classify("OFAC hit", "on bank transfer");
        assert_eq!(result.category, Category::Compliance);
    }

    #[test]
    fn test_unknown_signal_category() {
        let toml = r#"
            [[signals]]
            category = "general"
            phrase = "hello"
        "#;

        let config: ServerConfig = toml::from_str(toml).unwrap();
        assert!(matches!(
            config.build_analyzer(),
            Err(ConfigError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_invalid_signal_weight() {
        let toml = r#"
            [[signals]]
            category = "billing"
            phrase = "late fee"
            weight = -1.0
        "#;

        let config: ServerConfig = toml::from_str(toml).unwrap();
        assert!(matches!(
            config.build_analyzer(),
            Err(ConfigError::Engine(ConfigurationError::InvalidSignal { .. }))
        ));
    }

    #[test]
    fn test_validation_config_uses_limits() {
        let config = ServerConfig {
            max_subject_chars: 42,
            ..ServerConfig::default()
        };
        assert_eq!(config.validation_config().max_subject_chars, Some(42));
    }
}
