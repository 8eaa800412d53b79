//! CLI configuration

use clap::ValueEnum;
use domain_inheritance::LawSystem;
use serde::Deserialize;

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report
    Text,
    /// Pretty-printed JSON
    Json,
}

/// CLI configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    pub log_level: String,
    /// Law system used when a case file does not name one
    pub default_law_system: LawSystem,
    /// Output format when `--format` is not given
    pub output_format: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            default_law_system: LawSystem::Islam,
            output_format: OutputFormat::Text,
        }
    }
}

impl CliConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("WARIS"))
            .build()?
            .try_deserialize()
    }

    /// Loads configuration, falling back to defaults when the environment is invalid
    pub fn load() -> Self {
        Self::from_env().unwrap_or_else(|error| {
            eprintln!("Invalid WARIS_* configuration ({}), using defaults", error);
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.default_law_system, LawSystem::Islam);
        assert_eq!(config.output_format, OutputFormat::Text);
    }

    #[test]
    fn test_partial_source_keeps_defaults() {
        let config: CliConfig = config::Config::builder()
            .set_override("output_format", "json")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.default_law_system, LawSystem::Islam);
    }
}
