//! Inspector configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use xledger_utils::LogFormat;

/// How typed transactions are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned `Field  value` lines.
    #[default]
    Text,
    /// One JSON document per run.
    Json,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(String),
}

/// Configuration for `xledger-inspect`.
///
/// Every key is optional; an empty file yields [`InspectConfig::default`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InspectConfig {
    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Output format: "text" or "json".
    #[serde(default)]
    pub output: OutputFormat,

    /// Print the record a signer would see instead of the typed view.
    #[serde(default)]
    pub signing_view: bool,

    /// Skip records that cannot be typed instead of aborting.
    #[serde(default = "default_true")]
    pub skip_invalid: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl InspectConfig {
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            output: OutputFormat::default(),
            signing_view: false,
            skip_invalid: default_true(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_toml_uses_defaults() {
        let config = InspectConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config, InspectConfig::default());
        assert_eq!(config.log_level, "info");
        assert!(config.skip_invalid);
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            output = "json"
            log_format = "json"
            skip_invalid = false
        "#;
        let config = InspectConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(!config.skip_invalid);
        assert_eq!(config.log_level, "info"); // default
    }

    #[test]
    fn unknown_output_is_rejected() {
        let err = InspectConfig::from_toml_str(r#"output = "yaml""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = InspectConfig {
            signing_view: true,
            ..InspectConfig::default()
        };
        let toml_str = config.to_toml_string().unwrap();
        assert_eq!(InspectConfig::from_toml_str(&toml_str).unwrap(), config);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"debug\"").unwrap();
        let config = InspectConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = InspectConfig::from_toml_file(Path::new("/nonexistent/xledger.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/xledger.toml"));
    }
}
