//! Configuration file support for ferro-nexus.
//!
//! # Example Configuration
//!
//! ```toml
//! [api]
//! base_url = "https://www.genomenexus.org"
//! timeout_seconds = 30
//! fields = ["my_variant_info", "oncokb"]
//!
//! [logging]
//! level = "info"
//! json = false
//! ```
//!
//! # Config File Locations
//!
//! Configuration is searched in this order (first found wins):
//! 1. The path given with `--config`
//! 2. `.ferro-nexus.toml` in current directory
//! 3. `~/.config/ferro/nexus.toml`
//!
//! When none exists the built-in defaults are used. Every key is optional.

use crate::error::NexusError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-directory config file.
pub const LOCAL_CONFIG_FILE: &str = ".ferro-nexus.toml";

/// Public Genome Nexus instance.
pub const DEFAULT_BASE_URL: &str = "https://www.genomenexus.org";

/// Annotation service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Service root URL, without trailing `/annotation`
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
    /// Annotation sources requested with `fields=`
    pub fields: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: 30,
            fields: vec!["my_variant_info".to_string(), "oncokb".to_string()],
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Parsed `.ferro-nexus.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NexusConfig {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

impl NexusConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Otherwise the default locations are
    /// searched and the built-in defaults returned when none is present.
    pub fn load(explicit: Option<&Path>) -> Result<Self, NexusError> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }

        match Self::find_config_file() {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::load_from_path(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// First existing file among the default locations.
    pub fn find_config_file() -> Option<PathBuf> {
        let cwd_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if cwd_config.is_file() {
            return Some(cwd_config);
        }

        let home_config = dirs_home()?
            .join(".config")
            .join("ferro")
            .join("nexus.toml");
        home_config.is_file().then_some(home_config)
    }

    /// Load and validate configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self, NexusError> {
        let content = fs::read_to_string(path).map_err(|e| NexusError::Config {
            msg: format!("failed to read {}: {}", path.display(), e),
        })?;
        Self::parse(&content).map_err(|e| NexusError::Config {
            msg: format!("{}: {}", path.display(), config_message(e)),
        })
    }

    /// Parse and validate configuration from TOML content.
    pub fn parse(content: &str) -> Result<Self, NexusError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values the type system cannot.
    pub fn validate(&self) -> Result<(), NexusError> {
        let invalid = |msg: &str| -> Result<(), NexusError> {
            Err(NexusError::Config {
                msg: msg.to_string(),
            })
        };

        if self.api.base_url.trim().is_empty() {
            return invalid("api.base_url must not be empty");
        }
        if self.api.timeout_seconds == 0 {
            return invalid("api.timeout_seconds must be greater than 0");
        }
        if self.api.fields.is_empty() {
            return invalid("api.fields must name at least one annotation source");
        }
        if self.api.fields.iter().any(|f| f.trim().is_empty()) {
            return invalid("api.fields must not contain empty names");
        }
        Ok(())
    }

    /// Commented sample config, as written by `ferro-nexus config`.
    pub fn sample() -> String {
        let defaults = Self::default();
        let fields = defaults
            .api
            .fields
            .iter()
            .map(|f| format!("\"{}\"", f))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "# ferro-nexus configuration\n\
             \n\
             [api]\n\
             # Genome Nexus instance to query\n\
             base_url = \"{}\"\n\
             # Request timeout in seconds\n\
             timeout_seconds = {}\n\
             # Annotation sources to request\n\
             fields = [{}]\n\
             \n\
             [logging]\n\
             # Default log filter; RUST_LOG takes precedence\n\
             level = \"{}\"\n\
             # Emit JSON log lines\n\
             json = {}\n",
            defaults.api.base_url,
            defaults.api.timeout_seconds,
            fields,
            defaults.logging.level,
            defaults.logging.json,
        )
    }
}

fn config_message(error: NexusError) -> String {
    match error {
        NexusError::Config { msg } => msg,
        other => other.to_string(),
    }
}

/// Get the user's home directory.
fn dirs_home() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = NexusConfig::default();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.timeout_seconds, 30);
        assert_eq!(config.api.fields, vec!["my_variant_info", "oncokb"]);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial() {
        let config = NexusConfig::parse(
            r#"
[api]
timeout_seconds = 5
"#,
        )
        .unwrap();
        assert_eq!(config.api.timeout_seconds, 5);
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(NexusConfig::parse("").unwrap(), NexusConfig::default());
    }

    #[test]
    fn test_parse_rejects_bad_values() {
        let err = NexusConfig::parse("[api]\ntimeout_seconds = 0\n").unwrap_err();
        assert!(err.to_string().contains("timeout_seconds"));

        let err = NexusConfig::parse("[api]\nbase_url = \"  \"\n").unwrap_err();
        assert!(err.to_string().contains("base_url"));

        let err = NexusConfig::parse("[api]\nfields = []\n").unwrap_err();
        assert!(err.to_string().contains("fields"));
    }

    #[test]
    fn test_parse_rejects_malformed_toml() {
        let err = NexusConfig::parse("[api\nbase_url = 1").unwrap_err();
        assert!(matches!(err, NexusError::Config { .. }));
    }

    #[test]
    fn test_sample_parses_to_defaults() {
        let config = NexusConfig::parse(&NexusConfig::sample()).unwrap();
        assert_eq!(config, NexusConfig::default());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nexus.toml");

        let mut config = NexusConfig::default();
        config.api.base_url = "http://localhost:8888".to_string();
        config.logging.json = true;
        fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = NexusConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_explicit_missing() {
        let dir = TempDir::new().unwrap();
        let err = NexusConfig::load(Some(&dir.path().join("missing.toml"))).unwrap_err();
        assert!(err.to_string().contains("missing.toml"));
    }
}
