//! @acp:module "Configuration"
//! @acp:summary "CLI configuration loading and defaults"
//! @acp:domain cli
//! @acp:layer config

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::AdvisorError;
use crate::render::OutputFormat;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = ".advisor.config.json";

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_true() -> bool {
    true
}

fn default_format() -> String {
    OutputFormat::default().as_str().to_string()
}

/// @acp:summary "Main advisor configuration structure"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Config format version
    #[serde(default = "default_version")]
    pub version: String,

    /// Directory for submissions and analytics (platform data dir if unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Output format used when `--format` is not given
    #[serde(default = "default_format")]
    pub default_format: String,

    /// Save each submission to the local log
    #[serde(default = "default_true")]
    pub persist: bool,

    /// Count questionnaire steps
    #[serde(default = "default_true")]
    pub analytics: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            data_dir: None,
            default_format: default_format(),
            persist: true,
            analytics: true,
        }
    }
}

impl Config {
    /// @acp:summary "Load config from a JSON file"
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.output_format()?;
        Ok(config)
    }

    /// @acp:summary "Save config to a file"
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// @acp:summary "Load config if the file exists, defaults otherwise"
    ///
    /// A missing file is not an error; an unreadable or invalid one is.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn output_format(&self) -> crate::Result<OutputFormat> {
        self.default_format.parse().map_err(|_| {
            AdvisorError::Config(format!("unknown default_format '{}'", self.default_format))
        })
    }

    /// Resolved data directory
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }

    pub fn submissions_path(&self) -> PathBuf {
        self.data_dir().join("submissions.jsonl")
    }

    pub fn analytics_path(&self) -> PathBuf {
        self.data_dir().join("analytics.json")
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("advisor"))
        .unwrap_or_else(|| PathBuf::from(".advisor"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.persist);
        assert!(config.analytics);
        assert_eq!(config.output_format().unwrap(), OutputFormat::Markdown);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{"persist": false, "data_dir": "/tmp/advisor-data"}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert!(!config.persist);
        assert!(config.analytics);
        assert_eq!(
            config.submissions_path(),
            PathBuf::from("/tmp/advisor-data/submissions.jsonl")
        );
        assert_eq!(
            config.analytics_path(),
            PathBuf::from("/tmp/advisor-data/analytics.json")
        );
    }

    #[test]
    fn test_save_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let config = Config {
            default_format: "html".to_string(),
            ..Default::default()
        };
        config.save(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_or_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());

        std::fs::write(&path, r#"{"analytics": false}"#).unwrap();
        assert!(!Config::load_or_default(&path).unwrap().analytics);

        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(Config::load_or_default(&path), Err(AdvisorError::Json(_))));
    }

    #[test]
    fn test_unknown_format_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{"default_format": "pdf"}"#).unwrap();
        assert!(matches!(Config::load(&path), Err(AdvisorError::Config(_))));
    }
}
