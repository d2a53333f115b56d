//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Scheduler service location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `jobdesk_core=debug`. `RUST_LOG` takes precedence.
    #[serde(default = "default_level")]
    pub level: String,

    /// Also write daily-rotated log files.
    #[serde(default)]
    pub file: bool,

    /// Log file directory; defaults to `~/.jobdesk/logs`.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: false,
            dir: None,
        }
    }
}

impl LoggingConfig {
    /// Resolved log directory, with `~` expanded.
    pub fn log_dir(&self) -> PathBuf {
        match &self.dir {
            Some(dir) => PathBuf::from(shellexpand::tilde(&dir.to_string_lossy()).as_ref()),
            None => dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".jobdesk")
                .join("logs"),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

/// Output format names understood by the CLI.
pub const OUTPUT_FORMATS: [&str; 2] = ["table", "json"];

/// Command output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// `table` or `json`.
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "table".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.file);
        assert_eq!(config.output.format, "table");
    }

    #[test]
    fn test_partial_section_fills_defaults() {
        let config: Config = toml::from_str("[logging]\nfile = true\n").unwrap();
        assert!(config.logging.file);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.server, ServerConfig::default());
    }

    #[test]
    fn test_log_dir_default() {
        let dir = LoggingConfig::default().log_dir();
        assert!(dir.ends_with(".jobdesk/logs"));
    }

    #[test]
    fn test_log_dir_expands_tilde() {
        let logging = LoggingConfig {
            dir: Some(PathBuf::from("~/jobdesk-logs")),
            ..Default::default()
        };
        let dir = logging.log_dir();
        assert!(!dir.starts_with("~"));
        assert!(dir.ends_with("jobdesk-logs"));
    }

    #[test]
    fn test_log_dir_absolute() {
        let logging = LoggingConfig {
            dir: Some(PathBuf::from("/var/log/jobdesk")),
            ..Default::default()
        };
        assert_eq!(logging.log_dir(), PathBuf::from("/var/log/jobdesk"));
    }

    #[test]
    fn test_config_serialize_roundtrip() {
        let config = Config::default();
        let text = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
