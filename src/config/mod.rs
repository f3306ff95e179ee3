//! Application configuration
//!
//! Loaded once at startup from a TOML file with environment variable
//! overrides, then cached in a `OnceLock` for the rest of the process.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, warn};

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the Chances API, including the `/api` prefix.
    /// No request timeout is configured; requests run to completion.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Path of the persisted session JSON file.
    #[serde(default = "default_session_file")]
    pub file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Optional log file; empty or absent means stderr.
    #[serde(default)]
    pub file: Option<String>,
    /// "text" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_base_url() -> String {
    "https://localhost:7267/api".to_string()
}

fn default_session_file() -> PathBuf {
    match env::var_os("HOME") {
        Some(home) if !home.is_empty() => Path::new(&home)
            .join(".config")
            .join("chances")
            .join("session.json"),
        _ => PathBuf::from("chances-session.json"),
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            file: default_session_file(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
            format: default_log_format(),
        }
    }
}

impl AppConfig {
    /// Load configuration from TOML file with environment variable overrides
    pub fn load() -> Self {
        let mut config = Self::load_from_file();
        config.override_with_env();
        config
    }

    fn load_from_file() -> Self {
        let config_paths = [
            "chances.toml",
            "config.toml",
            "config/chances.toml",
            "/etc/chances/config.toml",
        ];

        for path in &config_paths {
            if Path::new(path).exists() {
                debug!("Loading config from: {}", path);
                match fs::read_to_string(path) {
                    Ok(content) => match toml::from_str::<AppConfig>(&content) {
                        Ok(config) => {
                            debug!("Successfully loaded config from: {}", path);
                            return config;
                        }
                        Err(e) => {
                            warn!("Failed to parse config file {}: {}", path, e);
                        }
                    },
                    Err(e) => {
                        warn!("Failed to read config file {}: {}", path, e);
                    }
                }
            }
        }

        debug!("No config file found, using defaults");
        Self::default()
    }

    /// Environment variables win over file values
    pub(crate) fn override_with_env(&mut self) {
        if let Ok(url) = env::var("CHANCES_API_URL") {
            self.api.base_url = url;
        }
        if let Ok(file) = env::var("CHANCES_SESSION_FILE") {
            self.session.file = PathBuf::from(file);
        }
        if let Ok(level) = env::var("LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(file) = env::var("LOG_FILE") {
            self.logging.file = Some(file);
        }
        if let Ok(format) = env::var("LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// Generate a sample TOML configuration file
    pub fn generate_sample_config() -> String {
        let sample = AppConfig::default();
        toml::to_string_pretty(&sample)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }
}

/// Get the global configuration instance
pub fn get_config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::load)
}

/// Initialize the global configuration
pub fn init_config() {
    CONFIG.get_or_init(AppConfig::load);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, "https://localhost:7267/api");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "text");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_parse_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [api]
            base_url = "http://10.0.0.5:5000/api"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://10.0.0.5:5000/api");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config: AppConfig = toml::from_str(
            r#"
            [api]
            base_url = "http://from-file/api"
            [logging]
            level = "warn"
            "#,
        )
        .unwrap();

        // Env override is applied on top of the parsed file.
        unsafe {
            env::set_var("CHANCES_API_URL", "http://from-env/api");
        }
        config.override_with_env();
        unsafe {
            env::remove_var("CHANCES_API_URL");
        }

        assert_eq!(config.api.base_url, "http://from-env/api");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_sample_config_round_trips() {
        let sample = AppConfig::generate_sample_config();
        let parsed: AppConfig = toml::from_str(&sample).unwrap();
        assert_eq!(parsed.api.base_url, AppConfig::default().api.base_url);
    }
}
