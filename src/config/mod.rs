use crate::constants::{self, env_vars};
use crate::data_fetcher::markup::SchemaVersion;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Roster page URL template. `{team}` is replaced with the team code.
    #[serde(default = "default_roster_url")]
    pub roster_url: String,
    /// Bullpen usage report URL template. Pitchers are only split into
    /// starters and bullpen when this is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bullpen_url: Option<String>,
    /// Markup layout of the roster pages
    #[serde(default)]
    pub schema_version: SchemaVersion,
    /// HTTP timeout in seconds for document requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Retries for transient fetch failures
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Number of team rosters kept in memory
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

fn default_roster_url() -> String {
    constants::DEFAULT_ROSTER_URL.to_string()
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_max_retries() -> u32 {
    constants::retry::MAX_ATTEMPTS
}

fn default_cache_capacity() -> usize {
    constants::DEFAULT_ROSTER_CACHE_CAPACITY
}

impl Default for Config {
    fn default() -> Self {
        Config {
            roster_url: default_roster_url(),
            bullpen_url: None,
            schema_version: SchemaVersion::default(),
            http_timeout_seconds: default_http_timeout(),
            max_retries: default_max_retries(),
            cache_capacity: default_cache_capacity(),
            log_file_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Missing config files yield the defaults.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `MLB_ROSTERS_ROSTER_URL` - Override roster URL template
    /// - `MLB_ROSTERS_BULLPEN_URL` - Override bullpen report URL (empty disables it)
    /// - `MLB_ROSTERS_LOG_FILE` - Override log file path
    /// - `MLB_ROSTERS_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Overrides settings from `MLB_ROSTERS_*` environment variables
    pub fn apply_env_overrides(&mut self) {
        if let Ok(roster_url) = std::env::var(env_vars::ROSTER_URL) {
            self.roster_url = roster_url;
        }

        if let Ok(bullpen_url) = std::env::var(env_vars::BULLPEN_URL) {
            self.bullpen_url = Some(bullpen_url).filter(|url| !url.trim().is_empty());
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if !Path::new(&config_path).exists() {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            println!("(Using defaults)");
        }

        let config = Config::load().await?;
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        println!("────────────────────────────────────");
        println!("Roster URL:");
        println!("{}", config.roster_url);
        println!("────────────────────────────────────");
        println!("Bullpen URL:");
        println!("{}", config.bullpen_url.as_deref().unwrap_or("(not set)"));
        println!("────────────────────────────────────");
        println!("Schema Version:");
        println!("{}", config.schema_version);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds, {} retries", config.http_timeout_seconds, config.max_retries);
        println!("────────────────────────────────────");
        println!("Roster Cache Capacity:");
        println!("{}", config.cache_capacity);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/mlb_rosters.log");
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without environment overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn clear_env() {
        unsafe {
            std::env::remove_var(env_vars::ROSTER_URL);
            std::env::remove_var(env_vars::BULLPEN_URL);
            std::env::remove_var(env_vars::LOG_FILE);
            std::env::remove_var(env_vars::HTTP_TIMEOUT);
        }
    }

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
roster_url = "https://rosters.example.com/{team}"
bullpen_url = "https://bullpen.example.com/report.html"
schema_version = "legacy"
cache_capacity = 4
log_file_path = "/custom/log/path"
"#;
        tokio::fs::write(&config_path, config_content)
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.roster_url, "https://rosters.example.com/{team}");
        assert_eq!(
            config.bullpen_url.as_deref(),
            Some("https://bullpen.example.com/report.html")
        );
        assert_eq!(config.schema_version, SchemaVersion::Legacy);
        assert_eq!(config.cache_capacity, 4);
        assert_eq!(config.http_timeout_seconds, default_http_timeout());
        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
    }

    #[tokio::test]
    async fn test_empty_config_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "").await.unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(config, Config::default());
        assert!(config.validate().is_ok());
    }

    #[tokio::test]
    async fn test_config_save_creates_directory_and_roundtrips() {
        let temp_dir = tempdir().unwrap();
        let config_dir = temp_dir.path().join("mlb_rosters");
        let config_path = config_dir.join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let config = Config {
            bullpen_url: Some("https://bullpen.example.com/report.html".to_string()),
            log_file_path: Some("/custom/log/path".to_string()),
            ..Config::default()
        };

        config.save_to_path(&config_path_str).await.unwrap();
        assert!(config_dir.exists());

        let content = tokio::fs::read_to_string(&config_path).await.unwrap();
        assert!(
            content.contains("schema_version = \"current\""),
            "Content should name the schema version. Content: {content}"
        );

        let loaded_config = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(loaded_config, config);
    }

    #[test]
    fn test_none_fields_are_not_serialized() {
        let toml_string = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(!toml_string.contains("log_file_path"));
        assert!(!toml_string.contains("bullpen_url"));
    }

    #[tokio::test]
    async fn test_config_load_from_nonexistent_path() {
        let result = Config::load_from_path("/nonexistent/path/config.toml").await;
        assert!(matches!(result.unwrap_err(), AppError::Io(_)));
    }

    #[tokio::test]
    async fn test_config_malformed_toml_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("malformed_config.toml");

        let malformed_content = r#"
roster_url = "https://rosters.example.com/{team}"
[invalid_section
malformed = "data
"#;
        tokio::fs::write(&config_path, malformed_content)
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result.unwrap_err(), AppError::TomlDeserialize(_)));
    }

    #[tokio::test]
    async fn test_unknown_schema_version_is_rejected() {
        let result: Result<Config, _> = toml::from_str(r#"schema_version = "2031""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_get_config_path() {
        let config_path = Config::get_config_path();
        assert!(config_path.contains("mlb_rosters"));
        assert!(config_path.ends_with("config.toml"));
    }

    #[test]
    fn test_get_log_dir_path() {
        let log_dir_path = Config::get_log_dir_path();
        assert!(log_dir_path.contains("mlb_rosters"));
        assert!(log_dir_path.ends_with("logs"));
    }

    #[test]
    fn test_config_validation() {
        assert!(Config::default().validate().is_ok());

        let invalid_configs = vec![
            Config {
                roster_url: String::new(),
                ..Config::default()
            },
            Config {
                roster_url: "ftp://rosters.example.com/{team}".to_string(),
                ..Config::default()
            },
            Config {
                roster_url: "https://rosters.example.com/cin".to_string(),
                ..Config::default()
            },
            Config {
                bullpen_url: Some("bullpen.example.com".to_string()),
                ..Config::default()
            },
            Config {
                http_timeout_seconds: 0,
                ..Config::default()
            },
            Config {
                cache_capacity: 0,
                ..Config::default()
            },
            Config {
                log_file_path: Some(String::new()),
                ..Config::default()
            },
        ];

        for config in invalid_configs {
            assert!(
                config.validate().is_err(),
                "Config should be invalid: {config:?}"
            );
        }
    }

    #[test]
    #[serial]
    fn test_environment_variable_override() {
        clear_env();
        unsafe {
            std::env::set_var(env_vars::ROSTER_URL, "https://env.example.com/{team}/roster");
            std::env::set_var(env_vars::BULLPEN_URL, "https://env.example.com/bullpen.html");
            std::env::set_var(env_vars::LOG_FILE, "/env/log/path.log");
            std::env::set_var(env_vars::HTTP_TIMEOUT, "5");
        }

        let mut config = Config::default();
        config.apply_env_overrides();
        clear_env();

        assert_eq!(config.roster_url, "https://env.example.com/{team}/roster");
        assert_eq!(
            config.bullpen_url.as_deref(),
            Some("https://env.example.com/bullpen.html")
        );
        assert_eq!(config.log_file_path.as_deref(), Some("/env/log/path.log"));
        assert_eq!(config.http_timeout_seconds, 5);
    }

    #[test]
    #[serial]
    fn test_empty_bullpen_env_disables_report_and_bad_timeout_is_ignored() {
        clear_env();
        unsafe {
            std::env::set_var(env_vars::BULLPEN_URL, "");
            std::env::set_var(env_vars::HTTP_TIMEOUT, "soon");
        }

        let mut config = Config {
            bullpen_url: Some("https://bullpen.example.com/report.html".to_string()),
            ..Config::default()
        };
        config.apply_env_overrides();
        clear_env();

        assert_eq!(config.bullpen_url, None);
        assert_eq!(config.http_timeout_seconds, default_http_timeout());
    }
}
