use crate::config::Config;
use crate::data_fetcher::api::TEAM_PLACEHOLDER;
use crate::error::AppError;
use std::path::Path;

fn validate_url_template(name: &str, template: &str) -> Result<(), AppError> {
    if template.trim().is_empty() {
        return Err(AppError::config_error(format!("{name} cannot be empty")));
    }
    if !template.starts_with("http://") && !template.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "{name} must be an http:// or https:// URL, got '{template}'"
        )));
    }
    Ok(())
}

/// Validates the configuration settings
///
/// # Validation Rules
/// - Roster URL must be an http(s) URL containing the `{team}` placeholder
/// - Bullpen URL, if set, must be an http(s) URL
/// - HTTP timeout and cache capacity must be positive
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    validate_url_template("Roster URL", &config.roster_url)?;
    if !config.roster_url.contains(TEAM_PLACEHOLDER) {
        return Err(AppError::config_error(format!(
            "Roster URL must contain the {TEAM_PLACEHOLDER} placeholder"
        )));
    }

    if let Some(bullpen_url) = &config.bullpen_url {
        validate_url_template("Bullpen URL", bullpen_url)?;
    }

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error("HTTP timeout must be at least 1 second"));
    }

    if config.cache_capacity == 0 {
        return Err(AppError::config_error("Roster cache capacity must be at least 1"));
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Check if parent directory exists or can be created
        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
