use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Arguments
/// * `api_base_url` - The API base URL to validate
/// * `log_file_path` - Optional log file path to validate
///
/// # Returns
/// * `Ok(())` - Configuration is valid
/// * `Err(AppError)` - Configuration validation failed
///
/// # Validation Rules
/// - API base URL cannot be empty
/// - API base URL must be an http(s) URL or at least look like a host
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(api_base_url: &str, log_file_path: &Option<String>) -> Result<(), AppError> {
    if api_base_url.is_empty() {
        return Err(AppError::config_error("API base URL cannot be empty"));
    }

    if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
        // Bare hosts are accepted and normalized on save; anything else is a typo
        if !api_base_url.contains('.') && !api_base_url.starts_with("localhost") {
            return Err(AppError::config_error(
                "API base URL must be an http(s) URL or host name",
            ));
        }
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Check if parent directory exists or can be created
        if let Some(parent) = Path::new(log_path).parent()
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
