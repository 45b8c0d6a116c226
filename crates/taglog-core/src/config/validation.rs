//! Configuration validation

use chrono::format::{Item, StrftimeItems};
use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_changelog(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_changelog(config: &Config) -> Result<()> {
    if config.changelog.file.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.file".to_string(),
            message: "file cannot be empty".to_string(),
        }
        .into());
    }

    let format = &config.changelog.date_format;
    if format.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.date_format".to_string(),
            message: "date format cannot be empty".to_string(),
        }
        .into());
    }

    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(ConfigError::InvalidValue {
            field: "changelog.date_format".to_string(),
            message: format!("'{}' is not a valid strftime format", format),
        }
        .into());
    }

    Ok(())
}
