//! Configuration validation module

use crate::utils::errors::{Result, SubDeskError};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_database_config(&settings.database)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.is_empty() {
        return Err(SubDeskError::Config("Bot token is required".to_string()));
    }

    Ok(())
}

fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(SubDeskError::Config("Database URL is required".to_string()));
    }

    if config.max_connections == 0 {
        return Err(SubDeskError::Config(
            "Max connections must be greater than 0".to_string(),
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(SubDeskError::Config(
            "Min connections cannot be greater than max connections".to_string(),
        ));
    }

    Ok(())
}

fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(SubDeskError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_fail_without_token() {
        let settings = Settings::default();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_settings_with_token_validate() {
        let mut settings = Settings::default();
        settings.bot.token = "123456:token".to_string();
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut settings = Settings::default();
        settings.bot.token = "123456:token".to_string();
        settings.logging.level = "verbose".to_string();
        assert!(validate_settings(&settings).is_err());
    }
}
