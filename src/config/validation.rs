//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{StoreBuddyError, Result};
use crate::utils::helpers::normalize_token;
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_conversation_config(&settings.conversation)?;
    validate_templates_config(&settings.templates)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.is_empty() {
        return Err(StoreBuddyError::Config(
            "Bot token is required".to_string()
        ));
    }

    Ok(())
}

/// Validate conversation configuration
pub fn validate_conversation_config(config: &super::ConversationConfig) -> Result<()> {
    if config.affirmative_tokens.is_empty() || config.negative_tokens.is_empty() {
        return Err(StoreBuddyError::Config(
            "Both affirmative and negative tokens must be configured".to_string()
        ));
    }

    let overlap = config.affirmative_tokens.iter()
        .map(|t| normalize_token(t))
        .find(|t| config.negative_tokens.iter().any(|n| normalize_token(n) == *t));
    if let Some(token) = overlap {
        return Err(StoreBuddyError::Config(
            format!("Token '{}' is both affirmative and negative", token)
        ));
    }

    if config.greeting_words.iter().all(|w| w.trim().is_empty()) {
        return Err(StoreBuddyError::Config(
            "At least one greeting word is required".to_string()
        ));
    }

    if config.vip_keyword.trim().is_empty() {
        return Err(StoreBuddyError::Config(
            "VIP keyword cannot be empty".to_string()
        ));
    }

    if config.fallback_name.trim().is_empty() {
        return Err(StoreBuddyError::Config(
            "Fallback name cannot be empty".to_string()
        ));
    }

    Ok(())
}

/// Validate template configuration
fn validate_templates_config(config: &super::TemplatesConfig) -> Result<()> {
    if config.language.is_empty() {
        return Err(StoreBuddyError::Config(
            "Template language is required".to_string()
        ));
    }

    if let Some(path) = &config.overrides_path {
        if path.trim().is_empty() {
            return Err(StoreBuddyError::Config(
                "Template overrides path cannot be blank".to_string()
            ));
        }
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(StoreBuddyError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(StoreBuddyError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
