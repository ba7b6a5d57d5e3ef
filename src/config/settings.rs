//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from config files and environment variables.

use std::time::Duration;
use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    pub conversation: ConversationConfig,
    pub templates: TemplatesConfig,
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
}

/// Conversation engine configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConversationConfig {
    /// Pause before each outbound reply, in milliseconds
    pub pacing_delay_ms: u64,
    pub affirmative_tokens: Vec<String>,
    pub negative_tokens: Vec<String>,
    pub greeting_words: Vec<String>,
    /// Phrase that unlocks the VIP channel without going through the menu
    pub vip_keyword: String,
    /// Name used in the welcome message when the contact has none
    pub fallback_name: String,
}

/// Reply template configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TemplatesConfig {
    pub language: String,
    pub overrides_path: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub directory: Option<String>,
}

impl ConversationConfig {
    /// Reply pacing delay as a duration
    pub fn pacing_delay(&self) -> Duration {
        Duration::from_millis(self.pacing_delay_ms)
    }
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("STOREBUDDY")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("conversation.affirmative_tokens")
                    .with_list_parse_key("conversation.negative_tokens")
                    .with_list_parse_key("conversation.greeting_words")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::StoreBuddyError> {
        super::validation::validate_settings(self)
    }
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            pacing_delay_ms: 1000,
            affirmative_tokens: to_strings(&["yes", "sim", "quero"]),
            negative_tokens: to_strings(&["no", "não", "nao"]),
            greeting_words: to_strings(&[
                "oi", "olá", "ola", "bom dia", "boa tarde", "boa noite", "opa", "hello", "hi",
                "start",
            ]),
            vip_keyword: "Acesso VIP com Descontos Exclusivos".to_string(),
            fallback_name: "Cliente".to_string(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
            },
            conversation: ConversationConfig::default(),
            templates: TemplatesConfig {
                language: "pt-BR".to_string(),
                overrides_path: None,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                directory: None,
            },
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
