//! Input classification
//!
//! Interprets raw message text against the state the user is in. The
//! classifier holds only its configured vocabulary; every result is a pure
//! function of `(state, text)`.

use regex::{Regex, RegexBuilder};
use crate::config::ConversationConfig;
use crate::utils::errors::{StoreBuddyError, Result};
use crate::utils::helpers::normalize_token;
use super::menus::menu_for;
use super::session::ConversationState;

/// Normalized interpretation of a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedInput {
    Greeting,
    /// The VIP keyword phrase, sent outside of a conversation
    VipKeyword,
    MenuOption(u8),
    Yes,
    No,
    Rating(u8),
    FreeText(String),
    Unrecognized,
}

/// Vocabulary-driven input classifier
#[derive(Debug, Clone)]
pub struct Classifier {
    affirmative: Vec<String>,
    negative: Vec<String>,
    greeting: Regex,
    vip_keyword: String,
}

impl Classifier {
    /// Build a classifier from the conversation configuration
    pub fn new(config: &ConversationConfig) -> Result<Self> {
        let words: Vec<String> = config.greeting_words
            .iter()
            .map(|w| w.trim())
            .filter(|w| !w.is_empty())
            .map(regex::escape)
            .collect();
        if words.is_empty() {
            return Err(StoreBuddyError::Config("Greeting vocabulary is empty".to_string()));
        }

        let greeting = RegexBuilder::new(&format!(r"\b(?:{})\b", words.join("|")))
            .case_insensitive(true)
            .build()?;

        Ok(Self {
            affirmative: config.affirmative_tokens.iter().map(|t| normalize_token(t)).collect(),
            negative: config.negative_tokens.iter().map(|t| normalize_token(t)).collect(),
            greeting,
            vip_keyword: config.vip_keyword.trim().to_lowercase(),
        })
    }

    /// Classify raw text against the current state
    pub fn classify(&self, state: ConversationState, text: &str) -> ClassifiedInput {
        let trimmed = text.trim();

        match state {
            ConversationState::Idle => self.classify_idle(trimmed),
            ConversationState::AwaitingYesNo => self.classify_yes_no(trimmed),
            ConversationState::AwaitingRating => classify_rating(trimmed),
            ConversationState::AwaitingModelInfo
            | ConversationState::AwaitingCapinhaModel
            | ConversationState::AwaitingComplaintText
            | ConversationState::AwaitingSuggestionText => {
                if trimmed.is_empty() {
                    ClassifiedInput::Unrecognized
                } else {
                    ClassifiedInput::FreeText(trimmed.to_string())
                }
            }
            ConversationState::AwaitingMenuOption
            | ConversationState::AwaitingProductType
            | ConversationState::AwaitingFeedbackType
            | ConversationState::AwaitingHeadphoneType
            | ConversationState::AwaitingCableType
            | ConversationState::AwaitingChargerType => menu_for(state)
                .and_then(|menu| menu.parse(trimmed))
                .map(ClassifiedInput::MenuOption)
                .unwrap_or(ClassifiedInput::Unrecognized),
        }
    }

    fn classify_idle(&self, text: &str) -> ClassifiedInput {
        if text.to_lowercase().contains(&self.vip_keyword) {
            ClassifiedInput::VipKeyword
        } else if self.greeting.is_match(text) {
            ClassifiedInput::Greeting
        } else {
            ClassifiedInput::Unrecognized
        }
    }

    fn classify_yes_no(&self, text: &str) -> ClassifiedInput {
        let token = normalize_token(text);
        if self.affirmative.contains(&token) {
            ClassifiedInput::Yes
        } else if self.negative.contains(&token) {
            ClassifiedInput::No
        } else {
            ClassifiedInput::Unrecognized
        }
    }
}

fn classify_rating(text: &str) -> ClassifiedInput {
    match text.parse::<i64>() {
        Ok(value @ 1..=5) => ClassifiedInput::Rating(value as u8),
        _ => ClassifiedInput::Unrecognized,
    }
}
