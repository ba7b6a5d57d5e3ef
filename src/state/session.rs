//! Conversation session types
//!
//! A session records where one user currently is in the scripted
//! conversation. Users without a session are treated as `Idle`.

use std::fmt;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque identifier of a conversation partner (chat address)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

/// Where a user is in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    Idle,
    AwaitingMenuOption,
    AwaitingYesNo,
    AwaitingProductType,
    AwaitingModelInfo,
    AwaitingCapinhaModel,
    AwaitingFeedbackType,
    AwaitingComplaintText,
    AwaitingSuggestionText,
    AwaitingHeadphoneType,
    AwaitingCableType,
    AwaitingChargerType,
    AwaitingRating,
}

impl ConversationState {
    /// Every state, in declaration order
    pub const ALL: [ConversationState; 13] = [
        ConversationState::Idle,
        ConversationState::AwaitingMenuOption,
        ConversationState::AwaitingYesNo,
        ConversationState::AwaitingProductType,
        ConversationState::AwaitingModelInfo,
        ConversationState::AwaitingCapinhaModel,
        ConversationState::AwaitingFeedbackType,
        ConversationState::AwaitingComplaintText,
        ConversationState::AwaitingSuggestionText,
        ConversationState::AwaitingHeadphoneType,
        ConversationState::AwaitingCableType,
        ConversationState::AwaitingChargerType,
        ConversationState::AwaitingRating,
    ];

    /// States where any non-empty text is taken verbatim
    pub fn is_free_text_capture(&self) -> bool {
        matches!(
            self,
            ConversationState::AwaitingModelInfo
                | ConversationState::AwaitingCapinhaModel
                | ConversationState::AwaitingComplaintText
                | ConversationState::AwaitingSuggestionText
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConversationState::Idle => "idle",
            ConversationState::AwaitingMenuOption => "awaiting_menu_option",
            ConversationState::AwaitingYesNo => "awaiting_yes_no",
            ConversationState::AwaitingProductType => "awaiting_product_type",
            ConversationState::AwaitingModelInfo => "awaiting_model_info",
            ConversationState::AwaitingCapinhaModel => "awaiting_capinha_model",
            ConversationState::AwaitingFeedbackType => "awaiting_feedback_type",
            ConversationState::AwaitingComplaintText => "awaiting_complaint_text",
            ConversationState::AwaitingSuggestionText => "awaiting_suggestion_text",
            ConversationState::AwaitingHeadphoneType => "awaiting_headphone_type",
            ConversationState::AwaitingCableType => "awaiting_cable_type",
            ConversationState::AwaitingChargerType => "awaiting_charger_type",
            ConversationState::AwaitingRating => "awaiting_rating",
        }
    }
}

impl fmt::Display for ConversationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Live conversation record for one user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationSession {
    /// User this session belongs to
    pub user_id: UserId,
    /// Current position in the conversation
    pub state: ConversationState,
    /// When the conversation started
    pub created_at: DateTime<Utc>,
    /// When the state last changed
    pub updated_at: DateTime<Utc>,
}

impl ConversationSession {
    /// Create a new session for a user
    pub fn new(user_id: UserId, state: ConversationState) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            state,
            created_at: now,
            updated_at: now,
        }
    }

    /// Move the session to another state
    pub fn advance(&mut self, state: ConversationState) {
        self.state = state;
        self.updated_at = Utc::now();
    }
}
