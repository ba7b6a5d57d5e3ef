//! Messaging gateway abstraction
//!
//! The conversation engine talks to the messaging network only through this
//! trait, so tests can record or fail outbound sends.

use async_trait::async_trait;
use crate::state::UserId;
use crate::utils::errors::Result;

/// Inbound message event delivered by a gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub from: UserId,
    pub body: String,
    /// Sent inside a group, supergroup or broadcast channel
    pub is_group: bool,
    /// Display name of the sender, when the network includes it
    pub display_name: Option<String>,
}

impl InboundMessage {
    /// A one-to-one message
    pub fn direct(from: impl Into<UserId>, body: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            body: body.into(),
            is_group: false,
            display_name: None,
        }
    }

    /// A message posted in a group or broadcast
    pub fn group(from: impl Into<UserId>, body: impl Into<String>) -> Self {
        Self {
            is_group: true,
            ..Self::direct(from, body)
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}

/// Outbound side of the messaging network
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Send a text message to a user
    async fn send_text(&self, to: &UserId, text: &str) -> Result<()>;

    /// Show a composing indicator to a user
    async fn show_typing(&self, _to: &UserId) -> Result<()> {
        Ok(())
    }

    /// Look up a contact's display name
    async fn contact_name(&self, _user: &UserId) -> Result<Option<String>> {
        Ok(None)
    }
}
