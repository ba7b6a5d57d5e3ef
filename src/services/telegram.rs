//! Telegram gateway implementation
//!
//! Adapts teloxide messages into inbound events and sends replies back to
//! the originating chat.

use async_trait::async_trait;
use teloxide::{Bot, prelude::*, types::{ChatAction, ChatId, Message}};
use tracing::debug;
use crate::state::UserId;
use crate::utils::errors::{StoreBuddyError, Result};
use super::gateway::{Gateway, InboundMessage};

/// Gateway backed by the Telegram Bot API
#[derive(Clone)]
pub struct TelegramGateway {
    bot: Bot,
}

impl TelegramGateway {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    /// Convert a Telegram message into an inbound event
    ///
    /// Messages written by bots are dropped. Non-text messages become empty
    /// text so the conversation re-prompts instead of stalling.
    pub fn inbound_from(msg: &Message) -> Option<InboundMessage> {
        let user = msg.from.as_ref()?;
        if user.is_bot {
            debug!(chat_id = ?msg.chat.id, "Ignoring message from a bot");
            return None;
        }

        let body = msg.text().or_else(|| msg.caption()).unwrap_or_default();

        Some(InboundMessage {
            from: UserId::from(msg.chat.id.0),
            body: body.to_string(),
            is_group: !msg.chat.is_private(),
            display_name: Some(user.full_name()),
        })
    }

    fn chat_id(user: &UserId) -> Result<ChatId> {
        user.as_str()
            .parse::<i64>()
            .map(ChatId)
            .map_err(|_| StoreBuddyError::InvalidInput(format!("Not a Telegram chat id: {}", user)))
    }
}

#[async_trait]
impl Gateway for TelegramGateway {
    async fn send_text(&self, to: &UserId, text: &str) -> Result<()> {
        let chat_id = Self::chat_id(to)?;
        self.bot.send_message(chat_id, text).await?;
        Ok(())
    }

    async fn show_typing(&self, to: &UserId) -> Result<()> {
        let chat_id = Self::chat_id(to)?;
        self.bot.send_chat_action(chat_id, ChatAction::Typing).await?;
        Ok(())
    }
}

impl std::fmt::Debug for TelegramGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramGateway").finish_non_exhaustive()
    }
}
