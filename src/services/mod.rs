//! Services module
//!
//! This module contains the collaborators of the conversation engine: the
//! messaging gateway and the reply pacing policy.

pub mod gateway;
pub mod pacing;
pub mod telegram;

// Re-export commonly used services
pub use gateway::{Gateway, InboundMessage};
pub use pacing::{FixedDelay, NoDelay, ReplyPacing};
pub use telegram::TelegramGateway;
