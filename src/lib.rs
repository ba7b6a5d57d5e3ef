//! StoreBuddy Support Bot
//!
//! A scripted customer-support bot for a phone accessories store. Users
//! navigate numbered menus, ask for prices, leave feedback and rate the
//! service; a per-user state machine decides every reply.

#![allow(non_snake_case)]

pub mod config;
pub mod handlers;
pub mod services;
pub mod state;
pub mod templates;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{StoreBuddyError, Result};

// Re-export main components for easy access
pub use handlers::{ConversationEngine, HandleOutcome};
pub use services::{Gateway, InboundMessage};
pub use state::{ConversationState, StateStorage};
pub use templates::Templates;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
