//! Bot handlers module
//!
//! This module contains the inbound message handler and the conversation
//! engine it drives.

pub mod messages;

// Re-export commonly used handler functions
pub use messages::*;
