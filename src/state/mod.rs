//! State management module
//!
//! This module handles conversation state: the per-user session store, input
//! classification and the transition table driving the menus.

pub mod classifier;
pub mod machine;
pub mod menus;
pub mod session;
pub mod storage;

// Re-export commonly used state components
pub use classifier::{Classifier, ClassifiedInput};
pub use machine::{transition, NextState, Reply, Transition, TransitionContext};
pub use session::{ConversationSession, ConversationState, UserId};
pub use storage::{StateStorage, StorageStats};
