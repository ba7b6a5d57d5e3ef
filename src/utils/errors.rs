//! Error handling for StoreBuddy
//!
//! This module defines the main error types used throughout the application
//! and classifies them for the per-message error boundary.

use thiserror::Error;

/// Main error type for StoreBuddy application
#[derive(Error, Debug)]
pub enum StoreBuddyError {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Gateway error: {0}")]
    Gateway(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid pattern: {0}")]
    Regex(#[from] regex::Error),
}

/// Result type alias for StoreBuddy operations
pub type Result<T> = std::result::Result<T, StoreBuddyError>;

/// Where a failure came from, as seen by the message handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The messaging channel refused or lost an outbound request
    Transport,
    /// Anything that went wrong inside the bot itself
    Internal,
}

impl StoreBuddyError {
    /// Classify the error for the message handler boundary
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreBuddyError::Telegram(_) | StoreBuddyError::Gateway(_) => ErrorKind::Transport,
            _ => ErrorKind::Internal,
        }
    }

    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            StoreBuddyError::Telegram(_) => true,
            StoreBuddyError::Gateway(_) => true,
            StoreBuddyError::Io(_) => true,
            StoreBuddyError::Config(_) => false,
            StoreBuddyError::Template(_) => false,
            StoreBuddyError::InvalidInput(_) => false,
            StoreBuddyError::Internal(_) => false,
            StoreBuddyError::Serialization(_) => false,
            StoreBuddyError::Regex(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            StoreBuddyError::Config(_) => ErrorSeverity::Critical,
            StoreBuddyError::Template(_) => ErrorSeverity::Critical,
            StoreBuddyError::Regex(_) => ErrorSeverity::Critical,
            StoreBuddyError::Telegram(_) => ErrorSeverity::Warning,
            StoreBuddyError::Gateway(_) => ErrorSeverity::Warning,
            StoreBuddyError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
