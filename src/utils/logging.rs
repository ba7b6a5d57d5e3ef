//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the StoreBuddy application.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::{StoreBuddyError, Result};
use crate::utils::helpers::truncate_text;

/// Longest message body echoed into the logs
const MAX_LOGGED_BODY: usize = 80;

/// Initialize logging based on configuration
///
/// The returned guard flushes the file appender on drop and must be held
/// for the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| StoreBuddyError::Config(format!("Invalid log filter: {}", e)))?;

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, "storebuddy.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(file_layer)
        .try_init()
        .map_err(|e| StoreBuddyError::Config(format!("Logging already initialized: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log an inbound message
pub fn log_inbound(user_id: &str, body: &str, is_group: bool) {
    debug!(
        user_id = user_id,
        body = %truncate_text(body, MAX_LOGGED_BODY),
        is_group = is_group,
        "Inbound message"
    );
}

/// Log a conversation state change
pub fn log_transition(user_id: &str, from: &str, to: &str, replies: usize) {
    info!(
        user_id = user_id,
        from = from,
        to = to,
        replies = replies,
        "Conversation transition"
    );
}

/// Log a failed outbound send
pub fn log_send_failure(user_id: &str, template: &str, error: &StoreBuddyError, skipped: usize) {
    warn!(
        user_id = user_id,
        template = template,
        error = %error,
        skipped = skipped,
        "Failed to send reply, dropping the rest of the sequence"
    );
}

/// Log a failure inside the message handler
pub fn log_internal_failure(user_id: &str, error: &StoreBuddyError) {
    error!(
        user_id = user_id,
        error = %error,
        severity = %error.severity(),
        recoverable = error.is_recoverable(),
        "Message handling failed"
    );
}
