//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// First whitespace-separated token of a display name, if any
pub fn first_name(display_name: &str) -> Option<&str> {
    display_name.split_whitespace().next()
}

/// Lowercase and strip trailing punctuation for token comparison
pub fn normalize_token(text: &str) -> String {
    text.trim()
        .trim_end_matches(|c: char| matches!(c, '.' | '!' | '?' | ','))
        .to_lowercase()
}
