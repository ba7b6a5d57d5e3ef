//! Reply templates module
//!
//! This module owns the outbound wording of the bot: template identifiers,
//! the built-in Portuguese texts and placeholder substitution.

pub mod ids;
pub mod loader;

pub use ids::TemplateId;
pub use loader::{Templates, TemplateParams};
