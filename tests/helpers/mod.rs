//! Test helpers module
//!
//! This module provides utilities and helpers for testing the StoreBuddy application.
//! It includes a recording gateway and a ready-to-use test context.

pub mod recording_gateway;
pub mod test_context;

pub use recording_gateway::*;
pub use test_context::*;
