//! Integration tests module
//!
//! This module contains all integration tests for the StoreBuddy bot,
//! organized by functionality and test scenarios.
