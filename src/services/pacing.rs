//! Reply pacing
//!
//! Before each reply the engine pauses briefly so the bot reads like a person
//! typing. The pause is a policy object so tests can run without delays.

use std::time::Duration;
use async_trait::async_trait;

/// Pause applied before every outbound reply
#[async_trait]
pub trait ReplyPacing: Send + Sync {
    async fn pause(&self);
}

/// Wait a fixed duration before each reply
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

#[async_trait]
impl ReplyPacing for FixedDelay {
    async fn pause(&self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}

/// Send replies immediately
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl ReplyPacing for NoDelay {
    async fn pause(&self) {}
}
