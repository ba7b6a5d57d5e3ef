//! Recording gateway for testing
//!
//! Captures every outbound message in order and can be told to fail sends,
//! standing in for the messaging network.

use std::collections::HashMap;
use std::sync::Mutex;
use async_trait::async_trait;
use StoreBuddy::services::Gateway;
use StoreBuddy::state::UserId;
use StoreBuddy::{Result, StoreBuddyError};

/// Gateway that records outbound messages
#[derive(Default)]
pub struct RecordingGateway {
    sent: Mutex<Vec<(UserId, String)>>,
    typing: Mutex<usize>,
    contacts: Mutex<HashMap<UserId, String>>,
    /// Number of successful sends allowed before every send fails
    fail_after: Mutex<Option<usize>>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Let `count` more sends through, then fail the rest
    pub fn fail_after(&self, count: usize) {
        *self.fail_after.lock().unwrap() = Some(count);
    }

    /// Make sends succeed again
    pub fn recover(&self) {
        *self.fail_after.lock().unwrap() = None;
    }

    /// Register a contact name returned by lookups
    pub fn add_contact(&self, user: &str, name: &str) {
        self.contacts.lock().unwrap().insert(UserId::new(user), name.to_string());
    }

    /// Messages sent to a user, oldest first
    pub fn sent_to(&self, user: &str) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|(to, _)| to.as_str() == user)
            .map(|(_, text)| text.clone())
            .collect()
    }

    /// Total number of messages sent
    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    /// Number of typing indicators shown
    pub fn typing_count(&self) -> usize {
        *self.typing.lock().unwrap()
    }

    /// Forget everything sent so far
    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
        *self.typing.lock().unwrap() = 0;
    }
}

#[async_trait]
impl Gateway for RecordingGateway {
    async fn send_text(&self, to: &UserId, text: &str) -> Result<()> {
        let mut fail_after = self.fail_after.lock().unwrap();
        match fail_after.as_mut() {
            Some(0) => return Err(StoreBuddyError::Gateway("connection closed".to_string())),
            Some(remaining) => *remaining -= 1,
            None => {}
        }

        self.sent.lock().unwrap().push((to.clone(), text.to_string()));
        Ok(())
    }

    async fn show_typing(&self, _to: &UserId) -> Result<()> {
        *self.typing.lock().unwrap() += 1;
        Ok(())
    }

    async fn contact_name(&self, user: &UserId) -> Result<Option<String>> {
        Ok(self.contacts.lock().unwrap().get(user).cloned())
    }
}
