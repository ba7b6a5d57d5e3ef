//! State storage implementation
//!
//! In-memory conversation state keyed by user id. Entries live until the
//! conversation completes or the process exits; there is no expiry.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use super::session::{ConversationSession, ConversationState, UserId};

/// Process-wide in-memory state storage
#[derive(Clone, Default)]
pub struct StateStorage {
    sessions: Arc<RwLock<HashMap<UserId, ConversationSession>>>,
}

impl StateStorage {
    /// Create an empty state storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of a user, `None` when no conversation is active
    pub async fn get(&self, user_id: &UserId) -> Option<ConversationState> {
        self.sessions.read().await.get(user_id).map(|s| s.state)
    }

    /// Full session record of a user
    pub async fn load_session(&self, user_id: &UserId) -> Option<ConversationSession> {
        self.sessions.read().await.get(user_id).cloned()
    }

    /// Set the state of a user, creating the session if needed
    pub async fn set(&self, user_id: &UserId, state: ConversationState) {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(user_id) {
            Some(session) => {
                debug!(user_id = %user_id, from = %session.state, to = %state, "Updating session");
                session.advance(state);
            }
            None => {
                debug!(user_id = %user_id, state = %state, "Creating session");
                sessions.insert(user_id.clone(), ConversationSession::new(user_id.clone(), state));
            }
        }
    }

    /// Remove the session of a user
    pub async fn clear(&self, user_id: &UserId) {
        if self.sessions.write().await.remove(user_id).is_some() {
            debug!(user_id = %user_id, "Cleared session");
        } else {
            debug!(user_id = %user_id, "No session to clear");
        }
    }

    /// Get storage statistics
    pub async fn get_stats(&self) -> StorageStats {
        let sessions = self.sessions.read().await;
        let mut states_count = HashMap::new();
        for session in sessions.values() {
            *states_count.entry(session.state.as_str().to_string()).or_insert(0) += 1;
        }

        StorageStats {
            active_sessions: sessions.len(),
            states_count,
        }
    }
}

impl std::fmt::Debug for StateStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateStorage").finish_non_exhaustive()
    }
}

/// Storage statistics
#[derive(Debug, Clone, serde::Serialize)]
pub struct StorageStats {
    pub active_sessions: usize,
    pub states_count: HashMap<String, u32>,
}
