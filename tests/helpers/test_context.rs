//! Test context for unified test setup
//!
//! Builds a conversation engine wired to a recording gateway, with no reply
//! pacing, and offers shortcuts to drive it.

use std::sync::Arc;
use StoreBuddy::config::ConversationConfig;
use StoreBuddy::services::{InboundMessage, NoDelay};
use StoreBuddy::state::{ConversationState, UserId};
use StoreBuddy::templates::{TemplateId, TemplateParams, Templates};
use StoreBuddy::{ConversationEngine, HandleOutcome, StateStorage};

use super::recording_gateway::RecordingGateway;

/// Unified test context that manages all test components
pub struct TestContext {
    pub engine: ConversationEngine,
    pub gateway: Arc<RecordingGateway>,
    pub templates: Arc<Templates>,
}

impl TestContext {
    /// Create a new test context with default configuration
    pub fn new() -> Self {
        Self::with_config(ConversationConfig::default())
    }

    /// Create a new test context with custom conversation configuration
    pub fn with_config(config: ConversationConfig) -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let gateway = Arc::new(RecordingGateway::new());
        let templates = Arc::new(Templates::builtin().expect("built-in templates should load"));
        let engine = ConversationEngine::new(
            &config,
            StateStorage::new(),
            templates.clone(),
            gateway.clone(),
            Arc::new(NoDelay),
        )
        .expect("engine should build");

        Self {
            engine,
            gateway,
            templates,
        }
    }

    /// Send a direct message from a user
    pub async fn send(&self, user: &str, text: &str) -> HandleOutcome {
        self.engine.handle_inbound(InboundMessage::direct(user, text)).await
    }

    /// Send a direct message and return only the replies it produced
    pub async fn exchange(&self, user: &str, text: &str) -> Vec<String> {
        let before = self.gateway.sent_to(user).len();
        self.send(user, text).await;
        self.gateway.sent_to(user).split_off(before)
    }

    /// Current stored state of a user
    pub async fn state_of(&self, user: &str) -> Option<ConversationState> {
        self.engine.store().get(&UserId::new(user)).await
    }

    /// Put a user directly into a state
    pub async fn set_state(&self, user: &str, state: ConversationState) {
        self.engine.store().set(&UserId::new(user), state).await;
    }

    /// Render a template without parameters
    pub fn text(&self, id: TemplateId) -> String {
        self.templates.render(id, &TemplateParams::new())
    }

    /// Render a template with parameters
    pub fn text_with(&self, id: TemplateId, params: &[(&str, &str)]) -> String {
        let params: TemplateParams = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.templates.render(id, &params)
    }
}
