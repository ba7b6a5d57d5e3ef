//! Message handlers module
//!
//! Runs one inbound message through the conversation: look up the state,
//! classify the text, apply the transition and send the replies in order.

use std::sync::Arc;
use teloxide::types::Message;
use tracing::{debug, warn};
use crate::config::ConversationConfig;
use crate::services::{Gateway, InboundMessage, ReplyPacing, TelegramGateway};
use crate::state::{
    transition, Classifier, ClassifiedInput, ConversationState, NextState, Reply, StateStorage,
    TransitionContext, UserId,
};
use crate::templates::{TemplateId, TemplateParams, Templates};
use crate::utils::errors::{ErrorKind, StoreBuddyError, Result};
use crate::utils::helpers::first_name;
use crate::utils::logging;

/// What happened to an inbound message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandleOutcome {
    /// Group message outside a conversation, or one without a human sender
    Ignored,
    /// The transition ran; `dropped` replies were not sent after a send failure
    Handled {
        from: ConversationState,
        to: ConversationState,
        sent: usize,
        dropped: usize,
    },
    /// Handling failed before the transition completed
    Failed { kind: ErrorKind },
}

/// Scripted support conversation bound to a gateway
pub struct ConversationEngine {
    store: StateStorage,
    classifier: Classifier,
    templates: Arc<Templates>,
    gateway: Arc<dyn Gateway>,
    pacing: Arc<dyn ReplyPacing>,
    fallback_name: String,
    vip_keyword: String,
}

impl ConversationEngine {
    pub fn new(
        config: &ConversationConfig,
        store: StateStorage,
        templates: Arc<Templates>,
        gateway: Arc<dyn Gateway>,
        pacing: Arc<dyn ReplyPacing>,
    ) -> Result<Self> {
        Ok(Self {
            store,
            classifier: Classifier::new(config)?,
            templates,
            gateway,
            pacing,
            fallback_name: config.fallback_name.clone(),
            vip_keyword: config.vip_keyword.clone(),
        })
    }

    pub fn store(&self) -> &StateStorage {
        &self.store
    }

    /// Handle one inbound message; failures are contained here
    pub async fn handle_inbound(&self, event: InboundMessage) -> HandleOutcome {
        match self.process(&event).await {
            Ok(outcome) => outcome,
            Err(error) => {
                self.handle_failure(&event, &error).await;
                HandleOutcome::Failed { kind: error.kind() }
            }
        }
    }

    async fn process(&self, event: &InboundMessage) -> Result<HandleOutcome> {
        if event.from.is_empty() {
            return Err(StoreBuddyError::InvalidInput("Inbound message without sender".to_string()));
        }

        logging::log_inbound(event.from.as_str(), &event.body, event.is_group);

        let current = self.store.get(&event.from).await.unwrap_or(ConversationState::Idle);
        if event.is_group && current == ConversationState::Idle {
            debug!(user_id = %event.from, "Ignoring group message outside a conversation");
            return Ok(HandleOutcome::Ignored);
        }

        let input = self.classifier.classify(current, &event.body);
        let customer_name = match input {
            ClassifiedInput::Greeting => self.customer_name(event).await,
            _ => self.fallback_name.clone(),
        };
        let context = TransitionContext {
            customer_name,
            vip_keyword: self.vip_keyword.clone(),
        };

        let result = transition(current, &input, &context);

        // The state is committed before sending; a failed send does not undo it
        match result.next {
            NextState::Stay => {}
            NextState::Enter(state) => self.store.set(&event.from, state).await,
            NextState::End => self.store.clear(&event.from).await,
        }
        let next = result.resolve(current).unwrap_or(ConversationState::Idle);

        logging::log_transition(event.from.as_str(), current.as_str(), next.as_str(), result.replies.len());

        let sent = self.deliver(&event.from, &result.replies).await;

        Ok(HandleOutcome::Handled {
            from: current,
            to: next,
            sent,
            dropped: result.replies.len() - sent,
        })
    }

    /// Send replies in order, stopping at the first failed send
    async fn deliver(&self, to: &UserId, replies: &[Reply]) -> usize {
        for (index, reply) in replies.iter().enumerate() {
            let text = self.templates.render(reply.template, &reply.params);

            if let Err(e) = self.gateway.show_typing(to).await {
                debug!(user_id = %to, error = %e, "Typing indicator failed");
            }
            self.pacing.pause().await;

            if let Err(e) = self.gateway.send_text(to, &text).await {
                let skipped = replies.len() - index - 1;
                logging::log_send_failure(to.as_str(), reply.template.key(), &e, skipped);
                return index;
            }
        }

        replies.len()
    }

    /// First name of the sender, or the configured fallback
    async fn customer_name(&self, event: &InboundMessage) -> String {
        let display_name = match &event.display_name {
            Some(name) => Some(name.clone()),
            None => match self.gateway.contact_name(&event.from).await {
                Ok(name) => name,
                Err(e) => {
                    warn!(user_id = %event.from, error = %e, "Contact name lookup failed");
                    None
                }
            },
        };

        display_name
            .as_deref()
            .and_then(first_name)
            .map(str::to_string)
            .unwrap_or_else(|| self.fallback_name.clone())
    }

    /// Log the failure and apologise to the sender when possible
    async fn handle_failure(&self, event: &InboundMessage, error: &StoreBuddyError) {
        logging::log_internal_failure(event.from.as_str(), error);

        if event.from.is_empty() {
            return;
        }

        let apology = self.templates.render(TemplateId::GenericApology, &TemplateParams::new());
        if let Err(e) = self.gateway.send_text(&event.from, &apology).await {
            logging::log_send_failure(event.from.as_str(), TemplateId::GenericApology.key(), &e, 0);
        }
    }
}

impl std::fmt::Debug for ConversationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationEngine")
            .field("store", &self.store)
            .field("fallback_name", &self.fallback_name)
            .finish_non_exhaustive()
    }
}

/// Handle an incoming Telegram message
///
/// Failures never escape: they are logged and answered inside the engine.
pub async fn handle_message(msg: Message, engine: Arc<ConversationEngine>) -> HandleOutcome {
    match TelegramGateway::inbound_from(&msg) {
        Some(event) => engine.handle_inbound(event).await,
        None => {
            debug!(chat_id = ?msg.chat.id, "Message without a human sender");
            HandleOutcome::Ignored
        }
    }
}
