//! Conversation entry point tests
//!
//! Greetings, the VIP keyword shortcut, the idle hint and group messages.

use StoreBuddy::config::ConversationConfig;
use StoreBuddy::services::InboundMessage;
use StoreBuddy::state::ConversationState;
use StoreBuddy::templates::TemplateId;
use StoreBuddy::HandleOutcome;
use crate::helpers::TestContext;

const USER: &str = "5531912341234";
const GROUP: &str = "120363012345678901";

#[tokio::test]
async fn test_group_greeting_is_ignored() {
    let ctx = TestContext::new();

    for text in ["oi", "Bom dia pessoal", "Acesso VIP com Descontos Exclusivos", "3"] {
        let outcome = ctx.engine.handle_inbound(InboundMessage::group(GROUP, text)).await;
        assert_eq!(outcome, HandleOutcome::Ignored);
    }

    assert_eq!(ctx.gateway.sent_count(), 0);
    assert_eq!(ctx.state_of(GROUP).await, None);
}

#[tokio::test]
async fn test_display_name_from_event() {
    let ctx = TestContext::new();
    let event = InboundMessage::direct(USER, "oi").with_display_name("Carlos Eduardo");

    ctx.engine.handle_inbound(event).await;

    let replies = ctx.gateway.sent_to(USER);
    assert_eq!(replies[0], ctx.text_with(TemplateId::Welcome, &[("name", "Carlos")]));
}

#[tokio::test]
async fn test_vip_keyword_unlocks_vip_channel() {
    let ctx = TestContext::new();

    let replies = ctx.exchange(USER, "Acesso VIP com Descontos Exclusivos").await;

    assert_eq!(replies, vec![ctx.text(TemplateId::VipWelcome), ctx.text(TemplateId::ReturnToMenuPrompt)]);
    assert_eq!(ctx.state_of(USER).await, Some(ConversationState::AwaitingYesNo));
}

#[tokio::test]
async fn test_vip_from_main_menu() {
    let ctx = TestContext::new();
    ctx.send(USER, "oi").await;

    let replies = ctx.exchange(USER, "7").await;

    assert_eq!(replies, vec![ctx.text(TemplateId::VipWelcome), ctx.text(TemplateId::ReturnToMenuPrompt)]);
}

#[tokio::test]
async fn test_unknown_text_in_idle_gets_hint() {
    let ctx = TestContext::new();

    let replies = ctx.exchange(USER, "quanto custa o cabo?").await;

    assert_eq!(
        replies,
        vec![ctx.text_with(TemplateId::IdleHint, &[("vip_keyword", "Acesso VIP com Descontos Exclusivos")])]
    );
    assert_eq!(ctx.state_of(USER).await, None);
}

#[tokio::test]
async fn test_configured_vocabulary() {
    let mut config = ConversationConfig::default();
    config.greeting_words = vec!["hello".to_string()];
    config.fallback_name = "Customer".to_string();
    let ctx = TestContext::with_config(config);

    let replies = ctx.exchange(USER, "oi").await;
    assert_eq!(replies.len(), 1);
    assert_eq!(ctx.state_of(USER).await, None);

    let replies = ctx.exchange(USER, "Hello!").await;
    assert_eq!(replies[0], ctx.text_with(TemplateId::Welcome, &[("name", "Customer")]));
    assert_eq!(ctx.state_of(USER).await, Some(ConversationState::AwaitingMenuOption));
}

#[tokio::test]
async fn test_main_menu_digits_lead_to_documented_states() {
    let expected = [
        ("1", ConversationState::AwaitingYesNo),
        ("2", ConversationState::AwaitingProductType),
        ("3", ConversationState::AwaitingModelInfo),
        ("4", ConversationState::AwaitingYesNo),
        ("5", ConversationState::AwaitingFeedbackType),
        ("6", ConversationState::AwaitingYesNo),
        ("7", ConversationState::AwaitingYesNo),
    ];

    for (digit, state) in expected {
        let ctx = TestContext::new();
        ctx.set_state(USER, ConversationState::AwaitingMenuOption).await;

        let replies = ctx.exchange(USER, digit).await;

        assert_ne!(replies[0], ctx.text(TemplateId::InvalidOption), "digit {}", digit);
        assert_eq!(ctx.state_of(USER).await, Some(state), "digit {}", digit);
    }
}
