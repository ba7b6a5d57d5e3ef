//! Complaint and suggestion capture tests

use StoreBuddy::state::ConversationState;
use StoreBuddy::templates::TemplateId;
use crate::helpers::TestContext;

const USER: &str = "5521955554444";

#[tokio::test]
async fn test_complaint_flow() {
    let ctx = TestContext::new();
    ctx.send(USER, "oi").await;

    let replies = ctx.exchange(USER, "5").await;
    assert_eq!(replies, vec![ctx.text(TemplateId::FeedbackMenu)]);

    let replies = ctx.exchange(USER, "1").await;
    assert_eq!(replies, vec![ctx.text(TemplateId::AskComplaint)]);
    assert_eq!(ctx.state_of(USER).await, Some(ConversationState::AwaitingComplaintText));

    let replies = ctx.exchange(USER, "A película descolou em dois dias").await;
    assert_eq!(replies, vec![ctx.text(TemplateId::ComplaintReceived), ctx.text(TemplateId::ReturnToMenuPrompt)]);
    assert_eq!(ctx.state_of(USER).await, Some(ConversationState::AwaitingYesNo));
}

#[tokio::test]
async fn test_suggestion_captures_digits_literally() {
    let ctx = TestContext::new();
    ctx.set_state(USER, ConversationState::AwaitingFeedbackType).await;
    ctx.send(USER, "2").await;
    assert_eq!(ctx.state_of(USER).await, Some(ConversationState::AwaitingSuggestionText));

    // A digit typed mid-capture is taken as the suggestion itself
    let replies = ctx.exchange(USER, "1").await;
    assert_eq!(replies, vec![ctx.text(TemplateId::SuggestionReceived), ctx.text(TemplateId::ReturnToMenuPrompt)]);
}

#[tokio::test]
async fn test_invalid_feedback_type() {
    let ctx = TestContext::new();
    ctx.set_state(USER, ConversationState::AwaitingFeedbackType).await;

    let replies = ctx.exchange(USER, "3").await;

    assert_eq!(
        replies,
        vec![
            ctx.text(TemplateId::InvalidOption),
            ctx.text_with(TemplateId::MenuRange, &[("first", "1"), ("last", "2")]),
        ]
    );
    assert_eq!(ctx.state_of(USER).await, Some(ConversationState::AwaitingFeedbackType));
}

#[tokio::test]
async fn test_yes_no_reprompt() {
    let ctx = TestContext::new();
    ctx.set_state(USER, ConversationState::AwaitingYesNo).await;

    let replies = ctx.exchange(USER, "talvez").await;

    assert_eq!(replies, vec![ctx.text(TemplateId::AnswerYesOrNo)]);
    assert_eq!(ctx.state_of(USER).await, Some(ConversationState::AwaitingYesNo));
}
