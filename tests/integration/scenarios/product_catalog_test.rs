//! Product catalog navigation tests

use StoreBuddy::state::ConversationState;
use StoreBuddy::templates::TemplateId;
use crate::helpers::TestContext;

const USER: &str = "5511900001111";

async fn open_products(ctx: &TestContext) {
    ctx.send(USER, "oi").await;
    let replies = ctx.exchange(USER, "2").await;
    assert_eq!(replies, vec![ctx.text(TemplateId::ProductMenu)]);
    assert_eq!(ctx.state_of(USER).await, Some(ConversationState::AwaitingProductType));
}

#[tokio::test]
async fn test_product_submenus() {
    let cases = [
        ("1", TemplateId::AskCaseModel, ConversationState::AwaitingCapinhaModel),
        ("2", TemplateId::HeadphoneMenu, ConversationState::AwaitingHeadphoneType),
        ("3", TemplateId::CableMenu, ConversationState::AwaitingCableType),
        ("4", TemplateId::ChargerMenu, ConversationState::AwaitingChargerType),
    ];

    for (digit, template, state) in cases {
        let ctx = TestContext::new();
        open_products(&ctx).await;

        let replies = ctx.exchange(USER, digit).await;
        assert_eq!(replies, vec![ctx.text(template)]);
        assert_eq!(ctx.state_of(USER).await, Some(state));
    }
}

#[tokio::test]
async fn test_informational_products() {
    for (digit, template) in [("5", TemplateId::ScreenProtectors), ("6", TemplateId::OtherAccessories)] {
        let ctx = TestContext::new();
        open_products(&ctx).await;

        let replies = ctx.exchange(USER, digit).await;
        assert_eq!(replies, vec![ctx.text(template), ctx.text(TemplateId::ReturnToMenuPrompt)]);
        assert_eq!(ctx.state_of(USER).await, Some(ConversationState::AwaitingYesNo));
    }
}

#[tokio::test]
async fn test_charger_variant_is_named() {
    let ctx = TestContext::new();
    open_products(&ctx).await;
    ctx.send(USER, "4").await;

    let replies = ctx.exchange(USER, "4").await;

    assert_eq!(
        replies,
        vec![
            ctx.text_with(TemplateId::VariantChosen, &[("variant", "Power bank")]),
            ctx.text(TemplateId::ReturnToMenuPrompt),
        ]
    );
    assert_eq!(ctx.state_of(USER).await, Some(ConversationState::AwaitingYesNo));
}

#[tokio::test]
async fn test_case_model_capture() {
    let ctx = TestContext::new();
    open_products(&ctx).await;
    ctx.send(USER, "1").await;

    let replies = ctx.exchange(USER, "   ").await;
    assert_eq!(replies, vec![ctx.text(TemplateId::AskCaseModel)]);
    assert_eq!(ctx.state_of(USER).await, Some(ConversationState::AwaitingCapinhaModel));

    let replies = ctx.exchange(USER, "Galaxy S23").await;
    assert_eq!(
        replies,
        vec![
            ctx.text_with(TemplateId::CaseModelReceived, &[("model", "Galaxy S23")]),
            ctx.text(TemplateId::ReturnToMenuPrompt),
        ]
    );
}

#[tokio::test]
async fn test_invalid_option_restates_menu_range() {
    let ctx = TestContext::new();
    open_products(&ctx).await;
    ctx.send(USER, "3").await;

    for text in ["4", "cabo", "", "1 2"] {
        let replies = ctx.exchange(USER, text).await;
        assert_eq!(
            replies,
            vec![
                ctx.text(TemplateId::InvalidOption),
                ctx.text_with(TemplateId::MenuRange, &[("first", "1"), ("last", "3")]),
            ],
            "input {:?}",
            text
        );
        assert_eq!(ctx.state_of(USER).await, Some(ConversationState::AwaitingCableType));
    }
}
