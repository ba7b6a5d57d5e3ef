//! Reply template identifiers

use std::fmt;

/// Every reply the bot can send
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    Welcome,
    MainMenu,
    ReturnToMenuPrompt,
    InvalidOption,
    MenuRange,
    ReturnsPolicy,
    BusinessHours,
    HumanHandoff,
    VipWelcome,
    UsedDeviceDisclaimer,
    AskDeviceModel,
    ModelReceived,
    PricingFollowUp,
    ProductMenu,
    AskCaseModel,
    CaseModelReceived,
    HeadphoneMenu,
    CableMenu,
    ChargerMenu,
    ScreenProtectors,
    OtherAccessories,
    VariantChosen,
    FeedbackMenu,
    AskComplaint,
    ComplaintReceived,
    AskSuggestion,
    SuggestionReceived,
    AnswerYesOrNo,
    AskRating,
    AskRatingAgain,
    RatingLow,
    RatingNeutral,
    RatingHigh,
    Farewell,
    IdleHint,
    GenericApology,
}

impl TemplateId {
    pub const ALL: [TemplateId; 36] = [
        TemplateId::Welcome,
        TemplateId::MainMenu,
        TemplateId::ReturnToMenuPrompt,
        TemplateId::InvalidOption,
        TemplateId::MenuRange,
        TemplateId::ReturnsPolicy,
        TemplateId::BusinessHours,
        TemplateId::HumanHandoff,
        TemplateId::VipWelcome,
        TemplateId::UsedDeviceDisclaimer,
        TemplateId::AskDeviceModel,
        TemplateId::ModelReceived,
        TemplateId::PricingFollowUp,
        TemplateId::ProductMenu,
        TemplateId::AskCaseModel,
        TemplateId::CaseModelReceived,
        TemplateId::HeadphoneMenu,
        TemplateId::CableMenu,
        TemplateId::ChargerMenu,
        TemplateId::ScreenProtectors,
        TemplateId::OtherAccessories,
        TemplateId::VariantChosen,
        TemplateId::FeedbackMenu,
        TemplateId::AskComplaint,
        TemplateId::ComplaintReceived,
        TemplateId::AskSuggestion,
        TemplateId::SuggestionReceived,
        TemplateId::AnswerYesOrNo,
        TemplateId::AskRating,
        TemplateId::AskRatingAgain,
        TemplateId::RatingLow,
        TemplateId::RatingNeutral,
        TemplateId::RatingHigh,
        TemplateId::Farewell,
        TemplateId::IdleHint,
        TemplateId::GenericApology,
    ];

    /// Dotted lookup key in the template file
    pub fn key(&self) -> &'static str {
        match self {
            TemplateId::Welcome => "greeting.welcome",
            TemplateId::MainMenu => "menu.main",
            TemplateId::ReturnToMenuPrompt => "menu.return_prompt",
            TemplateId::InvalidOption => "menu.invalid_option",
            TemplateId::MenuRange => "menu.range",
            TemplateId::ReturnsPolicy => "info.returns",
            TemplateId::BusinessHours => "info.business_hours",
            TemplateId::HumanHandoff => "info.handoff",
            TemplateId::VipWelcome => "vip.welcome",
            TemplateId::UsedDeviceDisclaimer => "pricing.disclaimer",
            TemplateId::AskDeviceModel => "pricing.ask_model",
            TemplateId::ModelReceived => "pricing.model_received",
            TemplateId::PricingFollowUp => "pricing.follow_up",
            TemplateId::ProductMenu => "products.menu",
            TemplateId::AskCaseModel => "products.ask_case_model",
            TemplateId::CaseModelReceived => "products.case_model_received",
            TemplateId::HeadphoneMenu => "products.headphone_menu",
            TemplateId::CableMenu => "products.cable_menu",
            TemplateId::ChargerMenu => "products.charger_menu",
            TemplateId::ScreenProtectors => "products.screen_protectors",
            TemplateId::OtherAccessories => "products.other_accessories",
            TemplateId::VariantChosen => "products.variant_chosen",
            TemplateId::FeedbackMenu => "feedback.menu",
            TemplateId::AskComplaint => "feedback.ask_complaint",
            TemplateId::ComplaintReceived => "feedback.complaint_received",
            TemplateId::AskSuggestion => "feedback.ask_suggestion",
            TemplateId::SuggestionReceived => "feedback.suggestion_received",
            TemplateId::AnswerYesOrNo => "yes_no.reprompt",
            TemplateId::AskRating => "rating.ask",
            TemplateId::AskRatingAgain => "rating.reprompt",
            TemplateId::RatingLow => "rating.low",
            TemplateId::RatingNeutral => "rating.neutral",
            TemplateId::RatingHigh => "rating.high",
            TemplateId::Farewell => "rating.farewell",
            TemplateId::IdleHint => "idle.hint",
            TemplateId::GenericApology => "errors.generic_apology",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
