//! Numbered menu definitions
//!
//! Each menu state owns a fixed list of digit options. The classifier uses
//! the lists to accept input, the state machine uses the branches to decide
//! what happens next.

use crate::templates::TemplateId;
use super::session::ConversationState;

/// What choosing a menu option does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// Send informational replies, then offer to return to the main menu
    Inform(&'static [TemplateId]),
    /// Send replies that lead into another state
    Open(&'static [TemplateId], ConversationState),
    /// Acknowledge a product variant by name, then offer to return to the menu
    Variant(&'static str),
}

/// A single numbered option
#[derive(Debug, Clone, Copy)]
pub struct MenuOption {
    pub digit: u8,
    pub branch: Branch,
}

/// A numbered menu bound to the state that displays it
#[derive(Debug)]
pub struct Menu {
    pub state: ConversationState,
    pub options: &'static [MenuOption],
}

impl Menu {
    /// Option for a digit, if the menu lists it
    pub fn option(&self, digit: u8) -> Option<&MenuOption> {
        self.options.iter().find(|o| o.digit == digit)
    }

    /// Digit selected by raw text; the trimmed text must equal a listed digit
    pub fn parse(&self, text: &str) -> Option<u8> {
        let text = text.trim();
        self.options
            .iter()
            .find(|o| o.digit.to_string() == text)
            .map(|o| o.digit)
    }

    /// Lowest and highest listed digits
    pub fn range(&self) -> (u8, u8) {
        let first = self.options.iter().map(|o| o.digit).min().unwrap_or(0);
        let last = self.options.iter().map(|o| o.digit).max().unwrap_or(0);
        (first, last)
    }
}

pub static MAIN_MENU: Menu = Menu {
    state: ConversationState::AwaitingMenuOption,
    options: &[
        MenuOption {
            digit: 1,
            branch: Branch::Inform(&[TemplateId::ReturnsPolicy]),
        },
        MenuOption {
            digit: 2,
            branch: Branch::Open(&[TemplateId::ProductMenu], ConversationState::AwaitingProductType),
        },
        MenuOption {
            digit: 3,
            branch: Branch::Open(
                &[TemplateId::UsedDeviceDisclaimer, TemplateId::AskDeviceModel],
                ConversationState::AwaitingModelInfo,
            ),
        },
        MenuOption {
            digit: 4,
            branch: Branch::Inform(&[TemplateId::BusinessHours]),
        },
        MenuOption {
            digit: 5,
            branch: Branch::Open(&[TemplateId::FeedbackMenu], ConversationState::AwaitingFeedbackType),
        },
        MenuOption {
            digit: 6,
            branch: Branch::Inform(&[TemplateId::HumanHandoff]),
        },
        MenuOption {
            digit: 7,
            branch: Branch::Inform(&[TemplateId::VipWelcome]),
        },
    ],
};

pub static PRODUCT_MENU: Menu = Menu {
    state: ConversationState::AwaitingProductType,
    options: &[
        MenuOption {
            digit: 1,
            branch: Branch::Open(&[TemplateId::AskCaseModel], ConversationState::AwaitingCapinhaModel),
        },
        MenuOption {
            digit: 2,
            branch: Branch::Open(&[TemplateId::HeadphoneMenu], ConversationState::AwaitingHeadphoneType),
        },
        MenuOption {
            digit: 3,
            branch: Branch::Open(&[TemplateId::CableMenu], ConversationState::AwaitingCableType),
        },
        MenuOption {
            digit: 4,
            branch: Branch::Open(&[TemplateId::ChargerMenu], ConversationState::AwaitingChargerType),
        },
        MenuOption {
            digit: 5,
            branch: Branch::Inform(&[TemplateId::ScreenProtectors]),
        },
        MenuOption {
            digit: 6,
            branch: Branch::Inform(&[TemplateId::OtherAccessories]),
        },
    ],
};

pub static HEADPHONE_MENU: Menu = Menu {
    state: ConversationState::AwaitingHeadphoneType,
    options: &[
        MenuOption { digit: 1, branch: Branch::Variant("Fone Bluetooth") },
        MenuOption { digit: 2, branch: Branch::Variant("Fone com fio") },
        MenuOption { digit: 3, branch: Branch::Variant("Headset gamer") },
    ],
};

pub static CABLE_MENU: Menu = Menu {
    state: ConversationState::AwaitingCableType,
    options: &[
        MenuOption { digit: 1, branch: Branch::Variant("Cabo USB-C") },
        MenuOption { digit: 2, branch: Branch::Variant("Cabo Lightning") },
        MenuOption { digit: 3, branch: Branch::Variant("Cabo Micro USB") },
    ],
};

pub static CHARGER_MENU: Menu = Menu {
    state: ConversationState::AwaitingChargerType,
    options: &[
        MenuOption { digit: 1, branch: Branch::Variant("Carregador Turbo 20W") },
        MenuOption { digit: 2, branch: Branch::Variant("Carregador veicular") },
        MenuOption { digit: 3, branch: Branch::Variant("Carregador sem fio") },
        MenuOption { digit: 4, branch: Branch::Variant("Power bank") },
    ],
};

pub static FEEDBACK_MENU: Menu = Menu {
    state: ConversationState::AwaitingFeedbackType,
    options: &[
        MenuOption {
            digit: 1,
            branch: Branch::Open(&[TemplateId::AskComplaint], ConversationState::AwaitingComplaintText),
        },
        MenuOption {
            digit: 2,
            branch: Branch::Open(&[TemplateId::AskSuggestion], ConversationState::AwaitingSuggestionText),
        },
    ],
};

/// Menu displayed by a state, if the state expects a digit
pub fn menu_for(state: ConversationState) -> Option<&'static Menu> {
    match state {
        ConversationState::AwaitingMenuOption => Some(&MAIN_MENU),
        ConversationState::AwaitingProductType => Some(&PRODUCT_MENU),
        ConversationState::AwaitingHeadphoneType => Some(&HEADPHONE_MENU),
        ConversationState::AwaitingCableType => Some(&CABLE_MENU),
        ConversationState::AwaitingChargerType => Some(&CHARGER_MENU),
        ConversationState::AwaitingFeedbackType => Some(&FEEDBACK_MENU),
        _ => None,
    }
}
