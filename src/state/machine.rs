//! Conversation state machine
//!
//! The transition table of the support conversation. `transition` is pure:
//! it maps the current state and the classified input to the next state and
//! the ordered replies to send. Storing the state and sending the replies is
//! up to the caller.

use crate::templates::{TemplateId, TemplateParams};
use super::classifier::ClassifiedInput;
use super::menus::{menu_for, Branch, Menu};
use super::session::ConversationState;

/// A reply to render and send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub template: TemplateId,
    pub params: TemplateParams,
}

impl Reply {
    pub fn new(template: TemplateId) -> Self {
        Self {
            template,
            params: TemplateParams::new(),
        }
    }

    pub fn with_param(mut self, key: &str, value: impl Into<String>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }
}

/// What happens to the stored state after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextState {
    /// Keep the current state, the user has to retry
    Stay,
    /// Move to another state
    Enter(ConversationState),
    /// The conversation is over, forget the session
    End,
}

/// Result of a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: NextState,
    pub replies: Vec<Reply>,
}

impl Transition {
    fn new(next: NextState) -> Self {
        Self {
            next,
            replies: Vec::new(),
        }
    }

    fn stay() -> Self {
        Self::new(NextState::Stay)
    }

    fn enter(state: ConversationState) -> Self {
        Self::new(NextState::Enter(state))
    }

    fn end() -> Self {
        Self::new(NextState::End)
    }

    fn reply(mut self, reply: Reply) -> Self {
        self.replies.push(reply);
        self
    }

    fn say(self, template: TemplateId) -> Self {
        self.reply(Reply::new(template))
    }

    fn say_all(mut self, templates: &[TemplateId]) -> Self {
        self.replies.extend(templates.iter().copied().map(Reply::new));
        self
    }

    /// State after applying this transition to `current`, `None` when ended
    pub fn resolve(&self, current: ConversationState) -> Option<ConversationState> {
        match self.next {
            NextState::Stay => Some(current),
            NextState::Enter(state) => Some(state),
            NextState::End => None,
        }
    }
}

/// Facts about the user that some replies interpolate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionContext {
    /// Name used to greet the user
    pub customer_name: String,
    /// Phrase that unlocks the VIP channel, quoted by the idle hint
    pub vip_keyword: String,
}

/// Compute the next state and replies for a classified input
pub fn transition(
    state: ConversationState,
    input: &ClassifiedInput,
    context: &TransitionContext,
) -> Transition {
    use ConversationState::*;

    match (state, input) {
        // Entry points
        (Idle, ClassifiedInput::Greeting) => Transition::enter(AwaitingMenuOption)
            .reply(Reply::new(TemplateId::Welcome).with_param("name", context.customer_name.as_str()))
            .say(TemplateId::MainMenu),
        (Idle, ClassifiedInput::VipKeyword) => Transition::enter(AwaitingYesNo)
            .say(TemplateId::VipWelcome)
            .say(TemplateId::ReturnToMenuPrompt),

        // Numbered menus
        (_, ClassifiedInput::MenuOption(digit)) => match menu_for(state) {
            Some(menu) => select_option(menu, *digit),
            None => reprompt(state, context),
        },

        // Free-text captures
        (AwaitingModelInfo, ClassifiedInput::FreeText(model)) => Transition::enter(AwaitingYesNo)
            .reply(Reply::new(TemplateId::ModelReceived).with_param("model", model.as_str()))
            .say(TemplateId::PricingFollowUp)
            .say(TemplateId::ReturnToMenuPrompt),
        (AwaitingCapinhaModel, ClassifiedInput::FreeText(model)) => Transition::enter(AwaitingYesNo)
            .reply(Reply::new(TemplateId::CaseModelReceived).with_param("model", model.as_str()))
            .say(TemplateId::ReturnToMenuPrompt),
        (AwaitingComplaintText, ClassifiedInput::FreeText(_)) => Transition::enter(AwaitingYesNo)
            .say(TemplateId::ComplaintReceived)
            .say(TemplateId::ReturnToMenuPrompt),
        (AwaitingSuggestionText, ClassifiedInput::FreeText(_)) => Transition::enter(AwaitingYesNo)
            .say(TemplateId::SuggestionReceived)
            .say(TemplateId::ReturnToMenuPrompt),

        // Return to menu?
        (AwaitingYesNo, ClassifiedInput::Yes) => Transition::enter(AwaitingMenuOption)
            .say(TemplateId::MainMenu),
        (AwaitingYesNo, ClassifiedInput::No) => Transition::enter(AwaitingRating)
            .say(TemplateId::AskRating),

        // Closing
        (AwaitingRating, ClassifiedInput::Rating(rating)) => Transition::end()
            .reply(Reply::new(rating_template(*rating)).with_param("rating", rating.to_string()))
            .say(TemplateId::Farewell),

        _ => reprompt(state, context),
    }
}

/// Apply a menu option's branch
fn select_option(menu: &Menu, digit: u8) -> Transition {
    let Some(option) = menu.option(digit) else {
        return invalid_option(menu);
    };

    match option.branch {
        Branch::Inform(templates) => Transition::enter(ConversationState::AwaitingYesNo)
            .say_all(templates)
            .say(TemplateId::ReturnToMenuPrompt),
        Branch::Open(templates, next) => Transition::enter(next).say_all(templates),
        Branch::Variant(name) => Transition::enter(ConversationState::AwaitingYesNo)
            .reply(Reply::new(TemplateId::VariantChosen).with_param("variant", name))
            .say(TemplateId::ReturnToMenuPrompt),
    }
}

/// Ask again for what the state expects, without moving
fn reprompt(state: ConversationState, context: &TransitionContext) -> Transition {
    if let Some(menu) = menu_for(state) {
        return invalid_option(menu);
    }

    let template = match state {
        ConversationState::Idle => {
            return Transition::stay()
                .reply(Reply::new(TemplateId::IdleHint).with_param("vip_keyword", context.vip_keyword.as_str()));
        }
        ConversationState::AwaitingYesNo => TemplateId::AnswerYesOrNo,
        ConversationState::AwaitingRating => TemplateId::AskRatingAgain,
        ConversationState::AwaitingModelInfo => TemplateId::AskDeviceModel,
        ConversationState::AwaitingCapinhaModel => TemplateId::AskCaseModel,
        ConversationState::AwaitingComplaintText => TemplateId::AskComplaint,
        ConversationState::AwaitingSuggestionText => TemplateId::AskSuggestion,
        // Menu states are handled above
        _ => TemplateId::InvalidOption,
    };

    Transition::stay().say(template)
}

fn invalid_option(menu: &Menu) -> Transition {
    let (first, last) = menu.range();
    Transition::stay()
        .say(TemplateId::InvalidOption)
        .reply(
            Reply::new(TemplateId::MenuRange)
                .with_param("first", first.to_string())
                .with_param("last", last.to_string()),
        )
}

fn rating_template(rating: u8) -> TemplateId {
    match rating {
        0..=2 => TemplateId::RatingLow,
        3 => TemplateId::RatingNeutral,
        _ => TemplateId::RatingHigh,
    }
}
