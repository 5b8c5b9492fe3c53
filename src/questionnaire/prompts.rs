//! @acp:module "Questionnaire Prompts"
//! @acp:summary "The ordered five-step questionnaire presented before generation"
//! @acp:domain questionnaire
//! @acp:layer data

use super::types::*;

/// Answer Set field a prompt fills in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    NetWorth,
    PrimaryGoal,
    PaymentPreference,
    ExperienceLevel,
    SpecialCircumstances,
}

impl Field {
    pub fn id(self) -> &'static str {
        match self {
            Field::NetWorth => "net_worth",
            Field::PrimaryGoal => "primary_goal",
            Field::PaymentPreference => "payment_preference",
            Field::ExperienceLevel => "experience_level",
            Field::SpecialCircumstances => "special_circumstances",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Single,
    Multi,
}

/// One selectable option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptOption {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Prompt {
    pub field: Field,
    pub question: &'static str,
    pub kind: PromptKind,
}

pub static PROMPTS: [Prompt; 5] = [
    Prompt {
        field: Field::NetWorth,
        question: "What is your approximate investable net worth?",
        kind: PromptKind::Single,
    },
    Prompt {
        field: Field::PrimaryGoal,
        question: "What is your primary financial goal?",
        kind: PromptKind::Single,
    },
    Prompt {
        field: Field::PaymentPreference,
        question: "How do you prefer to pay for financial advice?",
        kind: PromptKind::Single,
    },
    Prompt {
        field: Field::ExperienceLevel,
        question: "What is your investment experience level?",
        kind: PromptKind::Single,
    },
    Prompt {
        field: Field::SpecialCircumstances,
        question: "Do any of these apply to you?",
        kind: PromptKind::Multi,
    },
];

impl Prompt {
    pub fn options(&self) -> Vec<PromptOption> {
        match self.field {
            Field::NetWorth => options_of::<NetWorth>(),
            Field::PrimaryGoal => options_of::<PrimaryGoal>(),
            Field::PaymentPreference => options_of::<PaymentPreference>(),
            Field::ExperienceLevel => options_of::<ExperienceLevel>(),
            Field::SpecialCircumstances => options_of::<SpecialCircumstance>(),
        }
    }
}

fn options_of<T: Choice>() -> Vec<PromptOption> {
    T::ALL
        .iter()
        .map(|c| PromptOption {
            id: c.id(),
            label: c.label(),
        })
        .collect()
}

/// Record the selected option ids for a field.
///
/// Single-choice fields keep the first id; an empty selection leaves the
/// field unanswered.
pub fn record_answer(answers: &mut RawAnswers, field: Field, selected: &[&str]) {
    let first = selected.first().map(|s| s.to_string()).unwrap_or_default();
    match field {
        Field::NetWorth => answers.net_worth = first,
        Field::PrimaryGoal => answers.primary_goal = first,
        Field::PaymentPreference => answers.payment_preference = first,
        Field::ExperienceLevel => answers.experience_level = first,
        Field::SpecialCircumstances => {
            answers.special_circumstances = selected.iter().map(|s| s.to_string()).collect()
        }
    }
}
