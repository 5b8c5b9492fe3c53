//! @acp:module "Trigger Rules"
//! @acp:summary "Ordered predicate table mapping answers to conditional groups"
//! @acp:domain engine
//! @acp:layer logic

use crate::catalog::GroupId;
use crate::questionnaire::{
    AnswerSet, ExperienceLevel, NetWorth, PaymentPreference, PrimaryGoal, SpecialCircumstance,
};

/// A predicate over the Answer Set paired with the group it activates
#[derive(Clone, Copy)]
pub struct TriggerRule {
    pub group: GroupId,
    pub description: &'static str,
    predicate: fn(&AnswerSet) -> bool,
}

impl TriggerRule {
    pub fn matches(&self, answers: &AnswerSet) -> bool {
        (self.predicate)(answers)
    }
}

impl std::fmt::Debug for TriggerRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriggerRule")
            .field("group", &self.group)
            .field("description", &self.description)
            .finish()
    }
}

/// Rules in evaluation order. The order fixes where each group lands in
/// the output; every rule sees the same answers.
pub static RULES: [TriggerRule; 10] = [
    TriggerRule {
        group: GroupId::ServiceModel,
        description: "net worth under $100k",
        predicate: |a| a.net_worth == Some(NetWorth::Under100k),
    },
    TriggerRule {
        group: GroupId::AdvancedServices,
        description: "net worth $2M or more",
        predicate: |a| a.net_worth.is_some_and(NetWorth::is_high),
    },
    TriggerRule {
        group: GroupId::HolisticPlanning,
        description: "goal is debt management",
        predicate: |a| a.primary_goal == Some(PrimaryGoal::DebtManagement),
    },
    TriggerRule {
        group: GroupId::TaxCredentials,
        description: "goal is tax optimization",
        predicate: |a| a.primary_goal == Some(PrimaryGoal::TaxOptimization),
    },
    TriggerRule {
        group: GroupId::SpecializedExperience,
        description: "goal is a major life event",
        predicate: |a| a.primary_goal == Some(PrimaryGoal::MajorLifeEvent),
    },
    TriggerRule {
        group: GroupId::FeeEducation,
        description: "unsure how to pay for advice",
        predicate: |a| a.payment_preference == Some(PaymentPreference::NotSure),
    },
    TriggerRule {
        group: GroupId::ProductComplexity,
        description: "beginner investor",
        predicate: |a| a.experience_level == Some(ExperienceLevel::Beginner),
    },
    TriggerRule {
        group: GroupId::BusinessOwner,
        description: "owns a business",
        predicate: |a| a.has_circumstance(SpecialCircumstance::BusinessOwner),
    },
    TriggerRule {
        group: GroupId::EquityCompensation,
        description: "holds stock options or RSUs",
        predicate: |a| a.has_circumstance(SpecialCircumstance::StockOptions),
    },
    // Either circumstance triggers the group, once.
    TriggerRule {
        group: GroupId::MajorTransaction,
        description: "divorce or inheritance",
        predicate: |a| {
            a.has_circumstance(SpecialCircumstance::Divorce)
                || a.has_circumstance(SpecialCircumstance::Inheritance)
        },
    },
];

/// Groups whose rule matches, in rule order
pub fn triggered_groups(answers: &AnswerSet) -> Vec<GroupId> {
    RULES
        .iter()
        .filter(|rule| rule.matches(answers))
        .map(|rule| rule.group)
        .collect()
}
