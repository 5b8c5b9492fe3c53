//! @acp:module "Answer Types"
//! @acp:summary "Closed answer vocabularies and the Answer Set consumed by the engine"
//! @acp:domain questionnaire
//! @acp:layer types

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A closed set of answer identifiers for one questionnaire field
pub trait Choice: Copy + Eq + Sized + 'static {
    /// Every identifier, in questionnaire display order
    const ALL: &'static [Self];

    /// Stable wire identifier (e.g. `under_100k`)
    fn id(self) -> &'static str;

    /// Human-readable option label
    fn label(self) -> &'static str;
}

/// Resolve an identifier against a closed set.
///
/// Empty input means "unanswered". Matching is exact, so padded or
/// differently-cased identifiers are unknown. Unknown identifiers are not an
/// error: they simply match no trigger rule.
pub fn parse_choice<T: Choice>(raw: &str) -> Option<T> {
    if raw.is_empty() {
        return None;
    }
    let found = T::ALL.iter().copied().find(|c| c.id() == raw);
    if found.is_none() {
        tracing::warn!("Ignoring unrecognized answer '{}'", raw);
    }
    found
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NetWorth {
    Under100k,
    From100kTo500k,
    From500kTo2m,
    From2mTo5m,
    Over5m,
}

impl NetWorth {
    /// The two highest brackets
    pub fn is_high(self) -> bool {
        matches!(self, NetWorth::From2mTo5m | NetWorth::Over5m)
    }
}

impl Choice for NetWorth {
    const ALL: &'static [Self] = &[
        NetWorth::Under100k,
        NetWorth::From100kTo500k,
        NetWorth::From500kTo2m,
        NetWorth::From2mTo5m,
        NetWorth::Over5m,
    ];

    fn id(self) -> &'static str {
        match self {
            NetWorth::Under100k => "under_100k",
            NetWorth::From100kTo500k => "100k_500k",
            NetWorth::From500kTo2m => "500k_2m",
            NetWorth::From2mTo5m => "2m_5m",
            NetWorth::Over5m => "over_5m",
        }
    }

    fn label(self) -> &'static str {
        match self {
            NetWorth::Under100k => "Under $100,000",
            NetWorth::From100kTo500k => "$100,000 - $500,000",
            NetWorth::From500kTo2m => "$500,000 - $2 million",
            NetWorth::From2mTo5m => "$2 million - $5 million",
            NetWorth::Over5m => "Over $5 million",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimaryGoal {
    Retirement,
    WealthPreservation,
    DebtManagement,
    TaxOptimization,
    MajorLifeEvent,
}

impl Choice for PrimaryGoal {
    const ALL: &'static [Self] = &[
        PrimaryGoal::Retirement,
        PrimaryGoal::WealthPreservation,
        PrimaryGoal::DebtManagement,
        PrimaryGoal::TaxOptimization,
        PrimaryGoal::MajorLifeEvent,
    ];

    fn id(self) -> &'static str {
        match self {
            PrimaryGoal::Retirement => "retirement",
            PrimaryGoal::WealthPreservation => "wealth_preservation",
            PrimaryGoal::DebtManagement => "debt_management",
            PrimaryGoal::TaxOptimization => "tax_optimization",
            PrimaryGoal::MajorLifeEvent => "major_life_event",
        }
    }

    fn label(self) -> &'static str {
        match self {
            PrimaryGoal::Retirement => "Retirement planning (building wealth for retirement)",
            PrimaryGoal::WealthPreservation => {
                "Wealth preservation (already wealthy, protecting assets)"
            }
            PrimaryGoal::DebtManagement => "Debt management & financial foundation",
            PrimaryGoal::TaxOptimization => {
                "Tax optimization & complex planning (business owner, stock options, etc.)"
            }
            PrimaryGoal::MajorLifeEvent => {
                "Major life event (inheritance, divorce, selling business)"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PaymentPreference {
    FeeOnly,
    CommissionBased,
    NotSure,
}

impl Choice for PaymentPreference {
    const ALL: &'static [Self] = &[
        PaymentPreference::FeeOnly,
        PaymentPreference::CommissionBased,
        PaymentPreference::NotSure,
    ];

    fn id(self) -> &'static str {
        match self {
            PaymentPreference::FeeOnly => "fee_only",
            PaymentPreference::CommissionBased => "commission_based",
            PaymentPreference::NotSure => "not_sure",
        }
    }

    fn label(self) -> &'static str {
        match self {
            PaymentPreference::FeeOnly => "I prefer fee-only (I pay directly, no commissions)",
            PaymentPreference::CommissionBased => {
                "I'm open to commission-based (advisor earns from products sold)"
            }
            PaymentPreference::NotSure => "I'm not sure what the difference is",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl Choice for ExperienceLevel {
    const ALL: &'static [Self] = &[
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Advanced,
    ];

    fn id(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Advanced => "advanced",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner (little to no investing experience)",
            ExperienceLevel::Intermediate => "Intermediate (have investments, understand basics)",
            ExperienceLevel::Advanced => "Advanced (confident in markets, strategies, and products)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpecialCircumstance {
    BusinessOwner,
    StockOptions,
    Divorce,
    Inheritance,
    Pension,
}

impl Choice for SpecialCircumstance {
    const ALL: &'static [Self] = &[
        SpecialCircumstance::BusinessOwner,
        SpecialCircumstance::StockOptions,
        SpecialCircumstance::Divorce,
        SpecialCircumstance::Inheritance,
        SpecialCircumstance::Pension,
    ];

    fn id(self) -> &'static str {
        match self {
            SpecialCircumstance::BusinessOwner => "business_owner",
            SpecialCircumstance::StockOptions => "stock_options",
            SpecialCircumstance::Divorce => "divorce",
            SpecialCircumstance::Inheritance => "inheritance",
            SpecialCircumstance::Pension => "pension",
        }
    }

    fn label(self) -> &'static str {
        match self {
            SpecialCircumstance::BusinessOwner => "I own a business",
            SpecialCircumstance::StockOptions => "I have stock options or RSUs",
            SpecialCircumstance::Divorce => "I'm going through/have gone through a divorce",
            SpecialCircumstance::Inheritance => "I'm receiving/received an inheritance",
            SpecialCircumstance::Pension => "I have a pension or annuity",
        }
    }
}

/// Answers exactly as the questionnaire and storage layers see them:
/// plain identifiers, empty string for "unanswered".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawAnswers {
    pub net_worth: String,
    pub primary_goal: String,
    pub payment_preference: String,
    pub experience_level: String,
    pub special_circumstances: Vec<String>,
}

impl RawAnswers {
    /// Overlay every non-empty field of `other` onto `self`
    pub fn merge(&mut self, other: RawAnswers) {
        if !other.net_worth.is_empty() {
            self.net_worth = other.net_worth;
        }
        if !other.primary_goal.is_empty() {
            self.primary_goal = other.primary_goal;
        }
        if !other.payment_preference.is_empty() {
            self.payment_preference = other.payment_preference;
        }
        if !other.experience_level.is_empty() {
            self.experience_level = other.experience_level;
        }
        if !other.special_circumstances.is_empty() {
            self.special_circumstances = other.special_circumstances;
        }
    }
}

/// The engine's sole input.
///
/// Single-choice fields are `None` when unanswered; circumstances are a set,
/// so duplicates collapse and input order is irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawAnswers", into = "RawAnswers")]
pub struct AnswerSet {
    pub net_worth: Option<NetWorth>,
    pub primary_goal: Option<PrimaryGoal>,
    pub payment_preference: Option<PaymentPreference>,
    pub experience_level: Option<ExperienceLevel>,
    pub special_circumstances: BTreeSet<SpecialCircumstance>,
}

impl AnswerSet {
    pub fn has_circumstance(&self, circumstance: SpecialCircumstance) -> bool {
        self.special_circumstances.contains(&circumstance)
    }

    /// True when no field has been answered
    pub fn is_empty(&self) -> bool {
        self.net_worth.is_none()
            && self.primary_goal.is_none()
            && self.payment_preference.is_none()
            && self.experience_level.is_none()
            && self.special_circumstances.is_empty()
    }
}

impl From<RawAnswers> for AnswerSet {
    fn from(raw: RawAnswers) -> Self {
        AnswerSet {
            net_worth: parse_choice(&raw.net_worth),
            primary_goal: parse_choice(&raw.primary_goal),
            payment_preference: parse_choice(&raw.payment_preference),
            experience_level: parse_choice(&raw.experience_level),
            special_circumstances: raw
                .special_circumstances
                .iter()
                .filter_map(|s| parse_choice(s))
                .collect(),
        }
    }
}

impl From<AnswerSet> for RawAnswers {
    fn from(answers: AnswerSet) -> Self {
        fn id_or_empty<T: Choice>(choice: Option<T>) -> String {
            choice.map(|c| c.id().to_string()).unwrap_or_default()
        }

        RawAnswers {
            net_worth: id_or_empty(answers.net_worth),
            primary_goal: id_or_empty(answers.primary_goal),
            payment_preference: id_or_empty(answers.payment_preference),
            experience_level: id_or_empty(answers.experience_level),
            special_circumstances: answers
                .special_circumstances
                .iter()
                .map(|c| c.id().to_string())
                .collect(),
        }
    }
}
