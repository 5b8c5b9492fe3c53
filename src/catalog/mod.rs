//! @acp:module "Question Catalog"
//! @acp:summary "Static baseline bank and conditional question groups"
//! @acp:domain catalog
//! @acp:layer data
//!
//! The catalog is process-wide immutable data. Changing it is a content
//! deployment, not an engine operation.

mod baseline;
mod groups;

use serde::Serialize;
use std::collections::HashMap;

use crate::error::{AdvisorError, Result};

/// An immutable catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: &'static str,
    pub category: &'static str,
    pub text: &'static str,
    pub why_matters: &'static str,
    pub red_flags: &'static [&'static str],
    pub green_flags: &'static [&'static str],
}

/// Conditional question groups, keyed separately from Answer Set fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupId {
    ServiceModel,
    AdvancedServices,
    HolisticPlanning,
    TaxCredentials,
    SpecializedExperience,
    FeeEducation,
    ProductComplexity,
    BusinessOwner,
    EquityCompensation,
    MajorTransaction,
}

impl GroupId {
    pub const ALL: [GroupId; 10] = [
        GroupId::ServiceModel,
        GroupId::AdvancedServices,
        GroupId::HolisticPlanning,
        GroupId::TaxCredentials,
        GroupId::SpecializedExperience,
        GroupId::FeeEducation,
        GroupId::ProductComplexity,
        GroupId::BusinessOwner,
        GroupId::EquityCompensation,
        GroupId::MajorTransaction,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GroupId::ServiceModel => "service_model",
            GroupId::AdvancedServices => "advanced_services",
            GroupId::HolisticPlanning => "holistic_planning",
            GroupId::TaxCredentials => "tax_credentials",
            GroupId::SpecializedExperience => "specialized_experience",
            GroupId::FeeEducation => "fee_education",
            GroupId::ProductComplexity => "product_complexity",
            GroupId::BusinessOwner => "business_owner",
            GroupId::EquityCompensation => "equity_compensation",
            GroupId::MajorTransaction => "major_transaction",
        }
    }

    /// Questions of this group, in their fixed internal order
    pub fn questions(self) -> &'static [Question] {
        match self {
            GroupId::ServiceModel => groups::SERVICE_MODEL,
            GroupId::AdvancedServices => groups::ADVANCED_SERVICES,
            GroupId::HolisticPlanning => groups::HOLISTIC_PLANNING,
            GroupId::TaxCredentials => groups::TAX_CREDENTIALS,
            GroupId::SpecializedExperience => groups::SPECIALIZED_EXPERIENCE,
            GroupId::FeeEducation => groups::FEE_EDUCATION,
            GroupId::ProductComplexity => groups::PRODUCT_COMPLEXITY,
            GroupId::BusinessOwner => groups::BUSINESS_OWNER,
            GroupId::EquityCompensation => groups::EQUITY_COMPENSATION,
            GroupId::MajorTransaction => groups::MAJOR_TRANSACTION,
        }
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Questions asked of every user, in catalog order
pub fn baseline() -> &'static [Question] {
    baseline::BASELINE
}

/// Every conditional group with its questions, in rule order
pub fn groups() -> impl Iterator<Item = (GroupId, &'static [Question])> {
    GroupId::ALL.into_iter().map(|g| (g, g.questions()))
}

/// Check the global identifier uniqueness invariant.
///
/// The engine never deduplicates, so this runs as a content check
/// (tests, `advisor catalog --check`), not during generation.
pub fn validate() -> Result<()> {
    let sources = std::iter::once(("baseline", baseline()))
        .chain(groups().map(|(g, questions)| (g.name(), questions)));
    check_unique(sources)
}

fn check_unique<'a>(
    sources: impl IntoIterator<Item = (&'a str, &'a [Question])>,
) -> Result<()> {
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for (source, questions) in sources {
        for question in questions {
            if let Some(first) = seen.insert(question.id, source) {
                return Err(AdvisorError::DuplicateQuestionId {
                    id: question.id.to_string(),
                    first: first.to_string(),
                    second: source.to_string(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        validate().expect("catalog content has duplicate ids");
    }

    #[test]
    fn test_baseline_size_and_categories() {
        assert_eq!(baseline().len(), 16);
        let mut categories: Vec<&str> = Vec::new();
        for q in baseline() {
            if !categories.contains(&q.category) {
                categories.push(q.category);
            }
        }
        assert_eq!(
            categories,
            vec![
                "Credentials & Fiduciary Duty",
                "Fee Transparency",
                "Investment Philosophy & Conflicts",
                "Track Record & References",
            ]
        );
    }

    #[test]
    fn test_every_group_is_non_empty() {
        for group in GroupId::ALL {
            assert!(!group.questions().is_empty(), "{} is empty", group);
        }
    }

    #[test]
    fn test_group_sizes() {
        let sizes: Vec<usize> = groups().map(|(_, questions)| questions.len()).collect();
        assert_eq!(sizes, vec![1, 3, 1, 1, 1, 2, 2, 3, 2, 1]);
    }

    #[test]
    fn test_duplicate_detection() {
        let dup = &baseline()[..1];
        let err = check_unique([("baseline", baseline()), ("extra", dup)]).unwrap_err();
        match err {
            AdvisorError::DuplicateQuestionId { id, first, second } => {
                assert_eq!(id, "q_fiduciary");
                assert_eq!(first, "baseline");
                assert_eq!(second, "extra");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_question_serializes_camel_case() {
        let value = serde_json::to_value(&baseline()[0]).unwrap();
        assert_eq!(value["id"], "q_fiduciary");
        assert!(value["whyMatters"].is_string());
        assert!(value["redFlags"].is_array());
        assert!(value["greenFlags"].is_array());
    }
}
