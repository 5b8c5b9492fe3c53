//! @acp:module "Question Selector"
//! @acp:summary "Baseline-then-rules question generation with dense priorities"
//! @acp:domain engine
//! @acp:layer logic

use serde::Serialize;

use super::rules::RULES;
use crate::catalog::{self, Question};
use crate::questionnaire::AnswerSet;

/// A catalog question stamped with its output priority
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedQuestion {
    #[serde(flatten)]
    pub question: &'static Question,
    pub priority: u32,
}

impl GeneratedQuestion {
    pub fn id(&self) -> &'static str {
        self.question.id
    }

    pub fn category(&self) -> &'static str {
        self.question.category
    }
}

/// Generate the prioritized interview checklist for a set of answers.
///
/// Selection runs in two phases:
/// 1. Baseline bank (always, in catalog order)
/// 2. Each trigger rule in declared order, appending its group when matched
///
/// Priorities run 1..=N with no gaps. The function is pure: same answers,
/// same output, and nothing outside the return value is touched.
pub fn generate(answers: &AnswerSet) -> Vec<GeneratedQuestion> {
    let mut questions: Vec<GeneratedQuestion> = Vec::new();
    let mut priority = 1u32;

    let mut push_all = |bank: &'static [Question], out: &mut Vec<GeneratedQuestion>| {
        for question in bank {
            out.push(GeneratedQuestion { question, priority });
            priority += 1;
        }
    };

    // Phase 1: Baseline
    push_all(catalog::baseline(), &mut questions);

    // Phase 2: Conditional groups in rule order
    for rule in RULES.iter().filter(|rule| rule.matches(answers)) {
        tracing::debug!("Rule matched ({}): adding group {}", rule.description, rule.group);
        push_all(rule.group.questions(), &mut questions);
    }

    questions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::GroupId;
    use crate::engine::rules::triggered_groups;
    use crate::questionnaire::*;
    use pretty_assertions::assert_eq;

    fn ids(questions: &[GeneratedQuestion]) -> Vec<&'static str> {
        questions.iter().map(|q| q.id()).collect()
    }

    fn expected_ids(groups: &[GroupId]) -> Vec<&'static str> {
        catalog::baseline()
            .iter()
            .chain(groups.iter().flat_map(|g| g.questions().iter()))
            .map(|q| q.id)
            .collect()
    }

    fn assert_dense(questions: &[GeneratedQuestion]) {
        let priorities: Vec<u32> = questions.iter().map(|q| q.priority).collect();
        let expected: Vec<u32> = (1..=questions.len() as u32).collect();
        assert_eq!(priorities, expected);
    }

    #[test]
    fn test_empty_answers_yield_baseline() {
        let result = generate(&AnswerSet::default());
        assert_eq!(ids(&result), expected_ids(&[]));
        assert_eq!(result.len(), catalog::baseline().len());
        assert_dense(&result);
    }

    #[test]
    fn test_low_net_worth_scenario() {
        let answers = AnswerSet {
            net_worth: Some(NetWorth::Under100k),
            primary_goal: Some(PrimaryGoal::Retirement),
            payment_preference: Some(PaymentPreference::FeeOnly),
            experience_level: Some(ExperienceLevel::Advanced),
            special_circumstances: Default::default(),
        };
        let result = generate(&answers);
        assert_eq!(ids(&result), expected_ids(&[GroupId::ServiceModel]));
        assert_eq!(result.len(), catalog::baseline().len() + 1);
        assert_dense(&result);
    }

    #[test]
    fn test_high_net_worth_complex_scenario() {
        let answers = AnswerSet {
            net_worth: Some(NetWorth::Over5m),
            primary_goal: Some(PrimaryGoal::TaxOptimization),
            payment_preference: Some(PaymentPreference::NotSure),
            experience_level: Some(ExperienceLevel::Beginner),
            special_circumstances: [
                SpecialCircumstance::BusinessOwner,
                SpecialCircumstance::StockOptions,
            ]
            .into_iter()
            .collect(),
        };
        let result = generate(&answers);
        assert_eq!(
            ids(&result),
            expected_ids(&[
                GroupId::AdvancedServices,
                GroupId::TaxCredentials,
                GroupId::FeeEducation,
                GroupId::ProductComplexity,
                GroupId::BusinessOwner,
                GroupId::EquityCompensation,
            ])
        );
        assert_dense(&result);
    }

    #[test]
    fn test_divorce_and_inheritance_append_once() {
        let answers = AnswerSet {
            special_circumstances: [SpecialCircumstance::Divorce, SpecialCircumstance::Inheritance]
                .into_iter()
                .collect(),
            ..Default::default()
        };
        let result = generate(&answers);
        let hits = result
            .iter()
            .filter(|q| q.id() == "q_major_event_experience")
            .count();
        assert_eq!(hits, 1);
        assert_eq!(ids(&result), expected_ids(&[GroupId::MajorTransaction]));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let answers = AnswerSet {
            net_worth: Some(NetWorth::From2mTo5m),
            primary_goal: Some(PrimaryGoal::MajorLifeEvent),
            experience_level: Some(ExperienceLevel::Beginner),
            special_circumstances: [SpecialCircumstance::Divorce].into_iter().collect(),
            ..Default::default()
        };
        let first = generate(&answers);
        let second = generate(&answers);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_every_rule_combination_is_dense_and_unique() {
        // Walk every value of every field, including unanswered.
        let worths: Vec<Option<NetWorth>> =
            std::iter::once(None).chain(NetWorth::ALL.iter().copied().map(Some)).collect();
        let goals: Vec<Option<PrimaryGoal>> =
            std::iter::once(None).chain(PrimaryGoal::ALL.iter().copied().map(Some)).collect();
        let payments: Vec<Option<PaymentPreference>> = std::iter::once(None)
            .chain(PaymentPreference::ALL.iter().copied().map(Some))
            .collect();
        let levels: Vec<Option<ExperienceLevel>> = std::iter::once(None)
            .chain(ExperienceLevel::ALL.iter().copied().map(Some))
            .collect();

        let circumstances = SpecialCircumstance::ALL;
        for mask in 0u32..(1 << circumstances.len()) {
            let set: std::collections::BTreeSet<_> = circumstances
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, c)| *c)
                .collect();

            for &net_worth in &worths {
                for &primary_goal in &goals {
                    for &payment_preference in &payments {
                        for &experience_level in &levels {
                            let answers = AnswerSet {
                                net_worth,
                                primary_goal,
                                payment_preference,
                                experience_level,
                                special_circumstances: set.clone(),
                            };
                            let result = generate(&answers);

                            let triggered = triggered_groups(&answers);
                            let expected_len = catalog::baseline().len()
                                + triggered.iter().map(|g| g.questions().len()).sum::<usize>();
                            assert_eq!(result.len(), expected_len);

                            for (i, q) in result.iter().enumerate() {
                                assert_eq!(q.priority as usize, i + 1);
                            }

                            let mut seen = std::collections::HashSet::new();
                            assert!(result.iter().all(|q| seen.insert(q.id())));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_generated_question_serializes_flat() {
        let result = generate(&AnswerSet::default());
        let value = serde_json::to_value(&result[0]).unwrap();
        assert_eq!(value["id"], "q_fiduciary");
        assert_eq!(value["priority"], 1);
        assert_eq!(value["category"], "Credentials & Fiduciary Duty");
        assert!(value["whyMatters"].is_string());
    }
}
