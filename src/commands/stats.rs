//! @acp:module "Stats Command"
//! @acp:summary "Show step analytics and stored submission counts"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;
use serde::Serialize;

use crate::config::Config;
use crate::store::{AnalyticsStore, JsonlStore};

/// Options for the stats command
#[derive(Debug, Clone, Default)]
pub struct StatsOptions {
    /// Output as JSON
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub submissions: usize,
    pub average_questions: f64,
    pub steps: Vec<StepTotal>,
}

#[derive(Debug, Serialize)]
pub struct StepTotal {
    pub step: &'static str,
    pub count: u64,
}

/// Execute the stats command
pub fn execute_stats(options: StatsOptions, config: &Config) -> Result<()> {
    let report = build_report(config)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", style("Submissions").bold());
    println!("  stored:             {}", report.submissions);
    println!("  avg. questions:     {:.1}", report.average_questions);
    println!("\n{}", style("Steps").bold());
    for step in &report.steps {
        println!("  {:18}  {}", step.step, step.count);
    }

    Ok(())
}

pub fn build_report(config: &Config) -> Result<StatsReport> {
    let submissions = JsonlStore::new(config.submissions_path()).load_all()?;
    let total_questions: usize = submissions.iter().map(|s| s.generated_questions.len()).sum();
    let average_questions = if submissions.is_empty() {
        0.0
    } else {
        total_questions as f64 / submissions.len() as f64
    };

    let steps = AnalyticsStore::new(config.analytics_path())
        .totals()?
        .into_iter()
        .map(|(step, count)| StepTotal {
            step: step.as_str(),
            count,
        })
        .collect();

    Ok(StatsReport {
        submissions: submissions.len(),
        average_questions,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::generate;
    use crate::questionnaire::AnswerSet;
    use crate::store::{SessionId, Step, Submission, SubmissionStore};
    use tempfile::TempDir;

    #[test]
    fn test_report_from_stores() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            data_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };

        let store = JsonlStore::new(config.submissions_path());
        let answers = AnswerSet::default();
        store
            .save(&Submission::new(SessionId::generate(), &answers, generate(&answers)))
            .unwrap();
        AnalyticsStore::new(config.analytics_path())
            .track(Step::Results)
            .unwrap();

        let report = build_report(&config).unwrap();
        assert_eq!(report.submissions, 1);
        assert_eq!(report.average_questions, 16.0);
        let results = report.steps.iter().find(|s| s.step == "results").unwrap();
        assert_eq!(results.count, 1);
    }

    #[test]
    fn test_empty_report() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            data_dir: Some(dir.path().join("empty")),
            ..Default::default()
        };
        let report = build_report(&config).unwrap();
        assert_eq!(report.submissions, 0);
        assert_eq!(report.average_questions, 0.0);
        assert!(report.steps.iter().all(|s| s.count == 0));
    }

    #[test]
    fn test_report_survives_truncated_analytics() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            data_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        std::fs::write(config.analytics_path(), r#"[{"step":"landing","#).unwrap();

        let report = build_report(&config).unwrap();
        assert!(report.steps.iter().all(|s| s.count == 0));
    }
}
