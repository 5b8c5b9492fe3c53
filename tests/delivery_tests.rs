//! Checklist delivery integration tests
//!
//! Runs the generate → persist → render flow against temporary data
//! directories.

use std::path::PathBuf;

use advisor::commands::{deliver_checklist, Delivery};
use advisor::store::StoredSubmission;
use advisor::{
    AnalyticsStore, AnswerSet, Config, JsonlStore, NetWorth, OutputFormat, SpecialCircumstance,
    Step,
};
use tempfile::TempDir;

fn config_in(dir: PathBuf) -> Config {
    Config {
        data_dir: Some(dir),
        ..Default::default()
    }
}

fn answers() -> AnswerSet {
    AnswerSet {
        net_worth: Some(NetWorth::Over5m),
        special_circumstances: [SpecialCircumstance::Pension].into_iter().collect(),
        ..Default::default()
    }
}

// =============================================================================
// Persistence Tests
// =============================================================================

mod persistence_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_submission_is_logged() {
        let dir = TempDir::new().unwrap();
        let config = config_in(dir.path().to_path_buf());
        let output = dir.path().join("checklist.md");
        let delivery = Delivery {
            output: Some(output.clone()),
            ..Default::default()
        };

        let questions = deliver_checklist(answers(), &delivery, &config).await.unwrap();

        let stored: Vec<StoredSubmission> =
            JsonlStore::new(config.submissions_path()).load_all().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].answers.net_worth, "over_5m");
        assert_eq!(stored[0].answers.special_circumstances, vec!["pension".to_string()]);
        assert_eq!(stored[0].generated_questions.len(), questions.len());
        assert!(stored[0].session_id.as_str().starts_with("session_"));

        let written = std::fs::read_to_string(output).unwrap();
        assert!(written.contains(questions[0].question.text));
    }

    #[tokio::test]
    async fn test_no_save_skips_log() {
        let dir = TempDir::new().unwrap();
        let config = config_in(dir.path().to_path_buf());
        let delivery = Delivery {
            output: Some(dir.path().join("out.txt")),
            format: Some(OutputFormat::Text),
            no_save: true,
            ..Default::default()
        };

        deliver_checklist(answers(), &delivery, &config).await.unwrap();

        assert!(!config.submissions_path().exists());
    }

    #[tokio::test]
    async fn test_store_failure_does_not_change_checklist() {
        let dir = TempDir::new().unwrap();
        // A regular file where the data directory should be
        let blocked = dir.path().join("blocked");
        std::fs::write(&blocked, "").unwrap();

        let healthy = config_in(dir.path().join("data"));
        let broken = config_in(blocked);

        let delivery = Delivery {
            output: Some(dir.path().join("a.json")),
            format: Some(OutputFormat::Json),
            ..Default::default()
        };
        let expected = deliver_checklist(answers(), &delivery, &healthy).await.unwrap();

        let delivery = Delivery {
            output: Some(dir.path().join("b.json")),
            ..delivery
        };
        let actual = deliver_checklist(answers(), &delivery, &broken).await.unwrap();

        assert_eq!(actual, expected);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("a.json")).unwrap(),
            std::fs::read_to_string(dir.path().join("b.json")).unwrap()
        );
    }
}

// =============================================================================
// Analytics Tests
// =============================================================================

mod analytics_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_results_step_counted() {
        let dir = TempDir::new().unwrap();
        let config = config_in(dir.path().to_path_buf());
        let delivery = Delivery {
            output: Some(dir.path().join("out.md")),
            no_save: true,
            ..Default::default()
        };

        deliver_checklist(answers(), &delivery, &config).await.unwrap();
        deliver_checklist(answers(), &delivery, &config).await.unwrap();

        let totals = AnalyticsStore::new(config.analytics_path()).totals().unwrap();
        let results = totals.iter().find(|(step, _)| *step == Step::Results);
        assert_eq!(results.map(|(_, count)| *count), Some(2));
    }

    #[tokio::test]
    async fn test_analytics_disabled() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            analytics: false,
            ..config_in(dir.path().to_path_buf())
        };
        let delivery = Delivery {
            output: Some(dir.path().join("out.md")),
            no_save: true,
            ..Default::default()
        };

        deliver_checklist(answers(), &delivery, &config).await.unwrap();

        assert!(!config.analytics_path().exists());
    }
}
