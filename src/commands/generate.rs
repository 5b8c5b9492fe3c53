//! @acp:module "Generate Command"
//! @acp:summary "Non-interactive checklist generation from flags or an answers file"
//! @acp:domain cli
//! @acp:layer handler

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::checklist::{deliver_checklist, Delivery};
use crate::config::Config;
use crate::questionnaire::{AnswerSet, RawAnswers};

/// Options for the generate command
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// JSON or YAML answers file
    pub answers_file: Option<PathBuf>,
    pub net_worth: Option<String>,
    pub primary_goal: Option<String>,
    pub payment_preference: Option<String>,
    pub experience_level: Option<String>,
    pub special_circumstances: Vec<String>,
    pub delivery: Delivery,
}

/// Execute the generate command
pub async fn execute_generate(options: GenerateOptions, config: &Config) -> Result<()> {
    let answers = collect_answers(&options)?;
    if answers.is_empty() {
        tracing::warn!("No recognized answers; checklist holds baseline questions only");
    }
    tracing::info!("Generating checklist for {:?}", answers);
    deliver_checklist(answers, &options.delivery, config).await?;
    Ok(())
}

/// Answers file first, flags on top
pub fn collect_answers(options: &GenerateOptions) -> Result<AnswerSet> {
    let mut raw = match &options.answers_file {
        Some(path) => load_answers_file(path)?,
        None => RawAnswers::default(),
    };

    raw.merge(RawAnswers {
        net_worth: options.net_worth.clone().unwrap_or_default(),
        primary_goal: options.primary_goal.clone().unwrap_or_default(),
        payment_preference: options.payment_preference.clone().unwrap_or_default(),
        experience_level: options.experience_level.clone().unwrap_or_default(),
        special_circumstances: options.special_circumstances.clone(),
    });

    Ok(raw.into())
}

/// Read answers from JSON, or YAML for `.yaml`/`.yml` files
pub fn load_answers_file(path: &Path) -> Result<RawAnswers> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers from {:?}", path))?;

    let is_yaml = path
        .extension()
        .map(|e| e == "yaml" || e == "yml")
        .unwrap_or(false);

    if is_yaml {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML answers from {:?}", path))
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON answers from {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::{NetWorth, PrimaryGoal, SpecialCircumstance};
    use tempfile::TempDir;

    #[test]
    fn test_flags_only() {
        let options = GenerateOptions {
            net_worth: Some("over_5m".to_string()),
            special_circumstances: vec!["stock_options".to_string()],
            ..Default::default()
        };
        let answers = collect_answers(&options).unwrap();
        assert_eq!(answers.net_worth, Some(NetWorth::Over5m));
        assert!(answers.has_circumstance(SpecialCircumstance::StockOptions));
        assert_eq!(answers.primary_goal, None);
    }

    #[test]
    fn test_yaml_file_with_flag_override() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("answers.yaml");
        std::fs::write(
            &path,
            "net_worth: under_100k\nprimary_goal: retirement\nspecial_circumstances:\n  - divorce\n",
        )
        .unwrap();

        let options = GenerateOptions {
            answers_file: Some(path),
            primary_goal: Some("debt_management".to_string()),
            ..Default::default()
        };
        let answers = collect_answers(&options).unwrap();
        assert_eq!(answers.net_worth, Some(NetWorth::Under100k));
        assert_eq!(answers.primary_goal, Some(PrimaryGoal::DebtManagement));
        assert!(answers.has_circumstance(SpecialCircumstance::Divorce));
    }

    #[test]
    fn test_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("answers.json");
        std::fs::write(&path, r#"{"net_worth": "2m_5m", "experience_level": ""}"#).unwrap();

        let raw = load_answers_file(&path).unwrap();
        assert_eq!(raw.net_worth, "2m_5m");
        assert_eq!(raw.experience_level, "");
    }

    #[test]
    fn test_malformed_file_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("answers.json");
        std::fs::write(&path, "{ nope").unwrap();
        assert!(load_answers_file(&path).is_err());
    }
}
