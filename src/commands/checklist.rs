//! @acp:module "Checklist Delivery"
//! @acp:summary "Shared generate → persist → render flow used by interview and generate"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;

use crate::config::Config;
use crate::engine::{generate, GeneratedQuestion, RULES};
use crate::questionnaire::AnswerSet;
use crate::render::{render_checklist, OutputFormat};
use crate::store::{AnalyticsStore, JsonlStore, SessionId, Step, Submission, SubmissionStore};

/// How the generated checklist is delivered
#[derive(Debug, Clone, Default)]
pub struct Delivery {
    /// Output format (config default if unset)
    pub format: Option<OutputFormat>,
    /// Write to this file instead of stdout
    pub output: Option<PathBuf>,
    /// Print which groups were triggered and why
    pub explain: bool,
    /// Skip saving the submission
    pub no_save: bool,
}

/// Generate the checklist, hand it to persistence in the background and
/// render it. Persistence failures are logged, never returned.
pub async fn deliver_checklist(
    answers: AnswerSet,
    delivery: &Delivery,
    config: &Config,
) -> Result<Vec<GeneratedQuestion>> {
    let questions = generate(&answers);

    let persistence = if config.persist && !delivery.no_save {
        let store = JsonlStore::new(config.submissions_path());
        let submission = Submission::new(SessionId::generate(), &answers, questions.clone());
        Some(tokio::task::spawn_blocking(move || store.save(&submission)))
    } else {
        None
    };

    if delivery.explain {
        print_explanation(&answers, &questions);
    }

    let format = match delivery.format {
        Some(format) => format,
        None => config.output_format()?,
    };
    let rendered = render_checklist(&questions, format)?;

    match &delivery.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write checklist to {:?}", path))?;
            eprintln!(
                "{} Wrote {} questions to {}",
                style("✓").green(),
                questions.len(),
                path.display()
            );
        }
        None => println!("{}", rendered),
    }

    if let Some(handle) = persistence {
        match handle.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::warn!("Could not save submission: {}", e),
            Err(e) => tracing::warn!("Submission task did not complete: {}", e),
        }
    }

    track_step(config, Step::Results);
    Ok(questions)
}

/// Record a step visit when analytics are enabled
pub fn track_step(config: &Config, step: Step) {
    if !config.analytics {
        return;
    }
    let store = AnalyticsStore::new(config.analytics_path());
    if let Err(e) = store.track(step) {
        tracing::warn!("Could not record {} step: {}", step.as_str(), e);
    }
}

fn print_explanation(answers: &AnswerSet, questions: &[GeneratedQuestion]) {
    let baseline = crate::catalog::baseline().len();
    eprintln!("{} {} baseline questions", style("→").cyan(), baseline);
    let matched: Vec<_> = RULES.iter().filter(|rule| rule.matches(answers)).collect();
    for rule in &matched {
        eprintln!(
            "  {} {:24} {} (+{})",
            style("+").green(),
            rule.group.name(),
            style(rule.description).dim(),
            rule.group.questions().len()
        );
    }
    if matched.is_empty() {
        eprintln!("  {} no conditional groups triggered", style("·").dim());
    }
    eprintln!("{} {} questions total\n", style("✓").green(), questions.len());
}
