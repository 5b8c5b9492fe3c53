//! @acp:module "Interview Command"
//! @acp:summary "Interactive five-step questionnaire followed by checklist delivery"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, MultiSelect, Select};

use super::checklist::{deliver_checklist, track_step, Delivery};
use crate::config::Config;
use crate::questionnaire::{record_answer, PromptKind, RawAnswers, PROMPTS};
use crate::store::Step;

/// Execute the interview command
pub async fn execute_interview(delivery: Delivery, config: &Config) -> Result<()> {
    track_step(config, Step::Landing);

    println!(
        "{} Find the right financial advisor\n",
        style("→").cyan()
    );
    println!(
        "Answer {} quick questions to get an interview script tailored to you.",
        PROMPTS.len()
    );
    println!("{}\n", style("Press Esc to skip a question.").dim());

    track_step(config, Step::Questions);
    let raw = run_questionnaire()?;

    println!();
    deliver_checklist(raw.into(), &delivery, config).await?;
    Ok(())
}

fn run_questionnaire() -> Result<RawAnswers> {
    let theme = ColorfulTheme::default();
    let mut answers = RawAnswers::default();

    for (index, prompt) in PROMPTS.iter().enumerate() {
        let options = prompt.options();
        let labels: Vec<&str> = options.iter().map(|o| o.label).collect();
        let title = format!("[{}/{}] {}", index + 1, PROMPTS.len(), prompt.question);

        let selected: Vec<&str> = match prompt.kind {
            PromptKind::Single => Select::with_theme(&theme)
                .with_prompt(title)
                .items(&labels)
                .default(0)
                .interact_opt()?
                .map(|i| vec![options[i].id])
                .unwrap_or_default(),
            PromptKind::Multi => MultiSelect::with_theme(&theme)
                .with_prompt(format!("{} (space to toggle)", title))
                .items(&labels)
                .interact_opt()?
                .map(|picked| picked.into_iter().map(|i| options[i].id).collect())
                .unwrap_or_default(),
        };

        tracing::debug!("{} = {:?}", prompt.field.id(), selected);
        record_answer(&mut answers, prompt.field, &selected);
    }

    Ok(answers)
}
