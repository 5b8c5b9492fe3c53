//! @acp:module "Checklist Renderer"
//! @acp:summary "Presentation of generated questions: grouping, text formats, printable HTML"
//! @acp:domain render
//! @acp:layer output
//!
//! Rendering never reorders the canonical priority sequence; grouping by
//! category is a display concern only.

mod html;
mod markdown;

use serde::Serialize;

use crate::engine::GeneratedQuestion;
use crate::error::{AdvisorError, Result};

pub use html::render_html;
pub use markdown::{render_markdown, render_text};

pub const TITLE: &str = "Your Customized Financial Advisor Interview Script";

pub const DISCLAIMER: &str = "This tool provides educational questions, not personalized financial advice. \
Always verify advisor credentials independently through official channels (BrokerCheck, SEC IAPD). \
Consult with multiple advisors before making decisions. This script is for your personal use only.";

/// Where to verify an advisor's credentials
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Resource {
    pub name: &'static str,
    pub url: &'static str,
    pub description: &'static str,
}

pub static RESOURCES: [Resource; 3] = [
    Resource {
        name: "FINRA BrokerCheck",
        url: "https://brokercheck.finra.org/",
        description: "Check broker and advisor disciplinary history",
    },
    Resource {
        name: "SEC Investment Adviser Public Disclosure (IAPD)",
        url: "https://www.investor.gov/additional-resources/free-financial-tools",
        description: "Verify RIA registration and credentials",
    },
    Resource {
        name: "CFP Board",
        url: "https://www.cfp.net/",
        description: "Verify CFP® certification",
    },
];

/// Output format for the checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Text,
    Json,
    Html,
}

impl std::str::FromStr for OutputFormat {
    type Err = AdvisorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "html" | "htm" => Ok(OutputFormat::Html),
            _ => Err(AdvisorError::UnknownFormat(s.to_string())),
        }
    }
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Markdown => "markdown",
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Html => "html",
        }
    }
}

/// Questions sharing a category label, in priority order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub questions: Vec<&'a GeneratedQuestion>,
}

/// Stable grouping by category, categories in first-seen order
pub fn group_by_category(questions: &[GeneratedQuestion]) -> Vec<CategoryGroup<'_>> {
    let mut groups: Vec<CategoryGroup<'_>> = Vec::new();
    for question in questions {
        match groups.iter_mut().find(|g| g.category == question.category()) {
            Some(group) => group.questions.push(question),
            None => groups.push(CategoryGroup {
                category: question.category(),
                questions: vec![question],
            }),
        }
    }
    groups
}

/// Render generated questions in the requested format
pub fn render_checklist(questions: &[GeneratedQuestion], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Markdown => Ok(render_markdown(questions)),
        OutputFormat::Text => Ok(render_text(questions)),
        OutputFormat::Json => render_json(questions),
        OutputFormat::Html => render_html(questions),
    }
}

fn render_json(questions: &[GeneratedQuestion]) -> Result<String> {
    #[derive(Serialize)]
    struct JsonOutput<'a> {
        total_questions: usize,
        categories: Vec<&'a str>,
        questions: &'a [GeneratedQuestion],
    }

    let output = JsonOutput {
        total_questions: questions.len(),
        categories: group_by_category(questions)
            .iter()
            .map(|g| g.category)
            .collect(),
        questions,
    };

    Ok(serde_json::to_string_pretty(&output)?)
}

fn intro(count: usize) -> String {
    format!(
        "Use these {} questions when interviewing financial advisors. They're personalized to your situation.",
        count
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::generate;
    use crate::questionnaire::{AnswerSet, NetWorth};

    #[test]
    fn test_output_format_parse() {
        assert_eq!("markdown".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("MD".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("txt".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("html".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert!("pdf".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_group_by_category_preserves_first_seen_order() {
        let answers = AnswerSet {
            net_worth: Some(NetWorth::Under100k),
            ..Default::default()
        };
        let questions = generate(&answers);
        let groups = group_by_category(&questions);
        let names: Vec<&str> = groups.iter().map(|g| g.category).collect();
        assert_eq!(
            names,
            vec![
                "Credentials & Fiduciary Duty",
                "Fee Transparency",
                "Investment Philosophy & Conflicts",
                "Track Record & References",
                "Service Model Fit",
            ]
        );
        let total: usize = groups.iter().map(|g| g.questions.len()).sum();
        assert_eq!(total, questions.len());
        for group in &groups {
            assert!(group
                .questions
                .windows(2)
                .all(|w| w[0].priority < w[1].priority));
        }
    }

    #[test]
    fn test_json_output_keeps_flat_order() {
        let questions = generate(&AnswerSet::default());
        let json = render_checklist(&questions, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_questions"], questions.len());
        assert_eq!(value["questions"][0]["priority"], 1);
        assert_eq!(value["categories"].as_array().unwrap().len(), 4);
    }
}
