//! @acp:module "Markdown Renderer"
//! @acp:summary "Category-grouped Markdown and plain-text checklists"
//! @acp:domain render
//! @acp:layer output

use super::{group_by_category, intro, DISCLAIMER, RESOURCES, TITLE};
use crate::engine::GeneratedQuestion;

pub fn render_markdown(questions: &[GeneratedQuestion]) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {}\n\n{}\n", TITLE, intro(questions.len())));

    for group in group_by_category(questions) {
        output.push_str(&format!("\n## {}\n", group.category));

        for q in group.questions {
            let question = q.question;
            output.push_str(&format!("\n### {}. {}\n\n", q.priority, question.text));
            output.push_str(&format!("**Why this matters:** {}\n", question.why_matters));

            if !question.red_flags.is_empty() {
                output.push_str("\n**Red flags (avoid these answers):**\n");
                for flag in question.red_flags {
                    output.push_str(&format!("- {}\n", flag));
                }
            }
            if !question.green_flags.is_empty() {
                output.push_str("\n**Green flags (good answers):**\n");
                for flag in question.green_flags {
                    output.push_str(&format!("- {}\n", flag));
                }
            }
        }
    }

    output.push_str("\n## Resources to Verify Credentials\n\n");
    for resource in &RESOURCES {
        output.push_str(&format!(
            "- [{}]({}) - {}\n",
            resource.name, resource.url, resource.description
        ));
    }
    output.push_str(&format!("\n**Disclaimer:** {}\n", DISCLAIMER));

    output
}

pub fn render_text(questions: &[GeneratedQuestion]) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n{}\n", TITLE, "=".repeat(TITLE.len())));
    output.push_str(&format!("{}\n", intro(questions.len())));

    for group in group_by_category(questions) {
        output.push_str(&format!("\n{}\n{}\n", group.category, "-".repeat(group.category.len())));

        for q in group.questions {
            let question = q.question;
            output.push_str(&format!("\n[ ] {}. {}\n", q.priority, question.text));
            output.push_str(&format!("    Why this matters: {}\n", question.why_matters));
            for flag in question.red_flags {
                output.push_str(&format!("    ✗ {}\n", flag));
            }
            for flag in question.green_flags {
                output.push_str(&format!("    ✓ {}\n", flag));
            }
        }
    }

    output.push_str("\nResources to Verify Credentials\n");
    for resource in &RESOURCES {
        output.push_str(&format!("  {} <{}>\n", resource.name, resource.url));
    }
    output.push_str(&format!("\nDisclaimer: {}\n", DISCLAIMER));

    output
}
