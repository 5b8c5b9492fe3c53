//! @acp:module "Catalog Command"
//! @acp:summary "List the question bank and check content integrity"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;
use serde::Serialize;

use crate::catalog::{self, Question};
use crate::engine::RULES;

/// Options for the catalog command
#[derive(Debug, Clone, Default)]
pub struct CatalogOptions {
    /// Only validate identifier uniqueness
    pub check: bool,
    /// Output as JSON
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct GroupListing {
    name: &'static str,
    trigger: &'static str,
    questions: &'static [Question],
}

#[derive(Debug, Serialize)]
struct CatalogListing {
    baseline: &'static [Question],
    groups: Vec<GroupListing>,
}

/// Execute the catalog command
pub fn execute_catalog(options: CatalogOptions) -> Result<()> {
    if options.check {
        catalog::validate()?;
        println!(
            "{} Catalog is valid ({} questions, all ids unique)",
            style("✓").green(),
            question_count()
        );
        return Ok(());
    }

    let listing = CatalogListing {
        baseline: catalog::baseline(),
        groups: RULES
            .iter()
            .map(|rule| GroupListing {
                name: rule.group.name(),
                trigger: rule.description,
                questions: rule.group.questions(),
            })
            .collect(),
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    println!(
        "{} ({} questions, always included):\n",
        style("Baseline").bold(),
        listing.baseline.len()
    );
    for q in listing.baseline {
        println!("  {:28} {}", q.id, style(q.category).dim());
    }

    println!("\n{} (in rule order):\n", style("Conditional groups").bold());
    for group in &listing.groups {
        println!(
            "  {} {}",
            style(group.name).cyan(),
            style(format!("when {}", group.trigger)).dim()
        );
        for q in group.questions {
            println!("    {}", q.id);
        }
    }

    Ok(())
}

fn question_count() -> usize {
    catalog::baseline().len()
        + catalog::groups()
            .map(|(_, questions)| questions.len())
            .sum::<usize>()
}
