//! @acp:module "HTML Renderer"
//! @acp:summary "Printable HTML interview script via Handlebars"
//! @acp:domain render
//! @acp:layer output

use handlebars::Handlebars;
use serde_json::json;

use super::{intro, DISCLAIMER, RESOURCES, TITLE};
use crate::engine::GeneratedQuestion;
use crate::error::Result;

const TEMPLATE_NAME: &str = "checklist";
const TEMPLATE: &str = include_str!("../../templates/checklist.html.hbs");

/// Render the flat priority-ordered list as a standalone HTML document
pub fn render_html(questions: &[GeneratedQuestion]) -> Result<String> {
    let mut registry = Handlebars::new();
    registry.register_template_string(TEMPLATE_NAME, TEMPLATE)?;

    let data = json!({
        "title": TITLE,
        "intro": intro(questions.len()),
        "questions": questions,
        "resources": RESOURCES,
        "disclaimer": DISCLAIMER,
    });

    Ok(registry.render(TEMPLATE_NAME, &data)?)
}
