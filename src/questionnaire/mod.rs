//! @acp:module "Questionnaire"
//! @acp:summary "Answer vocabularies, the Answer Set, and the questionnaire prompts"
//! @acp:domain questionnaire
//! @acp:layer feature

pub mod prompts;
pub mod types;

pub use prompts::{record_answer, Field, Prompt, PromptKind, PromptOption, PROMPTS};
pub use types::*;
