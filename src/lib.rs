#![forbid(unsafe_code)]

//! @acp:module "Advisor Library"
//! @acp:summary "Personalized financial-advisor interview checklists"
//! @acp:domain engine
//! @acp:layer api
//! @acp:stability stable
//!
//! # Advisor - Interview Checklist Generator
//!
//! Turns five questionnaire answers into a prioritized list of questions to
//! ask a prospective financial advisor.
//!
//! ## Features
//!
//! - **Deterministic**: baseline bank plus ten ordered trigger rules
//! - **Typed answers**: closed vocabularies, unknown values simply match nothing
//! - **Output formats**: Markdown, text, JSON, printable HTML
//! - **Local persistence**: JSON-lines submission log and step analytics
//!
//! ## Example
//!
//! ```rust
//! use advisor::{generate, AnswerSet, NetWorth};
//!
//! let answers = AnswerSet {
//!     net_worth: Some(NetWorth::Under100k),
//!     ..Default::default()
//! };
//! let questions = generate(&answers);
//!
//! assert_eq!(questions[0].priority, 1);
//! assert_eq!(questions.last().unwrap().id(), "q_service_level");
//! ```

pub mod catalog;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod questionnaire;
pub mod render;
pub mod store;

// Re-exports
pub use catalog::{GroupId, Question};
pub use config::Config;
pub use engine::{generate, triggered_groups, GeneratedQuestion, TriggerRule};
pub use error::{AdvisorError, Result};
pub use questionnaire::{
    AnswerSet, Choice, ExperienceLevel, NetWorth, PaymentPreference, PrimaryGoal, RawAnswers,
    SpecialCircumstance,
};
pub use render::{group_by_category, render_checklist, OutputFormat};
pub use store::{AnalyticsStore, JsonlStore, SessionId, Step, Submission, SubmissionStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
