//! @acp:module "Engine"
//! @acp:summary "Rule-based interview question generation"
//! @acp:domain engine
//! @acp:layer feature

pub mod rules;
pub mod selector;

pub use rules::{triggered_groups, TriggerRule, RULES};
pub use selector::{generate, GeneratedQuestion};
