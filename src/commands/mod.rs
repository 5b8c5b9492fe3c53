//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Provides implementations for all CLI commands.
//! Each command is in its own submodule for maintainability.

pub mod catalog;
pub mod checklist;
pub mod generate;
pub mod init;
pub mod interview;
pub mod stats;

pub use catalog::{execute_catalog, CatalogOptions};
pub use checklist::{deliver_checklist, track_step, Delivery};
pub use generate::{execute_generate, GenerateOptions};
pub use init::{execute_init, InitOptions};
pub use interview::execute_interview;
pub use stats::{execute_stats, StatsOptions};
