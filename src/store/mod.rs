//! @acp:module "Submission Store"
//! @acp:summary "Persistence collaborator: session ids, submission log, step analytics"
//! @acp:domain store
//! @acp:layer io
//!
//! Nothing here feeds back into generation. A failed save never changes the
//! checklist already computed for the user.

pub mod analytics;
pub mod submissions;

use serde::{Deserialize, Serialize};

pub use analytics::{AnalyticsStore, DailyCount, Step};
pub use submissions::{JsonlStore, StoredSubmission, Submission, SubmissionStore};

/// Opaque per-run session identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// `session_<unix millis>_<9 random chars>`
    pub fn generate() -> Self {
        let millis = chrono::Utc::now().timestamp_millis();
        let random = uuid::Uuid::new_v4().simple().to_string();
        SessionId(format!("session_{}_{}", millis, &random[..9]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionId {
    fn from(value: String) -> Self {
        SessionId(value)
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
