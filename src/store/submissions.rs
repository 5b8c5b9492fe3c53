//! @acp:module "Submission Log"
//! @acp:summary "Append-only JSON-lines log of answers and generated checklists"
//! @acp:domain store
//! @acp:layer io

use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::SessionId;
use crate::engine::GeneratedQuestion;
use crate::error::{AdvisorError, Result};
use crate::questionnaire::{AnswerSet, RawAnswers};

/// One completed questionnaire, as handed to persistence
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub session_id: SessionId,
    #[serde(flatten)]
    pub answers: RawAnswers,
    pub generated_questions: Vec<GeneratedQuestion>,
    pub completed_at: DateTime<Utc>,
}

impl Submission {
    pub fn new(
        session_id: SessionId,
        answers: &AnswerSet,
        generated_questions: Vec<GeneratedQuestion>,
    ) -> Self {
        Self {
            session_id,
            answers: answers.clone().into(),
            generated_questions,
            completed_at: Utc::now(),
        }
    }
}

/// A submission read back from the log.
///
/// Generated questions are kept as raw JSON; the catalog they came from may
/// have changed since.
#[derive(Debug, Clone, Deserialize)]
pub struct StoredSubmission {
    pub session_id: SessionId,
    #[serde(flatten)]
    pub answers: RawAnswers,
    #[serde(default)]
    pub generated_questions: Vec<serde_json::Value>,
    pub completed_at: DateTime<Utc>,
}

/// Persistence collaborator for completed submissions
pub trait SubmissionStore: Send + Sync {
    fn save(&self, submission: &Submission) -> Result<()>;
}

/// Stores one JSON object per line
#[derive(Debug, Clone)]
pub struct JsonlStore {
    path: PathBuf,
}

impl JsonlStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read every stored submission; a missing log is empty
    pub fn load_all(&self) -> Result<Vec<StoredSubmission>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = fs::File::open(&self.path)?;
        let mut submissions = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<StoredSubmission>(&line) {
                Ok(submission) => submissions.push(submission),
                Err(e) => tracing::warn!(
                    "Skipping malformed submission at {:?}:{}: {}",
                    self.path,
                    index + 1,
                    e
                ),
            }
        }
        Ok(submissions)
    }
}

impl SubmissionStore for JsonlStore {
    fn save(&self, submission: &Submission) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| AdvisorError::Store {
                    path: parent.to_path_buf(),
                    message: e.to_string(),
                })?;
            }
        }

        let line = serde_json::to_string(submission)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| AdvisorError::Store {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        writeln!(file, "{}", line)?;

        tracing::debug!(
            "Saved submission {} ({} questions) to {:?}",
            submission.session_id,
            submission.generated_questions.len(),
            self.path
        );
        Ok(())
    }
}
