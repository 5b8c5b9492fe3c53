//! @acp:module "Step Analytics"
//! @acp:summary "Per-step, per-day visit counters"
//! @acp:domain store
//! @acp:layer io

use std::fs;
use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, Result};

/// Flow steps the questionnaire passes through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Landing,
    Questions,
    Results,
}

impl Step {
    pub fn as_str(self) -> &'static str {
        match self {
            Step::Landing => "landing",
            Step::Questions => "questions",
            Step::Results => "results",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub step: Step,
    pub event_date: NaiveDate,
    pub count: u64,
}

/// JSON file of [`DailyCount`] rows
#[derive(Debug, Clone)]
pub struct AnalyticsStore {
    path: PathBuf,
}

impl AnalyticsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Count one visit to `step` today; returns the new count
    pub fn track(&self, step: Step) -> Result<u64> {
        self.track_on(step, Utc::now().date_naive())
    }

    pub fn track_on(&self, step: Step, date: NaiveDate) -> Result<u64> {
        let mut rows = self.load()?;

        let count = match rows
            .iter_mut()
            .find(|r| r.step == step && r.event_date == date)
        {
            Some(row) => {
                row.count += 1;
                row.count
            }
            None => {
                rows.push(DailyCount {
                    step,
                    event_date: date,
                    count: 1,
                });
                1
            }
        };

        self.write(&rows)?;
        tracing::debug!("Tracked step {} on {} (count={})", step.as_str(), date, count);
        Ok(count)
    }

    /// All counters; a missing or unparseable file has none
    pub fn load(&self) -> Result<Vec<DailyCount>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        match serde_json::from_str(&content) {
            Ok(rows) => Ok(rows),
            Err(e) => {
                tracing::warn!("Discarding unreadable analytics at {:?}: {}", self.path, e);
                Ok(Vec::new())
            }
        }
    }

    /// Total visits per step across all days
    pub fn totals(&self) -> Result<Vec<(Step, u64)>> {
        let rows = self.load()?;
        Ok([Step::Landing, Step::Questions, Step::Results]
            .into_iter()
            .map(|step| {
                let total: u64 = rows.iter().filter(|r| r.step == step).map(|r| r.count).sum();
                (step, total)
            })
            .collect())
    }

    fn write(&self, rows: &[DailyCount]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| AdvisorError::Store {
                    path: parent.to_path_buf(),
                    message: e.to_string(),
                })?;
            }
        }
        let content = serde_json::to_string_pretty(rows)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
