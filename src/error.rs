//! @acp:module "Errors"
//! @acp:summary "Library error type shared by catalog validation, rendering and storage"
//! @acp:domain cli
//! @acp:layer types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the collaborators around the engine.
///
/// Question generation itself never fails; these cover content validation,
/// rendering, configuration and persistence.
#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Storage error at {path:?}: {message}")]
    Store { path: PathBuf, message: String },

    #[error("Duplicate question id '{id}' (first in {first}, again in {second})")]
    DuplicateQuestionId {
        id: String,
        first: String,
        second: String,
    },

    #[error("Unknown output format: {0}")]
    UnknownFormat(String),
}

pub type Result<T> = std::result::Result<T, AdvisorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_id_display() {
        let err = AdvisorError::DuplicateQuestionId {
            id: "q_fiduciary".to_string(),
            first: "baseline".to_string(),
            second: "fee_education".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Duplicate question id 'q_fiduciary' (first in baseline, again in fee_education)"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: AdvisorError = io.into();
        assert!(matches!(err, AdvisorError::Io(_)));
    }
}
