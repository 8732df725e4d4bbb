use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SurveyError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid YAML definition: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A survey or step was given an empty identifier.
    #[error("{0} identifier must not be empty")]
    EmptyIdentifier(&'static str),

    #[error("duplicate step identifier `{0}`")]
    DuplicateStep(String),

    #[error("duplicate item identifier `{item}` in step `{step}`")]
    DuplicateItem { step: String, item: String },

    #[error("invalid text pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, SurveyError>;
