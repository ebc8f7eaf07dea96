//! Document construction errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PmmlError {
    #[error("a mining schema needs at least one field")]
    NoFields,
    #[error("duplicate field `{0}`")]
    DuplicateField(String),
    #[error("unknown {kind} `{token}`")]
    UnknownToken { kind: &'static str, token: String },
    #[error("document serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
