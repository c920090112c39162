use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaseError {
    /// A conversion was asked for on something that is not text.
    #[error("invalid input type: expected a string, found {found}")]
    InvalidInputType { found: &'static str },

    #[error("unknown case style: {0} (expected one of: camel, dot)")]
    UnknownStyle(String),

    #[error("malformed JSON input: {0}")]
    Json(#[from] serde_json::Error),
}
