use thiserror::Error;

/// Failures while decoding a delivered gaming payload.
///
/// These never escape the load functions: the repository logs the failure and
/// keeps whatever payload was stored before.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The startup string was not a JSON object with a string `payload`
    /// field. Covers both malformed JSON and a missing/mistyped field.
    #[error("invalid startup payload string: {0}")]
    InvalidStartupPayload(#[from] serde_json::Error),
}
