use thiserror::Error;

/// Errors surfaced by this crate.
///
/// Constructors are total and never fail; the only fallible surface is
/// serializing an assembled payload.
#[derive(Debug, Error)]
pub enum BlockKitError {
    #[error("Failed to serialize message payload: {0}")]
    SerializeError(String),
}

impl From<serde_json::Error> for BlockKitError {
    fn from(error: serde_json::Error) -> Self {
        BlockKitError::SerializeError(error.to_string())
    }
}
