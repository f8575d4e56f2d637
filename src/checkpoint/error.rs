//! Checkpoint error types.

use thiserror::Error;

/// Errors raised while encoding, decoding or checking a session checkpoint
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// The session could not be encoded as JSON or binary
    #[error("Could not encode checkpoint: {0}")]
    EncodeFailed(String),

    /// The input is not a checkpoint in the expected encoding
    #[error("Could not decode checkpoint: {0}")]
    DecodeFailed(String),

    /// Written by a newer or older checkpoint format
    #[error("Checkpoint format version {found} is not supported (expected {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Decoded, but the session it describes breaks an engine invariant
    #[error("Checkpoint describes an invalid session: {0}")]
    InvalidSession(String),
}
