//! Saving and restoring a calculator session.
//!
//! A checkpoint captures the operand state, angle mode and history so a UI
//! can persist a session and resume it later. The crate performs no I/O;
//! checkpoints are encoded to JSON text or compact binary and the caller
//! decides where they go.

use crate::core::{AngleMode, EngineState, HistoryLog};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a calculator session.
///
/// Pending second-operand requests are not captured.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Operands and pending operation
    pub state: EngineState,

    /// Angle mode in effect
    pub angle_mode: AngleMode,

    /// Calculation history, newest first
    pub history: HistoryLog,
}

impl Checkpoint {
    pub fn new(state: EngineState, angle_mode: AngleMode, history: HistoryLog) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            state,
            angle_mode,
            history,
        }
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::EncodeFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DecodeFailed(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::EncodeFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DecodeFailed(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    /// Check the version and the engine invariants a restore relies on.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        if self.state.current().is_empty() {
            return Err(CheckpointError::InvalidSession(
                "current operand is empty".to_string(),
            ));
        }
        if self
            .state
            .pending()
            .is_some_and(|pending| pending.operand.is_empty())
        {
            return Err(CheckpointError::InvalidSession(
                "pending operation has no operand".to_string(),
            ));
        }
        if self.history.len() > self.history.capacity() {
            return Err(CheckpointError::InvalidSession(format!(
                "history holds {} entries but capacity is {}",
                self.history.len(),
                self.history.capacity()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Operator, PendingOperation};

    fn sample() -> Checkpoint {
        let mut history = HistoryLog::new();
        history.record("5 + 3", "8");
        let state = EngineState {
            current: "2".to_string(),
            pending: Some(PendingOperation {
                operator: Operator::Multiply,
                operand: "8".to_string(),
            }),
        };
        Checkpoint::new(state, AngleMode::Radians, history)
    }

    #[test]
    fn json_round_trip_preserves_session() {
        let checkpoint = sample();
        let json = checkpoint.to_json().unwrap();
        let restored = Checkpoint::from_json(&json).unwrap();
        assert_eq!(checkpoint, restored);
    }

    #[test]
    fn binary_round_trip_preserves_session() {
        let checkpoint = sample();
        let bytes = checkpoint.to_bytes().unwrap();
        let restored = Checkpoint::from_bytes(&bytes).unwrap();
        assert_eq!(checkpoint, restored);
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let mut checkpoint = sample();
        checkpoint.version = CHECKPOINT_VERSION + 1;
        let json = checkpoint.to_json().unwrap();

        match Checkpoint::from_json(&json) {
            Err(CheckpointError::UnsupportedVersion { found, supported }) => {
                assert_eq!(found, CHECKPOINT_VERSION + 1);
                assert_eq!(supported, CHECKPOINT_VERSION);
            }
            other => panic!("Expected UnsupportedVersion, got {other:?}"),
        }
    }

    #[test]
    fn empty_operand_fails_validation() {
        let mut checkpoint = sample();
        checkpoint.state.current.clear();
        assert!(matches!(
            checkpoint.validate(),
            Err(CheckpointError::InvalidSession(_))
        ));
    }

    #[test]
    fn garbage_fails_to_deserialize() {
        assert!(matches!(
            Checkpoint::from_json("[]"),
            Err(CheckpointError::DecodeFailed(_))
        ));
        assert!(matches!(
            Checkpoint::from_bytes(&[1, 2, 3]),
            Err(CheckpointError::DecodeFailed(_))
        ));
    }

    #[test]
    fn checkpoints_get_distinct_ids() {
        assert_ne!(sample().id, sample().id);
    }
}
