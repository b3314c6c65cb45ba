//! Checkpoint - Save/Restore Engine State
//!
//! Captures the four state words of an engine so a run can be paused and
//! resumed on a fresh instance.
//!
//! # Critical Invariants
//!
//! - **Continuity**: a restored engine emits exactly the outputs the original
//!   would have emitted next (no warm-up is re-run)
//! - **Integrity**: the SHA-256 checksum over the state words must match
//! - **No mutation**: restoring builds a new engine, it never rewrites one

use log::warn;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use super::xorshift::XorShiftEngine;

/// Errors from snapshot encoding and restore
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckpointError {
    #[error("Snapshot serialization failed: {0}")]
    Serialization(String),

    #[error("Snapshot checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },
}

/// Serializable engine state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// State words `(s0, s1, s2, s3)`
    pub state: [u32; 4],

    /// SHA-256 hex digest of the state words (little-endian)
    pub checksum: String,
}

impl EngineSnapshot {
    /// Build a snapshot and compute its checksum
    pub fn new(state: [u32; 4]) -> Self {
        Self {
            state,
            checksum: state_checksum(&state),
        }
    }

    /// Check the stored checksum against the state words
    pub fn verify(&self) -> Result<(), CheckpointError> {
        let actual = state_checksum(&self.state);
        if actual != self.checksum {
            warn!("rejecting engine snapshot with mismatched checksum");
            return Err(CheckpointError::ChecksumMismatch {
                expected: self.checksum.clone(),
                actual,
            });
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::Serialization(e.to_string()))
    }

    /// Parse and verify a snapshot
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let snapshot: Self =
            serde_json::from_str(json).map_err(|e| CheckpointError::Serialization(e.to_string()))?;
        snapshot.verify()?;
        Ok(snapshot)
    }
}

/// Compute SHA-256 over the state words
fn state_checksum(state: &[u32; 4]) -> String {
    let mut hasher = Sha256::new();
    for word in state {
        hasher.update(word.to_le_bytes());
    }
    format!("{:x}", hasher.finalize())
}

impl XorShiftEngine {
    /// Capture current state
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot::new(self.state())
    }

    /// Create a new engine continuing from `snapshot`
    pub fn restore(snapshot: &EngineSnapshot) -> Result<Self, CheckpointError> {
        snapshot.verify()?;
        Ok(Self::from_state(snapshot.state))
    }
}
