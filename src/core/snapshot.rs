//! Snapshot codecs for `GameState`.
//!
//! - JSON is the wire shape shared with clients and transports.
//! - bincode is a compact checkpoint for in-process save/restore.

use thiserror::Error;

use super::state::GameState;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("json snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary snapshot: {0}")]
    Binary(#[from] bincode::Error),
}

impl GameState {
    /// Serialize to the JSON wire shape.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse the JSON wire shape.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode a binary checkpoint.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a binary checkpoint.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
