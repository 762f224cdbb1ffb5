//! Errors raised while encoding, decoding or restoring controller snapshots.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("JSON checkpoint encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Binary checkpoint encoding failed: {0}")]
    Binary(#[from] bincode::Error),

    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The snapshot decoded but describes an impossible controller
    #[error("Inconsistent checkpoint: {0}")]
    Inconsistent(String),
}
