//! Checkpoint error types.

use thiserror::Error;

/// Errors that can occur when saving or restoring a tree checkpoint
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("Failed to encode checkpoint as JSON")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to decode checkpoint JSON")]
    Decode(#[source] serde_json::Error),

    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Every reason the checkpoint does not fit the target tree
    #[error("Checkpoint rejected: {}", .problems.join("; "))]
    Rejected { problems: Vec<String> },
}
