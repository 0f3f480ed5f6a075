//! Checkpoint and restore of router tree state.
//!
//! A checkpoint captures the state and history of every registered router so
//! a tree can be put back where it was after a reload. Tree structure is not
//! included: routers are re-registered by the caller, then `restore` puts
//! their state back.

use crate::core::{RouterHistory, RouterState};
use crate::manager::{Manager, ManagerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Saved state of a single router.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouterSnapshot {
    pub state: RouterState,
    pub history: RouterHistory,
}

/// Serializable checkpoint of a router tree's state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeCheckpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Manager the checkpoint was taken from
    pub manager: ManagerId,

    /// Root router name at checkpoint time
    pub root: Option<String>,

    /// Per-router state, keyed by router name
    pub routers: BTreeMap<String, RouterSnapshot>,
}

impl TreeCheckpoint {
    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self).map_err(CheckpointError::Encode)
    }

    /// Deserialize from JSON, rejecting unsupported versions.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json).map_err(CheckpointError::Decode)?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    fn check_version(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        Ok(())
    }
}

impl<L> Manager<L> {
    /// Capture the state and history of every registered router.
    pub fn checkpoint(&self) -> TreeCheckpoint {
        let routers = self
            .tree
            .iter()
            .map(|router| {
                (
                    router.name().to_string(),
                    RouterSnapshot {
                        state: router.state().clone(),
                        history: router.history().clone(),
                    },
                )
            })
            .collect();

        TreeCheckpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            manager: self.id,
            root: self.tree.root_name().map(str::to_string),
            routers,
        }
    }

    /// Put every router in `checkpoint` back to its saved state and history.
    ///
    /// All snapshots are checked before anything is applied; on error the
    /// tree is unchanged. Registered routers the checkpoint does not mention
    /// keep their current state. Each replacement is reported to listeners.
    ///
    /// # Errors
    ///
    /// - `UnsupportedVersion` for a foreign checkpoint format
    /// - `Rejected` listing every unknown router and every history
    ///   that breaks this manager's retention rules
    pub fn restore(&mut self, checkpoint: &TreeCheckpoint) -> Result<(), CheckpointError> {
        checkpoint.check_version()?;

        let limit = self.config.history_limit;
        let mut problems = Vec::new();
        for (name, snapshot) in &checkpoint.routers {
            if !self.tree.contains(name) {
                problems.push(format!("router '{name}' is not registered"));
            }
            for problem in snapshot.history.violations(limit) {
                problems.push(format!("router '{name}': {problem}"));
            }
        }
        if !problems.is_empty() {
            warn!(
                checkpoint = %checkpoint.id,
                problems = problems.len(),
                "rejected checkpoint"
            );
            return Err(CheckpointError::Rejected { problems });
        }

        let mut events = Vec::new();
        for (name, snapshot) in &checkpoint.routers {
            if let Some(router) = self.tree.get_mut(name) {
                events.extend(router.replace(snapshot.state.clone(), snapshot.history.clone()));
            }
        }
        debug!(
            checkpoint = %checkpoint.id,
            routers = checkpoint.routers.len(),
            "restored checkpoint"
        );
        self.notify(&events);
        Ok(())
    }
}
