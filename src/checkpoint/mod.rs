//! Checkpoint and restore for state controllers.
//!
//! A checkpoint captures everything about a controller except its transition
//! table, which is code and is supplied again on restore.

use crate::config::ControllerConfig;
use crate::core::{Event, State, StateHistory};
use crate::machine::{ControllerStats, StateController, TransitionTable};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a controller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Checkpoint<S: State> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    pub initial_state: S,

    pub current_state: S,

    /// Retained transition history
    pub history: StateHistory<S>,

    pub stats: ControllerStats,

    pub config: ControllerConfig,
}

impl<S: State> Checkpoint<S> {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(input: &str) -> Result<Self, CheckpointError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Check version and internal consistency.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        if let Some(last) = self.history.last() {
            if last.to != self.current_state {
                return Err(CheckpointError::Inconsistent(format!(
                    "current state '{}' does not match last recorded transition to '{}'",
                    self.current_state.name(),
                    last.to.name()
                )));
            }
        } else if self.current_state != self.initial_state && self.stats.entered == 0 {
            return Err(CheckpointError::Inconsistent(format!(
                "current state '{}' differs from initial '{}' with no recorded transitions",
                self.current_state.name(),
                self.initial_state.name()
            )));
        }

        let outcomes = self
            .stats
            .entered
            .checked_add(self.stats.rejected)
            .ok_or_else(|| CheckpointError::Inconsistent("stats counters overflow".to_string()))?;
        if outcomes > self.stats.handled {
            return Err(CheckpointError::Inconsistent(
                "stats count more outcomes than handled events".to_string(),
            ));
        }

        if self.history.len() > self.stats.entered {
            return Err(CheckpointError::Inconsistent(format!(
                "history holds {} transitions but stats record only {} moves",
                self.history.len(),
                self.stats.entered
            )));
        }

        self.config
            .validate()
            .map_err(|e| CheckpointError::Inconsistent(e.to_string()))
    }
}

impl<S, E, T> StateController<S, E, T>
where
    S: State,
    E: Event,
    T: TransitionTable<S, E>,
{
    /// Capture the controller's state, history and counters.
    pub fn checkpoint(&self) -> Checkpoint<S> {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            initial_state: self.initial_state().clone(),
            current_state: self.current_state().clone(),
            history: self.history().clone(),
            stats: self.stats(),
            config: self.config().clone(),
        }
    }

    /// Rebuild a controller from a checkpoint and its transition table.
    pub fn restore(checkpoint: Checkpoint<S>, table: T) -> Result<Self, CheckpointError> {
        checkpoint.validate()?;
        info!(
            checkpoint = %checkpoint.id,
            state = checkpoint.current_state.name(),
            "Restoring controller from checkpoint"
        );

        Ok(Self::from_parts(
            checkpoint.initial_state,
            checkpoint.current_state,
            table,
            checkpoint.history,
            checkpoint.stats,
            checkpoint.config,
        ))
    }
}
