//! Reconfiguration gate.
//!
//! A single-slot pending-configuration buffer plus a busy flag. The gate
//! decouples "a new problem description arrived" from "the worker is free
//! to start it": `submit` may be called at any time, including while a
//! search is running, and never touches search state. Claiming is an
//! atomic try-start, not an unsynchronized check-then-act.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::grid::{GridPos, Maze};

/// An inbound configuration request as delivered off the wire.
///
/// Either field may be missing; an incomplete request suppresses the
/// submission entirely rather than raising an error. The goal field also
/// accepts the legacy wire name `exit`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ConfigRequest {
    /// Maze rows, `1` = wall.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maze: Option<Vec<Vec<u8>>>,

    /// Goal position `[col, row]`.
    #[serde(default, alias = "exit", skip_serializing_if = "Option::is_none")]
    pub goal: Option<GridPos>,
}

impl ConfigRequest {
    /// Create a complete request.
    #[must_use]
    pub fn new(maze: Vec<Vec<u8>>, goal: GridPos) -> Self {
        Self {
            maze: Some(maze),
            goal: Some(goal),
        }
    }

    /// Convert into a pending configuration, or `None` if incomplete.
    #[must_use]
    pub fn into_pending(self) -> Option<PendingConfig> {
        match (self.maze, self.goal) {
            (Some(maze), Some(goal)) => Some(PendingConfig {
                maze: Maze::from_rows(&maze),
                goal,
            }),
            _ => None,
        }
    }
}

/// A complete configuration awaiting pickup by the driving loop.
#[derive(Clone, Debug)]
pub struct PendingConfig {
    /// The maze to search.
    pub maze: Maze,
    /// The goal state.
    pub goal: GridPos,
}

/// Single-slot configuration gate shared between the submitting thread and
/// the search worker.
///
/// The slot is last-write-wins: a newer configuration silently overwrites
/// an unconsumed older one. The busy flag stays set for the full duration
/// of a search, so at most one search is ever in flight.
#[derive(Debug, Default)]
pub struct SearchGate {
    pending: Mutex<Option<PendingConfig>>,
    busy: AtomicBool,
}

impl SearchGate {
    /// Create an empty gate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a configuration request as the pending configuration.
    ///
    /// Incomplete requests are dropped silently. Never blocks on a running
    /// search; the mutex only guards the slot itself.
    pub fn submit(&self, request: ConfigRequest) {
        let Some(config) = request.into_pending() else {
            log::debug!("Dropping incomplete configuration request");
            return;
        };

        let mut slot = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if slot.is_some() {
            log::info!("Overwriting unconsumed pending configuration");
        }
        *slot = Some(config);
    }

    /// Atomically move from idle to running and take the pending
    /// configuration.
    ///
    /// Returns `None` if a search is already running or nothing is
    /// pending. On success the busy flag stays set until `finish`.
    pub fn try_claim(&self) -> Option<PendingConfig> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return None;
        }

        let taken = self
            .pending
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();

        if taken.is_none() {
            // Nothing to run; go back to idle.
            self.busy.store(false, Ordering::Release);
        }
        taken
    }

    /// Mark the in-flight search as finished, returning the gate to idle.
    pub fn finish(&self) {
        self.busy.store(false, Ordering::Release);
    }

    /// Whether a search is currently in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Whether an unconsumed configuration is pending.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }
}
