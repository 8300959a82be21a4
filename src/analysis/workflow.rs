// src/analysis/workflow.rs
//! Per-slot lifecycle shared by both coordinators

use std::sync::atomic::{AtomicU64, Ordering};

use crate::core::config_manager::ResponseOrdering;

/// Lifecycle of one slot. A new dispatch from any state moves back to
/// `Loading` and drops the previous payload.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for WorkflowState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> WorkflowState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Monotonic dispatch counter for one slot
#[derive(Debug)]
pub struct SlotSequencer {
    ordering: ResponseOrdering,
    latest: AtomicU64,
}

impl SlotSequencer {
    pub fn new(ordering: ResponseOrdering) -> Self {
        Self {
            ordering,
            latest: AtomicU64::new(0),
        }
    }

    /// Stamp a new dispatch
    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether a response for `sequence` may still be written to the slot
    pub fn accepts(&self, sequence: u64) -> bool {
        match self.ordering {
            ResponseOrdering::LastResponseWins => true,
            ResponseOrdering::LatestDispatchWins => self.latest.load(Ordering::SeqCst) == sequence,
        }
    }
}
