//! Delegation log ring buffer
//!
//! Keeps a bounded, append-only history of routing decisions and their
//! observed outcomes for dashboards and WebSocket subscribers.

pub mod types;

pub use types::{DelegationLogEntry, OutcomeStatus};

use std::collections::VecDeque;
use std::sync::{PoisonError, RwLock};

use crate::routing::RoutingDecision;

/// Default number of retained entries.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Fixed-capacity FIFO log of delegations.
///
/// Appends are serialized behind a write lock, so readers always see whole
/// entries. The buffer is allocated once at full capacity and never grows.
pub struct DelegationLog {
    entries: RwLock<VecDeque<DelegationLogEntry>>,
    capacity: usize,
}

impl DelegationLog {
    /// Creates a log holding the last 1000 entries
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a log with the given capacity (minimum 1)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: RwLock::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Appends an entry, evicting the oldest one when full
    pub fn append(&self, entry: DelegationLogEntry) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// Records a decision with its outcome and returns the stored entry
    pub fn log_entry(
        &self,
        decision: RoutingDecision,
        status: OutcomeStatus,
        response_time_ms: Option<u64>,
    ) -> DelegationLogEntry {
        let entry = DelegationLogEntry::new(decision, status, response_time_ms);
        self.append(entry.clone());
        tracing::debug!(
            id = %entry.id,
            status = %status,
            retained = self.len(),
            "Logged delegation"
        );
        entry
    }

    /// Returns up to `n` most recent entries, oldest first
    pub fn recent(&self, n: usize) -> Vec<DelegationLogEntry> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let skip = entries.len().saturating_sub(n);
        entries.iter().skip(skip).cloned().collect()
    }

    /// Returns all retained entries in chronological order
    pub fn get_all(&self) -> Vec<DelegationLogEntry> {
        self.recent(self.capacity)
    }

    /// Number of retained entries (evicted entries are not counted)
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for DelegationLog {
    fn default() -> Self {
        Self::new()
    }
}
