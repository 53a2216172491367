use crate::domain::Property;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

/// Handed out when a fetch starts; presented again when it finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket {
    generation: u64,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Default)]
struct CacheState {
    properties: Vec<Property>,
    issued: u64,
    applied: u64,
}

/// Last known property list, shared by every worker thread.
///
/// Fetches may overlap; a result is stored only if it was started after the
/// result currently held, so a slow old response never replaces a newer list.
#[derive(Default)]
pub struct ListingCache {
    state: Mutex<CacheState>,
}

impl ListingCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, CacheState> {
        // poisoning cannot leave the list half-written
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn begin_fetch(&self) -> FetchTicket {
        let mut state = self.lock();
        state.issued += 1;
        FetchTicket {
            generation: state.issued,
        }
    }

    /// Returns false when the result was stale and dropped.
    pub fn complete(&self, ticket: FetchTicket, properties: Vec<Property>) -> bool {
        let mut state = self.lock();
        if ticket.generation <= state.applied {
            debug!(
                generation = ticket.generation,
                applied = state.applied,
                "discarding stale property list"
            );
            return false;
        }

        state.properties = properties;
        state.applied = ticket.generation;
        true
    }

    pub fn snapshot(&self) -> Vec<Property> {
        self.lock().properties.clone()
    }
}
