// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded query → results cache with least-recently-used eviction.
//!
//! Keys are the raw query text exactly as the caller passed it, before any
//! case or accent folding. "Quijote" and "quijote" are separate entries even
//! when they produce identical results.
//!
//! Recency is a logical clock bumped under the lock on every hit and insert,
//! so there is always exactly one oldest entry. Wall-clock stamps can tie.
//!
//! # Concurrency
//!
//! One `parking_lot::Mutex` guards the map and the clock. A lookup (with its
//! recency bump) and an insert (with its eviction) are each a single critical
//! section, so two queries can never both decide to evict the same entry.
//! Scoring happens outside the lock.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::contracts::check_cache_bound;
use crate::types::Match;

/// Default number of distinct queries kept.
pub const DEFAULT_MAX_CACHE_ELEMENTS: usize = 100;

/// Results stored for one query.
#[derive(Debug)]
pub struct CacheEntry<T> {
    pub results: Arc<Vec<Match<T>>>,
    pub last_access: u64,
}

struct CacheState<T> {
    entries: HashMap<String, CacheEntry<T>>,
    clock: u64,
}

impl<T> CacheState<T> {
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }
}

/// Thread-safe result cache holding at most `capacity` queries.
///
/// A capacity of zero disables caching: inserts are dropped.
pub struct ResultCache<T> {
    state: Mutex<CacheState<T>>,
    capacity: usize,
}

impl<T> ResultCache<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            state: Mutex::new(CacheState {
                entries: HashMap::with_capacity(capacity.min(1024)),
                clock: 0,
            }),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Cached results for `query`, marking the entry as most recently used.
    pub fn get(&self, query: &str) -> Option<Arc<Vec<Match<T>>>> {
        let mut state = self.state.lock();
        let now = state.tick();
        let entry = state.entries.get_mut(query)?;
        entry.last_access = now;
        Some(Arc::clone(&entry.results))
    }

    /// Store results for `query`.
    ///
    /// If `query` is new and the cache is full, exactly one entry (the least
    /// recently used) is evicted first; its key is returned.
    pub fn insert(&self, query: String, results: Arc<Vec<Match<T>>>) -> Option<String> {
        if self.capacity == 0 {
            return None;
        }

        let mut state = self.state.lock();
        let mut evicted = None;

        if !state.entries.contains_key(&query) && state.entries.len() >= self.capacity {
            let oldest = state
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_access)
                .map(|(key, _)| key.clone());
            if let Some(key) = oldest {
                state.entries.remove(&key);
                evicted = Some(key);
            }
        }

        let now = state.tick();
        state.entries.insert(
            query,
            CacheEntry {
                results,
                last_access: now,
            },
        );
        check_cache_bound(state.entries.len(), self.capacity);

        evicted
    }

    pub fn contains(&self, query: &str) -> bool {
        self.state.lock().entries.contains_key(query)
    }

    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.state.lock().entries.clear();
    }
}

impl<T> Default for ResultCache<T> {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CACHE_ELEMENTS)
    }
}

impl<T> std::fmt::Debug for ResultCache<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultCache")
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}
