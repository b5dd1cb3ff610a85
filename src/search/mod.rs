// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search engine: index once, query many times.
//!
//! A query runs through these stages:
//!
//! ```text
//! query ──► empty? ──► cache hit? ──► fold + tokenize ──► par fan-out ──► rank ──► cache
//!             │            │                               (one task per
//!             ▼            ▼                                 element)
//!            []      filter by predicate
//! ```
//!
//! Elements are scored independently, so the fan-out is a plain rayon
//! `filter_map`. Output order before ranking is element order regardless of
//! how the work was scheduled.
//!
//! An element that fails to score (an empty field, say) is logged and left
//! out. It never fails the query.

mod evaluate;

pub use evaluate::{evaluate, PreparedQuery};

use std::sync::Arc;
use std::time::Instant;

use log::{debug, warn};
use rayon::prelude::*;

use crate::cache::{ResultCache, DEFAULT_MAX_CACHE_ELEMENTS};
use crate::contracts::{check_index_aligned, check_ranked};
use crate::error::ConfigError;
use crate::fuzzy::{DamerauLevenshtein, EditCosts};
use crate::index::SearchIndex;
use crate::options::Options;
use crate::scoring::{rank_matches, MatchScorer};
use crate::types::{Match, Searchable};

type Predicate<'a, T> = &'a (dyn Fn(&T) -> bool + Sync);

/// Fuzzy search over a fixed collection.
///
/// The collection, options and index are immutable after construction. The
/// result cache is the only shared mutable state and is internally locked, so
/// a `&SearchEngine` can be queried from many threads at once.
pub struct SearchEngine<T> {
    elements: Vec<Arc<T>>,
    options: Options,
    index: SearchIndex,
    scorer: MatchScorer,
    cache: ResultCache<T>,
    pool: Option<rayon::ThreadPool>,
}

impl<T: Searchable + Send + Sync> SearchEngine<T> {
    /// Index `elements` with the default cache capacity.
    ///
    /// ```
    /// use fuzzrank::{Options, SearchEngine};
    ///
    /// let engine = SearchEngine::new(vec!["Don Quijote", "Cervantes"], Options::default()).unwrap();
    /// let results = engine.search("quixote");
    /// assert_eq!(*results[0].item, "Don Quijote");
    /// ```
    pub fn new(elements: Vec<T>, options: Options) -> Result<Self, ConfigError> {
        Self::with_cache_capacity(elements, options, DEFAULT_MAX_CACHE_ELEMENTS)
    }

    /// Index `elements`, caching at most `max_cache_elements` queries.
    ///
    /// A capacity of zero disables caching.
    pub fn with_cache_capacity(
        elements: Vec<T>,
        options: Options,
        max_cache_elements: usize,
    ) -> Result<Self, ConfigError> {
        options.validate()?;
        let index = SearchIndex::build(&elements, &options)?;
        Ok(Self::assemble(elements, options, index, max_cache_elements))
    }
}

impl<T: Send + Sync> SearchEngine<T> {
    /// Index elements through a caller-supplied accessor instead of
    /// [`Searchable`]. The accessor returns one value per field; `keys` in
    /// `options` is not consulted.
    pub fn with_accessor<F>(
        elements: Vec<T>,
        options: Options,
        max_cache_elements: usize,
        accessor: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&T) -> Vec<String> + Sync,
    {
        options.validate()?;
        let values: Vec<Vec<String>> = elements.par_iter().map(&accessor).collect();
        let index = SearchIndex::from_values(values, &options);
        Ok(Self::assemble(elements, options, index, max_cache_elements))
    }

    fn assemble(elements: Vec<T>, options: Options, index: SearchIndex, capacity: usize) -> Self {
        check_index_aligned(index.len(), elements.len());
        debug!(
            "search engine ready: {} elements, cache capacity {}",
            elements.len(),
            capacity
        );
        Self {
            elements: elements.into_iter().map(Arc::new).collect(),
            scorer: MatchScorer::new(options.exhaustive),
            options,
            index,
            cache: ResultCache::new(capacity),
            pool: None,
        }
    }

    /// Run queries on a dedicated pool of `threads` workers instead of the
    /// global rayon pool.
    pub fn with_threads(mut self, threads: usize) -> Result<Self, ConfigError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("fuzzrank-{i}"))
            .build()
            .map_err(|e| ConfigError::ThreadPool(e.to_string()))?;
        self.pool = Some(pool);
        Ok(self)
    }

    /// Replace the unit edit costs. Cached results are dropped since they
    /// were scored under the old costs.
    pub fn with_edit_costs(mut self, costs: EditCosts) -> Self {
        self.scorer =
            MatchScorer::with_distance(DamerauLevenshtein::with_costs(costs), self.options.exhaustive);
        self.cache.clear();
        self
    }

    /// All elements that qualify for `query`, ranked when `sorted` is on.
    ///
    /// An empty query returns nothing and leaves the cache alone.
    pub fn search(&self, query: &str) -> Vec<Match<T>> {
        self.run(query, None)
    }

    /// Like [`search`](Self::search), restricted to elements the predicate accepts.
    ///
    /// On a cache hit the predicate filters the cached results. On a miss only
    /// accepted elements are scored, and that partial result is not cached.
    pub fn search_with<P>(&self, query: &str, predicate: P) -> Vec<Match<T>>
    where
        P: Fn(&T) -> bool + Sync,
    {
        self.run(query, Some(&predicate))
    }

    fn run(&self, query: &str, predicate: Option<Predicate<'_, T>>) -> Vec<Match<T>> {
        if query.is_empty() {
            return Vec::new();
        }

        if let Some(cached) = self.cache.get(query) {
            debug!("cache hit for {:?} ({} results)", query, cached.len());
            return match predicate {
                Some(accept) => cached
                    .iter()
                    .filter(|m| accept(&*m.item))
                    .cloned()
                    .collect(),
                None => cached.as_ref().clone(),
            };
        }

        let start = Instant::now();
        let prepared = PreparedQuery::new(query, &self.options);
        if self.options.tokenize && prepared.tokens.is_empty() {
            debug!("query {:?} has no tokens", query);
            return Vec::new();
        }

        let mut matches = self.install(|| self.evaluate_all(&prepared, predicate));
        if self.options.sorted {
            rank_matches(&mut matches);
            check_ranked(&matches);
        }

        debug!(
            "cache miss for {:?}: {} of {} elements matched in {:?}",
            query,
            matches.len(),
            self.elements.len(),
            start.elapsed()
        );

        if predicate.is_some() {
            return matches;
        }

        let results = Arc::new(matches);
        if let Some(evicted) = self.cache.insert(query.to_string(), Arc::clone(&results)) {
            debug!("evicted {:?} from the result cache", evicted);
        }
        results.as_ref().clone()
    }

    fn evaluate_all(
        &self,
        query: &PreparedQuery,
        predicate: Option<Predicate<'_, T>>,
    ) -> Vec<Match<T>> {
        self.elements
            .par_iter()
            .zip(self.index.entries().par_iter())
            .enumerate()
            .filter_map(|(position, (item, entry))| {
                if !predicate.map_or(true, |accept| accept(&**item)) {
                    return None;
                }
                match evaluate(&self.scorer, &self.options, query, entry, item, position) {
                    Ok(found) => found,
                    Err(e) => {
                        warn!("skipping element {}: {}", position, e);
                        None
                    }
                }
            })
            .collect()
    }

    fn install<R, F>(&self, op: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn elements(&self) -> &[Arc<T>] {
        &self.elements
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    /// Number of queries currently cached.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

impl<T> std::fmt::Debug for SearchEngine<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEngine")
            .field("elements", &self.elements.len())
            .field("options", &self.options)
            .field("cache", &self.cache)
            .field("threads", &self.pool.as_ref().map(|p| p.current_num_threads()))
            .finish()
    }
}
