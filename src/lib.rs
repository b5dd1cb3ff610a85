// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching and ranking over in-memory collections.
//!
//! Every element is scored against the query with Damerau-Levenshtein edit
//! distance, turned into a 0-100 percentage. Elements that clear the
//! threshold are ranked and returned; repeated queries come from a bounded
//! LRU cache.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   fuzzy/     │────▶│  scoring/    │────▶│   search/    │
//! │ (Damerau-    │     │ (MatchScorer,│     │(SearchEngine,│
//! │ Levenshtein) │     │   ranking)   │     │  evaluate)   │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                                                  │
//!        ┌──────────────┬──────────────┬───────────┘
//!        ▼              ▼              ▼
//! ┌──────────────┐┌──────────────┐┌──────────────┐
//! │  index.rs    ││  cache.rs    ││ contracts.rs │
//! │ (folded text ││ (ResultCache,││ (debug-only  │
//! │  + tokens)   ││    LRU)      ││  checks)     │
//! └──────────────┘└──────────────┘└──────────────┘
//! ```
//!
//! # Scores
//!
//! | Field          | Meaning                                                  |
//! |----------------|----------------------------------------------------------|
//! | `score`        | Whole query vs. the best field value                     |
//! | `token_score`  | Query tokens vs. element tokens, length-weighted         |
//! | `completeness` | `score` scaled by how much of the value the query covers |
//!
//! # Usage
//!
//! ```
//! use fuzzrank::{Options, SearchEngine};
//!
//! let titles = vec!["Don Quijote de la Mancha", "Novelas ejemplares", "La Galatea"];
//! let engine = SearchEngine::new(titles, Options::default()).unwrap();
//!
//! let results = engine.search("galatea");
//! assert_eq!(*results[0].item, "La Galatea");
//! assert_eq!(results[0].token_score, Some(100.0));
//! ```
//!
//! Records are searched by field through [`Searchable`]:
//!
//! ```
//! use fuzzrank::{Options, SearchEngine};
//! use serde_json::json;
//!
//! let books = vec![
//!     json!({ "title": "Don Quijote", "author": "Cervantes" }),
//!     json!({ "title": "Fuenteovejuna", "author": "Lope de Vega" }),
//! ];
//! let options = Options::builder().keys(["title", "author"]).build();
//! let engine = SearchEngine::new(books, options).unwrap();
//!
//! assert_eq!(engine.search("cervantes")[0].item["title"], "Don Quijote");
//! ```

pub mod cache;
pub mod contracts;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod options;
pub mod scoring;
pub mod search;
pub mod types;
pub mod utils;

#[doc(hidden)]
pub mod testing;

pub use cache::{ResultCache, DEFAULT_MAX_CACHE_ELEMENTS};
pub use error::{ConfigError, MatchError, Result};
pub use fuzzy::{damerau_levenshtein, DamerauLevenshtein, EditCosts};
pub use index::{IndexEntry, SearchIndex};
pub use options::{Options, OptionsBuilder, DEFAULT_THRESHOLD};
pub use scoring::{
    compare_matches, completeness, distance_to_score, rank_matches, MatchScorer, ScoreResult,
    TokenScoreResult,
};
pub use search::SearchEngine;
pub use types::{Match, Searchable, TokenMatch};

/// Route `log` output through `env_logger`, filtered by `RUST_LOG`.
///
/// Safe to call more than once; only the first call installs the logger.
pub fn init_logger() {
    use std::sync::Once;
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        // Another logger may already be installed by the host application
        if env_logger::try_init().is_ok() {
            log::debug!("fuzzrank logging initialized");
        }
    });
}
