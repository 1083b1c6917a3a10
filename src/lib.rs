//! probdex — in-memory search over a coding-problem catalog
//!
//! probdex indexes a fixed collection of coding-problem records (title,
//! topics, difficulty, id) and answers free-text queries with ranked results
//! plus autocomplete suggestions. The index is built once at construction and
//! is read-only afterward; all queries are synchronous in-memory computations.
//!
//! This facade re-exports the public API of the member crates:
//! - `probdex-core`: records, result types, errors, catalog loading
//! - `probdex-search`: the engine itself
//!
//! # Usage
//!
//! ```
//! use probdex::{Difficulty, Problem, SearchEngine};
//!
//! let engine = SearchEngine::new(vec![
//!     Problem::new("1", "Two Sum", Difficulty::Easy)
//!         .with_topics(vec!["Array".into(), "Hash Table".into()]),
//! ]);
//!
//! let hits = engine.search("two sum", 10).unwrap();
//! assert_eq!(hits[0].problem.id, "1");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use probdex_core::{
    catalog, Difficulty, Error, IndexStats, MatchKind, Problem, Result, SearchHit,
};
pub use probdex_search::{tokenize, InvertedIndex, SearchEngine};
