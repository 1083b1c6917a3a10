//! Search index engine for probdex
//!
//! This crate provides:
//! - Basic tokenizer (lowercase, ASCII alphanumeric terms)
//! - InvertedIndex mapping terms to record positions
//! - SearchEngine with the three public operations: search, autocomplete, stats
//!
//! The engine is constructed once from a full problem catalog and is
//! read-only afterward. Queries are synchronous pure computations over
//! in-memory data; the engine is safe to share across threads for
//! concurrent reads.
//!
//! # Usage
//!
//! ```
//! use probdex_core::{Difficulty, Problem};
//! use probdex_search::SearchEngine;
//!
//! let engine = SearchEngine::new(vec![
//!     Problem::new("1", "Two Sum", Difficulty::Easy)
//!         .with_topics(vec!["Array".into(), "Hash Table".into()]),
//! ]);
//!
//! let hits = engine.search("sum", 10).unwrap();
//! assert_eq!(hits[0].problem.title, "Two Sum");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod engine;
pub mod index;
pub mod tokenizer;

// Re-export commonly used types
pub use engine::SearchEngine;
pub use index::InvertedIndex;
pub use tokenizer::tokenize;
