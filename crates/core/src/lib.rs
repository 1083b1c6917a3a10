//! Core types for probdex
//!
//! This crate defines the foundational types used throughout the system:
//! - Problem: immutable coding-problem record (id, title, difficulty, topics)
//! - Difficulty: fixed three-value difficulty enumeration
//! - MatchKind: classifies why an index term matched a query word
//! - SearchHit: a single ranked search result
//! - IndexStats: counts exposed by the engine's stats accessor
//! - Error: error type hierarchy
//! - catalog: JSON loading of problem catalogs (the input boundary)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod error;
pub mod search_types;
pub mod types;

// Re-export commonly used types
pub use catalog::{load_catalog, parse_catalog, read_catalog};
pub use error::{Error, Result};
pub use search_types::{IndexStats, MatchKind, SearchHit};
pub use types::{Difficulty, Problem};
