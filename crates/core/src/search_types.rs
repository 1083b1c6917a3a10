//! Search result types
//!
//! This module defines the types returned by the engine's three operations:
//! - MatchKind: why an index term matched a query word
//! - SearchHit: a single ranked result with score and matched kinds
//! - IndexStats: counts exposed by the stats accessor
//!
//! These types define the interface contracts for search operations.

use crate::types::{Difficulty, Problem};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

// ============================================================================
// MatchKind
// ============================================================================

/// Why an index term matched a query word
///
/// A query word matches an index term by one of three rules, each with a
/// fixed weight: the word equals the term (`Exact`, +10), the term starts
/// with the word (`Prefix`, +5), or the term merely contains the word
/// (`Contains`, +2). A term that satisfies the prefix rule is never also
/// counted as a containment match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// Query word is itself an index term
    Exact,
    /// Index term starts with the query word
    Prefix,
    /// Index term contains the query word, but does not start with it
    Contains,
}

impl MatchKind {
    /// Label string, as rendered in results
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKind::Exact => "exact",
            MatchKind::Prefix => "prefix",
            MatchKind::Contains => "contains",
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// SearchHit
// ============================================================================

/// A single search result
///
/// Carries the full record, its accumulated score, the distinct match kinds
/// that fired for it, and its rank in the returned page.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    /// Stable 0-based offset of the record in the construction-time sequence
    pub position: usize,

    /// The matched record
    pub problem: Problem,

    /// Accumulated score (higher = more relevant)
    pub score: u32,

    /// Distinct match kinds that contributed to the score (never empty)
    pub matched: BTreeSet<MatchKind>,

    /// Rank in the result page (1-indexed)
    pub rank: u32,
}

impl SearchHit {
    /// Create a new SearchHit with an empty matched set
    pub fn new(position: usize, problem: Problem, score: u32, rank: u32) -> Self {
        SearchHit {
            position,
            problem,
            score,
            matched: BTreeSet::new(),
            rank,
        }
    }

    /// Builder: set matched kinds
    pub fn with_matched(mut self, matched: BTreeSet<MatchKind>) -> Self {
        self.matched = matched;
        self
    }

    /// Matched-kind labels in deterministic order
    pub fn matched_labels(&self) -> Vec<&'static str> {
        self.matched.iter().map(MatchKind::as_str).collect()
    }
}

// ============================================================================
// IndexStats
// ============================================================================

/// Counts exposed by the engine's stats accessor
///
/// Computed once at construction; the record set never changes afterward.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IndexStats {
    /// Number of records in the catalog
    pub total_problems: usize,

    /// Number of distinct terms in the inverted index
    pub distinct_terms: usize,

    /// Record count per difficulty (all three keys always present)
    pub difficulties: BTreeMap<Difficulty, usize>,
}

impl IndexStats {
    /// Count for one difficulty (zero when absent)
    pub fn difficulty_count(&self, difficulty: Difficulty) -> usize {
        self.difficulties.get(&difficulty).copied().unwrap_or(0)
    }
}
