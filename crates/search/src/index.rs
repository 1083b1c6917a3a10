//! Inverted index over a problem catalog
//!
//! This module provides:
//! - InvertedIndex with per-term posting lists of record positions
//! - Build-once construction from the full ordered catalog
//!
//! The index is immutable after construction. Every term maps to a non-empty,
//! ascending, deduplicated list of 0-based record positions. A position
//! appears under a term exactly when that term came from the record's title,
//! one of its topics, its lowercased difficulty name, or its literal id.
//!
//! Terms are kept in a sorted map so vocabulary scans (used by the prefix and
//! containment rules) are deterministic.

use crate::tokenizer::tokenize;
use probdex_core::Problem;
use std::collections::BTreeMap;

/// Term to record-position mapping
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    postings: BTreeMap<String, Vec<usize>>,
}

impl InvertedIndex {
    /// Build the index from the full ordered catalog
    ///
    /// Titles and topics are tokenized; the lowercased difficulty name is
    /// added as a single term; the id string is added verbatim, preserving
    /// its casing. An empty catalog produces a valid empty index.
    pub fn build(problems: &[Problem]) -> Self {
        let mut postings: BTreeMap<String, Vec<usize>> = BTreeMap::new();

        for (position, problem) in problems.iter().enumerate() {
            let mut add = |term: String| {
                let entries = postings.entry(term).or_default();
                // A record's terms are added consecutively, so checking the
                // tail is enough to keep the list deduplicated and ascending.
                if entries.last() != Some(&position) {
                    entries.push(position);
                }
            };

            for token in tokenize(&problem.title) {
                add(token);
            }
            for topic in &problem.topics {
                for token in tokenize(topic) {
                    add(token);
                }
            }
            add(problem.difficulty.as_str().to_string());
            add(problem.id.clone());
        }

        InvertedIndex { postings }
    }

    /// Positions indexed under an exact term
    pub fn lookup(&self, term: &str) -> Option<&[usize]> {
        self.postings.get(term).map(Vec::as_slice)
    }

    /// All (term, positions) pairs in ascending term order
    pub fn terms(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.postings
            .iter()
            .map(|(term, positions)| (term.as_str(), positions.as_slice()))
    }

    /// Number of distinct terms
    pub fn distinct_terms(&self) -> usize {
        self.postings.len()
    }

    /// Check if the index holds no terms
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}
