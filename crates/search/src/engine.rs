//! Search engine: the three public operations
//!
//! This module provides:
//! - SearchEngine owning the catalog and its inverted index
//! - search: weighted exact/prefix/containment scoring over query tokens
//! - autocomplete: case-insensitive substring suggestions from titles and topics
//! - stats: catalog and index counts
//!
//! The engine has exactly two states: not yet constructed, and ready.
//! Construction is infallible and builds everything; afterward the engine is
//! read-only and safe to share across threads.

use crate::index::InvertedIndex;
use crate::tokenizer::tokenize;
use probdex_core::{Difficulty, Error, IndexStats, MatchKind, Problem, Result, SearchHit};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info};

/// Score added when a query word is itself an index term
const EXACT_WEIGHT: u32 = 10;
/// Score added when an index term starts with a query word
const PREFIX_WEIGHT: u32 = 5;
/// Score added when an index term contains a query word without starting with it
const CONTAINS_WEIGHT: u32 = 2;

/// Per-record score accumulator, alive for one search call
#[derive(Debug, Default)]
struct Candidate {
    score: u32,
    matched: BTreeSet<MatchKind>,
}

impl Candidate {
    fn hit(&mut self, weight: u32, kind: MatchKind) {
        self.score += weight;
        self.matched.insert(kind);
    }
}

// ============================================================================
// SearchEngine
// ============================================================================

/// In-memory search engine over a fixed problem catalog
///
/// Constructed once from the full catalog; serves read-only queries
/// afterward. There is no mutation path: supporting catalog growth would
/// mean building a new engine, not editing this one.
#[derive(Debug)]
pub struct SearchEngine {
    problems: Vec<Problem>,
    index: InvertedIndex,
    difficulty_counts: BTreeMap<Difficulty, usize>,
}

impl SearchEngine {
    /// Build an engine from the full catalog
    ///
    /// Infallible; an empty catalog yields a valid engine with an empty
    /// index and zero-count stats.
    pub fn new(problems: Vec<Problem>) -> Self {
        let index = InvertedIndex::build(&problems);

        let mut difficulty_counts: BTreeMap<Difficulty, usize> =
            Difficulty::all().iter().map(|d| (*d, 0)).collect();
        for problem in &problems {
            *difficulty_counts.entry(problem.difficulty).or_insert(0) += 1;
        }

        info!(
            problems = problems.len(),
            terms = index.distinct_terms(),
            "search engine ready"
        );

        SearchEngine {
            problems,
            index,
            difficulty_counts,
        }
    }

    /// The catalog, in construction order
    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Ranked search over the catalog
    ///
    /// Tokenizes the query and accumulates per-record scores: +10 when a
    /// query word is itself an index term, +5 for every distinct term that
    /// starts with the word, +2 for every distinct term that contains the
    /// word without starting with it. Scores from multiple words and rules
    /// add. Results are ordered by descending score, then ascending record
    /// position, and truncated to `max_results`.
    ///
    /// The prefix and containment rules scan the full vocabulary per query
    /// word; cost is O(query tokens x distinct terms).
    ///
    /// Empty and whitespace-only queries return an empty result.
    /// `max_results == 0` is rejected with [`Error::InvalidLimit`].
    pub fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchHit>> {
        if max_results == 0 {
            return Err(Error::InvalidLimit(max_results));
        }

        let words = tokenize(query);
        if words.is_empty() {
            return Ok(vec![]);
        }

        let mut candidates: FxHashMap<usize, Candidate> = FxHashMap::default();

        for word in &words {
            if let Some(positions) = self.index.lookup(word) {
                for &position in positions {
                    candidates
                        .entry(position)
                        .or_default()
                        .hit(EXACT_WEIGHT, MatchKind::Exact);
                }
            }

            for (term, positions) in self.index.terms() {
                if term == word.as_str() {
                    continue;
                }
                let (weight, kind) = if term.starts_with(word.as_str()) {
                    (PREFIX_WEIGHT, MatchKind::Prefix)
                } else if term.contains(word.as_str()) {
                    (CONTAINS_WEIGHT, MatchKind::Contains)
                } else {
                    continue;
                };
                for &position in positions {
                    candidates.entry(position).or_default().hit(weight, kind);
                }
            }
        }

        let matched = candidates.len();
        let mut ranked: Vec<(usize, Candidate)> = candidates.into_iter().collect();
        // Descending score; ties broken by ascending record position
        ranked.sort_by(|a, b| b.1.score.cmp(&a.1.score).then(a.0.cmp(&b.0)));
        ranked.truncate(max_results);

        debug!(
            query,
            words = words.len(),
            matched,
            returned = ranked.len(),
            "search"
        );

        Ok(ranked
            .into_iter()
            .enumerate()
            .map(|(i, (position, candidate))| {
                SearchHit::new(
                    position,
                    self.problems[position].clone(),
                    candidate.score,
                    (i + 1) as u32,
                )
                .with_matched(candidate.matched)
            })
            .collect())
    }

    // ========================================================================
    // Autocomplete
    // ========================================================================

    /// Suggestion strings whose text contains the query, case-insensitively
    ///
    /// Scans titles first, then topics, both in catalog order; suggestions
    /// are deduplicated preserving first-insertion order and truncated to
    /// `max_suggestions`. The query is lowercased but not tokenized, so a
    /// multi-word query matches as one substring.
    ///
    /// Empty and whitespace-only queries return an empty result.
    /// `max_suggestions == 0` is rejected with [`Error::InvalidLimit`].
    pub fn autocomplete(&self, query: &str, max_suggestions: usize) -> Result<Vec<String>> {
        if max_suggestions == 0 {
            return Err(Error::InvalidLimit(max_suggestions));
        }
        if query.trim().is_empty() {
            return Ok(vec![]);
        }

        let needle = query.to_lowercase();
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut suggestions: Vec<String> = Vec::new();

        for problem in &self.problems {
            if problem.title.to_lowercase().contains(&needle)
                && seen.insert(problem.title.clone())
            {
                suggestions.push(problem.title.clone());
            }
        }
        for problem in &self.problems {
            for topic in &problem.topics {
                if topic.to_lowercase().contains(&needle) && seen.insert(topic.clone()) {
                    suggestions.push(topic.clone());
                }
            }
        }

        suggestions.truncate(max_suggestions);
        Ok(suggestions)
    }

    // ========================================================================
    // Stats
    // ========================================================================

    /// Catalog and index counts
    ///
    /// All counts are computed at construction; this is a pure read.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            total_problems: self.problems.len(),
            distinct_terms: self.index.distinct_terms(),
            difficulties: self.difficulty_counts.clone(),
        }
    }
}
