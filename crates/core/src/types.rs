//! Record types for probdex
//!
//! This module defines the externally supplied catalog records:
//! - Difficulty: fixed three-value enumeration (Easy/Medium/Hard)
//! - Problem: immutable coding-problem record
//!
//! Records are never mutated or deleted by the engine; they are handed to the
//! engine once at construction and owned for the lifetime of the index.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Difficulty
// ============================================================================

/// Problem difficulty
///
/// Serialized in lowercase; the capitalized spellings commonly found in
/// exported catalogs are accepted as aliases on input.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Easy problems
    #[serde(alias = "Easy", alias = "EASY")]
    Easy,
    /// Medium problems
    #[serde(alias = "Medium", alias = "MEDIUM")]
    Medium,
    /// Hard problems
    #[serde(alias = "Hard", alias = "HARD")]
    Hard,
}

impl Difficulty {
    /// All difficulties, in ascending order
    pub fn all() -> &'static [Difficulty] {
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    /// Lowercase name, as indexed by the engine
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(Error::UnknownDifficulty(s.to_string())),
        }
    }
}

// ============================================================================
// Problem
// ============================================================================

/// A coding-problem record
///
/// Supplied by the catalog loader and held by the engine for the lifetime of
/// the index. The `id` is an opaque identifier string; it is indexed verbatim
/// (case-preserved), unlike titles and topics which are tokenized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// Identifier string (indexed verbatim)
    pub id: String,

    /// Problem title
    pub title: String,

    /// Difficulty rating
    pub difficulty: Difficulty,

    /// Topic tags, in catalog order
    #[serde(default)]
    pub topics: Vec<String>,
}

impl Problem {
    /// Create a new Problem with no topics
    pub fn new(id: impl Into<String>, title: impl Into<String>, difficulty: Difficulty) -> Self {
        Problem {
            id: id.into(),
            title: title.into(),
            difficulty,
            topics: vec![],
        }
    }

    /// Builder: set topics
    pub fn with_topics(mut self, topics: Vec<String>) -> Self {
        self.topics = topics;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Difficulty Tests
    // ========================================

    #[test]
    fn test_difficulty_all() {
        let all = Difficulty::all();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0], Difficulty::Easy);
        assert_eq!(all[2], Difficulty::Hard);
    }

    #[test]
    fn test_difficulty_as_str_is_lowercase() {
        assert_eq!(Difficulty::Easy.as_str(), "easy");
        assert_eq!(Difficulty::Medium.as_str(), "medium");
        assert_eq!(Difficulty::Hard.as_str(), "hard");
    }

    #[test]
    fn test_difficulty_display() {
        assert_eq!(format!("{}", Difficulty::Medium), "medium");
    }

    #[test]
    fn test_difficulty_from_str_case_insensitive() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("Medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
    }

    #[test]
    fn test_difficulty_from_str_unknown() {
        let err = "brutal".parse::<Difficulty>().unwrap_err();
        assert!(matches!(err, Error::UnknownDifficulty(_)));
    }

    #[test]
    fn test_difficulty_serde_accepts_capitalized() {
        let d: Difficulty = serde_json::from_str("\"Easy\"").unwrap();
        assert_eq!(d, Difficulty::Easy);
        let d: Difficulty = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(d, Difficulty::Hard);
    }

    #[test]
    fn test_difficulty_serializes_lowercase() {
        let s = serde_json::to_string(&Difficulty::Medium).unwrap();
        assert_eq!(s, "\"medium\"");
    }

    // ========================================
    // Problem Tests
    // ========================================

    #[test]
    fn test_problem_new() {
        let p = Problem::new("1", "Two Sum", Difficulty::Easy);
        assert_eq!(p.id, "1");
        assert_eq!(p.title, "Two Sum");
        assert_eq!(p.difficulty, Difficulty::Easy);
        assert!(p.topics.is_empty());
    }

    #[test]
    fn test_problem_builder() {
        let p = Problem::new("200", "Number of Islands", Difficulty::Medium)
            .with_topics(vec!["Graph".into(), "DFS".into()]);
        assert_eq!(p.topics, vec!["Graph", "DFS"]);
    }

    #[test]
    fn test_problem_deserialize_missing_topics() {
        let p: Problem =
            serde_json::from_str(r#"{"id":"7","title":"Reverse Integer","difficulty":"Medium"}"#)
                .unwrap();
        assert_eq!(p.id, "7");
        assert!(p.topics.is_empty());
    }
}
