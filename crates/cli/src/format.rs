//! Output formatting: human-readable and JSON modes.

use probdex_core::{Error, IndexStats, Result, SearchHit};

/// Output rendering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Aligned text for terminals
    Human,
    /// Pretty-printed JSON
    Json,
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| Error::SerializationError(e.to_string()))
}

/// Render search hits.
pub fn format_hits(hits: &[SearchHit], mode: OutputMode) -> Result<String> {
    match mode {
        OutputMode::Json => to_json(&hits),
        OutputMode::Human => {
            if hits.is_empty() {
                return Ok("no matches".to_string());
            }
            let mut out = String::new();
            for hit in hits {
                out.push_str(&format!(
                    "{:>3}. [{:>4}] {} ({})  id={}  matched: {}\n",
                    hit.rank,
                    hit.score,
                    hit.problem.title,
                    hit.problem.difficulty,
                    hit.problem.id,
                    hit.matched_labels().join(", "),
                ));
                if !hit.problem.topics.is_empty() {
                    out.push_str(&format!(
                        "     topics: {}\n",
                        hit.problem.topics.join(", ")
                    ));
                }
            }
            Ok(out.trim_end().to_string())
        }
    }
}

/// Render autocomplete suggestions.
pub fn format_suggestions(suggestions: &[String], mode: OutputMode) -> Result<String> {
    match mode {
        OutputMode::Json => to_json(&suggestions),
        OutputMode::Human => {
            if suggestions.is_empty() {
                Ok("no suggestions".to_string())
            } else {
                Ok(suggestions.join("\n"))
            }
        }
    }
}

/// Render index stats.
pub fn format_stats(stats: &IndexStats, mode: OutputMode) -> Result<String> {
    match mode {
        OutputMode::Json => to_json(stats),
        OutputMode::Human => {
            let mut out = format!(
                "problems: {}\ndistinct terms: {}\n",
                stats.total_problems, stats.distinct_terms
            );
            for (difficulty, count) in &stats.difficulties {
                out.push_str(&format!("{difficulty}: {count}\n"));
            }
            Ok(out.trim_end().to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use probdex_core::{Difficulty, MatchKind, Problem};
    use std::collections::BTreeSet;

    fn sample_hit() -> SearchHit {
        let mut matched = BTreeSet::new();
        matched.insert(MatchKind::Exact);
        SearchHit::new(
            0,
            Problem::new("1", "Two Sum", Difficulty::Easy)
                .with_topics(vec!["Array".into()]),
            10,
            1,
        )
        .with_matched(matched)
    }

    #[test]
    fn test_format_hits_human() {
        let out = format_hits(&[sample_hit()], OutputMode::Human).unwrap();
        assert!(out.contains("Two Sum"));
        assert!(out.contains("easy"));
        assert!(out.contains("matched: exact"));
        assert!(out.contains("topics: Array"));
    }

    #[test]
    fn test_format_hits_human_empty() {
        assert_eq!(
            format_hits(&[], OutputMode::Human).unwrap(),
            "no matches"
        );
    }

    #[test]
    fn test_format_hits_json_is_valid() {
        let out = format_hits(&[sample_hit()], OutputMode::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["problem"]["title"], "Two Sum");
        assert_eq!(parsed[0]["matched"][0], "exact");
    }

    #[test]
    fn test_format_suggestions() {
        let suggestions = vec!["Two Sum".to_string(), "Two Pointers".to_string()];
        let human = format_suggestions(&suggestions, OutputMode::Human).unwrap();
        assert_eq!(human, "Two Sum\nTwo Pointers");

        let json = format_suggestions(&suggestions, OutputMode::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[1], "Two Pointers");
    }

    #[test]
    fn test_format_stats_human() {
        let mut stats = IndexStats::default();
        stats.total_problems = 2;
        stats.distinct_terms = 9;
        stats.difficulties.insert(Difficulty::Easy, 2);

        let out = format_stats(&stats, OutputMode::Human).unwrap();
        assert!(out.contains("problems: 2"));
        assert!(out.contains("distinct terms: 9"));
        assert!(out.contains("easy: 2"));
    }

    #[test]
    fn test_format_stats_json_difficulty_keys() {
        let mut stats = IndexStats::default();
        stats.total_problems = 1;
        stats.difficulties.insert(Difficulty::Hard, 1);

        let out = format_stats(&stats, OutputMode::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["difficulties"]["hard"], 1);
    }
}
