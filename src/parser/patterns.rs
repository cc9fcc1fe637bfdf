//! Text-fallback score extraction.
//!
//! Last resort when no JSON object can be recovered: scan the raw text
//! against a small allow-list of score shapes, kept as a named table with
//! one test per row. Users can append rows via `promptscore.toml` (see
//! [`crate::config::Config`]).

use std::collections::HashMap;

use regex::Regex;

use super::types::ParsedEvaluation;

/// A named score shape. The score must be the pattern's first capture
/// group; `name` shows up in debug logs when the pattern wins.
pub struct ScorePattern {
    pub name: &'static str,
    pub pattern: &'static str,
}

/// Built-in patterns, tried in order.
pub const SCORE_PATTERNS: &[ScorePattern] = &[
    ScorePattern {
        name: "labelled",
        pattern: r"(?i)\bscore\b\s*(?:is|of|was|[:=])?\s*([0-9]+(?:\.[0-9]+)?)",
    },
    ScorePattern {
        name: "out-of-ten",
        pattern: r"(?i)([0-9]+(?:\.[0-9]+)?)\s*(?:/|out\s+of)\s*10\b",
    },
    ScorePattern {
        name: "rating",
        pattern: r"(?i)\brat(?:ing|ed)\b\s*(?:is|at|[:=])?\s*([0-9]+(?:\.[0-9]+)?)",
    },
];

/// Line-oriented per-dimension mentions, e.g. `- clarity: 9` or
/// `Specificity: 7/10`. The first group is the dimension name, the second
/// its score.
const DIMENSION_PATTERN: &str =
    r"(?m)^\s*[-*]?\s*([A-Za-z][A-Za-z _-]{2,24})\s*[:=]\s*([0-9]+(?:\.[0-9]+)?)\s*(?:/\s*10)?\s*$";

/// Dimension names that are really the overall score in disguise.
const RESERVED_DIMENSION_NAMES: &[&str] = &["score", "overall", "total", "rating"];

/// Strategy 4: heuristic extraction from free text. `extra_patterns` come
/// from user configuration and are tried after the built-in table; an
/// invalid regex among them is skipped with a warning.
pub(super) fn parse_text(response: &str, extra_patterns: &[String]) -> Option<ParsedEvaluation> {
    let score = extract_score(response, extra_patterns)?;

    Some(ParsedEvaluation {
        score,
        reasoning: None,
        dimensions: extract_dimensions(response),
    })
}

fn extract_score(response: &str, extra_patterns: &[String]) -> Option<f64> {
    for entry in SCORE_PATTERNS {
        let re = Regex::new(entry.pattern).unwrap();
        if let Some(score) = first_capture(&re, response) {
            tracing::debug!(pattern = entry.name, score, "text pattern matched");
            return Some(score);
        }
    }

    for pattern in extra_patterns {
        match Regex::new(pattern) {
            Ok(re) => {
                if let Some(score) = first_capture(&re, response) {
                    tracing::debug!(pattern = %pattern, score, "extra pattern matched");
                    return Some(score);
                }
            }
            Err(e) => {
                tracing::warn!(pattern = %pattern, "skipping invalid extra score pattern: {}", e);
            }
        }
    }

    None
}

fn first_capture(re: &Regex, response: &str) -> Option<f64> {
    let caps = re.captures(response)?;
    let score: f64 = caps.get(1)?.as_str().parse().ok()?;
    score.is_finite().then_some(score)
}

fn extract_dimensions(response: &str) -> HashMap<String, f64> {
    let re = Regex::new(DIMENSION_PATTERN).unwrap();
    let mut dimensions = HashMap::new();

    for caps in re.captures_iter(response) {
        let name = caps[1].trim().to_lowercase();
        if RESERVED_DIMENSION_NAMES.contains(&name.as_str()) {
            continue;
        }
        if let Ok(value) = caps[2].parse::<f64>() {
            if value.is_finite() {
                dimensions.insert(name, value);
            }
        }
    }

    dimensions
}
