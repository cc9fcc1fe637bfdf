//! Lenient extraction of evaluation results from judge model output.
//!
//! Judge models are instructed to return JSON, but completions arrive as
//! bare JSON, JSON inside a fenced code block, JSON buried in prose, or
//! free text with a score mentioned somewhere. The parser tries each shape
//! in turn and only fails when every strategy comes up empty.
//!
//! # Example
//!
//! ```rust
//! use promptscore::parser::parse_geval_response;
//!
//! let evaluation = parse_geval_response(r#"{"score": 8.5, "reasoning": "Good"}"#).unwrap();
//! assert_eq!(evaluation.score, 8.5);
//! ```

pub mod patterns;

mod extract;
mod types;

pub use types::ParsedEvaluation;

use crate::config::Config;
use crate::error::{EvalError, Result};

/// Extract a structured evaluation from a raw judge completion.
///
/// Strategies, first valid one wins:
/// 1. parse the whole input as JSON;
/// 2. parse JSON found inside a Markdown code fence;
/// 3. parse the smallest embedded `{...}` object mentioning `"score"`;
/// 4. scan the text against the score pattern table.
///
/// A strategy is valid only when it yields a finite numeric `score` field;
/// malformed JSON along the way is recovered, never propagated.
///
/// # Errors
///
/// Returns [`EvalError::ScoreNotFound`] when all four strategies fail.
/// A missing score is never reported as `0`; "not found" stays
/// distinguishable from a legitimately low score.
pub fn parse_geval_response(response: &str) -> Result<ParsedEvaluation> {
    parse_with_config(response, &Config::default())
}

/// Same as [`parse_geval_response`], with the user's extra text-fallback
/// patterns appended to the built-in table.
pub fn parse_with_config(response: &str, config: &Config) -> Result<ParsedEvaluation> {
    if let Some(parsed) = extract::parse_direct(response) {
        tracing::debug!(strategy = "direct", score = parsed.score, "extracted evaluation");
        return Ok(parsed);
    }
    if let Some(parsed) = extract::parse_fenced(response) {
        tracing::debug!(strategy = "fenced", score = parsed.score, "extracted evaluation");
        return Ok(parsed);
    }
    if let Some(parsed) = extract::parse_embedded(response) {
        tracing::debug!(strategy = "embedded", score = parsed.score, "extracted evaluation");
        return Ok(parsed);
    }
    if let Some(parsed) = patterns::parse_text(response, &config.extra_patterns) {
        tracing::debug!(strategy = "text", score = parsed.score, "extracted evaluation");
        return Ok(parsed);
    }

    Err(EvalError::ScoreNotFound)
}
