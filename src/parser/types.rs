use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Structured evaluation extracted from a judge model's raw completion.
///
/// Built fresh per parse call and never mutated afterwards. The `score` is
/// the judge's raw value, not yet normalized; callers wanting the 0-100
/// scale pass it through [`crate::score::normalize_score_to_pct`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedEvaluation {
    /// Raw score as reported by the judge. Always finite.
    pub score: f64,

    /// Free-text justification, when the response carried one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,

    /// Per-dimension sub-scores (e.g. "clarity", "specificity"). Iteration
    /// order carries no meaning.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub dimensions: HashMap<String, f64>,
}
