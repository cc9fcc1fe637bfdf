//! JSON-based extraction strategies.
//!
//! Each strategy returns `Some` only when a JSON object was recovered AND
//! it carries a finite numeric `score` field. Parse failures are swallowed
//! so the caller can move on to the next strategy.

use regex::Regex;
use serde_json::Value;

use super::types::ParsedEvaluation;

/// Strategy 1: the whole response is a JSON object.
pub(super) fn parse_direct(response: &str) -> Option<ParsedEvaluation> {
    let value: Value = serde_json::from_str(response.trim()).ok()?;
    evaluation_from_value(&value)
}

/// Strategy 2: a JSON object inside a Markdown code fence, optionally
/// tagged `json`. Every fence in the response is tried in order.
pub(super) fn parse_fenced(response: &str) -> Option<ParsedEvaluation> {
    let fence = Regex::new(r"(?s)```(?:json)?\s*(\{.*?\})\s*```").unwrap();

    for caps in fence.captures_iter(response) {
        let parsed = serde_json::from_str::<Value>(&caps[1])
            .ok()
            .and_then(|v| evaluation_from_value(&v));
        if parsed.is_some() {
            return parsed;
        }
    }
    None
}

/// Strategy 3: the smallest balanced brace-delimited substring that
/// mentions `"score"` and parses as a JSON object.
pub(super) fn parse_embedded(response: &str) -> Option<ParsedEvaluation> {
    let mut best: Option<(usize, ParsedEvaluation)> = None;

    for (start, _) in response.match_indices('{') {
        let Some(end) = matching_brace(response, start) else {
            continue;
        };
        let candidate = &response[start..=end];
        if !candidate.contains("\"score\"") {
            continue;
        }

        let parsed = serde_json::from_str::<Value>(candidate)
            .ok()
            .and_then(|v| evaluation_from_value(&v));
        if let Some(parsed) = parsed {
            let len = candidate.len();
            if best.as_ref().map_or(true, |(best_len, _)| len < *best_len) {
                best = Some((len, parsed));
            }
        }
    }

    best.map(|(_, parsed)| parsed)
}

/// Byte index of the brace matching the `{` at `open`, honoring JSON
/// string literals and escapes. `None` when the braces never balance.
fn matching_brace(text: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[open..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + offset);
                }
            }
            _ => {}
        }
    }
    None
}

fn evaluation_from_value(value: &Value) -> Option<ParsedEvaluation> {
    let obj = value.as_object()?;
    let score = number_field(obj.get("score")?)?;

    let reasoning = obj
        .get("reasoning")
        .and_then(Value::as_str)
        .map(str::to_string);

    // Sub-scores arrive under "dimensions", or "scores" when the judge
    // prompt used the criteria-map shape.
    let dimensions = obj
        .get("dimensions")
        .or_else(|| obj.get("scores"))
        .and_then(Value::as_object)
        .map(|map| {
            map.iter()
                .filter_map(|(name, v)| number_field(v).map(|n| (name.clone(), n)))
                .collect()
        })
        .unwrap_or_default();

    Some(ParsedEvaluation {
        score,
        reasoning,
        dimensions,
    })
}

/// Numeric field reader. Accepts JSON numbers and numeric strings
/// ("8.5"). Non-finite values count as missing.
fn number_field(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}
