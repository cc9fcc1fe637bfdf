//! Terminal and JSON rendering for parse/normalize results.

use promptscore::error::Result;
use promptscore::format::OutputFormat;
use promptscore::parser::ParsedEvaluation;
use promptscore::score::{self, ScoreTier};

pub fn print_evaluation(
    evaluation: &ParsedEvaluation,
    normalize: bool,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let mut envelope = serde_json::json!({ "evaluation": evaluation });
            if normalize {
                let pct = score::normalize_score_to_pct(evaluation.score)?;
                envelope["normalized"] = serde_json::json!({
                    "score_pct": pct,
                    "tier": ScoreTier::from_pct(pct),
                    "dimensions_mean_pct": score::mean_dimension_pct(&evaluation.dimensions)?,
                });
            }
            println!("{}", serde_json::to_string_pretty(&envelope)?);
        }
        OutputFormat::Human => {
            println!("--- Evaluation Summary ---");
            println!("Score: {}", evaluation.score);
            if let Some(reasoning) = &evaluation.reasoning {
                println!("Reasoning: {}", reasoning);
            }
            if !evaluation.dimensions.is_empty() {
                println!("Dimensions:");
                let mut names: Vec<_> = evaluation.dimensions.keys().collect();
                names.sort();
                for name in names {
                    println!("  {}: {}", name, evaluation.dimensions[name]);
                }
            }
            if normalize {
                let pct = score::normalize_score_to_pct(evaluation.score)?;
                println!("Normalized: {:.1}% ({})", pct, ScoreTier::from_pct(pct));
                if let Some(mean) = score::mean_dimension_pct(&evaluation.dimensions)? {
                    println!("Dimension mean: {:.1}%", mean);
                }
            }
        }
    }
    Ok(())
}

pub fn print_normalized(raw: f64, pct: f64, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "raw": raw,
                    "score_pct": pct,
                    "tier": ScoreTier::from_pct(pct),
                })
            );
        }
        OutputFormat::Human => {
            println!("{:.1}% ({})", pct, ScoreTier::from_pct(pct));
        }
    }
    Ok(())
}
