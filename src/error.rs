//! Error types and exit codes for promptscore
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Evaluation error (no score found, non-finite input)

use thiserror::Error;

/// Exit codes reported by the promptscore CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Evaluation error - no score found, non-finite input (3)
    Evaluation = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during promptscore operations
#[derive(Error, Debug)]
pub enum EvalError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Evaluation errors (exit code 3)
    #[error("no numeric score could be extracted from the response")]
    ScoreNotFound,

    #[error("score is not a finite number: {0}")]
    NonFiniteScore(f64),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl EvalError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            EvalError::UnknownFormat(_) | EvalError::UsageError(_) => ExitCode::Usage,

            EvalError::ScoreNotFound | EvalError::NonFiniteScore(_) => ExitCode::Evaluation,

            EvalError::Io(_) | EvalError::Json(_) | EvalError::Toml(_) | EvalError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            EvalError::UnknownFormat(_) => "unknown_format",
            EvalError::UsageError(_) => "usage_error",
            EvalError::ScoreNotFound => "score_not_found",
            EvalError::NonFiniteScore(_) => "non_finite_score",
            EvalError::Io(_) => "io_error",
            EvalError::Json(_) => "json_error",
            EvalError::Toml(_) => "toml_error",
            EvalError::Other(_) => "other",
        }
    }
}

/// Result type alias for promptscore operations
pub type Result<T> = std::result::Result<T, EvalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(EvalError::ScoreNotFound.exit_code(), ExitCode::Evaluation);
        assert_eq!(
            EvalError::NonFiniteScore(f64::NAN).exit_code(),
            ExitCode::Evaluation
        );
        assert_eq!(
            EvalError::UnknownFormat("yaml".to_string()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            EvalError::Other("boom".to_string()).exit_code(),
            ExitCode::Failure
        );
    }

    #[test]
    fn test_to_json_envelope() {
        let json = EvalError::ScoreNotFound.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "score_not_found");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("no numeric score"));
    }
}
