//! Promptscore - judge-response parsing and score normalization
//!
//! Evaluation pipelines that grade prompts or completions with an LLM judge
//! ("G-Eval" style) face two recurring cleanup problems. Judge models asked
//! for JSON return bare JSON, JSON inside a Markdown fence, JSON buried in
//! prose, or no JSON at all. And the scores themselves arrive in whatever
//! convention the grading prompt happened to suggest: a 0.0-1.0 fraction, a
//! 1-10 rubric, or a percentage.
//!
//! The two halves of this crate handle each side:
//!
//! - [`parser`] extracts a structured [`parser::ParsedEvaluation`] from raw
//!   completion text, trying progressively more forgiving strategies and
//!   only failing when every one comes up empty.
//! - [`score`] maps extracted scores onto a canonical 0-100 percentage
//!   scale and buckets them into display tiers.
//!
//! Both are pure, synchronous functions with no shared state; calls are
//! independent and safe from any number of threads.

pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod parser;
pub mod score;
