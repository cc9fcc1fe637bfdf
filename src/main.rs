//! Promptscore - judge-response parsing and score normalization CLI
//!
//! A command-line companion for LLM evaluation pipelines: feeds raw judge
//! completions through the lenient parser and maps heterogeneous score
//! conventions onto a canonical 0-100 scale.

mod cli;
mod output;

use std::env;
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use cli::{Cli, Commands, OutputFormat};
use promptscore::config::Config;
use promptscore::error::{EvalError, ExitCode as EvalExitCode, Result};
use promptscore::{logging, parser, score};

fn main() -> ExitCode {
    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // `--format` is a global flag, but clap may fail parsing before we
            // can inspect `Cli.format`. If the user requested JSON output,
            // emit a structured error envelope.
            if argv_format_json {
                let eval_error = match err.kind() {
                    // Help and version are informational, not errors - let clap handle them
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::MissingRequiredArgument => {
                        EvalError::UsageError(err.to_string())
                    }
                    _ => EvalError::Other(err.to_string()),
                };

                eprintln!("{}", eval_error.to_json());
                return ExitCode::from(eval_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    // Initialize structured logging
    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        // If tracing initialization fails, fall back to stderr
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let result = run(&cli);

    match result {
        Ok(()) => ExitCode::from(EvalExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Parse { file, normalize } => {
            let raw = read_input(file.as_deref())?;
            let config = Config::load_or_default();
            let evaluation = parser::parse_with_config(&raw, &config)?;
            output::print_evaluation(&evaluation, *normalize, cli.format)?;
        }
        Commands::Normalize { score: value } => {
            let pct = score::normalize_score_to_pct(*value)?;
            output::print_normalized(*value, pct, cli.format)?;
        }
    }
    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
