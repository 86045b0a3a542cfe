//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads configuration and installs logging
//! - dispatches to the TUI or to a one-shot command

use clap::Parser;

use crate::cli::{CalcArgs, Command};
use crate::config::AppConfig;
use crate::domain::CalculationRequest;
use crate::error::{AppError, EXIT_REJECTED};
use crate::logging::{self, LogMode};

pub mod pipeline;

/// Entry point for the `ww` binary.
pub fn run() -> Result<(), AppError> {
    // `ww` with no subcommand opens the TUI. Clap requires a subcommand name,
    // so argv is rewritten before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    let config = AppConfig::from_env()?;
    let mode = match cli.command {
        Command::Tui => LogMode::Tui,
        _ => LogMode::Cli,
    };
    logging::init(&config, mode)?;

    match cli.command {
        Command::Tui => crate::tui::run(&config),
        Command::List => {
            print!("{}", crate::report::format_registry(crate::registry::all()));
            Ok(())
        }
        Command::Calc(args) => handle_calc(args),
        Command::Guide => {
            print!("{}", crate::report::format_guide());
            Ok(())
        }
    }
}

fn handle_calc(args: CalcArgs) -> Result<(), AppError> {
    let request = CalculationRequest::new(args.specialist.trim().to_ascii_lowercase(), args.value);
    let run = pipeline::run_request(&request)?;

    if run.outcome.is_error() {
        // Rejections go to stderr via `main` with their own exit code.
        return Err(AppError::new(
            EXIT_REJECTED,
            crate::report::format_run(&run),
        ));
    }

    println!("{}", crate::report::format_run(&run));
    Ok(())
}

/// Rewrite argv so `ww` defaults to `ww tui`.
///
/// Rules:
/// - `ww`                      -> `ww tui`
/// - `ww --help/--version/-h`  -> unchanged (show top-level help/version)
/// - anything else             -> unchanged
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    if argv.len() <= 1 {
        argv.push("tui".to_string());
    }
    argv
}
