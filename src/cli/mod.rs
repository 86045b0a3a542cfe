//! Command-line parsing for the wastewater treatment game.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! engine and the TUI.

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "ww", version, about = "Wastewater Treatment Game - learn with treatment specialists")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Launch the interactive TUI (default).
    Tui,
    /// List the available specialists.
    List,
    /// Run a single calculation and print the recommendation.
    Calc(CalcArgs),
    /// Print a short primer on the treatment stages.
    Guide,
}

#[derive(Debug, Parser, Clone)]
pub struct CalcArgs {
    /// Specialist id (squirtle, bulbasaur, charmander, pikachu, vaporeon).
    pub specialist: String,

    /// Measurement: pH for squirtle/bulbasaur, mg/L for charmander/pikachu, m³ for vaporeon.
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_calc_with_negative_value() {
        let cli = Cli::try_parse_from(["ww", "calc", "charmander", "-1"]).unwrap();
        match cli.command {
            Command::Calc(args) => {
                assert_eq!(args.specialist, "charmander");
                assert_eq!(args.value, "-1");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn calc_requires_two_arguments() {
        assert!(Cli::try_parse_from(["ww", "calc", "pikachu"]).is_err());
    }

    #[test]
    fn parses_simple_subcommands() {
        assert!(matches!(
            Cli::try_parse_from(["ww", "list"]).unwrap().command,
            Command::List
        ));
        assert!(matches!(
            Cli::try_parse_from(["ww", "guide"]).unwrap().command,
            Command::Guide
        ));
    }
}
