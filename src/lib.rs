//! `wastewater-game` library crate.
//!
//! The binary (`ww`) is a thin wrapper around this library so that:
//!
//! - the calculation engine is testable without a terminal
//! - the CLI and the TUI share one lookup + calculate workflow
//! - presentation code stays out of the formulas

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod logging;
pub mod registry;
pub mod report;
pub mod session;
pub mod tui;
