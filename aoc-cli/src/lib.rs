//! Command-line plumbing shared by the per-puzzle binaries
//!
//! Each binary under `src/bin/` names one solver type and hands it to
//! [`run_main`], which parses arguments, loads the gzip input, runs the
//! requested parts and prints the answers.

pub mod cli;
pub mod config;
pub mod error;
pub mod locator;
pub mod logging;
pub mod output;
pub mod runner;

pub use config::Config;
pub use error::CliError;
pub use runner::{Report, run, run_main};
