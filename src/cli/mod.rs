//! CLI command handlers for ErgoDesk.
//!
//! This module provides headless, scriptable access to the calculator for
//! automation and testing.

pub mod calc;
pub mod catalog;
pub mod common;
pub mod config;
pub mod state;

// Re-export types used by main.rs and tests
pub use calc::CalcArgs;
pub use catalog::{EnvironmentsArgs, ProfilesArgs};
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use state::StateArgs;
