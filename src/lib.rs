//! ErgoDesk Library
//!
//! This library provides the core of the ErgoDesk height calculator: the
//! anthropometric formulas, profile and environment catalogs, persisted
//! calculation state and the presentation layer shared by the terminal UI and
//! the command line.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

#[cfg(feature = "ratatui")]
pub mod shortcuts;
#[cfg(feature = "ratatui")]
pub mod tui;
