//! ErgoDesk - ergonomic desk, chair and monitor height calculator
//!
//! Without a subcommand the interactive terminal UI starts; subcommands give
//! headless, scriptable access to the same calculations and saved state.

use anyhow::Result;
use clap::{Parser, Subcommand};
use ergodesk::cli::{
    CalcArgs, CliError, ConfigArgs, EnvironmentsArgs, ProfilesArgs, StateArgs,
};
use ergodesk::constants::APP_BINARY_NAME;
use ergodesk::logging::{self, LogTarget};

/// ErgoDesk - ergonomic desk, chair and monitor height calculator
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate heights without touching the saved state
    Calc(CalcArgs),
    /// Show or change the saved calculation state
    State(StateArgs),
    /// List body profiles and their offsets
    Profiles(ProfilesArgs),
    /// List environments and their shoe corrections
    Environments(EnvironmentsArgs),
    /// Manage application configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(command) => run_command(command, cli.verbose),
        None => run_interactive(cli.verbose).map_err(|e| CliError::io(format!("{e:#}"))),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code().code());
    }
}

fn run_command(command: Command, verbose: bool) -> Result<(), CliError> {
    // Logging is best effort for headless commands
    if let Err(e) = logging::init(verbose, LogTarget::Stderr) {
        eprintln!("Warning: failed to initialize logging: {e:#}");
    }

    match command {
        Command::Calc(args) => args.execute(),
        Command::State(args) => args.execute(),
        Command::Profiles(args) => args.execute(),
        Command::Environments(args) => args.execute(),
        Command::Config(args) => args.execute(),
    }
}

#[cfg(feature = "ratatui")]
fn run_interactive(verbose: bool) -> Result<()> {
    use ergodesk::config::Config;
    use ergodesk::services::StateStore;
    use ergodesk::tui;

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config: {e:#}");
        Config::default()
    });

    // The alternate screen owns stdout and stderr, so logs go to a file
    let log_path = Config::log_file_path()?;
    if let Err(e) = logging::init(verbose, LogTarget::File(&log_path)) {
        eprintln!("Warning: failed to initialize logging: {e:#}");
    }

    let store = StateStore::open(config.open_storage()?);
    let mut app_state = tui::AppState::new(store, &config);

    let mut terminal = tui::setup_terminal()?;
    let result = tui::run_tui(&mut app_state, &mut terminal);
    tui::restore_terminal(terminal)?;

    result
}

#[cfg(not(feature = "ratatui"))]
fn run_interactive(verbose: bool) -> Result<()> {
    if let Err(e) = logging::init(verbose, LogTarget::Stderr) {
        eprintln!("Warning: failed to initialize logging: {e:#}");
    }

    let store = ergodesk::cli::common::open_state_store()?;
    ergodesk::cli::common::print_report(store.state(), false)?;
    Ok(())
}
