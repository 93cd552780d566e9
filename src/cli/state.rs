//! Commands operating on the persisted calculator state.

use crate::cli::common::{open_state_store, print_report, CliError, CliResult};
use crate::models::parse_height;
use crate::services::{handle_input_event, InputEvent, PresentationAdapter, StepDirection};
use clap::{Args, Subcommand, ValueEnum};

/// Saved state commands
#[derive(Debug, Args)]
pub struct StateArgs {
    #[command(subcommand)]
    command: StateCommand,
}

#[derive(Debug, Subcommand)]
enum StateCommand {
    /// Display the saved state and its recommendations
    Show(StateShowArgs),
    /// Change height, profile or environment
    Set(StateSetArgs),
    /// Nudge the height by 0.1 cm steps
    Step(StateStepArgs),
    /// Restore the default state
    Reset(StateResetArgs),
}

/// Display the saved state
#[derive(Debug, Args)]
pub struct StateShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Change the saved state
#[derive(Debug, Args)]
pub struct StateSetArgs {
    /// Body height in centimeters (clamped to 100-220)
    #[arg(long, value_name = "CM", allow_hyphen_values = true)]
    height: Option<String>,

    /// Body profile (standard, longLegs, longTorso)
    #[arg(short, long, value_name = "ID")]
    profile: Option<String>,

    /// Environment (home, office)
    #[arg(short, long, value_name = "ID")]
    environment: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StepArg {
    Up,
    Down,
}

/// Nudge the saved height
#[derive(Debug, Args)]
pub struct StateStepArgs {
    /// Direction to step
    #[arg(value_enum)]
    direction: StepArg,

    /// Number of steps
    #[arg(long, default_value_t = 1)]
    times: u32,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Restore defaults
#[derive(Debug, Args)]
pub struct StateResetArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl StateArgs {
    /// Execute state subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            StateCommand::Show(args) => args.execute(),
            StateCommand::Set(args) => args.execute(),
            StateCommand::Step(args) => args.execute(),
            StateCommand::Reset(args) => args.execute(),
        }
    }
}

impl StateShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let store = open_state_store()?;
        print_report(store.state(), self.json)
    }
}

impl StateSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.height.is_none() && self.profile.is_none() && self.environment.is_none() {
            return Err(CliError::validation(
                "At least one value must be specified: --height, --profile, or --environment",
            ));
        }

        // Resolve every value before touching the store so a bad argument changes nothing
        let mut events = Vec::new();
        if let Some(height) = &self.height {
            if parse_height(height).is_none() {
                return Err(CliError::validation(format!(
                    "Invalid height '{height}': expected a number in centimeters"
                )));
            }
            events.push(InputEvent::HeightCommit(height.clone()));
        }
        if let Some(profile) = &self.profile {
            events.push(InputEvent::select_profile_id(profile)?);
        }
        if let Some(environment) = &self.environment {
            events.push(InputEvent::select_environment_id(environment)?);
        }

        let mut store = open_state_store()?;
        let mut presenter = PresentationAdapter::new();
        for event in events {
            handle_input_event(&mut store, &mut presenter, event);
        }

        print_report(store.state(), self.json)
    }
}

impl StateStepArgs {
    /// Execute step command
    pub fn execute(&self) -> CliResult<()> {
        let direction = match self.direction {
            StepArg::Up => StepDirection::Increase,
            StepArg::Down => StepDirection::Decrease,
        };

        let mut store = open_state_store()?;
        let mut presenter = PresentationAdapter::new();
        for _ in 0..self.times {
            handle_input_event(&mut store, &mut presenter, InputEvent::Step(direction));
        }

        print_report(store.state(), self.json)
    }
}

impl StateResetArgs {
    /// Execute reset command
    pub fn execute(&self) -> CliResult<()> {
        let mut store = open_state_store()?;
        let mut presenter = PresentationAdapter::new();
        handle_input_event(&mut store, &mut presenter, InputEvent::Reset);

        print_report(store.state(), self.json)
    }
}
