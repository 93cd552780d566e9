//! One-shot calculation command.

use crate::cli::common::{print_report, CliError, CliResult};
use crate::models::{normalize_height, parse_height, CalculationState, Environment, Profile};
use clap::Args;

/// Compute recommendations without touching the saved state
#[derive(Debug, Clone, Args)]
pub struct CalcArgs {
    /// Body height in centimeters (clamped to 100-220)
    #[arg(long, value_name = "CM", allow_hyphen_values = true)]
    pub height: String,

    /// Body profile (standard, longLegs, longTorso)
    #[arg(short, long, value_name = "ID", default_value = "standard")]
    pub profile: String,

    /// Environment (home, office)
    #[arg(short, long, value_name = "ID", default_value = "home")]
    pub environment: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl CalcArgs {
    /// Execute the calc command
    pub fn execute(&self) -> CliResult<()> {
        let height = parse_height(&self.height).ok_or_else(|| {
            CliError::validation(format!(
                "Invalid height '{}': expected a number in centimeters",
                self.height
            ))
        })?;
        let profile: Profile = self.profile.parse()?;
        let environment: Environment = self.environment.parse()?;

        let state = CalculationState::new(normalize_height(height), profile, environment);
        print_report(&state, self.json)
    }
}
