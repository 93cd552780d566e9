//! Shared CLI plumbing: errors, exit codes and result reporting.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::Config;
use crate::models::{CalculationState, ModelError};
use crate::services::measurement::{calculate_all, Recommendation, Target};
use crate::services::presentation::{DisplayModel, DisplaySurface, PresentationAdapter};
use crate::services::StateStore;
use crate::storage::FileStore;

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Input was rejected
    ValidationError = 1,
    /// File system or serialization failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// User input was rejected
    #[error("{0}")]
    Validation(String),
    /// Reading or writing failed
    #[error("{0}")]
    Io(String),
}

impl CliError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Exit code matching the error kind.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::Validation(_) => ExitCode::ValidationError,
            Self::Io(_) => ExitCode::IoError,
        }
    }
}

impl From<ModelError> for CliError {
    fn from(err: ModelError) -> Self {
        Self::validation(err.to_string())
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Loads the configuration, mapping failures to an I/O error.
pub fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))
}

/// Opens the persisted state described by the configuration.
pub fn open_state_store() -> CliResult<StateStore<FileStore>> {
    let config = load_config()?;
    let storage = config
        .open_storage()
        .map_err(|e| CliError::io(format!("Failed to resolve storage file: {e:#}")))?;
    Ok(StateStore::open(storage))
}

/// Pretty-prints any serializable value as JSON.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// JSON shape shared by `calc` and `state show`.
#[derive(Debug, Serialize)]
pub struct ReportOutput {
    /// Inputs the results were computed from
    pub state: CalculationState,
    /// Chair, desk and monitor recommendations
    pub results: Recommendation,
}

/// Plain-text display surface.
#[derive(Debug, Default)]
pub struct TextReport {
    results: BTreeMap<&'static str, String>,
    ranges: BTreeMap<&'static str, String>,
    header: Vec<String>,
}

impl DisplaySurface for TextReport {
    fn set_result(&mut self, target: Target, _value: f64, text: &str) {
        self.results.insert(target.id(), text.to_string());
    }

    fn set_range(&mut self, target: Target, text: &str) {
        self.ranges.insert(target.id(), text.to_string());
    }

    fn set_details(&mut self, model: &DisplayModel) {
        self.header = vec![
            format!("Height:      {}", model.height_text),
            format!(
                "Profile:     {} ({})",
                model.profile.info().name,
                model.profile.id()
            ),
            format!("Environment: {}", model.environment_status),
        ];
    }
}

impl TextReport {
    /// Renders the collected slots as aligned lines.
    #[must_use]
    pub fn render(&self) -> String {
        let mut lines = self.header.clone();
        lines.push(String::new());
        for target in Target::ALL {
            let value = self.results.get(target.id()).map_or("-", String::as_str);
            let range = self.ranges.get(target.id()).map_or("-", String::as_str);
            lines.push(format!("{:<12} {:>6} cm   ({range})", target.label(), value));
        }
        lines.join("\n")
    }
}

/// Prints the recommendation for `state` as text or JSON.
pub fn print_report(state: &CalculationState, json: bool) -> CliResult<()> {
    if json {
        return print_json(&ReportOutput {
            state: *state,
            results: calculate_all(state.height, state.profile, state.environment),
        });
    }

    let mut report = TextReport::default();
    PresentationAdapter::new().render_now(state, &mut report);
    println!("{}", report.render());
    Ok(())
}
