//! Configuration management CLI commands.

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::config::{Config, ThemeMode};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Storage file for the saved calculator state
    #[arg(long, value_name = "FILE")]
    storage_file: Option<PathBuf>,

    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Show the key help footer in the terminal UI (true or false)
    #[arg(long, value_name = "BOOL")]
    show_help: Option<bool>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_dir: String,
    paths: PathsOutput,
    ui: UiOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    storage_file: String,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
    show_help: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let output = build_output(&config)?;

        if self.json {
            print_json(&output)?;
        } else {
            println!("Config directory: {}", output.config_dir);
            println!("Storage file:     {}", output.paths.storage_file);
            println!("Theme:            {}", output.ui.theme);
            println!("Show help:        {}", output.ui.show_help);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.storage_file.is_none() && self.theme.is_none() && self.show_help.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --storage-file, --theme, or --show-help",
            ));
        }

        // A config file that fails to parse is reported, never overwritten
        let mut config = load_config()?;

        if let Some(path) = &self.storage_file {
            config.paths.storage_file = Some(path.clone());
        }

        // Validate and apply theme if provided
        if let Some(theme_str) = &self.theme {
            config.ui.theme_mode = ThemeMode::parse(theme_str).ok_or_else(|| {
                CliError::validation("Invalid theme mode. Must be 'auto', 'light', or 'dark'")
            })?;
        }

        if let Some(show_help) = self.show_help {
            config.ui.show_help = show_help;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;

        // Save configuration
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn build_output(config: &Config) -> CliResult<ConfigOutput> {
    let config_dir = Config::config_dir()
        .map_err(|e| CliError::io(format!("Failed to resolve config directory: {e}")))?;
    let storage_file = config
        .storage_file()
        .map_err(|e| CliError::io(format!("Failed to resolve storage file: {e}")))?;

    Ok(ConfigOutput {
        config_dir: config_dir.to_string_lossy().to_string(),
        paths: PathsOutput {
            storage_file: storage_file.to_string_lossy().to_string(),
        },
        ui: UiOutput {
            theme: format!("{:?}", config.ui.theme_mode).to_lowercase(),
            show_help: config.ui.show_help,
        },
    })
}
