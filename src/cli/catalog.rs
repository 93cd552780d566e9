//! Listing of the fixed profile and environment catalogs.

use crate::cli::common::{print_json, CliResult};
use crate::models::{Environment, Profile, ProfileOffsets};
use crate::services::presentation::format_offset;
use clap::Args;
use serde::Serialize;

/// List body profiles and their offsets
#[derive(Debug, Clone, Args)]
pub struct ProfilesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// List environments and their shoe corrections
#[derive(Debug, Clone, Args)]
pub struct EnvironmentsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ProfileOutput {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    offsets: ProfileOffsets,
}

#[derive(Debug, Serialize)]
struct EnvironmentOutput {
    id: &'static str,
    name: &'static str,
    shoe_correction: f64,
    description: &'static str,
}

impl ProfilesArgs {
    /// Execute the profiles command
    pub fn execute(&self) -> CliResult<()> {
        let profiles: Vec<ProfileOutput> = Profile::ALL
            .iter()
            .map(|profile| {
                let info = profile.info();
                ProfileOutput {
                    id: info.id,
                    name: info.name,
                    description: info.description,
                    offsets: info.offsets,
                }
            })
            .collect();

        if self.json {
            return print_json(&profiles);
        }

        println!(
            "{:<10} {:<11} {:>9} {:>9} {:>9}",
            "ID", "NAME", "CHAIR", "DESK", "MONITOR"
        );
        for profile in &profiles {
            println!(
                "{:<10} {:<11} {:>9} {:>9} {:>9}",
                profile.id,
                profile.name,
                format_offset(profile.offsets.chair),
                format_offset(profile.offsets.desk),
                format_offset(profile.offsets.monitor)
            );
        }
        Ok(())
    }
}

impl EnvironmentsArgs {
    /// Execute the environments command
    pub fn execute(&self) -> CliResult<()> {
        let environments: Vec<EnvironmentOutput> = Environment::ALL
            .iter()
            .map(|env| {
                let info = env.info();
                EnvironmentOutput {
                    id: info.id,
                    name: info.name,
                    shoe_correction: info.shoe_correction,
                    description: info.description,
                }
            })
            .collect();

        if self.json {
            return print_json(&environments);
        }

        println!("{:<8} {:<12} {:>9}  DESCRIPTION", "ID", "NAME", "SHOES");
        for env in &environments {
            println!(
                "{:<8} {:<12} {:>9}  {}",
                env.id,
                env.name,
                format_offset(env.shoe_correction),
                env.description
            );
        }
        Ok(())
    }
}
