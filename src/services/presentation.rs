//! Turns the current state into display-ready text.
//!
//! Hosts request a render whenever something changed and flush once per
//! frame. Only one render is ever outstanding: further requests while one is
//! pending are absorbed, and the flush reads whatever state is current at
//! that moment.

use crate::models::{CalculationState, Environment, Profile};
use crate::services::measurement::{calculate_all, chair_formula_text, Recommendation, Target};

/// Display-ready values for one target.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetDisplay {
    /// Which piece of furniture this is
    pub target: Target,
    /// Rounded point value in centimeters
    pub value: f64,
    /// Point value formatted with one decimal (e.g., "42.2")
    pub value_text: String,
    /// Tolerance band (e.g., "40.7–43.7 cm")
    pub range_text: String,
    /// Profile offset applied to this target, in centimeters
    pub offset: f64,
    /// Profile offset formatted with its sign (e.g., "+2.0 cm")
    pub offset_text: String,
}

/// Everything a surface needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayModel {
    /// Current height (e.g., "170.0 cm")
    pub height_text: String,
    /// Selected profile
    pub profile: Profile,
    /// Selected environment
    pub environment: Environment,
    /// Chair, desk and monitor, in that order
    pub targets: [TargetDisplay; 3],
    /// e.g. "Office (Shoe thickness -2 cm)"
    pub environment_status: String,
    /// Chair formula with the environment's shoe correction
    pub chair_formula: String,
    /// Explanation of the shoe correction in effect
    pub shoe_detail: String,
    /// e.g. "Body profile: Long legs"
    pub profile_title: String,
    /// Why the profile offsets exist
    pub profile_description: String,
}

impl DisplayModel {
    /// Display values for a single target.
    #[must_use]
    pub fn target(&self, target: Target) -> &TargetDisplay {
        match target {
            Target::Chair => &self.targets[0],
            Target::Desk => &self.targets[1],
            Target::Monitor => &self.targets[2],
        }
    }
}

/// Something that can show the three results.
///
/// The core only pushes text into named slots and never knows how they are
/// drawn.
pub trait DisplaySurface {
    /// Updates the point value slot for `target`.
    fn set_result(&mut self, target: Target, value: f64, text: &str);

    /// Updates the tolerance range slot for `target`.
    fn set_range(&mut self, target: Target, text: &str);

    /// Receives the full model for surfaces that show the explanatory panels.
    fn set_details(&mut self, _model: &DisplayModel) {}
}

/// Formats a tolerance band as "min–max cm".
#[must_use]
pub fn format_range(min: f64, max: f64) -> String {
    format!("{min:.1}–{max:.1} cm")
}

/// Formats a signed offset as "+2.0 cm", "-0.7 cm" or "0.0 cm".
#[must_use]
pub fn format_offset(value: f64) -> String {
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{sign}{value:.1} cm")
}

fn shoe_detail(environment: Environment) -> String {
    let info = environment.info();
    if info.shoe_correction == 0.0 {
        format!("Shoe correction: none ({} mode)", info.name.to_lowercase())
    } else {
        format!(
            "Shoe correction: {} cm ({} mode)",
            info.shoe_correction,
            info.name.to_lowercase()
        )
    }
}

/// Builds the display model from a state and its recommendation.
#[must_use]
pub fn build_display_model(state: &CalculationState, results: &Recommendation) -> DisplayModel {
    let offsets = state.profile.offsets();
    let target_display = |target: Target, offset: f64| {
        let measurement = results.get(target);
        TargetDisplay {
            target,
            value: measurement.value,
            value_text: format!("{:.1}", measurement.value),
            range_text: format_range(measurement.range.min, measurement.range.max),
            offset,
            offset_text: format_offset(offset),
        }
    };

    let env = state.environment.info();
    let profile = state.profile.info();

    DisplayModel {
        height_text: format!("{:.1} cm", state.height),
        profile: state.profile,
        environment: state.environment,
        targets: [
            target_display(Target::Chair, offsets.chair),
            target_display(Target::Desk, offsets.desk),
            target_display(Target::Monitor, offsets.monitor),
        ],
        environment_status: format!("{} ({})", env.name, env.description),
        chair_formula: chair_formula_text(state.environment),
        shoe_detail: shoe_detail(state.environment),
        profile_title: format!("Body profile: {}", profile.name),
        profile_description: profile.description.to_string(),
    }
}

/// Coalesces render requests and pushes fresh results to a surface.
#[derive(Debug, Clone, Default)]
pub struct PresentationAdapter {
    pending: bool,
    renders: u64,
}

impl PresentationAdapter {
    /// Creates an adapter with nothing scheduled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: false,
            renders: 0,
        }
    }

    /// Schedules a render.
    ///
    /// Returns `false` if one was already pending; that render will pick up
    /// the new state anyway.
    pub fn request_render(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Whether a render is scheduled.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    /// Number of renders actually performed.
    #[must_use]
    pub const fn render_count(&self) -> u64 {
        self.renders
    }

    /// Runs the scheduled render, if any, against the current state.
    pub fn flush(
        &mut self,
        state: &CalculationState,
        surface: &mut impl DisplaySurface,
    ) -> Option<DisplayModel> {
        if !self.pending {
            return None;
        }
        self.pending = false;
        Some(self.render_now(state, surface))
    }

    /// Renders unconditionally, clearing any pending request.
    pub fn render_now(
        &mut self,
        state: &CalculationState,
        surface: &mut impl DisplaySurface,
    ) -> DisplayModel {
        self.pending = false;
        self.renders += 1;

        let results = calculate_all(state.height, state.profile, state.environment);
        let model = build_display_model(state, &results);

        for target in &model.targets {
            surface.set_result(target.target, target.value, &target.value_text);
            surface.set_range(target.target, &target.range_text);
        }
        surface.set_details(&model);

        model
    }
}
