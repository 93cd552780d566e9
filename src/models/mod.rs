//! Data models for the calculator inputs and the fixed catalogs.
//!
//! This module contains the closed environment and profile registries and
//! the mutable calculation state. Models are independent of UI and storage.

pub mod environment;
pub mod error;
pub mod profile;
pub mod state;

// Re-export all model types
pub use environment::{Environment, EnvironmentInfo};
pub use error::{ModelError, SelectorKind};
pub use profile::{Profile, ProfileInfo, ProfileOffsets};
pub use state::{
    normalize_height, parse_height, CalculationState, DEFAULT_HEIGHT, HEIGHT_MAX, HEIGHT_MIN,
};
