//! Service layer for the calculator logic.
//!
//! This module contains the measurement formulas and the components that
//! coordinate state, input and presentation around them.

pub mod input;
pub mod measurement;
pub mod presentation;
pub mod state_store;

// Re-export commonly used types and functions
pub use input::{handle_input_event, InputEvent, StepDirection};
pub use measurement::{calculate_all, Measurement, Recommendation, Target, ToleranceRange};
pub use presentation::{DisplayModel, DisplaySurface, PresentationAdapter};
pub use state_store::StateStore;
