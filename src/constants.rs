//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the persisted storage key.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "ErgoDesk";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "ergodesk";

/// Directory name used under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "ErgoDesk";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "ERGODESK_CONFIG_DIR";

/// Key under which the calculation state is persisted.
pub const STORAGE_KEY: &str = "ergodesk_state_v3";
