//! Usage environments and their shoe-thickness corrections.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::{ModelError, SelectorKind};

/// Immutable description of a usage environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvironmentInfo {
    /// Persisted identifier (e.g., "home")
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Signed correction applied to the chair height, in centimeters
    pub shoe_correction: f64,
    /// Short human-readable explanation of the correction
    pub description: &'static str,
}

const HOME: EnvironmentInfo = EnvironmentInfo {
    id: "home",
    name: "Home office",
    shoe_correction: 0.0,
    description: "No shoe correction",
};

const OFFICE: EnvironmentInfo = EnvironmentInfo {
    id: "office",
    name: "Office",
    shoe_correction: -2.0,
    description: "Shoe thickness -2 cm",
};

/// Where the furniture is used.
///
/// Serialized with the same identifiers as [`EnvironmentInfo::id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Environment {
    /// Barefoot or slippers, no correction
    #[default]
    Home,
    /// Street shoes, seat lowered by the sole thickness
    Office,
}

impl Environment {
    /// All environments in display order.
    pub const ALL: [Self; 2] = [Self::Home, Self::Office];

    /// Registry record for this environment.
    #[must_use]
    pub const fn info(self) -> &'static EnvironmentInfo {
        match self {
            Self::Home => &HOME,
            Self::Office => &OFFICE,
        }
    }

    /// Persisted identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        self.info().id
    }

    /// Shoe correction in centimeters.
    #[must_use]
    pub const fn shoe_correction(self) -> f64 {
        self.info().shoe_correction
    }

    /// The other environment.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Home => Self::Office,
            Self::Office => Self::Home,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Environment {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|env| env.id() == s)
            .ok_or_else(|| {
                ModelError::invalid_selector(
                    SelectorKind::Environment,
                    s,
                    Self::ALL.iter().map(|env| env.id()),
                )
            })
    }
}
