//! Body-proportion profiles and the fixed offsets they apply.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::{ModelError, SelectorKind};

/// Signed centimeter offsets a profile adds to each recommendation.
///
/// Offsets are constants of the profile and never scale with height.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ProfileOffsets {
    /// Added to the chair height before clamping
    pub chair: f64,
    /// Added to the desk height
    pub desk: f64,
    /// Added to the monitor top height
    pub monitor: f64,
}

/// Immutable description of a profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileInfo {
    /// Persisted identifier (e.g., "longLegs")
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Explanation of what the offsets correct for
    pub description: &'static str,
    /// Offsets applied by this profile
    pub offsets: ProfileOffsets,
}

const STANDARD: ProfileInfo = ProfileInfo {
    id: "standard",
    name: "Standard",
    description: "Calculated from average body proportions. No additional offsets are applied.",
    offsets: ProfileOffsets {
        chair: 0.0,
        desk: 0.0,
        monitor: 0.0,
    },
};

const LONG_LEGS: ProfileInfo = ProfileInfo {
    id: "longLegs",
    name: "Long legs",
    description: "Legs are longer than average, so the back of the knee sits higher. \
                  Raises the chair and lowers the monitor slightly.",
    offsets: ProfileOffsets {
        chair: 2.0,
        desk: 0.0,
        monitor: -0.7,
    },
};

const LONG_TORSO: ProfileInfo = ProfileInfo {
    id: "longTorso",
    name: "Long torso",
    description: "Torso is longer than average, so elbows and eyes sit higher. \
                  Raises the desk and the monitor.",
    offsets: ProfileOffsets {
        chair: -2.0,
        desk: 1.5,
        monitor: 1.5,
    },
};

/// Body-proportion category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Profile {
    /// Average proportions
    #[default]
    Standard,
    /// Longer legs than average
    LongLegs,
    /// Longer torso than average
    LongTorso,
}

impl Profile {
    /// All profiles in display order.
    pub const ALL: [Self; 3] = [Self::Standard, Self::LongLegs, Self::LongTorso];

    /// Registry record for this profile.
    #[must_use]
    pub const fn info(self) -> &'static ProfileInfo {
        match self {
            Self::Standard => &STANDARD,
            Self::LongLegs => &LONG_LEGS,
            Self::LongTorso => &LONG_TORSO,
        }
    }

    /// Persisted identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        self.info().id
    }

    /// Offsets applied by this profile.
    #[must_use]
    pub const fn offsets(self) -> ProfileOffsets {
        self.info().offsets
    }

    /// Next profile in display order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Standard => Self::LongLegs,
            Self::LongLegs => Self::LongTorso,
            Self::LongTorso => Self::Standard,
        }
    }

    /// Previous profile in display order, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Standard => Self::LongTorso,
            Self::LongLegs => Self::Standard,
            Self::LongTorso => Self::LongLegs,
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Profile {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|profile| profile.id() == s)
            .ok_or_else(|| {
                ModelError::invalid_selector(
                    SelectorKind::Profile,
                    s,
                    Self::ALL.iter().map(|profile| profile.id()),
                )
            })
    }
}
