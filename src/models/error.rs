//! Typed errors raised by the catalog models.

use std::fmt;

/// Which closed catalog an identifier was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKind {
    /// Body-proportion profile catalog
    Profile,
    /// Usage environment catalog
    Environment,
}

impl fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Profile => write!(f, "profile"),
            Self::Environment => write!(f, "environment"),
        }
    }
}

/// Errors produced when resolving user or persisted identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// Identifier is not part of the closed catalog.
    #[error("Unknown {kind} '{value}' (expected one of: {expected})")]
    InvalidSelector {
        /// Catalog the lookup was made against
        kind: SelectorKind,
        /// The rejected identifier
        value: String,
        /// Comma-separated list of valid identifiers
        expected: String,
    },
}

impl ModelError {
    /// Builds an `InvalidSelector` error listing the accepted identifiers.
    pub fn invalid_selector<'a>(
        kind: SelectorKind,
        value: &str,
        expected: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self::InvalidSelector {
            kind,
            value: value.to_string(),
            expected: expected.into_iter().collect::<Vec<_>>().join(", "),
        }
    }
}
