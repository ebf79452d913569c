//! Error handling types
//!
//! Lint findings are never reported through this type. A [`LintError`] means
//! the caller broke the contract (unsupported kind) or handed in bad input
//! (unknown kind word, unusable unit table, unreadable config).

use crate::descriptor::MetricKind;
use thiserror::Error;

/// Result type alias for metric-lint operations
pub type Result<T> = std::result::Result<T, LintError>;

/// Errors raised by the lint engine and its configuration layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LintError {
    /// A kind word that is not one of the known metric kinds
    #[error("Unknown metric kind: {0}")]
    UnknownKind(String),

    /// A known kind that has no lint rule table (only `untyped`)
    #[error("Unsupported metric kind for linting: {0}")]
    UnsupportedKind(MetricKind),

    /// Configuration could not be loaded or extracted
    #[error("Configuration error: {0}")]
    Config(String),

    /// The unit table is not usable (empty unit or base words)
    #[error("Invalid unit table: {0}")]
    InvalidTable(String),
}

impl From<figment::Error> for LintError {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}
