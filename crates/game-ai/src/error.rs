//! Error types for the toolkit.
//!
//! Search and pathfinding never fail: they report "no move" or "unreachable"
//! through `Option`. Errors are reserved for misuse of the stateful pieces
//! (state machines naming states that were never added) and for invalid
//! configuration handed in by the host.

/// Result alias used across the crate.
pub type AiResult<T> = Result<T, AiError>;

/// Errors raised by the toolkit.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum AiError {
    /// A state machine was asked to enter a state it does not know.
    #[error("unknown state `{0}`")]
    UnknownState(String),

    /// A state machine was updated before any state was added.
    #[error("state machine has no states")]
    NoStates,

    /// A configuration value is outside its documented range.
    #[error("invalid configuration: `{field}` = {value}")]
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A textual grid could not be parsed.
    #[error("invalid grid: {0}")]
    InvalidGrid(String),
}

impl AiError {
    /// Returns a static string identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownState(_) => "UNKNOWN_STATE",
            Self::NoStates => "NO_STATES",
            Self::InvalidConfig { .. } => "INVALID_CONFIG",
            Self::InvalidGrid(_) => "INVALID_GRID",
        }
    }

    pub(crate) fn invalid(field: &'static str, value: f64) -> Self {
        Self::InvalidConfig { field, value }
    }
}

/// Checks that `value` lies in `[0, 1]`.
pub(crate) fn ensure_unit(field: &'static str, value: f64) -> AiResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(AiError::invalid(field, value))
    }
}
