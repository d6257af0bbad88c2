//! Error types for the control tool.
//!
//! Every command parser and command reports failures through [`ControlError`],
//! which has exactly two kinds:
//!
//! - [`ControlError::ParseFailed`]: the operator's flags were missing or
//!   malformed. Nothing was loaded or mutated.
//! - [`ControlError::CommandFailed`]: the flags were fine but the operation
//!   could not be carried out against host state.
//!
//! Lower layers (the state store) use `anyhow` for context chaining and are
//! wrapped into `CommandFailed` before they reach a parser:
//! ```ignore
//! store.persist().map_err(ControlError::command)?;
//! ```

/// Failure of a command line or of the command it describes.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ControlError {
    #[error("{0}")]
    ParseFailed(String),
    #[error("{0}")]
    CommandFailed(String),
}

impl ControlError {
    /// Operator-input error.
    pub fn parse(msg: impl Into<String>) -> Self {
        ControlError::ParseFailed(msg.into())
    }

    /// Wrap a store-level failure, keeping the whole context chain.
    pub fn command(err: anyhow::Error) -> Self {
        ControlError::CommandFailed(format!("{:#}", err))
    }

    pub fn is_parse_failure(&self) -> bool {
        matches!(self, ControlError::ParseFailed(_))
    }
}

/// Result type alias used by parsers and commands.
pub type ControlResult<T> = Result<T, ControlError>;

/// Result type alias for the state store, carrying `anyhow` context.
pub type StoreResult<T> = anyhow::Result<T>;

/// Fail with `CommandFailed` unless `cond` holds.
///
/// Mirrors `anyhow::ensure!` for the command layer.
#[macro_export]
macro_rules! command_ensure {
    ($cond:expr, $($arg:tt)*) => {
        if !$cond {
            return Err($crate::error::ControlError::CommandFailed(format!($($arg)*)));
        }
    };
}
