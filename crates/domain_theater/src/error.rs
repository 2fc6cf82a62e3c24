//! Statement domain errors
//!
//! Every variant aborts the statement being computed; no partial text is
//! ever returned.

use core_kernel::{CoreError, MoneyError, PlayId};
use thiserror::Error;

/// Errors that can occur while pricing or rendering a statement
#[derive(Debug, Error)]
pub enum StatementError {
    /// Play type outside the known set
    #[error("unknown type: {0}")]
    UnknownPlayType(String),

    /// Performance references a play missing from the play table
    #[error("unresolved play id: {0}")]
    UnresolvedPlayId(PlayId),

    /// Arithmetic or currency failure while accumulating amounts
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    /// Pricing configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Configuration(#[from] CoreError),
}

impl StatementError {
    /// Creates an unknown play type error
    pub fn unknown_play_type(play_type: impl Into<String>) -> Self {
        StatementError::UnknownPlayType(play_type.into())
    }

    /// Creates an unresolved play id error
    pub fn unresolved(play_id: &PlayId) -> Self {
        StatementError::UnresolvedPlayId(play_id.clone())
    }
}
