//! Error types for board mutations.
//!
//! Nothing here is fatal. A gesture-driven widget must never wedge mid-drag,
//! so every error below is absorbed by the controller as a logged no-op; the
//! typed variants exist so the absorption sites can say what they skipped.

use thiserror::Error;

/// Reasons a board mutation was refused.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// A column id was not present in the column map
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    /// Source and destination of a cross-column move are the same column
    #[error("card {card_id} is already in column {column_id}")]
    SameColumn { card_id: String, column_id: String },

    /// The moved card was not found in the column it claims to occupy
    #[error("card {card_id} is not in column {column_id}")]
    CardNotInColumn { card_id: String, column_id: String },

    /// The reference card for a within-column move is gone
    #[error("reference card {0} not found in its column")]
    ReferenceCardMissing(String),
}

/// Result type alias for board mutations.
pub type BoardResult<T> = Result<T, BoardError>;
