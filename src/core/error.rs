//! Engine error kinds.
//!
//! Every fallible operation returns [`Result`]. Errors are raised where they
//! are detected and never recovered inside the engine, with one exception:
//! the orchestrator turns [`GameError::InsufficientFunds`] on a mandatory
//! debit into a bankruptcy, which is a game rule rather than error recovery.

use thiserror::Error;

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, GameError>;

/// Errors produced by the rules engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Malformed input to a constructor or operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A debit exceeds the available balance.
    #[error("insufficient funds: {required} required, {available} available")]
    InsufficientFunds { required: i64, available: i64 },

    /// Board or track construction violated a layout invariant.
    #[error("invalid board layout: {0}")]
    InvalidBoardLayout(#[from] LayoutViolation),

    /// A tile or position lookup fell outside the board.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Operation on an empty turn sequence or a missing player.
    #[error("no such element: {0}")]
    NoSuchElement(String),

    /// Operation invoked in a state where it is meaningless.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}

impl GameError {
    /// Shorthand for [`GameError::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Shorthand for [`GameError::NoSuchElement`].
    pub fn no_such_element(message: impl Into<String>) -> Self {
        Self::NoSuchElement(message.into())
    }

    /// Shorthand for [`GameError::UnsupportedOperation`].
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::UnsupportedOperation(message.into())
    }

    /// True for the one error kind the orchestrator converts into bankruptcy.
    #[must_use]
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, Self::InsufficientFunds { .. })
    }
}

/// The specific way a board or track layout is invalid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutViolation {
    #[error("board needs at least 4 tiles, got {0}")]
    TooFewTiles(usize),

    #[error("expected exactly 4 corner tiles, found {0}")]
    CornerCount(usize),

    #[error("corner kind {0} appears more than once")]
    DuplicateCornerKind(String),

    #[error("corner position {0} is used by more than one tile")]
    DuplicateCornerPosition(String),

    #[error("{edge_tiles} non-corner tiles cannot be split evenly over 4 sides")]
    NotSquare { edge_tiles: usize },

    #[error("tax tile at index {index} charges {percentage}%, expected 0..=100")]
    TaxOutOfRange { index: usize, percentage: i64 },

    #[error("malformed tile descriptor at index {index}: {reason}")]
    MalformedDescriptor { index: usize, reason: String },

    #[error("track needs at least 2 cells, got {0}")]
    TrackTooShort(usize),

    #[error("jump {from} -> {to} leaves a track of length {len}")]
    JumpOutOfRange { from: usize, to: usize, len: usize },

    #[error("jump may not start on the first or last cell (cell {0})")]
    JumpFromEndpoint(usize),

    #[error("snake at cell {from} must lead down, not to {to}")]
    SnakeGoesUp { from: usize, to: usize },

    #[error("ladder at cell {from} must lead up, not to {to}")]
    LadderGoesDown { from: usize, to: usize },

    #[error("cell {0} already has a snake or ladder")]
    DuplicateJump(usize),
}
