//! Error types for table operations.
//!
//! Every variant here is a caller-protocol violation: the fixed kiosk
//! protocol never triggers them in correct play. The offending operation is
//! aborted with no side effects.

use thiserror::Error;

/// Errors that can occur while dealing a card into a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// All 52 cards of the current shuffle have been dealt.
    #[error("deck exhausted")]
    DeckExhausted,
    /// The hand already holds the maximum number of cards.
    #[error("hand is full")]
    HandFull,
    /// The hand has busted and cannot take more cards.
    #[error("hand has busted")]
    HandBusted,
}

/// Errors that can occur while splitting a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SplitError {
    /// The hand is not exactly two cards of equal rank.
    #[error("hand is not a pair")]
    NotAPair,
    /// The hand was already produced by a split.
    #[error("hand has already been split")]
    AlreadySplit,
    /// Dealing the replacement cards failed.
    #[error(transparent)]
    Deal(#[from] DealError),
}

/// Errors that can occur during table operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    /// Invalid round state for this operation.
    #[error("invalid round state for this operation")]
    InvalidState,
    /// Player count outside the supported range.
    #[error("player count must be between 1 and {max}", max = crate::table::MAX_PLAYERS)]
    InvalidPlayerCount,
    /// Seat not found.
    #[error("seat not found")]
    SeatNotFound,
    /// Hand not found.
    #[error("hand not found")]
    HandNotFound,
    /// Hand is not active (busted, or the seat already split).
    #[error("hand is not active")]
    HandNotActive,
    /// Dealing failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// Splitting failed.
    #[error(transparent)]
    Split(#[from] SplitError),
}
