//! Round state types.

use core::fmt;

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// No round has started since the table was set up.
    WaitingForRound,
    /// Hands are empty and the deck is freshly shuffled.
    Shuffled,
    /// Opening cards are dealt; seats are taking their turns.
    PlayerTurns,
    /// The dealer has played; results can be read.
    RoundOver,
}

/// Identifies a player seat, numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeatId(pub u8);

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
