//! Hand outcomes and round result types.

extern crate alloc;

use alloc::vec::Vec;

use crate::hand::Hand;
use crate::table::SeatId;

/// Result of a single player hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Player loses (player busts or dealer has higher value).
    Loss,
    /// Push (tie).
    Push,
}

/// Compares a player hand with the dealer's hand.
///
/// A busted player always loses, even when the dealer also busted. Equal
/// values push before the dealer's bust is considered.
#[must_use]
pub const fn resolve(player: &Hand, dealer: &Hand) -> Outcome {
    if player.is_busted() {
        Outcome::Loss
    } else if player.value() == dealer.value() {
        Outcome::Push
    } else if player.value() < dealer.value() && !dealer.is_busted() {
        Outcome::Loss
    } else {
        Outcome::Win
    }
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// The hand index (1 for a split hand).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: Outcome,
    /// The player's hand value.
    pub player_value: u8,
    /// Whether the player's hand busted.
    pub player_bust: bool,
}

/// Result for a single seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatResult {
    /// The seat.
    pub seat: SeatId,
    /// Results for each non-empty hand (two if split).
    pub hands: Vec<HandResult>,
}

/// Result of the entire round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each seat, in seat order.
    pub seats: Vec<SeatResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}
