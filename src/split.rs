//! Splitting a pair into two independent hands.

use crate::deck::Deck;
use crate::error::{DealError, SplitError};
use crate::hand::{Hand, deal_one};

/// Checks that `hand` may be split.
///
/// # Errors
///
/// Returns [`SplitError::AlreadySplit`] for a hand that came from a split and
/// [`SplitError::NotAPair`] unless the hand is two cards of equal rank.
pub fn check(hand: &Hand) -> Result<(), SplitError> {
    if hand.is_from_split() {
        return Err(SplitError::AlreadySplit);
    }
    if !hand.is_pair() {
        return Err(SplitError::NotAPair);
    }
    Ok(())
}

/// Moves the second card of `hand` into a new hand, without dealing.
///
/// Both halves are one-card hands scored from their card alone, so a pair
/// of Aces leaves two hands of 11 with one soft Ace each.
///
/// # Errors
///
/// Returns an error if the hand cannot be split; it is left unchanged.
pub fn separate(hand: &mut Hand) -> Result<Hand, SplitError> {
    check(hand)?;
    hand.take_split_card().ok_or(SplitError::NotAPair)
}

/// Splits `hand` and deals one fresh card into each half.
///
/// Returns the second hand; `hand` keeps the first card of the pair.
///
/// # Errors
///
/// Returns an error if the hand cannot be split or the deck holds fewer than
/// the two cards needed. Either way the hand and deck are left unchanged.
pub fn split(hand: &mut Hand, deck: &mut Deck) -> Result<Hand, SplitError> {
    check(hand)?;
    if deck.remaining() < 2 {
        return Err(DealError::DeckExhausted.into());
    }

    let mut second = separate(hand)?;
    deal_one(deck, hand)?;
    deal_one(deck, &mut second)?;
    log::debug!(
        "split pair of rank {}: hands now {} and {}",
        second.cards()[0].rank,
        hand.value(),
        second.value()
    );
    Ok(second)
}
