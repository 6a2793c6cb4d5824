//! Fixed dealer drawing policy.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;
use crate::hand::{Hand, deal_one};

/// Value at which the dealer stops drawing on a hard hand.
pub const DEALER_STANDS: u8 = 17;

/// What the dealer does next with a given hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerStep {
    /// Draw one more card.
    Draw,
    /// Stop with the given value.
    Stand(u8),
    /// Stop; the hand has busted.
    Bust,
}

/// Decides the dealer's next step: hit below 17 and on soft 17, stand
/// otherwise.
#[must_use]
pub const fn next_step(hand: &Hand) -> DealerStep {
    if hand.is_busted() {
        DealerStep::Bust
    } else if hand.value() < DEALER_STANDS
        || (hand.value() == DEALER_STANDS && hand.is_soft())
    {
        DealerStep::Draw
    } else {
        DealerStep::Stand(hand.value())
    }
}

/// Final state of the dealer's hand after [`play`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerPlay {
    /// Cards drawn by the dealer, in order.
    pub drawn: Vec<Card>,
    /// The terminal step: [`DealerStep::Stand`] or [`DealerStep::Bust`].
    pub finish: DealerStep,
}

/// Draws cards into the dealer's hand until the policy says stop.
///
/// # Errors
///
/// Returns an error if the deck runs out or the hand fills up.
pub fn play(hand: &mut Hand, deck: &mut Deck) -> Result<DealerPlay, DealError> {
    let mut drawn = Vec::new();
    loop {
        match next_step(hand) {
            DealerStep::Draw => {
                let card = deal_one(deck, hand)?;
                log::debug!("dealer hits: drew rank {}, now {}", card.rank, hand.value());
                drawn.push(card);
            }
            finish => {
                log::debug!("dealer finishes: {finish:?}");
                return Ok(DealerPlay { drawn, finish });
            }
        }
    }
}
