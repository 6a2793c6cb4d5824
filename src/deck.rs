//! The single 52-card deck and its deal cursor.

use rand::Rng;

use crate::card::{Card, DECK_SIZE, RANKS, Suit};
use crate::error::DealError;

/// Suit order used when the deck is first laid out.
const LAYOUT_SUITS: [Suit; 4] = [Suit::Spades, Suit::Clubs, Suit::Diamonds, Suit::Hearts];

/// An ordered 52-card deck with a deal cursor.
///
/// Cards before the cursor have been dealt and are never dealt again until
/// the next [`Deck::shuffle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
    cursor: usize,
}

impl Deck {
    /// Creates a deck in canonical suit-major order: spades, clubs,
    /// diamonds, hearts, each Ace through King.
    #[must_use]
    pub fn new() -> Self {
        let cards = core::array::from_fn(|i| {
            let suit = LAYOUT_SUITS[i / RANKS as usize];
            let rank = (i % RANKS as usize) as u8 + 1;
            Card::new(suit, rank)
        });
        Self { cards, cursor: 0 }
    }

    /// Creates a deck dealing the given cards in order.
    ///
    /// Useful for replaying a recorded round.
    #[must_use]
    pub const fn with_order(cards: [Card; DECK_SIZE]) -> Self {
        Self { cards, cursor: 0 }
    }

    /// Resets the cursor and permutes the cards in place.
    ///
    /// Every position is swapped with a partner drawn from the whole deck,
    /// not from the shrinking Fisher-Yates range. The resulting permutation
    /// is not uniform; this matches the kiosk's recorded output distribution.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cursor = 0;
        for i in 0..DECK_SIZE {
            let j = rng.random_range(0..DECK_SIZE);
            self.cards.swap(i, j);
        }
        log::debug!("deck shuffled");
    }

    /// Deals the card under the cursor and advances it.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::DeckExhausted`] once all 52 cards are dealt.
    pub fn deal(&mut self) -> Result<Card, DealError> {
        let card = *self
            .cards
            .get(self.cursor)
            .ok_or(DealError::DeckExhausted)?;
        self.cursor += 1;
        Ok(card)
    }

    /// Returns the number of cards dealt since the last shuffle.
    #[must_use]
    pub const fn dealt(&self) -> usize {
        self.cursor
    }

    /// Returns the number of cards left to deal.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        DECK_SIZE - self.cursor
    }

    /// Returns all cards in deck order, dealt and undealt.
    #[must_use]
    pub const fn cards(&self) -> &[Card; DECK_SIZE] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
