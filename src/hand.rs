//! Hand representation with incrementally maintained value.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;
use crate::options::AceDemotion;

/// Maximum number of cards a hand can hold.
pub const MAX_HAND: usize = 12;

/// Highest value a hand can have without busting.
pub const BLACKJACK: u8 = 21;

/// A hand of cards, owned by the dealer or one seat.
///
/// The value is updated as each card is added rather than recomputed from
/// scratch: Aces enter at 11 and are demoted to 1 only when the hand would
/// otherwise exceed 21.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Current value of the hand.
    value: u8,
    /// Aces still counted as 11.
    soft_aces: u8,
    /// Whether the hand has gone over 21 with no Ace left to demote.
    busted: bool,
    /// Whether this hand is the product of a split.
    from_split: bool,
    /// How soft Aces are demoted when the hand goes over 21.
    demotion: AceDemotion,
}

impl Hand {
    /// Creates a new empty hand using the default demotion policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_demotion(AceDemotion::default())
    }

    /// Creates a new empty hand using the given demotion policy.
    #[must_use]
    pub const fn with_demotion(demotion: AceDemotion) -> Self {
        Self {
            cards: Vec::new(),
            value: 0,
            soft_aces: 0,
            busted: false,
            from_split: false,
            demotion,
        }
    }

    /// Checks that the hand can take another card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::HandFull`] if the hand holds [`MAX_HAND`] cards,
    /// or [`DealError::HandBusted`] if it has already busted.
    pub fn check_room(&self) -> Result<(), DealError> {
        if self.cards.len() >= MAX_HAND {
            return Err(DealError::HandFull);
        }
        if self.busted {
            return Err(DealError::HandBusted);
        }
        Ok(())
    }

    /// Adds a card to the hand and updates its value, soft count and bust
    /// flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand cannot take another card; the hand is
    /// left unchanged.
    pub fn deal_into(&mut self, card: Card) -> Result<(), DealError> {
        self.check_room()?;

        self.cards.push(card);
        self.value += card.score();
        if card.is_ace() {
            self.soft_aces += 1;
        }

        match self.demotion {
            AceDemotion::UntilSafe => {
                while self.value > BLACKJACK && self.soft_aces > 0 {
                    self.demote();
                }
                self.busted = self.value > BLACKJACK;
            }
            AceDemotion::OncePerCard => {
                if self.value > BLACKJACK {
                    if self.soft_aces > 0 {
                        self.demote();
                    } else {
                        self.busted = true;
                    }
                }
            }
        }

        Ok(())
    }

    const fn demote(&mut self) {
        self.value -= 10;
        self.soft_aces -= 1;
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current value of the hand.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Returns the number of Aces still counted as 11.
    #[must_use]
    pub const fn soft_aces(&self) -> u8 {
        self.soft_aces
    }

    /// Returns whether the hand is soft (an Ace is still counted as 11).
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        self.soft_aces > 0
    }

    /// Returns whether the hand has busted.
    #[must_use]
    pub const fn is_busted(&self) -> bool {
        self.busted
    }

    /// Returns whether this hand is the product of a split.
    #[must_use]
    pub const fn is_from_split(&self) -> bool {
        self.from_split
    }

    /// Returns the demotion policy of the hand.
    #[must_use]
    pub const fn demotion(&self) -> AceDemotion {
        self.demotion
    }

    /// Returns whether the first two cards share a rank.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].rank == self.cards[1].rank
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Empties the hand for a new round.
    pub fn clear(&mut self) {
        *self = Self::with_demotion(self.demotion);
    }

    /// Removes the second card of a pair and rebuilds both halves as
    /// one-card split hands.
    ///
    /// The caller has already validated the pair.
    pub(crate) fn take_split_card(&mut self) -> Option<Self> {
        if self.cards.len() != 2 {
            return None;
        }
        let moved = self.cards.pop()?;
        let kept = self.cards[0];
        *self = Self::split_from(kept, self.demotion);
        Some(Self::split_from(moved, self.demotion))
    }

    /// A one-card hand scored directly from its card: an Ace is 11 and soft.
    fn split_from(card: Card, demotion: AceDemotion) -> Self {
        let mut cards = Vec::with_capacity(MAX_HAND);
        cards.push(card);
        Self {
            cards,
            value: card.score(),
            soft_aces: u8::from(card.is_ace()),
            busted: false,
            from_split: true,
            demotion,
        }
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

/// Deals the next card of `deck` into `hand`.
///
/// The hand is checked first so a rejected deal does not consume a card.
///
/// # Errors
///
/// Returns an error if the hand cannot take a card or the deck is exhausted.
pub fn deal_one(deck: &mut Deck, hand: &mut Hand) -> Result<Card, DealError> {
    hand.check_room()?;
    let card = deck.deal()?;
    hand.deal_into(card)?;
    log::trace!("dealt rank {} of {:?}, hand now {}", card.rank, card.suit, hand.value());
    Ok(card)
}
