//! The kiosk table: deck, dealer and player seats for one round at a time.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{SplitError, TableError};
use crate::hand::{Hand, deal_one};
use crate::options::TableOptions;
use crate::split;

mod showdown;
pub mod state;
mod turn;
mod view;

pub use state::{RoundState, SeatId};
pub use turn::{PlayerInput, Prompt, PromptKind};
pub use view::{CardView, HandView, SeatView, TableView};

/// Maximum number of player seats.
pub const MAX_PLAYERS: u8 = 4;

/// A player seat: a primary hand and, after a split, a second hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    id: SeatId,
    hands: Vec<Hand>,
}

impl Seat {
    fn new(id: SeatId, hand: Hand) -> Self {
        let mut hands = Vec::with_capacity(2);
        hands.push(hand);
        Self { id, hands }
    }

    /// Returns the seat identifier.
    #[must_use]
    pub const fn id(&self) -> SeatId {
        self.id
    }

    /// Returns the seat's hands: the primary hand first.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns whether the seat has split this round.
    #[must_use]
    pub fn is_split(&self) -> bool {
        self.hands.len() > 1
    }
}

/// A single blackjack table with one dealer and up to [`MAX_PLAYERS`]
/// seats.
///
/// The table owns the deck and every hand. Hands are addressed by seat and
/// hand index (0 for the primary hand, 1 for the split hand).
#[derive(Debug, Clone)]
pub struct Table {
    /// Table options.
    options: TableOptions,
    /// The deck, reshuffled every round.
    deck: Deck,
    /// Dealer's hand.
    dealer: Hand,
    /// Player seats in turn order.
    seats: Vec<Seat>,
    /// Current round state.
    state: RoundState,
    /// Whether the dealer's first card is face-down.
    hole_hidden: bool,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Table {
    /// Creates a table whose shuffles are driven by the given seed.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidPlayerCount`] unless `options.players` is
    /// between 1 and [`MAX_PLAYERS`].
    ///
    /// # Example
    ///
    /// ```
    /// use tapjack::{Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 42).unwrap();
    /// assert_eq!(table.seats().len(), 4);
    /// ```
    pub fn new(options: TableOptions, seed: u64) -> Result<Self, TableError> {
        if !(1..=MAX_PLAYERS).contains(&options.players) {
            return Err(TableError::InvalidPlayerCount);
        }

        let seats = (1..=options.players)
            .map(|id| Seat::new(SeatId(id), Hand::with_demotion(options.demotion)))
            .collect();

        Ok(Self {
            options,
            deck: Deck::new(),
            dealer: Hand::with_demotion(options.demotion),
            seats,
            state: RoundState::WaitingForRound,
            hole_hidden: false,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Empties every hand and reshuffles the deck.
    pub fn new_round(&mut self) {
        let demotion = self.options.demotion;
        for seat in &mut self.seats {
            seat.hands.truncate(1);
            seat.hands[0] = Hand::with_demotion(demotion);
        }
        self.dealer.clear();
        self.hole_hidden = false;
        self.deck.shuffle(&mut self.rng);
        self.state = RoundState::Shuffled;
        log::debug!("new round with {} seats", self.seats.len());
    }

    /// Deals two cards to every seat and the dealer, one at a time in seat
    /// order with the dealer last. The dealer's first card is face-down.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not just been shuffled.
    pub fn deal_opening(&mut self) -> Result<(), TableError> {
        if self.state != RoundState::Shuffled {
            return Err(reject(TableError::InvalidState));
        }

        for _ in 0..2 {
            for seat in &mut self.seats {
                deal_one(&mut self.deck, &mut seat.hands[0])?;
            }
            deal_one(&mut self.deck, &mut self.dealer)?;
        }

        self.hole_hidden = true;
        self.state = RoundState::PlayerTurns;
        Ok(())
    }

    /// Deals one card into a seat's hand.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player phase, the seat or hand does
    /// not exist, the hand has busted, or the deal fails.
    pub fn hit(&mut self, seat: SeatId, hand_index: usize) -> Result<Card, TableError> {
        if self.state != RoundState::PlayerTurns {
            return Err(reject(TableError::InvalidState));
        }

        let deck = &mut self.deck;
        let hand = Self::find_seat_mut(&mut self.seats, seat)?
            .hands
            .get_mut(hand_index)
            .ok_or_else(|| reject(TableError::HandNotFound))?;

        if hand.is_busted() {
            return Err(reject(TableError::HandNotActive));
        }

        let card = deal_one(deck, hand).map_err(|err| reject(err.into()))?;
        log::debug!("seat {seat} hand {hand_index} hits: now {}", hand.value());
        Ok(card)
    }

    /// Returns whether the seat's primary hand may be split.
    #[must_use]
    pub fn can_split(&self, seat: SeatId) -> bool {
        self.state == RoundState::PlayerTurns
            && self
                .seat(seat)
                .is_some_and(|seat| !seat.is_split() && split::check(&seat.hands[0]).is_ok())
    }

    /// Splits the seat's primary hand and deals one card into each half.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player phase, the seat does not
    /// exist, it has already split, or its primary hand is not a pair.
    pub fn split(&mut self, seat: SeatId) -> Result<(), TableError> {
        if self.state != RoundState::PlayerTurns {
            return Err(reject(TableError::InvalidState));
        }

        let deck = &mut self.deck;
        let found = Self::find_seat_mut(&mut self.seats, seat)?;
        if found.is_split() {
            return Err(reject(SplitError::AlreadySplit.into()));
        }

        let second = split::split(&mut found.hands[0], deck).map_err(|err| reject(err.into()))?;
        found.hands.push(second);
        log::debug!("seat {seat} split");
        Ok(())
    }

    fn find_seat_mut(seats: &mut [Seat], id: SeatId) -> Result<&mut Seat, TableError> {
        seats
            .iter_mut()
            .find(|seat| seat.id == id)
            .ok_or_else(|| reject(TableError::SeatNotFound))
    }

    /// Returns a seat.
    #[must_use]
    pub fn seat(&self, id: SeatId) -> Option<&Seat> {
        self.seats.iter().find(|seat| seat.id == id)
    }

    /// Returns a seat's hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the seat or hand does not exist.
    pub fn hand(&self, seat: SeatId, hand_index: usize) -> Result<&Hand, TableError> {
        self.seat(seat)
            .ok_or(TableError::SeatNotFound)?
            .hands
            .get(hand_index)
            .ok_or(TableError::HandNotFound)
    }

    /// Returns all seats in turn order.
    #[must_use]
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Returns the seat identifiers in turn order.
    #[must_use]
    pub fn seat_ids(&self) -> Vec<SeatId> {
        self.seats.iter().map(Seat::id).collect()
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns whether the dealer's first card is face-down.
    #[must_use]
    pub const fn is_hole_hidden(&self) -> bool {
        self.hole_hidden
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the deck for replacing its order, e.g. to replay a recorded
    /// round after [`Table::new_round`].
    pub const fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }
}

/// Logs a rejected table operation and passes the error through.
fn reject(err: TableError) -> TableError {
    log::warn!("table operation rejected: {err}");
    err
}
