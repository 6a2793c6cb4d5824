//! Dealer turn, hand results and the full round driver.

use alloc::vec::Vec;

use crate::error::TableError;
use crate::policy::{self, DealerPlay};
use crate::result::{HandResult, RoundResult, SeatResult, resolve};

use super::{PlayerInput, RoundState, Table};

impl Table {
    /// Dealer plays their hand: the hole card is turned over and the dealer
    /// draws until the fixed policy stands or busts.
    ///
    /// Returns the cards drawn and how the dealer finished.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player phase or the deck runs out.
    pub fn play_dealer(&mut self) -> Result<DealerPlay, TableError> {
        if self.state != RoundState::PlayerTurns {
            return Err(super::reject(TableError::InvalidState));
        }

        self.hole_hidden = false;
        let play = policy::play(&mut self.dealer, &mut self.deck)?;
        self.state = RoundState::RoundOver;
        Ok(play)
    }

    /// Compares every non-empty player hand with the dealer's hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the dealer has not played yet.
    pub fn results(&self) -> Result<RoundResult, TableError> {
        if self.state != RoundState::RoundOver {
            return Err(TableError::InvalidState);
        }

        let seats = self
            .seats
            .iter()
            .map(|seat| SeatResult {
                seat: seat.id(),
                hands: seat
                    .hands()
                    .iter()
                    .enumerate()
                    .filter(|(_, hand)| !hand.is_empty())
                    .map(|(hand_index, hand)| HandResult {
                        hand_index,
                        outcome: resolve(hand, &self.dealer),
                        player_value: hand.value(),
                        player_bust: hand.is_busted(),
                    })
                    .collect(),
            })
            .collect::<Vec<_>>();

        Ok(RoundResult {
            seats,
            dealer_value: self.dealer.value(),
            dealer_bust: self.dealer.is_busted(),
        })
    }

    /// Plays a complete round: shuffle, opening deal, every seat's turn in
    /// order, the dealer, and the results.
    ///
    /// # Errors
    ///
    /// Returns an error if any step fails.
    pub fn play_round<P>(&mut self, input: &mut P) -> Result<RoundResult, TableError>
    where
        P: PlayerInput + ?Sized,
    {
        self.new_round();
        self.deal_opening()?;
        for seat in self.seat_ids() {
            self.play_turn(seat, input)?;
        }
        self.play_dealer()?;
        self.results()
    }
}
