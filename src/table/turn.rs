//! Player turns: prompts, decision sources and the per-seat hit loop.

use crate::error::TableError;
use crate::gesture::Decision;
use crate::hand::BLACKJACK;

use super::{RoundState, SeatId, Table};

/// What a player is being asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Split the pair? HIT accepts, STAY declines.
    Split,
    /// Hit or stay on the hand.
    HitOrStay,
}

/// A question put to the player whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prompt {
    /// The seat being asked.
    pub seat: SeatId,
    /// The hand the question is about.
    pub hand_index: usize,
    /// The hand's value when asked.
    pub value: u8,
    /// What is being asked.
    pub kind: PromptKind,
}

/// A source of player decisions.
///
/// Returning `None` means no decision is available (a scripted source ran
/// dry); the hand is then kept as is.
pub trait PlayerInput {
    /// Answers a prompt.
    fn decide(&mut self, prompt: &Prompt) -> Option<Decision>;
}

impl<F> PlayerInput for F
where
    F: FnMut(&Prompt) -> Option<Decision>,
{
    fn decide(&mut self, prompt: &Prompt) -> Option<Decision> {
        self(prompt)
    }
}

impl Table {
    /// Plays one seat's turn.
    ///
    /// If the opening hand is a pair the player is offered a split, once.
    /// Each hand is then played until it busts, reaches 21, or the player
    /// stays. A split seat plays its primary hand, then its split hand.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player phase, the seat does not
    /// exist, or a deal fails.
    pub fn play_turn<P>(&mut self, seat: SeatId, input: &mut P) -> Result<(), TableError>
    where
        P: PlayerInput + ?Sized,
    {
        if self.state != RoundState::PlayerTurns {
            return Err(super::reject(TableError::InvalidState));
        }

        if self.can_split(seat) {
            let prompt = Prompt {
                seat,
                hand_index: 0,
                value: self.hand(seat, 0)?.value(),
                kind: PromptKind::Split,
            };
            if input.decide(&prompt) == Some(Decision::Hit) {
                self.split(seat)?;
            }
        }

        let mut hand_index = 0;
        while hand_index < self.seat(seat).ok_or(TableError::SeatNotFound)?.hands().len() {
            self.play_hand(seat, hand_index, input)?;
            hand_index += 1;
        }
        Ok(())
    }

    fn play_hand<P>(
        &mut self,
        seat: SeatId,
        hand_index: usize,
        input: &mut P,
    ) -> Result<(), TableError>
    where
        P: PlayerInput + ?Sized,
    {
        loop {
            let hand = self.hand(seat, hand_index)?;
            if hand.is_busted() || hand.value() == BLACKJACK {
                return Ok(());
            }

            let prompt = Prompt {
                seat,
                hand_index,
                value: hand.value(),
                kind: PromptKind::HitOrStay,
            };

            match input.decide(&prompt) {
                Some(Decision::Hit) => {
                    self.hit(seat, hand_index)?;
                }
                Some(Decision::Stay) | None => return Ok(()),
            }
        }
    }
}
