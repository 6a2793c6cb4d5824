//! Plain-data snapshot of the table for a display.

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::Hand;

use super::{SeatId, Table};

/// A card as the display should draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardView {
    /// The card.
    pub card: Card,
    /// Whether the card is drawn face-down.
    pub face_down: bool,
}

/// A hand as the display should draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandView {
    /// Cards in order.
    pub cards: Vec<CardView>,
    /// Current hand value.
    pub value: u8,
    /// Whether the hand has busted.
    pub busted: bool,
    /// Whether the hand has no cards.
    pub empty: bool,
}

impl HandView {
    fn new(hand: &Hand, hide_first: bool) -> Self {
        Self {
            cards: hand
                .cards()
                .iter()
                .enumerate()
                .map(|(i, &card)| CardView {
                    card,
                    face_down: hide_first && i == 0,
                })
                .collect(),
            value: hand.value(),
            busted: hand.is_busted(),
            empty: hand.is_empty(),
        }
    }
}

/// A seat's hands as the display should draw them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatView {
    /// The seat.
    pub seat: SeatId,
    /// The primary hand, then the split hand if any.
    pub hands: Vec<HandView>,
}

/// Everything a display needs to draw the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// The dealer's hand.
    pub dealer: HandView,
    /// Player seats in turn order.
    pub seats: Vec<SeatView>,
}

impl Table {
    /// Takes a snapshot of the table for display.
    #[must_use]
    pub fn view(&self) -> TableView {
        TableView {
            dealer: HandView::new(&self.dealer, self.hole_hidden),
            seats: self
                .seats
                .iter()
                .map(|seat| SeatView {
                    seat: seat.id(),
                    hands: seat.hands().iter().map(|hand| HandView::new(hand, false)).collect(),
                })
                .collect(),
        }
    }
}
