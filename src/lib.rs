//! A touchless blackjack kiosk engine with optional `no_std` support.
//!
//! The crate provides the pieces a single-table kiosk needs: a 52-card
//! [`Deck`], incrementally scored [`Hand`]s with soft-Ace demotion, pair
//! splitting, the fixed dealer [`policy`], hand [`result`] resolution, and a
//! [`GestureDecoder`] that turns noisy distance readings into HIT or STAY.
//! [`Table`] ties them together for one dealer and up to four seats.
//!
//! # Example
//!
//! ```
//! use tapjack::{Decision, Prompt, Table, TableOptions};
//!
//! let mut table = Table::new(TableOptions::default(), 42).unwrap();
//! let mut always_stay = |_: &Prompt| Some(Decision::Stay);
//! let result = table.play_round(&mut always_stay).unwrap();
//! assert_eq!(result.seats.len(), 4);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod gesture;
pub mod hand;
pub mod options;
pub mod policy;
pub mod result;
pub mod split;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{DealError, SplitError, TableError};
pub use gesture::{
    Decision, DistanceSensor, EchoPulse, Gesture, GestureDecoder, GestureInput, Samples,
};
pub use hand::{Hand, MAX_HAND, deal_one};
pub use options::{AceDemotion, GestureOptions, TableOptions};
pub use policy::{DealerPlay, DealerStep};
pub use result::{HandResult, Outcome, RoundResult, SeatResult};
pub use table::{
    CardView, HandView, MAX_PLAYERS, PlayerInput, Prompt, PromptKind, RoundState, Seat, SeatId,
    SeatView, Table, TableView,
};
