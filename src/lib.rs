//! Engines for four simple card games sharing one deck-and-hand
//! vocabulary: blackjack, high card, slapjack, and guess the card.
//!
//! Each engine is a small state machine with synchronous `&self`
//! actions; a presentation layer (CLI, GUI, test harness) invokes
//! actions and renders the returned outcomes. The slapjack cadences are
//! logical clocks advanced explicitly by the caller, so nothing in the
//! crate touches wall-clock time.
//!
//! # Example
//!
//! ```
//! use cardsim::{BlackjackGame, RoundState};
//!
//! let game = BlackjackGame::new(42);
//! game.shuffle();
//! game.deal().unwrap();
//! assert_eq!(game.state(), RoundState::PlayerTurn);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod blackjack;
pub mod card;
pub mod deck;
pub mod error;
pub mod guess;
pub mod hand;
pub mod high_card;
pub mod options;
pub mod result;
pub mod score;
pub mod slapjack;
mod sync;

// Re-export main types
pub use blackjack::{BlackjackGame, RoundState};
pub use card::{Card, DECK_SIZE, Rank, SUIT_SIZE, Suit};
pub use deck::Deck;
pub use error::{DealError, DrawError, GuessError};
pub use guess::{GuessOutcome, GuessTheCard};
pub use hand::Hand;
pub use high_card::{HighCardGame, HighCardResult, HighCardWinner};
pub use options::{FLIP_INTERVAL, ReactionWindow, SlapjackOptions};
pub use result::{HitOutcome, RoundOutcome, RoundResult};
pub use slapjack::{FlipOutcome, ReactionOutcome, SlapOutcome, SlapjackGame};
