//! Guess-the-card engine.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::standard_cards;
use crate::error::GuessError;
use crate::score::rank_matches;

/// Outcome of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    /// Whether the guess named the chosen card's rank.
    pub correct: bool,
    /// The revealed card.
    pub card: Card,
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.correct {
            write!(f, "Correct! It was: {}", self.card)
        } else {
            write!(f, "Wrong! It was: {}", self.card)
        }
    }
}

/// A single-shot guessing game.
///
/// One card is chosen uniformly at random from a fresh standard 52-card
/// deck; nothing persists across rounds beyond the chosen card.
pub struct GuessTheCard {
    /// The card to be guessed.
    chosen: Card,
}

impl GuessTheCard {
    /// Chooses the card for this round.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards: Vec<Card> = standard_cards().collect();
        let chosen = cards[rng.random_range(0..cards.len())];

        Self { chosen }
    }

    /// The chosen card, for tests and for presentations that reveal it
    /// outside a guess.
    #[must_use]
    pub const fn card(&self) -> Card {
        self.chosen
    }

    /// Evaluates a guess against the chosen card's rank, ignoring case.
    ///
    /// # Errors
    ///
    /// Blank text is rejected before evaluation, leaving the card
    /// unrevealed so the caller can prompt again.
    pub fn submit_guess(&self, guess: &str) -> Result<GuessOutcome, GuessError> {
        if guess.trim().is_empty() {
            return Err(GuessError::Empty);
        }

        Ok(GuessOutcome {
            correct: rank_matches(guess, self.chosen.rank),
            card: self.chosen,
        })
    }
}
