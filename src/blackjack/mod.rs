//! Blackjack engine and state management.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::hand::Hand;
use crate::result::RoundOutcome;
use crate::score::blackjack_score;
use crate::sync::Mutex;

mod actions;
mod dealer;
pub mod state;

pub use state::RoundState;

/// A blackjack engine for one player against the house.
///
/// The game owns the deck, both hands, and the round state. Every action
/// is a `&self` method, so a presentation layer can share the engine
/// between button callbacks behind an `Arc`.
pub struct BlackjackGame {
    /// The deck cards are dealt from.
    pub deck: Mutex<Deck>,
    /// Current round state.
    pub state: Mutex<RoundState>,
    /// The player's hand.
    player: Mutex<Hand>,
    /// The dealer's hand.
    dealer: Mutex<Hand>,
    /// Outcome of the last settled round.
    outcome: Mutex<Option<RoundOutcome>>,
}

impl BlackjackGame {
    /// Creates a new game with a fresh ordered 52-card deck.
    ///
    /// The deck starts unshuffled; call [`shuffle`](Self::shuffle) before
    /// the first deal for a random layout.
    ///
    /// # Example
    ///
    /// ```
    /// use cardsim::{BlackjackGame, RoundState};
    ///
    /// let game = BlackjackGame::new(42);
    /// assert_eq!(game.state(), RoundState::AwaitingDeal);
    /// assert_eq!(game.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            deck: Mutex::new(Deck::standard(seed)),
            state: Mutex::new(RoundState::AwaitingDeal),
            player: Mutex::new(Hand::new()),
            dealer: Mutex::new(Hand::new()),
            outcome: Mutex::new(None),
        }
    }

    /// Shuffles the remaining cards.
    ///
    /// Available in any state; in-progress hands are untouched.
    pub fn shuffle(&self) {
        self.deck.lock().shuffle();
    }

    /// Replaces the deck with a fresh ordered 52-card deck.
    ///
    /// Available in any state; in-progress hands are untouched.
    pub fn reset_deck(&self) {
        self.deck.lock().reset_standard();
    }

    /// Returns the current round state.
    pub fn state(&self) -> RoundState {
        *self.state.lock()
    }

    /// Number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }

    /// The player's cards in deal order.
    pub fn player_cards(&self) -> Vec<Card> {
        self.player.lock().cards().to_vec()
    }

    /// The dealer's cards in deal order.
    pub fn dealer_cards(&self) -> Vec<Card> {
        self.dealer.lock().cards().to_vec()
    }

    /// The player's current blackjack score.
    pub fn player_score(&self) -> u8 {
        blackjack_score(self.player.lock().cards())
    }

    /// The dealer's current blackjack score.
    pub fn dealer_score(&self) -> u8 {
        blackjack_score(self.dealer.lock().cards())
    }

    /// Outcome of the last settled round, if any.
    ///
    /// Cleared by the next successful [`deal`](Self::deal).
    pub fn outcome(&self) -> Option<RoundOutcome> {
        *self.outcome.lock()
    }

    /// Draws a card from the deck.
    fn draw(&self) -> Option<Card> {
        self.deck.lock().deal()
    }
}
