//! A participant's hand of cards.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// An ordered collection of cards held by one participant.
///
/// Append-only except for an explicit [`clear`](Self::clear). Insertion
/// order is preserved for display; no scoring rule depends on it.
#[derive(Debug, Clone)]
pub struct Hand {
    /// Cards in insertion order.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes every card, for the start of a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns the cards in insertion order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}
