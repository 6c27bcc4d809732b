//! Ordered deck with an owned randomness source.

extern crate alloc;

use alloc::collections::VecDeque;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Rank, Suit};

/// An ordered deck of cards.
///
/// Cards are dealt from the front; the relative order of the remaining
/// cards is preserved. Each deck owns a seeded RNG, so shuffle outcomes
/// are reproducible when the caller controls the seed.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards, front card dealt first.
    cards: VecDeque<Card>,
    /// Random number generator used by [`shuffle`](Self::shuffle).
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a full 52-card deck in construction order, unshuffled.
    #[must_use]
    pub fn standard(seed: u64) -> Self {
        Self::from_cards(standard_cards(), seed)
    }

    /// Creates a 13-card single-suit deck in rank order, unshuffled.
    #[must_use]
    pub fn single_suit(suit: Suit, seed: u64) -> Self {
        Self::from_cards(suit_cards(suit), seed)
    }

    /// Creates a deck from an explicit card sequence.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>, seed: u64) -> Self {
        Self {
            cards: cards.into_iter().collect(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Reorders the remaining cards uniformly at random.
    ///
    /// No-op on an empty deck.
    pub fn shuffle(&mut self) {
        self.cards.make_contiguous().shuffle(&mut self.rng);
    }

    /// Removes and returns the front card.
    ///
    /// Returns `None` when the deck is empty; callers must check before
    /// use rather than rely on a crash.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether no cards remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Replaces the entire contents, discarding prior order and count.
    ///
    /// The deck keeps its RNG, so a reset does not disturb the shuffle
    /// sequence.
    pub fn reset(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.clear();
        self.cards.extend(cards);
    }

    /// Replaces the contents with a fresh ordered 52-card deck.
    pub fn reset_standard(&mut self) {
        self.reset(standard_cards());
    }

    /// Replaces the contents with a fresh ordered 13-card deck of `suit`.
    pub fn reset_single_suit(&mut self, suit: Suit) {
        self.reset(suit_cards(suit));
    }
}

/// All 52 cards in suit-major construction order.
pub(crate) fn standard_cards() -> impl Iterator<Item = Card> {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(suit, rank)))
}

/// The 13 cards of one suit in rank order.
pub(crate) fn suit_cards(suit: Suit) -> impl Iterator<Item = Card> {
    Rank::ALL.into_iter().map(move |rank| Card::new(suit, rank))
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::vec::Vec;

    use super::Deck;
    use crate::card::{Card, DECK_SIZE, SUIT_SIZE, Suit};

    #[test]
    fn unshuffled_deck_deals_in_construction_order() {
        let mut deck = Deck::standard(0);
        let expected: Vec<Card> = super::standard_cards().collect();

        let mut dealt = Vec::new();
        while let Some(card) = deck.deal() {
            dealt.push(card);
        }

        assert_eq!(dealt, expected);
        assert!(deck.is_empty());
        assert_eq!(deck.deal(), None);
    }

    #[test]
    fn shuffle_preserves_the_card_multiset() {
        let mut deck = Deck::standard(7);
        deck.shuffle();

        let mut dealt = Vec::new();
        while let Some(card) = deck.deal() {
            dealt.push(card);
        }

        assert_eq!(dealt.len(), DECK_SIZE);
        for card in super::standard_cards() {
            assert!(dealt.contains(&card), "missing {card}");
        }
    }

    #[test]
    fn same_seed_shuffles_identically() {
        let mut a = Deck::standard(42);
        let mut b = Deck::standard(42);
        a.shuffle();
        b.shuffle();

        while let Some(card) = a.deal() {
            assert_eq!(Some(card), b.deal());
        }
        assert!(b.is_empty());
    }

    #[test]
    fn single_suit_deck_has_thirteen_cards_of_one_suit() {
        let mut deck = Deck::single_suit(Suit::Clubs, 3);
        assert_eq!(deck.len(), SUIT_SIZE);

        while let Some(card) = deck.deal() {
            assert_eq!(card.suit, Suit::Clubs);
        }
    }

    #[test]
    fn reset_replaces_contents_wholesale() {
        let mut deck = Deck::standard(1);
        deck.deal();
        deck.deal();

        deck.reset_standard();
        assert_eq!(deck.len(), DECK_SIZE);

        deck.reset(core::iter::empty());
        assert!(deck.is_empty());
    }
}
