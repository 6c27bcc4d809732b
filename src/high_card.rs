//! High card engine: one card each, highest rank wins.

use core::cmp::Ordering;
use core::fmt;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DrawError;
use crate::hand::Hand;
use crate::score::high_card_value;
use crate::sync::Mutex;

/// Who won a high-card round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighCardWinner {
    /// The player's card ranked higher.
    Player,
    /// The dealer's card ranked higher.
    Dealer,
    /// Equal ranks. Reported as a tie, never resolved arbitrarily.
    Tie,
}

/// Result of a settled high-card round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighCardResult {
    /// Who won.
    pub winner: HighCardWinner,
    /// The player's card.
    pub player_card: Card,
    /// The dealer's card.
    pub dealer_card: Card,
}

impl fmt::Display for HighCardResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner {
            HighCardWinner::Player => write!(
                f,
                "Player wins with {} vs {}!",
                self.player_card, self.dealer_card
            ),
            HighCardWinner::Dealer => write!(
                f,
                "Dealer wins with {} vs {}!",
                self.dealer_card, self.player_card
            ),
            HighCardWinner::Tie => write!(f, "It's a tie! Both have {}!", self.player_card.rank),
        }
    }
}

/// A high-card engine.
///
/// An exhausted deck is replaced with a fresh shuffled one before the
/// next draw, so play can continue indefinitely.
pub struct HighCardGame {
    /// The shared draw deck.
    pub deck: Mutex<Deck>,
    /// The player's hand (at most one card per round).
    player: Mutex<Hand>,
    /// The dealer's hand (at most one card per round).
    dealer: Mutex<Hand>,
    /// Whether a round is underway.
    in_progress: Mutex<bool>,
}

impl HighCardGame {
    /// Creates a new game with a shuffled standard deck.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut deck = Deck::standard(seed);
        deck.shuffle();

        Self {
            deck: Mutex::new(deck),
            player: Mutex::new(Hand::new()),
            dealer: Mutex::new(Hand::new()),
            in_progress: Mutex::new(false),
        }
    }

    /// Draws the player's card, starting a new round if none is underway.
    ///
    /// # Errors
    ///
    /// Refused when the player already drew this round.
    pub fn draw_for_player(&self) -> Result<Card, DrawError> {
        let mut in_progress = self.in_progress.lock();
        if !*in_progress {
            self.player.lock().clear();
            self.dealer.lock().clear();
            *in_progress = true;
        }

        let mut player = self.player.lock();
        if !player.is_empty() {
            return Err(DrawError::PlayerAlreadyDrew);
        }

        let card = self.draw_recycling();
        player.add(card);

        Ok(card)
    }

    /// Draws the dealer's card and settles the round.
    ///
    /// # Errors
    ///
    /// Refused until the player has drawn this round, and refused when
    /// the dealer already drew.
    pub fn draw_for_dealer(&self) -> Result<HighCardResult, DrawError> {
        let mut in_progress = self.in_progress.lock();
        if !*in_progress {
            return Err(DrawError::PlayerMustDrawFirst);
        }

        let mut dealer = self.dealer.lock();
        if !dealer.is_empty() {
            return Err(DrawError::DealerAlreadyDrew);
        }

        let Some(player_card) = self.player.lock().cards().first().copied() else {
            return Err(DrawError::PlayerMustDrawFirst);
        };

        let dealer_card = self.draw_recycling();
        dealer.add(dealer_card);
        drop(dealer);

        *in_progress = false;

        let winner = match high_card_value(player_card.rank).cmp(&high_card_value(dealer_card.rank))
        {
            Ordering::Greater => HighCardWinner::Player,
            Ordering::Less => HighCardWinner::Dealer,
            Ordering::Equal => HighCardWinner::Tie,
        };

        Ok(HighCardResult {
            winner,
            player_card,
            dealer_card,
        })
    }

    /// Clears both hands for another round.
    ///
    /// The deck keeps its remaining cards; recycling happens on demand.
    pub fn rematch(&self) {
        self.player.lock().clear();
        self.dealer.lock().clear();
        *self.in_progress.lock() = false;
    }

    /// The player's drawn card this round, if any.
    pub fn player_card(&self) -> Option<Card> {
        self.player.lock().cards().first().copied()
    }

    /// The dealer's drawn card this round, if any.
    pub fn dealer_card(&self) -> Option<Card> {
        self.dealer.lock().cards().first().copied()
    }

    /// Whether a round is underway.
    pub fn in_progress(&self) -> bool {
        *self.in_progress.lock()
    }

    /// Number of cards remaining before the next recycle.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }

    /// Deals the next card, rebuilding and reshuffling the deck first if
    /// it ran out.
    fn draw_recycling(&self) -> Card {
        let mut deck = self.deck.lock();
        loop {
            if let Some(card) = deck.deal() {
                return card;
            }
            deck.reset_standard();
            deck.shuffle();
        }
    }
}
