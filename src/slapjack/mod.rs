//! Slapjack engine driven by two logical clocks.
//!
//! The presentation layer owns the wall-clock cadences: it calls
//! [`advance_flip_clock`](SlapjackGame::advance_flip_clock) every
//! [`FLIP_INTERVAL`](crate::FLIP_INTERVAL), and arms a single-shot
//! countdown for
//! [`advance_reaction_clock`](SlapjackGame::advance_reaction_clock)
//! whenever a flip reveals a jack. Both transitions are plain
//! synchronous methods, so round logic is testable without real time
//! passing. A slap cancels the armed window within the same dispatch
//! turn; a countdown that fires anyway reports
//! [`ReactionOutcome::Stale`] and changes nothing.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Rank, Suit};
use crate::deck::Deck;
use crate::hand::Hand;
use crate::options::{ReactionWindow, SlapjackOptions};
use crate::sync::Mutex;

pub mod state;

pub use state::{FlipOutcome, ReactionOutcome, SlapOutcome};

/// A revealed jack whose reaction window is still open.
struct LiveJack {
    /// The jack waiting to be slapped.
    card: Card,
    /// Window length captured when the jack was revealed.
    window: ReactionWindow,
}

/// A slapjack engine.
///
/// Plays the four suits in [`Suit::ALL`] order, one freshly shuffled
/// 13-card sub-deck at a time. A missed jack or the last exhausted suit
/// ends the entire game.
pub struct SlapjackGame {
    /// The current suit's sub-deck.
    pub deck: Mutex<Deck>,
    /// Jacks the player has collected.
    pile: Mutex<Hand>,
    /// Current options; the reaction window is read at arming time.
    options: Mutex<SlapjackOptions>,
    /// The card currently face up.
    current: Mutex<Option<Card>>,
    /// The live jack, while its window is armed.
    live: Mutex<Option<LiveJack>>,
    /// Index into [`Suit::ALL`] for the suit in play.
    suit_index: Mutex<usize>,
    /// Score, floored at zero.
    score: Mutex<u32>,
    /// Whether the game has ended.
    over: Mutex<bool>,
}

impl SlapjackGame {
    /// Creates a new game on the first suit with a shuffled sub-deck.
    #[must_use]
    pub fn new(options: SlapjackOptions, seed: u64) -> Self {
        let mut deck = Deck::single_suit(Suit::ALL[0], seed);
        deck.shuffle();

        Self {
            deck: Mutex::new(deck),
            pile: Mutex::new(Hand::new()),
            options: Mutex::new(options),
            current: Mutex::new(None),
            live: Mutex::new(None),
            suit_index: Mutex::new(0),
            score: Mutex::new(0),
            over: Mutex::new(false),
        }
    }

    /// Reveals the next card, advancing suits as sub-decks run out.
    ///
    /// Revealing a jack arms the reaction window with the length from
    /// the current options; revealing any card disarms a previously
    /// armed window, so an unslapped jack survives only until the next
    /// flip. A tick that exhausts a suit reveals no card.
    pub fn advance_flip_clock(&self) -> FlipOutcome {
        if *self.over.lock() {
            return FlipOutcome::Over;
        }

        let mut deck = self.deck.lock();
        if let Some(card) = deck.deal() {
            drop(deck);

            let jack = card.rank == Rank::Jack;
            *self.current.lock() = Some(card);
            *self.live.lock() = if jack {
                let window = self.options.lock().reaction_window;
                Some(LiveJack { card, window })
            } else {
                None
            };

            return FlipOutcome::Flipped { card, jack };
        }

        let mut suit_index = self.suit_index.lock();
        if *suit_index + 1 < Suit::ALL.len() {
            *suit_index += 1;
            let suit = Suit::ALL[*suit_index];
            deck.reset_single_suit(suit);
            deck.shuffle();
            return FlipOutcome::SuitAdvanced { suit };
        }
        drop(deck);
        drop(suit_index);

        let (score, collected) = self.finish();
        FlipOutcome::Complete { score, collected }
    }

    /// Fires the reaction countdown.
    ///
    /// Call when the armed window elapses. A still-live jack ends the
    /// game; a window already canceled by a slap or superseded by a
    /// later flip reports [`ReactionOutcome::Stale`].
    pub fn advance_reaction_clock(&self) -> ReactionOutcome {
        if *self.over.lock() {
            return ReactionOutcome::Stale;
        }

        if self.live.lock().take().is_none() {
            return ReactionOutcome::Stale;
        }

        let (score, collected) = self.finish();
        ReactionOutcome::Missed { score, collected }
    }

    /// Slaps the table.
    ///
    /// A live jack is collected for +1; its window is canceled
    /// synchronously. Anything else costs a point, floored at zero.
    pub fn slap(&self) -> SlapOutcome {
        if *self.over.lock() {
            return SlapOutcome::Over;
        }

        let Some(LiveJack { card, .. }) = self.live.lock().take() else {
            let mut score = self.score.lock();
            let penalized = score.saturating_sub(1);
            *score = penalized;
            return SlapOutcome::Penalty { score: penalized };
        };

        *self.current.lock() = None;
        self.pile.lock().add(card);

        let mut score = self.score.lock();
        *score += 1;
        SlapOutcome::Collected {
            card,
            score: *score,
        }
    }

    /// Selects the reaction window used from the next arming on.
    ///
    /// A window already armed keeps the length captured when its jack
    /// was revealed.
    pub fn set_reaction_window(&self, window: ReactionWindow) {
        self.options.lock().reaction_window = window;
    }

    /// Starts over: first suit, fresh shuffled sub-deck, empty pile,
    /// zero score.
    pub fn reset(&self) {
        let mut deck = self.deck.lock();
        deck.reset_single_suit(Suit::ALL[0]);
        deck.shuffle();
        drop(deck);

        *self.suit_index.lock() = 0;
        self.pile.lock().clear();
        *self.current.lock() = None;
        *self.live.lock() = None;
        *self.score.lock() = 0;
        *self.over.lock() = false;
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        *self.score.lock()
    }

    /// The jacks collected so far, in slap order.
    pub fn collected(&self) -> Vec<Card> {
        self.pile.lock().cards().to_vec()
    }

    /// The card currently face up, if any.
    pub fn current_card(&self) -> Option<Card> {
        *self.current.lock()
    }

    /// The suit in play.
    pub fn current_suit(&self) -> Suit {
        Suit::ALL[*self.suit_index.lock()]
    }

    /// The window the live jack was armed with, if one is live.
    ///
    /// The presentation layer uses this to schedule the reaction
    /// countdown.
    pub fn live_window(&self) -> Option<ReactionWindow> {
        self.live.lock().as_ref().map(|live| live.window)
    }

    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        *self.over.lock()
    }

    /// Number of cards remaining in the current suit's sub-deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }

    /// Ends the game and reports the final tally.
    fn finish(&self) -> (u32, usize) {
        *self.over.lock() = true;
        *self.live.lock() = None;
        (*self.score.lock(), self.pile.lock().len())
    }
}
