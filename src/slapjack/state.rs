//! Slapjack flip, slap, and reaction-clock outcomes.

use crate::card::{Card, Suit};

/// Result of a flip-cadence tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// A card was revealed.
    Flipped {
        /// The revealed card.
        card: Card,
        /// Whether the card is a jack; if so, the slap window is armed.
        jack: bool,
    },
    /// The suit's sub-deck ran out; play moves to a fresh shuffled
    /// sub-deck of `suit`. No card is revealed on this tick.
    SuitAdvanced {
        /// The suit now in play.
        suit: Suit,
    },
    /// All four suits are exhausted. The game is over.
    Complete {
        /// Final score.
        score: u32,
        /// Number of jacks collected.
        collected: usize,
    },
    /// The game had already ended; nothing happened.
    Over,
}

/// Result of a slap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlapOutcome {
    /// A live jack was slapped in time: +1 point, card moved to the
    /// player's pile.
    Collected {
        /// The collected jack.
        card: Card,
        /// Score after the award.
        score: u32,
    },
    /// No jack was live: -1 point, floored at zero.
    Penalty {
        /// Score after the penalty.
        score: u32,
    },
    /// The game had already ended; nothing happened.
    Over,
}

/// Result of a reaction-countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionOutcome {
    /// A jack was still live when the window elapsed. The game ends
    /// immediately.
    Missed {
        /// Final score.
        score: u32,
        /// Number of jacks collected.
        collected: usize,
    },
    /// No window was armed (the jack was slapped, or superseded by a
    /// later flip); nothing happened.
    Stale,
}
