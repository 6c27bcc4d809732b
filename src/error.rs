//! Error types for game operations.
//!
//! Every variant is a refusal the presentation layer surfaces as a
//! message; none of them is fatal, and the engine state is left exactly
//! as it was before the refused action.

use thiserror::Error;

/// Errors that can occur when dealing a blackjack round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// A round is still being played; it must settle before a new deal.
    #[error("round in progress")]
    RoundInProgress,
    /// Fewer than four cards remain; shuffle or reset the deck first.
    #[error("not enough cards")]
    NotEnoughCards,
}

/// Errors that can occur when drawing in high card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The player already drew a card this round.
    #[error("player already drew a card")]
    PlayerAlreadyDrew,
    /// The dealer already drew a card this round.
    #[error("dealer already drew a card")]
    DealerAlreadyDrew,
    /// The dealer cannot draw until the player has drawn.
    #[error("player must draw first")]
    PlayerMustDrawFirst,
}

/// Errors that can occur when submitting a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    /// The guess text was empty or blank; prompt again.
    #[error("guess is empty")]
    Empty,
}
