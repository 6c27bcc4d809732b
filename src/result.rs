//! Round result types for blackjack.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Outcome of a settled blackjack round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The player beat the dealer, or the dealer busted.
    PlayerWins,
    /// The dealer beat the player, or the player busted.
    DealerWins,
    /// Equal scores.
    Tie,
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlayerWins => f.write_str("Player 1 wins!"),
            Self::DealerWins => f.write_str("Dealer wins!"),
            Self::Tie => f.write_str("It's a tie!"),
        }
    }
}

/// A card dealt to the player by [`hit`](crate::BlackjackGame::hit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// The player is still at 21 or below.
    Card(Card),
    /// The drawn card pushed the player over 21; the round is over and
    /// the dealer wins.
    Bust(Card),
}

/// Result of a settled round, produced by
/// [`stand`](crate::BlackjackGame::stand).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Who won.
    pub outcome: RoundOutcome,
    /// Cards the dealer drew while playing out their hand.
    pub dealer_draws: Vec<Card>,
    /// The player's final score.
    pub player_score: u8,
    /// The dealer's final score.
    pub dealer_score: u8,
}
