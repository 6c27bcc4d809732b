//! Blackjack round state.

/// Round lifecycle for a blackjack game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// No round has been dealt yet.
    AwaitingDeal,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and the outcome is available.
    RoundOver,
}
