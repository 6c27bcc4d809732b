use crate::error::DealError;
use crate::result::{HitOutcome, RoundOutcome, RoundResult};
use crate::score::blackjack_score;

use super::{BlackjackGame, RoundState};

impl BlackjackGame {
    /// Deals a fresh round: two cards each, alternating player and
    /// dealer, player first.
    ///
    /// # Errors
    ///
    /// Refused while a round is in progress, and refused when fewer than
    /// four cards remain. Neither refusal touches the deck, the hands,
    /// or the round state.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn deal(&self) -> Result<(), DealError> {
        let mut state = self.state.lock();
        if !matches!(*state, RoundState::AwaitingDeal | RoundState::RoundOver) {
            return Err(DealError::RoundInProgress);
        }

        let mut deck = self.deck.lock();
        if deck.len() < 4 {
            return Err(DealError::NotEnoughCards);
        }

        let mut player = self.player.lock();
        let mut dealer = self.dealer.lock();
        player.clear();
        dealer.clear();
        *self.outcome.lock() = None;

        for _ in 0..2 {
            if let Some(card) = deck.deal() {
                player.add(card);
            }
            if let Some(card) = deck.deal() {
                dealer.add(card);
            }
        }

        *state = RoundState::PlayerTurn;

        Ok(())
    }

    /// Deals one card to the player.
    ///
    /// Out-of-turn hits are ignored and return `None`. `None` is also
    /// returned when the deck is empty; hands and state are untouched,
    /// and the caller may shuffle or reset the deck and hit again.
    pub fn hit(&self) -> Option<HitOutcome> {
        let mut state = self.state.lock();
        if *state != RoundState::PlayerTurn {
            return None;
        }

        let card = self.deck.lock().deal()?;

        let mut player = self.player.lock();
        player.add(card);
        let score = blackjack_score(player.cards());
        drop(player);

        if score > 21 {
            *state = RoundState::RoundOver;
            *self.outcome.lock() = Some(RoundOutcome::DealerWins);
            return Some(HitOutcome::Bust(card));
        }

        Some(HitOutcome::Card(card))
    }

    /// Stands: the dealer plays out their hand and the round settles.
    ///
    /// Out-of-turn stands are ignored and return `None`.
    pub fn stand(&self) -> Option<RoundResult> {
        {
            let mut state = self.state.lock();
            if *state != RoundState::PlayerTurn {
                return None;
            }
            *state = RoundState::DealerTurn;
        }

        Some(self.dealer_play())
    }
}
