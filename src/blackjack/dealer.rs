use alloc::vec::Vec;

use crate::result::{RoundOutcome, RoundResult};
use crate::score::blackjack_score;

use super::{BlackjackGame, RoundState};

impl BlackjackGame {
    /// Plays out the dealer's hand and settles the round.
    ///
    /// The dealer draws while under 17 and stands on 17 or higher. A dry
    /// deck stops the draw early; the round then settles with whatever
    /// the dealer holds.
    pub(super) fn dealer_play(&self) -> RoundResult {
        let mut drawn = Vec::new();

        loop {
            let value = blackjack_score(self.dealer.lock().cards());
            if value >= 17 {
                break;
            }

            let Some(card) = self.draw() else {
                break;
            };
            self.dealer.lock().add(card);
            drawn.push(card);
        }

        let player_score = blackjack_score(self.player.lock().cards());
        let dealer_score = blackjack_score(self.dealer.lock().cards());

        let outcome = if dealer_score > 21 || player_score > dealer_score {
            RoundOutcome::PlayerWins
        } else if player_score < dealer_score {
            RoundOutcome::DealerWins
        } else {
            RoundOutcome::Tie
        };

        *self.outcome.lock() = Some(outcome);
        *self.state.lock() = RoundState::RoundOver;

        RoundResult {
            outcome,
            dealer_draws: drawn,
            player_score,
            dealer_score,
        }
    }
}
