//! Blackjack engine integration tests.

use cardsim::{BlackjackGame, Card, DealError, HitOutcome, Rank, RoundOutcome, RoundState, Suit};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn stack_deck(game: &BlackjackGame, draws: &[Card]) {
    game.deck.lock().reset(draws.iter().copied());
}

#[test]
fn deal_with_three_cards_fails_without_side_effects() {
    let game = BlackjackGame::new(1);
    stack_deck(
        &game,
        &[
            card(Suit::Hearts, Rank::Nine),
            card(Suit::Clubs, Rank::Five),
            card(Suit::Diamonds, Rank::Seven),
        ],
    );

    assert_eq!(game.deal().unwrap_err(), DealError::NotEnoughCards);
    assert!(game.player_cards().is_empty());
    assert!(game.dealer_cards().is_empty());
    assert_eq!(game.state(), RoundState::AwaitingDeal);
    assert_eq!(game.cards_remaining(), 3);
}

#[test]
fn deal_alternates_player_and_dealer() {
    let game = BlackjackGame::new(2);
    stack_deck(
        &game,
        &[
            card(Suit::Hearts, Rank::Eight),   // player
            card(Suit::Clubs, Rank::Six),      // dealer
            card(Suit::Diamonds, Rank::Seven), // player
            card(Suit::Spades, Rank::Ten),     // dealer
        ],
    );

    game.deal().unwrap();

    assert_eq!(game.state(), RoundState::PlayerTurn);
    assert_eq!(
        game.player_cards(),
        vec![
            card(Suit::Hearts, Rank::Eight),
            card(Suit::Diamonds, Rank::Seven)
        ]
    );
    assert_eq!(
        game.dealer_cards(),
        vec![card(Suit::Clubs, Rank::Six), card(Suit::Spades, Rank::Ten)]
    );
    assert_eq!(game.player_score(), 15);
    assert_eq!(game.dealer_score(), 16);
    assert_eq!(game.outcome(), None);
}

#[test]
fn deal_refused_mid_round() {
    let game = BlackjackGame::new(3);
    game.shuffle();
    game.deal().unwrap();
    let player = game.player_cards();

    assert_eq!(game.deal().unwrap_err(), DealError::RoundInProgress);
    assert_eq!(game.player_cards(), player);
    assert_eq!(game.state(), RoundState::PlayerTurn);
}

#[test]
fn hit_and_stand_ignored_outside_player_turn() {
    let game = BlackjackGame::new(4);

    assert_eq!(game.hit(), None);
    assert!(game.stand().is_none());
    assert_eq!(game.state(), RoundState::AwaitingDeal);
}

#[test]
fn hit_below_twenty_two_keeps_the_turn() {
    let game = BlackjackGame::new(5);
    stack_deck(
        &game,
        &[
            card(Suit::Hearts, Rank::Five),   // player
            card(Suit::Clubs, Rank::Nine),    // dealer
            card(Suit::Diamonds, Rank::Six),  // player
            card(Suit::Spades, Rank::Seven),  // dealer
            card(Suit::Hearts, Rank::Four),   // player hit
        ],
    );

    game.deal().unwrap();
    assert_eq!(
        game.hit(),
        Some(HitOutcome::Card(card(Suit::Hearts, Rank::Four)))
    );
    assert_eq!(game.player_score(), 15);
    assert_eq!(game.state(), RoundState::PlayerTurn);
}

#[test]
fn hit_busts_and_ends_round() {
    let game = BlackjackGame::new(6);
    stack_deck(
        &game,
        &[
            card(Suit::Hearts, Rank::Ten),   // player
            card(Suit::Clubs, Rank::Five),   // dealer
            card(Suit::Diamonds, Rank::Nine), // player
            card(Suit::Spades, Rank::Seven), // dealer
            card(Suit::Hearts, Rank::King),  // player hit, busts
        ],
    );

    game.deal().unwrap();
    assert_eq!(
        game.hit(),
        Some(HitOutcome::Bust(card(Suit::Hearts, Rank::King)))
    );
    assert_eq!(game.state(), RoundState::RoundOver);
    assert_eq!(game.outcome(), Some(RoundOutcome::DealerWins));

    // Further actions in the settled round are ignored.
    assert_eq!(game.hit(), None);
    assert!(game.stand().is_none());
}

#[test]
fn stand_dealer_draws_until_seventeen() {
    let game = BlackjackGame::new(7);
    stack_deck(
        &game,
        &[
            card(Suit::Hearts, Rank::Nine),  // player
            card(Suit::Clubs, Rank::Ten),    // dealer
            card(Suit::Diamonds, Rank::Nine), // player
            card(Suit::Spades, Rank::Six),   // dealer
            card(Suit::Hearts, Rank::Five),  // dealer draw
        ],
    );

    game.deal().unwrap();
    let result = game.stand().expect("stand in player turn settles");

    assert_eq!(result.dealer_draws, vec![card(Suit::Hearts, Rank::Five)]);
    assert_eq!(result.dealer_score, 21);
    assert_eq!(result.player_score, 18);
    assert_eq!(result.outcome, RoundOutcome::DealerWins);
    assert_eq!(result.outcome.to_string(), "Dealer wins!");
    assert_eq!(game.state(), RoundState::RoundOver);
}

#[test]
fn stand_reports_equal_scores_as_a_tie() {
    let game = BlackjackGame::new(8);
    stack_deck(
        &game,
        &[
            card(Suit::Hearts, Rank::Ten),   // player
            card(Suit::Clubs, Rank::Ten),    // dealer
            card(Suit::Diamonds, Rank::Nine), // player
            card(Suit::Spades, Rank::Nine),  // dealer
        ],
    );

    game.deal().unwrap();
    let result = game.stand().expect("stand in player turn settles");

    assert!(result.dealer_draws.is_empty());
    assert_eq!(result.outcome, RoundOutcome::Tie);
    assert_eq!(result.outcome.to_string(), "It's a tie!");
}

#[test]
fn dealer_bust_gives_player_the_win() {
    let game = BlackjackGame::new(9);
    stack_deck(
        &game,
        &[
            card(Suit::Hearts, Rank::Ten),    // player
            card(Suit::Clubs, Rank::Ten),     // dealer
            card(Suit::Diamonds, Rank::Eight), // player
            card(Suit::Spades, Rank::Six),    // dealer
            card(Suit::Hearts, Rank::King),   // dealer draw, busts
        ],
    );

    game.deal().unwrap();
    let result = game.stand().expect("stand in player turn settles");

    assert_eq!(result.dealer_score, 26);
    assert_eq!(result.outcome, RoundOutcome::PlayerWins);
    assert_eq!(result.outcome.to_string(), "Player 1 wins!");
}

#[test]
fn hit_with_empty_deck_is_a_noop() {
    let game = BlackjackGame::new(10);
    stack_deck(
        &game,
        &[
            card(Suit::Hearts, Rank::Two),   // player
            card(Suit::Clubs, Rank::Nine),   // dealer
            card(Suit::Diamonds, Rank::Three), // player
            card(Suit::Spades, Rank::Seven), // dealer
        ],
    );

    game.deal().unwrap();
    assert_eq!(game.cards_remaining(), 0);

    assert_eq!(game.hit(), None);
    assert_eq!(game.state(), RoundState::PlayerTurn);
    assert_eq!(game.player_cards().len(), 2);

    // The caller remedies the dry deck and the turn continues.
    game.reset_deck();
    assert!(game.hit().is_some());
}

#[test]
fn dealer_stops_drawing_on_a_dry_deck() {
    let game = BlackjackGame::new(11);
    stack_deck(
        &game,
        &[
            card(Suit::Hearts, Rank::Ten),  // player
            card(Suit::Clubs, Rank::Nine),  // dealer
            card(Suit::Diamonds, Rank::Eight), // player
            card(Suit::Spades, Rank::Five), // dealer
        ],
    );

    game.deal().unwrap();
    let result = game.stand().expect("stand in player turn settles");

    assert!(result.dealer_draws.is_empty());
    assert_eq!(result.dealer_score, 14);
    assert_eq!(result.outcome, RoundOutcome::PlayerWins);
}

#[test]
fn shuffle_and_reset_leave_hands_untouched() {
    let game = BlackjackGame::new(12);
    game.shuffle();
    game.deal().unwrap();

    let player = game.player_cards();
    let dealer = game.dealer_cards();

    game.shuffle();
    game.reset_deck();

    assert_eq!(game.cards_remaining(), 52);
    assert_eq!(game.player_cards(), player);
    assert_eq!(game.dealer_cards(), dealer);
    assert_eq!(game.state(), RoundState::PlayerTurn);
}
