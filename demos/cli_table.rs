//! CLI menu driving all four game engines headlessly.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use cardsim::{
    BlackjackGame, Card, FlipOutcome, GuessError, GuessTheCard, HighCardGame, HitOutcome,
    ReactionOutcome, ReactionWindow, SlapOutcome, SlapjackGame, SlapjackOptions,
};

fn main() {
    println!("Card game menu (type 'q' to quit)");

    loop {
        println!("\n[b]lackjack  [h]igh card  [g]uess the card  [s]lapjack  [q]uit");
        match prompt_line("Game: ").as_str() {
            "b" | "blackjack" => play_blackjack(),
            "h" | "high" | "high card" => play_high_card(),
            "g" | "guess" => play_guess(),
            "s" | "slapjack" => play_slapjack(),
            "q" | "quit" => return,
            _ => println!("Unknown game."),
        }
    }
}

fn seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn play_blackjack() {
    let game = BlackjackGame::new(seed());
    game.shuffle();

    loop {
        println!("\nDeck: {} cards remaining", game.cards_remaining());
        println!("[d]eal  [h]it  [s]tand  [u] shuffle  [r]eset deck  [x] back");

        match prompt_line("Action: ").as_str() {
            "d" | "deal" => match game.deal() {
                Ok(()) => print_blackjack_hands(&game),
                Err(err) => println!("{err}"),
            },
            "h" | "hit" => match game.hit() {
                Some(HitOutcome::Card(card)) => {
                    println!("You drew {card}.");
                    print_blackjack_hands(&game);
                }
                Some(HitOutcome::Bust(card)) => {
                    println!("You drew {card}.");
                    print_blackjack_hands(&game);
                    println!("Player 1 busts! Dealer wins.");
                }
                None => println!("No card dealt."),
            },
            "s" | "stand" => match game.stand() {
                Some(result) => {
                    print_blackjack_hands(&game);
                    println!("{}", result.outcome);
                }
                None => println!("Nothing to stand on."),
            },
            "u" | "shuffle" => {
                game.shuffle();
                println!("Deck shuffled!");
            }
            "r" | "reset" => {
                game.reset_deck();
                println!("Deck reset to full 52 cards.");
            }
            "x" | "back" => return,
            _ => println!("Unknown action."),
        }
    }
}

fn print_blackjack_hands(game: &BlackjackGame) {
    println!(
        "Player 1 hand ({}): {}",
        game.player_score(),
        format_cards(&game.player_cards())
    );
    println!(
        "Dealer hand ({}): {}",
        game.dealer_score(),
        format_cards(&game.dealer_cards())
    );
}

fn play_high_card() {
    let game = HighCardGame::new(seed());

    loop {
        println!("\n[p] draw for player  [d] draw for dealer  [x] back");

        match prompt_line("Action: ").as_str() {
            "p" => match game.draw_for_player() {
                Ok(card) => println!("Player's card: {card}"),
                Err(err) => println!("{err}"),
            },
            "d" => match game.draw_for_dealer() {
                Ok(result) => {
                    println!("Dealer's card: {}", result.dealer_card);
                    println!("{result}");
                    if prompt_line("Play again? (y/n): ") == "y" {
                        game.rematch();
                    } else {
                        return;
                    }
                }
                Err(err) => println!("{err}"),
            },
            "x" | "back" => return,
            _ => println!("Unknown action."),
        }
    }
}

fn play_guess() {
    let game = GuessTheCard::new(seed());

    loop {
        let guess = prompt_line("Guess the rank of the card (e.g., Ace, 2, King): ");
        match game.submit_guess(&guess) {
            Ok(outcome) => {
                println!("{outcome}");
                return;
            }
            Err(GuessError::Empty) => println!("Please enter a rank."),
        }
    }
}

fn play_slapjack() {
    let game = SlapjackGame::new(SlapjackOptions::default(), seed());

    println!("\nGame started! Watch for Jacks and SLAP!");
    println!("Current suit: {}", game.current_suit());
    println!("Flips are manual here: [f] flips the next card, [t] lets");
    println!("an armed reaction window lapse.");

    loop {
        println!(
            "\nScore: {}  Collected: {}  Suit: {}",
            game.score(),
            game.collected().len(),
            game.current_suit()
        );
        println!("[f]lip  [s]lap  [t] window lapses  [w]indow length  [x] back");

        match prompt_line("Action: ").as_str() {
            "f" | "flip" => match game.advance_flip_clock() {
                FlipOutcome::Flipped { card, jack } => {
                    println!("Card flipped: {card}");
                    if jack {
                        println!("JACK! SLAP NOW!");
                    }
                }
                FlipOutcome::SuitAdvanced { suit } => println!("Moving to {suit} suit!"),
                FlipOutcome::Complete { score, collected } => {
                    println!("All suits completed! Game Over!");
                    println!("Your score: {score} points, cards collected: {collected}");
                    return;
                }
                FlipOutcome::Over => println!("The game is over."),
            },
            "s" | "slap" => match game.slap() {
                SlapOutcome::Collected { card, score } => {
                    println!("Great slap! +1 point ({card}, score {score})");
                }
                SlapOutcome::Penalty { score } => {
                    println!("No Jack to slap! -1 point penalty (score {score})");
                }
                SlapOutcome::Over => println!("The game is over."),
            },
            "t" => match game.advance_reaction_clock() {
                ReactionOutcome::Missed { score, collected } => {
                    println!("Too slow! You missed the Jack!");
                    println!("Your score: {score} points, cards collected: {collected}");
                    return;
                }
                ReactionOutcome::Stale => println!("No live Jack; nothing happens."),
            },
            "w" | "window" => {
                let windows = ReactionWindow::ALL;
                for (index, window) in windows.iter().enumerate() {
                    println!("[{index}] {:?} ({:?})", window, window.duration());
                }
                if let Ok(index) = prompt_line("Window: ").parse::<usize>() {
                    if let Some(window) = windows.get(index) {
                        game.set_reaction_window(*window);
                        println!("Reaction window set to {:?}.", window.duration());
                    }
                }
            }
            "x" | "back" => return,
            _ => println!("Unknown action."),
        }
    }
}
