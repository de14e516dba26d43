//! Terminal blackjack table.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use blackjack21::{
    AssetManifest, Card, DealerHand, Game, GameOptions, GameState, Hand, Participant, Suit,
    TableEvent,
};
use clap::Parser;
use clap::builder::RangedU64ValueParser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cli_blackjack")]
#[command(about = "Play blackjack against the dealer in the terminal")]
struct Args {
    /// Shuffle seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Starting balance
    #[arg(long, default_value_t = 1000, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    balance: usize,

    /// Directory holding card images to check before play
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Print the house rules before the first round
    #[arg(long)]
    rules: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    if let Some(root) = &args.assets {
        if let Err(err) = AssetManifest::new(root).verify() {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let options = GameOptions::default().with_starting_balance(args.balance);
    let mut game = Game::new(options, seed);

    println!("Welcome to blackjack! (type 'q' to quit)");
    if args.rules {
        print_rules(&game);
    }

    loop {
        if game.state() == GameState::Resolved {
            if game.is_game_over() {
                println!("Game over! You are out of chips.");
                match prompt_line("Start a new game? (y/n): ").as_str() {
                    "y" | "yes" => {
                        if let Err(err) = game.restart() {
                            println!("Restart error: {err}");
                            return;
                        }
                        println!("Balance reset to {}.", game.balance());
                    }
                    _ => {
                        println!("Goodbye.");
                        return;
                    }
                }
            } else if let Err(err) = game.new_round() {
                println!("Round error: {err}");
                return;
            }
        }

        println!("\nBalance: {}", game.balance());
        if !place_bet(&mut game) {
            println!("Goodbye.");
            return;
        }
        replay_events(&mut game);

        while game.state() == GameState::PlayerTurn {
            print_table(&game);
            let action = prompt_line("[h]it / [s]tand / [r]ules: ");

            let result = match action.as_str() {
                "h" | "hit" => game.hit().map(|_| ()),
                "s" | "stand" => game.stand().map(|_| ()),
                "r" | "rules" => {
                    print_rules(&game);
                    continue;
                }
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
            }
            replay_events(&mut game);
        }

        if game.state() == GameState::DealerTurn {
            if let Err(err) = game.dealer_play() {
                println!("Dealer error: {err}");
            }
            replay_events(&mut game);
        }

        if let Some(result) = game.last_result().copied() {
            print_table(&game);
            println!("{result}");
            println!("Payout: {} (net {})", result.payout, result.net());
        }
    }
}

/// Asks for a bet until one is accepted. Returns `false` if the player quits.
fn place_bet(game: &mut Game) -> bool {
    let presets = game.options().bet_presets;
    let default_bet = game.options().default_bet;

    loop {
        let balance = game.balance();
        let choices = presets
            .iter()
            .enumerate()
            .map(|(index, amount)| format!("[{}] {amount}", index + 1))
            .collect::<Vec<_>>()
            .join("  ");
        println!("Choose a bet: {choices}  [o]ther");

        let input = prompt_line("Bet: ");
        let outcome = match input.as_str() {
            "q" | "quit" => return false,
            "o" | "other" => {
                let custom = prompt_line(&format!("Bet amount (1-{balance}) [{default_bet}]: "));
                if custom.is_empty() {
                    game.place_bet(default_bet)
                } else {
                    game.place_bet_input(&custom)
                }
            }
            "1" | "2" | "3" | "4" => {
                let index = input.parse::<usize>().unwrap_or(1) - 1;
                game.place_bet(presets[index])
            }
            _ => game.place_bet_input(&input),
        };

        match outcome {
            Ok(_) => return true,
            Err(err) => println!("Invalid bet: {err}. Enter a number from 1 to {balance}."),
        }
    }
}

/// Prints queued table events in order, the way a graphical table would animate them.
fn replay_events(game: &mut Game) {
    for event in game.drain_events() {
        match event {
            TableEvent::Reshuffled => println!("The deck is empty, shuffling a fresh one."),
            TableEvent::CardDealt {
                to,
                card,
                face_down,
            } => {
                let who = match to {
                    Participant::Player => "You",
                    Participant::Dealer => "Dealer",
                };
                if face_down {
                    println!("{who}: ??");
                } else {
                    println!("{who}: {}", format_card(&card));
                }
            }
            TableEvent::HoleRevealed(card) => {
                println!("Dealer reveals {}", format_card(&card));
            }
            TableEvent::RoundSettled(_) | TableEvent::GameOver => {}
        }
    }
}

fn print_rules(game: &Game) {
    println!("\nHouse rules:");
    for line in game.options().rules() {
        println!("  - {line}");
    }
    println!();
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    if input.is_empty() {
        // EOF
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn print_table(game: &Game) {
    let dealer = game.dealer_hand();
    let dealer_value = if game.state() == GameState::Resolved {
        game.dealer_score(true).to_string()
    } else {
        "?".to_string()
    };
    println!("\nDealer: {} (value {dealer_value})", format_dealer(dealer));
    println!(
        "You:    {} (value {})",
        format_hand(game.player_hand()),
        game.player_score()
    );
    println!("Bet: {} | Balance: {}\n", game.current_bet(), game.balance());
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer(dealer: &DealerHand) -> String {
    if dealer.is_empty() {
        return "(no cards)".to_string();
    }

    if dealer.is_hole_revealed() {
        dealer
            .cards()
            .iter()
            .map(format_card)
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        let mut parts = Vec::new();
        if let Some(card) = dealer.up_card() {
            parts.push(format_card(card));
        }
        if dealer.len() > 1 {
            parts.push("??".to_string());
        }
        parts.join(" ")
    }
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
