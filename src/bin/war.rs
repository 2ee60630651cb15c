//! Play War against the computer in a terminal.
//!
//! ```text
//! war [--name NAME] [--computer NAME] [--seed N] [--manual] [--round-limit N]
//! ```
//!
//! Set `RUST_LOG=debug` to see the engine's round log.

use clap::Parser;
use dialoguer::{Confirm, Input};
use war_engine::core::{DEFAULT_COMPUTER_NAME, DEFAULT_ROUND_LIMIT};
use war_engine::{
    AlwaysContinue, Continuation, GameResult, RoundOutcome, RoundReport, Seat, SeatMap,
    TableStatus, WarConfig, WarGameBuilder,
};

#[derive(Parser)]
#[command(author, version, about = "Play War against the computer", long_about = None)]
struct Args {
    /// Your name. Prompted for when missing.
    #[arg(short, long)]
    name: Option<String>,

    /// The computer's name.
    #[arg(long, default_value = DEFAULT_COMPUTER_NAME)]
    computer: String,

    /// Seed for a reproducible game.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Ask before every draw.
    #[arg(short, long)]
    manual: bool,

    /// Call the game off after this many rounds.
    #[arg(long, default_value_t = DEFAULT_ROUND_LIMIT)]
    round_limit: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    println!("Welcome to War, let's begin...");
    let name = match args.name {
        Some(name) => name,
        None => Input::<String>::new()
            .with_prompt("Please enter your name")
            .interact_text()?,
    };

    let config = WarConfig {
        human_name: name,
        computer_name: args.computer,
        seed: args.seed,
        manual: args.manual,
        round_limit: args.round_limit,
    };
    let mut game = WarGameBuilder::from_config(config).build()?;
    let names = game.players().map(|_, p| p.name().to_string());

    let status = game.status();
    show_counts(&status.card_counts, status.table_size);

    // A failed prompt stops the game and is reported below
    let mut prompt_error = None;
    let mut ask = |_: &TableStatus| {
        match Confirm::new().with_prompt("Draw card(s)?").default(true).interact() {
            Ok(answer) => answer,
            Err(err) => {
                prompt_error = Some(err);
                false
            }
        }
    };
    let mut auto = AlwaysContinue;
    let control: &mut dyn Continuation = if game.is_manual() { &mut ask } else { &mut auto };

    let summary = game.run(control, |report| show_round(&names, report))?;
    if let Some(err) = prompt_error {
        return Err(err.into());
    }

    match summary.result {
        GameResult::Winner(Seat::Human) => println!("Game Over. You won!"),
        GameResult::Winner(Seat::Computer) => {
            println!("Game Over. Sorry! {} won.", names[Seat::Computer])
        }
        GameResult::Stopped => println!("Game Over. You have ended the game."),
        GameResult::RoundLimit => {
            println!("Game Over. No winner after {} rounds.", summary.rounds)
        }
    }
    println!("Replay this game with --seed {}", game.seed());

    Ok(())
}

fn show_round(names: &SeatMap<String>, report: &RoundReport) {
    match report.cards_drawn {
        1 => println!("Drawing 1 card each."),
        n => println!("Drawing {} cards each.", n),
    }
    for (seat, card) in report.face_up.iter() {
        println!("{}: {}", names[seat], card);
    }
    match report.outcome {
        RoundOutcome::Won { winner, cards_won } => println!(
            "{} won. Adding {} cards to winner's deck.",
            names[winner], cards_won
        ),
        RoundOutcome::War { .. } => println!("It's a draw"),
    }
    show_counts(&report.card_counts, report.table_size);
}

fn show_counts(counts: &SeatMap<usize>, table_size: usize) {
    println!(
        "Computer has {} cards, you have {} cards, and table has {} cards.\n",
        counts[Seat::Computer],
        counts[Seat::Human],
        table_size
    );
}
