//! Play a local game in the terminal.
//!
//! Press Enter to roll, type an answer when a trap or boost asks a
//! question, `q` to quit. `--auto` plays unattended and answers every
//! question correctly.

use std::io::{self, BufRead, Write};

use ai_ladder::{CellKind, Color, DiceOutcome, GameConfig, GameSession, MoveOutcome, Snapshot};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "play", about = "Snakes, ladders and quiz cells in the terminal", version)]
struct Cli {
    /// Number of players
    #[arg(short, long, default_value_t = 2)]
    players: usize,

    /// Token color as #rrggbb, once per player (defaults to blue, red, green, yellow)
    #[arg(short, long = "color")]
    colors: Vec<Color>,

    /// Fixed dice seed
    #[arg(long)]
    seed: Option<u64>,

    /// Roll automatically and answer every question correctly
    #[arg(long)]
    auto: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let colors = if cli.colors.is_empty() {
        Color::default_palette(cli.players)
    } else {
        cli.colors.clone()
    };

    let config = match cli.seed {
        Some(seed) => GameConfig::default().with_seed(seed),
        None => GameConfig::default(),
    };
    let mut session = GameSession::new(config)?;
    session.start_session(cli.players, &colors)?;

    let mut lines = io::stdin().lock().lines();
    let mut read_line = |prompt: &str| -> io::Result<Option<String>> {
        print!("{prompt}");
        io::stdout().flush()?;
        lines.next().transpose()
    };

    print_board(&session.snapshot());

    loop {
        let snapshot = session.snapshot();

        if let Some(banner) = snapshot.winner_banner() {
            println!("\n{banner}");
            if cli.auto {
                break;
            }
            match read_line("Play again? [y/N] ")? {
                Some(reply) if reply.trim().eq_ignore_ascii_case("y") => {
                    session.restart_session();
                    session.start_session(cli.players, &colors)?;
                    print_board(&session.snapshot());
                    continue;
                }
                _ => break,
            }
        }

        if let Some(challenge) = &snapshot.challenge {
            println!("\n{}\n{}", challenge.header, challenge.prompt);
            let answer = if cli.auto {
                session
                    .pending_challenge()
                    .map(|c| c.expected_answer.clone())
                    .unwrap_or_default()
            } else {
                match read_line("> ")? {
                    Some(line) => line,
                    None => break,
                }
            };

            let outcome = session.submit_answer(&answer)?;
            println!(
                "{} {} and moves to {}",
                outcome.player.label(),
                if outcome.correct { "is right" } else { "is wrong" },
                outcome.position
            );
            continue;
        }

        if !cli.auto {
            let label = snapshot.turn_label().unwrap_or_default();
            match read_line(&format!("\n{label} (Enter to roll, q to quit) "))? {
                Some(line) if line.trim() == "q" => break,
                Some(_) => {}
                None => break,
            }
        }

        match session.roll_dice() {
            DiceOutcome::Rolled {
                player,
                value,
                outcome,
            } => {
                println!("{} rolls {}: {}", player.label(), value, describe(&outcome));
                print_board(&session.snapshot());
            }
            DiceOutcome::Ignored(reason) => println!("Roll ignored: {reason:?}"),
        }
    }

    Ok(())
}

fn describe(outcome: &MoveOutcome) -> String {
    match outcome {
        MoveOutcome::Won { to, .. } => format!("reaches {to}"),
        MoveOutcome::Stepped { to, .. } => format!("moves to {to}"),
        MoveOutcome::Ladder { landed, to, .. } => format!("climbs the ladder at {landed} to {to}"),
        MoveOutcome::Snake { landed, to, .. } => format!("slides down the snake at {landed} to {to}"),
        MoveOutcome::Challenge(challenge) => format!("lands on {}", challenge.resume.landed),
    }
}

/// Ten cells per row, last row first, one letter per special cell.
fn print_board(snapshot: &Snapshot) {
    for row in snapshot.cells.chunks(10).rev() {
        let line: Vec<String> = row
            .iter()
            .map(|cell| {
                let tokens: String = snapshot
                    .players_on(cell.number)
                    .map(|p| p.id.token())
                    .collect();
                let mark = match cell.kind {
                    CellKind::Normal => ' ',
                    CellKind::Ladder => 'L',
                    CellKind::Snake => 'S',
                    CellKind::Trap => 'T',
                    CellKind::Boost => 'B',
                };
                format!("{:>3}{}{:<4}", cell.number, mark, tokens)
            })
            .collect();
        println!("{}", line.join("|"));
    }
}
