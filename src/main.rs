use std::io::{self, Write};

use battlegeek::coord_to_string;
use battlegeek::prelude::*;
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Level {
    Standard,
    Directed,
    Impossible,
}

impl From<Level> for Difficulty {
    fn from(level: Level) -> Self {
        match level {
            Level::Standard => Difficulty::Standard,
            Level::Directed => Difficulty::Directed,
            Level::Impossible => Difficulty::Impossible,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the AI in this terminal.
    Play {
        #[arg(long, value_enum, default_value_t = Level::Standard)]
        difficulty: Level,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 0, help = "Bonus cells hidden on each board")]
        bonus: usize,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            difficulty,
            seed,
            bonus,
        } => {
            let mut rng = if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let config = GameConfig {
                bonus_cells: bonus,
                ..GameConfig::default()
            };
            let board = Board::random(&config, &mut rng)?;
            let session = Session::new(&config, board, difficulty.into(), rng)?;
            run_local(session, &config)?;
        }
    }
    Ok(())
}

fn read_line() -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn run_local(mut session: Session, config: &GameConfig) -> anyhow::Result<()> {
    loop {
        match session.phase() {
            Phase::PlayerTurn => {
                println!("\n=== YOUR TURN ===");
                print_player_view(session.controller());
                print!("Target (e.g. B7, 'q' to quit): ");
                io::stdout().flush()?;
                let Some(line) = read_line()? else {
                    println!("\nGame abandoned.");
                    return Ok(());
                };
                let line = line.trim();
                if line.eq_ignore_ascii_case("q") {
                    println!("Game abandoned.");
                    return Ok(());
                }
                let coord = match parse_coord(line, config.width, config.height) {
                    Ok(c) => c,
                    Err(msg) => {
                        println!("{}", msg);
                        continue;
                    }
                };
                match session.player_shoot(coord.x, coord.y) {
                    Ok(result) => {
                        println!("{}: {}", coord_to_string(coord), describe(result.outcome))
                    }
                    Err(GameError::Board(e)) => println!("{}", e),
                    Err(e) => return Err(e.into()),
                }
            }
            Phase::AiTurn => {
                println!("\n=== AI TURN ===");
                for shot in session.ai_turn()? {
                    println!(
                        "AI fires at {}: {}",
                        coord_to_string(shot.coord),
                        describe(shot.result.outcome)
                    );
                }
            }
            Phase::GameOver(winner) => {
                println!("\n=== GAME OVER ===");
                print_player_view(session.controller());
                match winner {
                    Winner::Player => println!("VICTORY! You have sunk all enemy ships."),
                    Winner::Ai => println!("DEFEAT. All your ships have been destroyed."),
                }
                return Ok(());
            }
        }
    }
}

fn describe(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Missed => "missed",
        Outcome::Touched => "touched, play again",
        Outcome::Drown => "ship sunk, play again",
        Outcome::Victory => "last ship sunk",
        Outcome::Bonus => "bonus found, play again",
    }
}
