//! Hex-Rust: play Hex against a Monte Carlo AI.
//!
//! ## Usage
//!
//! - `hex-rust` - Show a demo
//! - `hex-rust play` - Play against the AI (or `--two-humans`)
//! - `hex-rust selfplay` - Watch the AI play itself
//!
//! Moves are typed as column letter plus row number, e.g. `a1` or `C4`.
//! Diagnostics go through `RUST_LOG` / `-v`.

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use hex_rust::board::{AuthoritativeBoard, Board};
use hex_rust::config::EngineConfig;
use hex_rust::constants::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE, N_PLAYOUTS};
use hex_rust::coord::str_coord;
use hex_rust::evaluator::{MonteCarloEvaluator, best_candidate};
use hex_rust::game::Game;
use hex_rust::grid::Color;
use hex_rust::player::{MoveSource, Player};

/// Hex-Rust: a Hex engine with a Monte Carlo AI
#[derive(Parser)]
#[command(name = "hex-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    opts: Options,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Args)]
struct Options {
    /// Board size
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE, value_parser = parse_size, global = true)]
    size: usize,

    /// Random playouts per candidate move
    #[arg(long, default_value_t = N_PLAYOUTS, global = true)]
    playouts: usize,

    /// Search threads (0 = one per core)
    #[arg(long, default_value_t = 0, global = true)]
    workers: usize,

    /// Seed for the AI's random source
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Print the board as JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game on the terminal
    Play {
        /// Color the human plays
        #[arg(long, value_enum, default_value_t = ColorArg::Blue)]
        human_color: ColorArg,

        /// Two humans, no AI
        #[arg(long)]
        two_humans: bool,
    },
    /// Let the AI play both sides
    Selfplay,
    /// Run a short demo of the engine
    Demo,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ColorArg {
    Blue,
    Red,
}

impl From<ColorArg> for Color {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Blue => Color::Blue,
            ColorArg::Red => Color::Red,
        }
    }
}

fn parse_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|_| format!("{s:?} is not a number"))?;
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(format!(
            "board size must be between {MIN_BOARD_SIZE} and {MAX_BOARD_SIZE}"
        ))
    }
}

/// Reads moves from standard input, one per line.
struct StdinMoves;

impl MoveSource for StdinMoves {
    fn next_move(&mut self, _board: &AuthoritativeBoard, color: Color) -> Option<String> {
        print!("{color} ({}) move: ", color.symbol());
        io::stdout().flush().ok()?;
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line),
        }
    }

    fn rejected(&mut self, input: &str, reason: &str) {
        println!("Invalid move {input:?} ({reason}), try again (e.g. a1 or B2)");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let opts = &cli.opts;
    let config = EngineConfig {
        playouts: opts.playouts,
        workers: opts.workers,
        seed: opts.seed,
    };
    config.validate().context("invalid engine configuration")?;

    match cli.command {
        Some(Commands::Play {
            human_color,
            two_humans,
        }) => run_play(opts, &config, human_color.into(), two_humans),
        Some(Commands::Selfplay) => run_selfplay(opts, &config),
        Some(Commands::Demo) | None => run_demo(opts, &config),
    }
}

fn print_board(board: &AuthoritativeBoard, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(board).context("failed to serialize board")?);
    } else {
        println!("\n{}", board.grid());
    }
    Ok(())
}

fn run_game(mut game: Game, json: bool) -> Result<()> {
    print_board(game.board(), json)?;
    let mut print_error = None;
    let winner = game
        .run_with(|board, color, coord| {
            println!("{color} plays {}", str_coord(coord));
            if let Err(e) = print_board(board, json) {
                print_error.get_or_insert(e);
            }
        })
        .context("game aborted")?;
    if let Some(e) = print_error {
        return Err(e);
    }
    println!("Congratulations {winner} ({}), you won!", winner.symbol());
    Ok(())
}

fn run_play(opts: &Options, config: &EngineConfig, human: Color, two_humans: bool) -> Result<()> {
    println!("Blue (X) must connect west to east, red (O) north to south.");
    println!("Take turns claiming empty cells. Hex cannot end in a draw.");

    let board = AuthoritativeBoard::new(opts.size);
    let make = |color: Color| -> Result<Player> {
        if two_humans || color == human {
            Ok(Player::human(color, StdinMoves))
        } else {
            let evaluator = MonteCarloEvaluator::new(config).context("failed to start AI")?;
            Ok(Player::ai(color, Arc::new(evaluator), config.rng()))
        }
    };
    let game = Game::new(board, make(Color::Blue)?, make(Color::Red)?);
    run_game(game, opts.json)
}

fn run_selfplay(opts: &Options, config: &EngineConfig) -> Result<()> {
    let evaluator = Arc::new(MonteCarloEvaluator::new(config).context("failed to start AI")?);
    let mut rng = config.rng();
    let blue = Player::ai(Color::Blue, Arc::clone(&evaluator), fastrand::Rng::with_seed(rng.u64(..)));
    let red = Player::ai(Color::Red, evaluator, fastrand::Rng::with_seed(rng.u64(..)));
    let game = Game::new(AuthoritativeBoard::new(opts.size), blue, red);
    run_game(game, opts.json)
}

fn run_demo(opts: &Options, config: &EngineConfig) -> Result<()> {
    println!("Hex-Rust: Hex with a Monte Carlo AI\n");

    println!("=== Board Demo ===");
    let mut board = AuthoritativeBoard::new(opts.size);
    let last = opts.size - 1;
    for col in 0..last {
        board.apply((0, col), Color::Blue)?;
    }
    println!("Blue holds {} of {} cells on the top row", last, opts.size);
    print_board(&board, opts.json)?;

    println!("=== Monte Carlo Demo ===");
    let evaluator = MonteCarloEvaluator::new(config).context("failed to start AI")?;
    let mut rng = config.rng();
    println!(
        "Scoring {} candidates with {} playouts each on {} threads...",
        board.empty_cells().len(),
        evaluator.playouts(),
        evaluator.workers()
    );
    let scores = evaluator.evaluate(&board.snapshot(), Color::Blue, &mut rng)?;
    if let Some(best) = best_candidate(&scores) {
        println!(
            "Best move: {} (winrate {:.1}%)",
            str_coord(best.coord),
            best.winrate() * 100.0
        );
        let won = board.apply(best.coord, Color::Blue)?;
        print_board(&board, opts.json)?;
        println!("Blue has won: {won}");
    }
    Ok(())
}
