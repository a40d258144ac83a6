mod commands;
mod config;
mod game_runner;
mod render;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use common::games::SessionRng;
use common::games::tictactoe::{Difficulty, TicTacToeGameState};
use common::logger::{self, LogLevel};
use common::log;
use tokio::io::BufReader;

use config::get_config_manager;
use game_runner::{RunnerOptions, RunnerResult, run_game};
use render::render_scores;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against the computer")]
struct Args {
    /// easy, medium or impossible; overrides the config file
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Path to the YAML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the bot's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Let the computer answer immediately
    #[arg(long)]
    no_delay: bool,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> RunnerResult<()> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    let level = if args.verbose { LogLevel::Debug } else { LogLevel::Info };
    logger::init_logger(prefix, level);

    let config = get_config_manager(args.config).get_config()?;
    let difficulty = args.difficulty.unwrap_or(config.difficulty);

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed: {}", rng.seed());

    let thinking_delay = if args.no_delay {
        Duration::ZERO
    } else {
        Duration::from_millis(config.bot.thinking_delay_ms)
    };

    let state = TicTacToeGameState::new(difficulty, config.bot.settings());
    let scores = run_game(
        state,
        rng,
        BufReader::new(tokio::io::stdin()),
        std::io::stdout(),
        RunnerOptions { thinking_delay },
    )
    .await?;

    log!("Session finished: {}", render_scores(&scores));
    Ok(())
}
