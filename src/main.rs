//! Snake runner (default binary).
//!
//! Picks the interactive renderer when stdin and stdout are terminals and falls
//! back to plain ANSI reprinting otherwise. `--backend` forces either one.

use anyhow::Result;
use clap::Parser;
use log::info;

use tui_arcade::cli::CommonArgs;
use tui_arcade::engine::{init_logging, run_loop, EngineConfig};
use tui_arcade::snake::{SnakeConfig, SnakeGame};

#[derive(Parser)]
#[command(name = "tui-arcade", about = "Snake in the terminal")]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// Drop back to the base speed when restarting after a game over
    #[arg(long)]
    reset_speed: bool,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let engine = args.common.engine_config(EngineConfig::from_env());
    init_logging(&engine)?;

    let snake_config = SnakeConfig {
        reset_speed_on_restart: args.reset_speed,
        seed: args.seed,
    };
    let config = args.common.game_config(snake_config.game_config());

    info!("snake starting at {} fps", config.target_fps);
    let (_, game_loop) = run_loop(SnakeGame::new(snake_config), config, &engine)?;

    let snake = game_loop.game().snake();
    println!(
        "Thanks for playing! Score: {}  High score: {}",
        snake.score(),
        snake.high_score()
    );
    Ok(())
}
