//! Snake, played on the tui-arcade engine.
//!
//! Controls: arrows or WASD to steer, SPACE to boost (costs length), `p` to
//! pause, `r` to restart after a game over, `q`/Escape to quit. The game speeds
//! up by one frame per second every 50 points, up to 15.

pub mod state;
pub mod view;

pub use tui_arcade_engine as engine;
pub use tui_arcade_engine::term;
pub use tui_arcade_types as types;

pub use state::{Direction, Snake, Step};

use anyhow::Result;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use engine::{Context, Game};
use types::GameConfig;

pub const BASE_FPS: u32 = 8;
pub const MAX_FPS: u32 = 15;
pub const TITLE: &str = "Snake Game";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SnakeConfig {
    /// Drop back to [`BASE_FPS`] on restart instead of keeping the ramp.
    pub reset_speed_on_restart: bool,
    /// Fixed food placement, for tests and replays.
    pub seed: Option<u64>,
}

impl SnakeConfig {
    pub fn game_config(&self) -> GameConfig {
        GameConfig::new(state::GAME_WIDTH as u16, state::GAME_HEIGHT as u16)
            .with_target_fps(BASE_FPS)
            .with_title(TITLE)
    }
}

pub struct SnakeGame {
    config: SnakeConfig,
    snake: Snake,
}

impl SnakeGame {
    pub fn new(config: SnakeConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            config,
            snake: Snake::new(rng),
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }
}

impl Game for SnakeGame {
    fn setup(&mut self, _ctx: &mut Context) -> Result<()> {
        self.snake.reset();
        Ok(())
    }

    fn update(&mut self, ctx: &mut Context, _dt: f64) -> Result<()> {
        match self.snake.step(ctx.current_key()) {
            Step::Ate { speed_up: true } if ctx.target_fps() < MAX_FPS => {
                let fps = ctx.target_fps() + 1;
                debug!("score {}: speeding up to {fps} fps", self.snake.score());
                ctx.set_target_fps(fps);
            }
            Step::Died => info!(
                "game over: score {}, high {}",
                self.snake.score(),
                self.snake.high_score()
            ),
            Step::Restarted if self.config.reset_speed_on_restart => {
                ctx.set_target_fps(BASE_FPS);
            }
            _ => {}
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> Result<()> {
        view::draw(&self.snake, ctx.screen_mut());
        Ok(())
    }
}
