//! Game runtime: the [`Game`] contract, the [`GameLoop`] that drives it, and
//! the plumbing around them (clock, config, logging, errors).
//!
//! ```no_run
//! use tui_arcade_engine::{run, EngineConfig, SimpleGame};
//! use tui_arcade_engine::types::{Color, GameConfig};
//!
//! let game = SimpleGame::new(()).on_draw(|_, ctx| {
//!     ctx.screen_mut().draw_box(0, 0, 20, 5, Some("hello"), Color::Cyan);
//!     Ok(())
//! });
//! run(game, GameConfig::new(20, 5), &EngineConfig::from_env())?;
//! # Ok::<(), tui_arcade_engine::EngineError>(())
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod game;
pub mod game_loop;
pub mod logging;
pub mod simple;

pub use tui_arcade_input as input;
pub use tui_arcade_term as term;
pub use tui_arcade_types as types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::EngineConfig;
pub use error::{Callback, EngineError};
pub use game::{Context, Game};
pub use game_loop::{GameLoop, LoopState, StopReason};
pub use logging::init_logging;
pub use simple::SimpleGame;

use log::info;

use term::{create_renderer, Capabilities, Renderer};
use types::GameConfig;

/// Pick the renderer `engine.backend` asks for on a terminal with `caps`.
pub fn select_renderer(caps: &Capabilities, engine: &EngineConfig) -> Box<dyn Renderer> {
    let kind = caps.select(engine.backend);
    info!(
        "renderer {kind:?} (requested {}, stdin tty {}, stdout tty {}, TERM {:?})",
        engine.backend, caps.stdin_tty, caps.stdout_tty, caps.term
    );
    create_renderer(kind)
}

/// Detect the terminal, run `game` until it stops, and hand back the
/// finished loop so the caller can read the game's final state.
pub fn run_loop<G: Game>(
    game: G,
    config: GameConfig,
    engine: &EngineConfig,
) -> Result<(StopReason, GameLoop<G, Box<dyn Renderer>>), EngineError> {
    let renderer = select_renderer(&Capabilities::detect(), engine);
    let mut game_loop = GameLoop::new(game, renderer, config);
    let reason = game_loop.run()?;
    Ok((reason, game_loop))
}

/// Pick a renderer for this terminal and run `game` until it stops.
pub fn run<G: Game>(
    game: G,
    config: GameConfig,
    engine: &EngineConfig,
) -> Result<StopReason, EngineError> {
    run_loop(game, config, engine).map(|(reason, _)| reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::{BackendPreference, RendererKind};

    fn caps(tty: bool, term: &str) -> Capabilities {
        Capabilities {
            stdin_tty: tty,
            stdout_tty: tty,
            term: Some(term.to_string()),
        }
    }

    #[test]
    fn auto_selection_follows_capabilities() {
        let engine = EngineConfig::default();
        assert_eq!(
            select_renderer(&caps(true, "xterm"), &engine).kind(),
            RendererKind::Interactive
        );
        assert_eq!(
            select_renderer(&caps(false, "xterm"), &engine).kind(),
            RendererKind::Fallback
        );
        assert_eq!(
            select_renderer(&caps(true, "dumb"), &engine).kind(),
            RendererKind::Fallback
        );
    }

    #[test]
    fn forced_backend_wins_over_capabilities() {
        let engine = EngineConfig::default().with_backend(BackendPreference::Fallback);
        assert_eq!(
            select_renderer(&caps(true, "xterm"), &engine).kind(),
            RendererKind::Fallback
        );
    }
}
