//! Fixed-rate frame loop: poll, update, draw, flush, sleep.
//!
//! One frame, in order:
//! 1. `dt` since the previous frame started
//! 2. poll at most one input event (never blocks)
//! 3. normalize it through the [`InputTracker`](crate::input::InputTracker)
//! 4. on `q`/Escape, ask [`Game::on_quit`]; a yes ends the loop here
//! 5. [`Game::update`]
//! 6. clear the screen buffer
//! 7. [`Game::draw`]
//! 8. flush the buffer through the renderer
//! 9. advance the input tracker and drop `current_key`
//! 10. sleep out the rest of `1 / target_fps`
//!
//! A slow frame is not caught up on; the next one just starts late. The
//! terminal is held by a [`Session`] for the whole run, so it is restored on
//! every way out of [`GameLoop::run`], errors and panics included.

use log::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::error::{Callback, EngineError, Result};
use crate::game::{Context, Game};
use crate::input::{is_quit_key, InputEvent};
use crate::term::{Renderer, Session};
use crate::types::{GameConfig, Key};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    NotStarted,
    Running,
    Stopped,
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A quit key arrived and the game agreed.
    QuitKey(Key),
    /// The game called [`Context::quit`].
    Requested,
    /// Ctrl+C or SIGINT.
    Interrupted,
}

pub struct GameLoop<G, R, C = SystemClock> {
    game: G,
    renderer: R,
    clock: C,
    ctx: Context,
    state: LoopState,
}

impl<G: Game, R: Renderer> GameLoop<G, R> {
    pub fn new(game: G, renderer: R, config: GameConfig) -> Self {
        Self::with_clock(game, renderer, SystemClock::new(), config)
    }
}

impl<G: Game, R: Renderer, C: Clock> GameLoop<G, R, C> {
    pub fn with_clock(game: G, renderer: R, clock: C, config: GameConfig) -> Self {
        Self {
            game,
            renderer,
            clock,
            ctx: Context::new(config),
            state: LoopState::NotStarted,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn into_parts(self) -> (G, R) {
        (self.game, self.renderer)
    }

    /// Run until the game quits, is interrupted or fails. A loop runs once.
    pub fn run(&mut self) -> Result<StopReason> {
        if self.state != LoopState::NotStarted {
            return Err(EngineError::AlreadyRun);
        }
        self.state = LoopState::Running;
        let result = self.run_frames();
        self.state = LoopState::Stopped;

        match &result {
            Ok(reason) => info!(
                "game loop stopped: {reason:?} after {} frames",
                self.ctx.frame_count
            ),
            Err(err) => info!(
                "game loop failed after {} frames: {err}",
                self.ctx.frame_count
            ),
        }
        result
    }

    fn run_frames(&mut self) -> Result<StopReason> {
        let Self {
            game,
            renderer,
            clock,
            ctx,
            ..
        } = self;

        let mut session = Session::acquire(renderer).map_err(EngineError::Terminal)?;
        info!(
            "starting \"{}\" {}x{} at {} fps ({:?})",
            ctx.title(),
            ctx.width(),
            ctx.height(),
            ctx.target_fps(),
            session.kind()
        );

        game.setup(ctx)
            .map_err(|e| EngineError::game(Callback::Setup, e))?;
        debug!("setup done");

        let start = clock.now();
        let mut last = start;

        loop {
            let frame_start = clock.now();
            ctx.dt = frame_start.saturating_sub(last).as_secs_f64();
            ctx.elapsed = frame_start.saturating_sub(start);
            last = frame_start;

            let raw = match session.poll_input().map_err(EngineError::Terminal)? {
                Some(InputEvent::Interrupt) => return Ok(StopReason::Interrupted),
                Some(InputEvent::Key(key)) => Some(key),
                None => None,
            };
            ctx.current_key = ctx.input_mut().process_key(raw);

            if let Some(key) = ctx.current_key.filter(|k| is_quit_key(*k)) {
                if game.on_quit(ctx) {
                    return Ok(StopReason::QuitKey(key));
                }
                debug!("quit declined by game");
            }

            let dt = ctx.dt;
            game.update(ctx, dt)
                .map_err(|e| EngineError::game(Callback::Update, e))?;
            ctx.screen_mut().clear();
            game.draw(ctx)
                .map_err(|e| EngineError::game(Callback::Draw, e))?;
            session
                .flush(ctx.screen().snapshot())
                .map_err(EngineError::Terminal)?;

            ctx.input_mut().update();
            ctx.current_key = None;

            let budget = ctx.config().frame_duration();
            let spent = clock.now().saturating_sub(frame_start);
            if spent < budget {
                clock.sleep(budget - spent);
            } else if spent > budget {
                debug!(
                    "slow frame {}: {:?} over a {:?} budget",
                    ctx.frame_count,
                    spent - budget,
                    budget
                );
            }
            ctx.frame_count += 1;

            if ctx.quit_requested {
                return Ok(StopReason::Requested);
            }
        }
    }
}
