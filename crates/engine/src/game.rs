//! The game contract and the per-run state a game sees.

use std::time::Duration;

use anyhow::Result;

use crate::input::{InputTracker, KeyMap};
use crate::term::ScreenBuffer;
use crate::types::{GameConfig, Key};

/// What a concrete game implements.
///
/// `setup` runs once before the first frame. Every frame then calls `update`
/// and `draw`, in that order. `on_quit` is asked when `q` or Escape arrives;
/// returning `false` keeps the game running and that frame proceeds normally.
///
/// Errors from the callbacks stop the loop and are returned from
/// [`GameLoop::run`](crate::GameLoop::run) after the terminal has been restored.
pub trait Game {
    fn setup(&mut self, ctx: &mut Context) -> Result<()>;

    /// `dt` is the wall-clock time in seconds since the previous frame started.
    fn update(&mut self, ctx: &mut Context, dt: f64) -> Result<()>;

    /// Draw into `ctx.screen_mut()`. The buffer is cleared before every call.
    fn draw(&mut self, ctx: &mut Context) -> Result<()>;

    fn on_quit(&mut self, _ctx: &Context) -> bool {
        true
    }
}

impl<G: Game + ?Sized> Game for Box<G> {
    fn setup(&mut self, ctx: &mut Context) -> Result<()> {
        (**self).setup(ctx)
    }

    fn update(&mut self, ctx: &mut Context, dt: f64) -> Result<()> {
        (**self).update(ctx, dt)
    }

    fn draw(&mut self, ctx: &mut Context) -> Result<()> {
        (**self).draw(ctx)
    }

    fn on_quit(&mut self, ctx: &Context) -> bool {
        (**self).on_quit(ctx)
    }
}

/// Engine state shared with the game callbacks.
///
/// Owned by the [`GameLoop`](crate::GameLoop). `current_key` is only valid for
/// the frame it arrived in; it is reset before the next frame starts.
#[derive(Debug)]
pub struct Context {
    config: GameConfig,
    screen: ScreenBuffer,
    input: InputTracker,
    pub(crate) current_key: Option<Key>,
    pub(crate) frame_count: u64,
    pub(crate) elapsed: Duration,
    pub(crate) dt: f64,
    pub(crate) quit_requested: bool,
}

impl Context {
    pub fn new(config: GameConfig) -> Self {
        let screen = ScreenBuffer::new(config.width, config.height);
        let input = InputTracker::new(KeyMap::from_alt_keymap(config.alt_keymap));
        Self {
            config,
            screen,
            input,
            current_key: None,
            frame_count: 0,
            elapsed: Duration::ZERO,
            dt: 0.0,
            quit_requested: false,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn width(&self) -> u16 {
        self.config.width
    }

    pub fn height(&self) -> u16 {
        self.config.height
    }

    pub fn title(&self) -> &str {
        &self.config.title
    }

    pub fn screen(&self) -> &ScreenBuffer {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut ScreenBuffer {
        &mut self.screen
    }

    pub fn input(&self) -> &InputTracker {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputTracker {
        &mut self.input
    }

    /// This frame's normalized key, if one arrived.
    pub fn current_key(&self) -> Option<Key> {
        self.current_key
    }

    /// Whether this frame's key is `key`.
    pub fn is_key_pressed(&self, key: Key) -> bool {
        self.current_key == Some(key)
    }

    pub fn is_just_pressed(&self, key: Key) -> bool {
        self.input.is_just_pressed(key)
    }

    /// Completed frames so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Seconds since the loop started, sampled at the start of this frame.
    pub fn elapsed_time(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// The `dt` handed to the last `update`.
    pub fn delta_time(&self) -> f64 {
        self.dt
    }

    pub fn target_fps(&self) -> u32 {
        self.config.target_fps
    }

    /// Takes effect at the end of the current frame.
    pub fn set_target_fps(&mut self, fps: u32) {
        self.config.target_fps = fps;
    }

    /// Stop after the current frame has been drawn.
    pub fn quit(&mut self) {
        self.quit_requested = true;
    }

    pub fn is_quit_requested(&self) -> bool {
        self.quit_requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_follows_config() {
        let ctx = Context::new(GameConfig::new(40, 15).with_title("Mini").with_target_fps(15));
        assert_eq!((ctx.width(), ctx.height()), (40, 15));
        assert_eq!((ctx.screen().width(), ctx.screen().height()), (40, 15));
        assert_eq!(ctx.title(), "Mini");
        assert_eq!(ctx.target_fps(), 15);
        assert_eq!(ctx.input().keymap(), KeyMap::Wasd);
    }

    #[test]
    fn direct_keymap_when_alt_is_off() {
        let ctx = Context::new(GameConfig::new(10, 5).with_alt_keymap(false));
        assert_eq!(ctx.input().keymap(), KeyMap::Direct);
    }

    #[test]
    fn key_pressed_means_this_frames_key() {
        let mut ctx = Context::new(GameConfig::new(10, 5));
        assert!(!ctx.is_key_pressed(Key::SPACE));
        ctx.current_key = Some(Key::SPACE);
        assert!(ctx.is_key_pressed(Key::SPACE));
        assert!(!ctx.is_key_pressed(Key::UP));
    }

    #[test]
    fn fps_and_quit_are_mutable() {
        let mut ctx = Context::new(GameConfig::new(10, 5).with_target_fps(8));
        ctx.set_target_fps(9);
        assert_eq!(ctx.config().frame_duration(), Duration::from_secs(1) / 9);
        assert!(!ctx.is_quit_requested());
        ctx.quit();
        assert!(ctx.is_quit_requested());
    }
}
