//! Callback-style games: plain closures over a state value.

use anyhow::Result;

use crate::game::{Context, Game};

type SetupFn<S> = Box<dyn FnMut(&mut S, &mut Context) -> Result<()>>;
type UpdateFn<S> = Box<dyn FnMut(&mut S, &mut Context, f64) -> Result<()>>;
type DrawFn<S> = Box<dyn FnMut(&mut S, &mut Context) -> Result<()>>;
type QuitFn<S> = Box<dyn FnMut(&mut S, &Context) -> bool>;

/// A [`Game`] assembled from closures. Missing callbacks do nothing.
///
/// ```
/// use tui_arcade_engine::SimpleGame;
/// use tui_arcade_engine::types::Color;
///
/// let game = SimpleGame::new(0u32)
///     .on_update(|ticks, _ctx, _dt| {
///         *ticks += 1;
///         Ok(())
///     })
///     .on_draw(|ticks, ctx| {
///         ctx.screen_mut().draw_text(0, 0, &ticks.to_string(), Color::White);
///         Ok(())
///     });
/// assert_eq!(*game.state(), 0);
/// ```
pub struct SimpleGame<S> {
    state: S,
    setup: Option<SetupFn<S>>,
    update: Option<UpdateFn<S>>,
    draw: Option<DrawFn<S>>,
    quit: Option<QuitFn<S>>,
}

impl<S> SimpleGame<S> {
    pub fn new(state: S) -> Self {
        Self {
            state,
            setup: None,
            update: None,
            draw: None,
            quit: None,
        }
    }

    pub fn on_setup(mut self, f: impl FnMut(&mut S, &mut Context) -> Result<()> + 'static) -> Self {
        self.setup = Some(Box::new(f));
        self
    }

    pub fn on_update(
        mut self,
        f: impl FnMut(&mut S, &mut Context, f64) -> Result<()> + 'static,
    ) -> Self {
        self.update = Some(Box::new(f));
        self
    }

    pub fn on_draw(mut self, f: impl FnMut(&mut S, &mut Context) -> Result<()> + 'static) -> Self {
        self.draw = Some(Box::new(f));
        self
    }

    pub fn on_quit(mut self, f: impl FnMut(&mut S, &Context) -> bool + 'static) -> Self {
        self.quit = Some(Box::new(f));
        self
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    pub fn into_state(self) -> S {
        self.state
    }
}

impl<S> Game for SimpleGame<S> {
    fn setup(&mut self, ctx: &mut Context) -> Result<()> {
        match self.setup.as_mut() {
            Some(f) => f(&mut self.state, ctx),
            None => Ok(()),
        }
    }

    fn update(&mut self, ctx: &mut Context, dt: f64) -> Result<()> {
        match self.update.as_mut() {
            Some(f) => f(&mut self.state, ctx, dt),
            None => Ok(()),
        }
    }

    fn draw(&mut self, ctx: &mut Context) -> Result<()> {
        match self.draw.as_mut() {
            Some(f) => f(&mut self.state, ctx),
            None => Ok(()),
        }
    }

    fn on_quit(&mut self, ctx: &Context) -> bool {
        match self.quit.as_mut() {
            Some(f) => f(&mut self.state, ctx),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameConfig;

    #[test]
    fn missing_callbacks_are_no_ops() {
        let mut game = SimpleGame::new(());
        let mut ctx = Context::new(GameConfig::new(4, 2));
        game.setup(&mut ctx).unwrap();
        game.update(&mut ctx, 0.1).unwrap();
        game.draw(&mut ctx).unwrap();
        assert!(Game::on_quit(&mut game, &ctx));
    }

    #[test]
    fn callbacks_share_state() {
        let mut game = SimpleGame::new(Vec::new())
            .on_setup(|log: &mut Vec<&str>, _| {
                log.push("setup");
                Ok(())
            })
            .on_update(|log, _, _| {
                log.push("update");
                Ok(())
            })
            .on_quit(|log, _| {
                log.push("quit?");
                false
            });
        let mut ctx = Context::new(GameConfig::new(4, 2));
        game.setup(&mut ctx).unwrap();
        game.update(&mut ctx, 0.0).unwrap();
        assert!(!Game::on_quit(&mut game, &ctx));
        assert_eq!(game.into_state(), vec!["setup", "update", "quit?"]);
    }
}
