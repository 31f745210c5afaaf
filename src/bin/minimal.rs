//! Smallest possible game: move an `@` around a box.

use anyhow::Result;
use clap::Parser;

use tui_arcade::cli::CommonArgs;
use tui_arcade::engine::{init_logging, run, Context, EngineConfig, Game};
use tui_arcade::entities::{clamp_to_bounds, Entity, Sprite};
use tui_arcade::types::{Color, GameConfig, Key};

#[derive(Parser)]
#[command(name = "minimal", about = "Minimal tui-arcade example")]
struct Args {
    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Default)]
struct Minimal {
    player: Entity,
}

impl Game for Minimal {
    fn setup(&mut self, ctx: &mut Context) -> Result<()> {
        self.player = Entity::new(f64::from(ctx.width() / 2), f64::from(ctx.height() / 2))
            .with_sprite(Sprite::from_char('@', Color::Green));
        Ok(())
    }

    fn update(&mut self, ctx: &mut Context, _dt: f64) -> Result<()> {
        let (w, h) = (i32::from(ctx.width()), i32::from(ctx.height()));
        match ctx.current_key() {
            Some(Key::UP) => self.player.move_by(0.0, -1.0),
            Some(Key::DOWN) => self.player.move_by(0.0, 1.0),
            Some(Key::LEFT) => self.player.move_by(-1.0, 0.0),
            Some(Key::RIGHT) => self.player.move_by(1.0, 0.0),
            _ => {}
        }
        // Stay inside the border.
        let (x, y) = clamp_to_bounds(self.player.ix(), self.player.iy(), 1, 1, w - 1, h - 1);
        self.player.move_to(f64::from(x), f64::from(y));
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> Result<()> {
        let (w, h) = (i32::from(ctx.width()), i32::from(ctx.height()));
        let screen = ctx.screen_mut();
        screen.draw_box(0, 0, w, h, Some("Minimal Game"), Color::Cyan);
        self.player.draw(screen);
        screen.draw_text(2, h - 2, "Arrow keys to move, Q to quit", Color::White);
        Ok(())
    }
}
fn main() -> Result<()> {
    let args = Args::parse();
    let engine = args.common.engine_config(EngineConfig::from_env());
    init_logging(&engine)?;

    let config = args.common.game_config(
        GameConfig::new(40, 15)
            .with_target_fps(15)
            .with_title("Minimal Example"),
    );
    run(Minimal::default(), config, &engine)?;
    Ok(())
}
