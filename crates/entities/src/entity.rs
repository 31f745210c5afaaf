use crate::collision::Rect;
use crate::sprite::Sprite;
use crate::term::ScreenBuffer;
use crate::types::Color;

/// Glyph drawn for an entity without a sprite.
pub const DEFAULT_GLYPH: char = '█';

/// A positioned game object.
///
/// Position and velocity are fractional; drawing and collision use the
/// position truncated toward zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub sprite: Option<Sprite>,
    pub active: bool,
    pub tag: String,
}

impl Default for Entity {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            sprite: None,
            active: true,
            tag: String::new(),
        }
    }
}

impl Entity {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    pub fn with_velocity(mut self, vx: f64, vy: f64) -> Self {
        self.set_velocity(vx, vy);
        self
    }

    pub fn with_sprite(mut self, sprite: Sprite) -> Self {
        self.sprite = Some(sprite);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn ix(&self) -> i32 {
        self.x as i32
    }

    pub fn iy(&self) -> i32 {
        self.y as i32
    }

    /// Sprite width, or 1 without a sprite.
    pub fn width(&self) -> i32 {
        self.sprite
            .as_ref()
            .map_or(1, |s| i32::try_from(s.width()).unwrap_or(i32::MAX))
    }

    /// Sprite height, or 1 without a sprite.
    pub fn height(&self) -> i32 {
        self.sprite
            .as_ref()
            .map_or(1, |s| i32::try_from(s.height()).unwrap_or(i32::MAX))
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.ix(), self.iy(), self.width(), self.height())
    }

    pub fn move_by(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Advance by velocity scaled by `dt`. With `dt = 1.0` the velocity is
    /// cells per call; with the loop's delta time it is cells per second.
    pub fn update(&mut self, dt: f64) {
        self.x += self.vx * dt;
        self.y += self.vy * dt;
    }

    pub fn set_velocity(&mut self, vx: f64, vy: f64) {
        self.vx = vx;
        self.vy = vy;
    }

    pub fn stop(&mut self) {
        self.set_velocity(0.0, 0.0);
    }

    /// Draw the sprite at the integer position. Spaces in the sprite are
    /// transparent. Inactive entities draw nothing.
    pub fn draw(&self, screen: &mut ScreenBuffer) {
        if !self.active {
            return;
        }
        let (ox, oy) = (self.ix(), self.iy());
        let Some(sprite) = &self.sprite else {
            screen.draw_char(ox, oy, DEFAULT_GLYPH, Color::Default);
            return;
        };
        for (row, line) in sprite.lines.iter().enumerate() {
            let y = oy.saturating_add(i32::try_from(row).unwrap_or(i32::MAX));
            for (col, ch) in line.chars().enumerate() {
                if ch == ' ' {
                    continue;
                }
                let x = ox.saturating_add(i32::try_from(col).unwrap_or(i32::MAX));
                screen.draw_char(x, y, ch, sprite.color);
            }
        }
    }

    pub fn collides_with(&self, other: &Entity) -> bool {
        self.bounds().intersects(&other.bounds())
    }

    pub fn contains_point(&self, px: i32, py: i32) -> bool {
        self.bounds().contains(px, py)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_creation() {
        let entity = Entity::new(10.0, 20.0);
        assert_eq!((entity.x, entity.y), (10.0, 20.0));
        assert_eq!((entity.vx, entity.vy), (0.0, 0.0));
        assert!(entity.active);
        assert!(entity.tag.is_empty());
    }

    #[test]
    fn test_integer_position_truncates() {
        let entity = Entity::new(10.5, 20.7);
        assert_eq!((entity.ix(), entity.iy()), (10, 20));
        let entity = Entity::new(-0.5, -1.5);
        assert_eq!((entity.ix(), entity.iy()), (0, -1));
    }

    #[test]
    fn test_move_by() {
        let mut entity = Entity::new(10.0, 10.0);
        entity.move_by(5.0, -3.0);
        assert_eq!((entity.x, entity.y), (15.0, 7.0));
    }

    #[test]
    fn test_velocity_update() {
        let mut entity = Entity::new(0.0, 0.0).with_velocity(2.0, 3.0);
        entity.update(1.0);
        assert_eq!((entity.x, entity.y), (2.0, 3.0));
        entity.update(0.5);
        assert_eq!((entity.x, entity.y), (3.0, 4.5));
    }

    #[test]
    fn test_stop() {
        let mut entity = Entity::new(0.0, 0.0).with_velocity(5.0, 5.0);
        entity.stop();
        assert_eq!((entity.vx, entity.vy), (0.0, 0.0));
    }

    #[test]
    fn test_bounds_follow_sprite() {
        let ship = Entity::new(3.9, 1.0).with_sprite(Sprite::from_string("<=>\n/ \\", Color::Cyan));
        assert_eq!(ship.bounds(), Rect::new(3, 1, 3, 2));
        assert!(ship.contains_point(5, 2));
        assert!(!ship.contains_point(6, 2));
        assert_eq!(Entity::default().bounds(), Rect::new(0, 0, 1, 1));
    }

    #[test]
    fn test_draw_skips_transparent_cells() {
        let mut screen = ScreenBuffer::new(6, 3);
        let ship = Entity::new(1.0, 0.0).with_sprite(Sprite::from_string("<=>\n/ \\", Color::Cyan));
        screen.draw_char(2, 1, 'x', Color::Red);
        ship.draw(&mut screen);

        assert_eq!(screen.row_text(0), " <=>  ");
        assert_eq!(screen.row_text(1), " /x\\  ");
        assert_eq!(screen.get(1, 0).map(|c| c.color), Some(Color::Cyan));
    }

    #[test]
    fn test_draw_default_glyph_and_inactive() {
        let mut screen = ScreenBuffer::new(3, 1);
        let mut dot = Entity::new(1.0, 0.0);
        dot.draw(&mut screen);
        assert_eq!(screen.row_text(0), format!(" {DEFAULT_GLYPH} "));

        screen.clear();
        dot.active = false;
        dot.draw(&mut screen);
        assert_eq!(screen.row_text(0), "   ");
    }

    #[test]
    fn test_sprite_partly_off_screen_clips() {
        let mut screen = ScreenBuffer::new(3, 2);
        let block = Sprite::from_string("###\n###\n###", Color::Default);
        let block = Entity::new(-1.0, -1.0).with_sprite(block);
        block.draw(&mut screen);
        assert_eq!(screen.row_text(0), "## ");
        assert_eq!(screen.row_text(1), "## ");
    }
}
