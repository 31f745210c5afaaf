//! Axis-aligned collision and bounds checks on integer cells.
//!
//! Rectangles are half-open: a rect at `x` with width `w` covers columns
//! `x..x + w`. Edge sums are widened to `i64` so rects near the ends of the
//! `i32` range do not overflow.

use crate::entity::Entity;

/// Cell rectangle: top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    fn right(&self) -> i64 {
        i64::from(self.x) + i64::from(self.w)
    }

    fn bottom(&self) -> i64 {
        i64::from(self.y) + i64::from(self.h)
    }

    pub fn contains(&self, px: i32, py: i32) -> bool {
        let (px, py) = (i64::from(px), i64::from(py));
        i64::from(self.x) <= px
            && px < self.right()
            && i64::from(self.y) <= py
            && py < self.bottom()
    }

    /// True when the rects share at least one cell. Touching edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        i64::from(self.x) < other.right()
            && self.right() > i64::from(other.x)
            && i64::from(self.y) < other.bottom()
            && self.bottom() > i64::from(other.y)
    }
}

/// Which edges of an area a point has crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundsHit {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl BoundsHit {
    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }
}

pub fn check_collision(a: &Entity, b: &Entity) -> bool {
    a.collides_with(b)
}

pub fn point_in_rect(px: i32, py: i32, rect: Rect) -> bool {
    rect.contains(px, py)
}

pub fn rect_collision(a: Rect, b: Rect) -> bool {
    a.intersects(&b)
}

/// Compare a point against `[min_x, max_x) x [min_y, max_y)`.
pub fn check_bounds(x: i32, y: i32, min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> BoundsHit {
    BoundsHit {
        left: x < min_x,
        right: x >= max_x,
        top: y < min_y,
        bottom: y >= max_y,
    }
}

pub fn is_out_of_bounds(x: i32, y: i32, min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> bool {
    check_bounds(x, y, min_x, min_y, max_x, max_y).any()
}

/// Limit `value` to `[min, max]`. When `min > max`, `min` wins.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    let capped = if value > max { max } else { value };
    if capped < min {
        min
    } else {
        capped
    }
}

/// Pull a point back inside `[min_x, max_x) x [min_y, max_y)`.
pub fn clamp_to_bounds(
    x: i32,
    y: i32,
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
) -> (i32, i32) {
    (
        clamp(x, min_x, max_x.saturating_sub(1)),
        clamp(y, min_y, max_y.saturating_sub(1)),
    )
}
