//! Game objects on the character grid.
//!
//! - [`Sprite`]: multi-line ASCII art with one color; spaces are transparent
//! - [`Entity`]: position, velocity, optional sprite, tag and active flag
//! - [`EntityGroup`]: owned collection with batch update/draw and tag lookup
//! - [`collision`]: rectangle and bounds helpers on integer cells
//! - [`utils`]: small math and text helpers shared by games

pub mod collision;
pub mod entity;
pub mod group;
pub mod sprite;
pub mod utils;

pub use tui_arcade_term as term;
pub use tui_arcade_types as types;

pub use collision::{
    check_bounds, check_collision, clamp, clamp_to_bounds, is_out_of_bounds, point_in_rect,
    rect_collision, BoundsHit, Rect,
};
pub use entity::{Entity, DEFAULT_GLYPH};
pub use group::{EntityGroup, EntityId};
pub use sprite::Sprite;
