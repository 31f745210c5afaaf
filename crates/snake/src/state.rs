//! Snake rules, independent of the engine.
//!
//! [`Snake::step`] is called once per frame with that frame's key. Everything
//! else (speed ramp, drawing) reacts to the [`Step`] it returns.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::Key;

pub const GAME_WIDTH: i32 = 60;
pub const GAME_HEIGHT: i32 = 20;
pub const PLAY_X: i32 = 2;
pub const PLAY_Y: i32 = 3;
pub const PLAY_WIDTH: i32 = GAME_WIDTH - 4;
pub const PLAY_HEIGHT: i32 = GAME_HEIGHT - 4;

/// Boosting is only allowed while the snake is longer than this.
pub const MIN_LENGTH: usize = 3;
pub const FOOD_POINTS: u32 = 10;
/// Random food placements tried before accepting any cell.
pub const FOOD_ATTEMPTS: usize = 100;

pub type Point = (i32, i32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> Point {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Arrows and WASD (either case). WASD usually arrives already remapped.
    pub fn from_key(key: Key) -> Option<Self> {
        match key.as_char().map(|c| c.to_ascii_lowercase()) {
            Some('w') => return Some(Direction::Up),
            Some('s') => return Some(Direction::Down),
            Some('a') => return Some(Direction::Left),
            Some('d') => return Some(Direction::Right),
            _ => {}
        }
        match key {
            Key::UP => Some(Direction::Up),
            Key::DOWN => Some(Direction::Down),
            Key::LEFT => Some(Direction::Left),
            Key::RIGHT => Some(Direction::Right),
            _ => None,
        }
    }
}

/// What a call to [`Snake::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Nothing moved (game over, paused, or a skipped vertical frame).
    Idle,
    Moved,
    /// Food eaten; `speed_up` is set on every multiple of 50 points.
    Ate { speed_up: bool },
    Died,
    Paused,
    Resumed,
    Restarted,
}

#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Point>,
    direction: Direction,
    next_direction: Direction,
    food: Point,
    score: u32,
    high_score: u32,
    game_over: bool,
    paused: bool,
    boosting: bool,
    vertical_frames: u32,
    boost_moves: u32,
    rng: StdRng,
}

impl Snake {
    pub fn new(rng: StdRng) -> Self {
        let mut snake = Self {
            body: VecDeque::new(),
            direction: Direction::Right,
            next_direction: Direction::Right,
            food: (PLAY_X, PLAY_Y),
            score: 0,
            high_score: 0,
            game_over: false,
            paused: false,
            boosting: false,
            vertical_frames: 0,
            boost_moves: 0,
            rng,
        };
        snake.reset();
        snake
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Back to the starting position. The high score survives.
    pub fn reset(&mut self) {
        let cx = PLAY_X + PLAY_WIDTH / 2;
        let cy = PLAY_Y + PLAY_HEIGHT / 2;
        self.body = VecDeque::from([(cx, cy), (cx - 1, cy), (cx - 2, cy)]);
        self.direction = Direction::Right;
        self.next_direction = Direction::Right;
        self.score = 0;
        self.game_over = false;
        self.paused = false;
        self.boosting = false;
        self.vertical_frames = 0;
        self.boost_moves = 0;
        self.spawn_food();
    }

    pub fn body(&self) -> &VecDeque<Point> {
        &self.body
    }

    pub fn head(&self) -> Point {
        self.body.front().copied().unwrap_or((PLAY_X, PLAY_Y))
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_boosting(&self) -> bool {
        self.boosting
    }

    pub fn can_boost(&self) -> bool {
        self.body.len() > MIN_LENGTH
    }

    pub fn step(&mut self, key: Option<Key>) -> Step {
        if self.game_over {
            if key == Some(Key::R) {
                self.reset();
                return Step::Restarted;
            }
            return Step::Idle;
        }

        if self.paused {
            if key == Some(Key::P) {
                self.paused = false;
                return Step::Resumed;
            }
            return Step::Idle;
        }

        self.boosting = key == Some(Key::SPACE) && self.can_boost();

        if let Some(key) = key {
            if key == Key::P {
                self.paused = true;
                return Step::Paused;
            }
            if let Some(dir) = Direction::from_key(key) {
                if dir != self.direction.opposite() {
                    self.next_direction = dir;
                }
            }
        }
        self.direction = self.next_direction;

        // Cells are taller than wide: vertical moves only every other frame.
        if self.direction.is_vertical() && !self.boosting {
            self.vertical_frames += 1;
            if self.vertical_frames % 2 == 0 {
                return Step::Idle;
            }
        }

        let (hx, hy) = self.head();
        let (dx, dy) = self.direction.delta();
        let new_head = (hx + dx, hy + dy);

        if !in_play_area(new_head) || self.body.contains(&new_head) {
            self.game_over = true;
            self.high_score = self.high_score.max(self.score);
            return Step::Died;
        }

        self.body.push_front(new_head);
        let outcome = if new_head == self.food {
            self.score += FOOD_POINTS;
            self.spawn_food();
            Step::Ate {
                speed_up: self.score % 50 == 0,
            }
        } else {
            self.body.pop_back();
            Step::Moved
        };

        if self.boosting && self.can_boost() {
            self.boost_moves += 1;
            if self.boost_moves % 3 == 0 {
                self.body.pop_back();
            }
        }
        outcome
    }

    fn spawn_food(&mut self) {
        for _ in 0..FOOD_ATTEMPTS {
            let pos = self.random_cell();
            if !self.body.contains(&pos) {
                self.food = pos;
                return;
            }
        }
        self.food = self.random_cell();
    }

    fn random_cell(&mut self) -> Point {
        (
            self.rng.random_range(PLAY_X..PLAY_X + PLAY_WIDTH),
            self.rng.random_range(PLAY_Y..PLAY_Y + PLAY_HEIGHT),
        )
    }
}

pub fn in_play_area((x, y): Point) -> bool {
    (PLAY_X..PLAY_X + PLAY_WIDTH).contains(&x) && (PLAY_Y..PLAY_Y + PLAY_HEIGHT).contains(&y)
}
