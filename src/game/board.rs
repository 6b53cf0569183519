use std::collections::VecDeque;

use rand::rngs::ThreadRng;
use rand::Rng;

use super::config::GameConfig;
use super::direction::Direction;

/// A position on the playing field, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Why the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// The head hit a non-head body segment
    SelfCollision,
    /// The head left the playing field
    Wall,
}

/// The board: snake body, velocity, food, score.
///
/// The body is kept in insertion order with the oldest segment at the front
/// and the head at the back. `cells` holds `min(length, ticks)` entries: it
/// grows toward the target `length` by not trimming until it overflows.
pub struct Board {
    /// Body segments, oldest first, head last
    pub cells: VecDeque<Position>,
    /// Target body length; grows when food is eaten
    pub length: usize,
    /// Current head coordinate; equals `cells.back()` after every advance
    pub head: Position,
    /// Pixels moved per tick; at most one axis nonzero
    pub velocity: (i32, i32),
    pub food: Position,
    pub score: u32,
    /// Ticks advanced since this board was created
    pub ticks: u32,
    config: GameConfig,
    rng: ThreadRng,
}

impl Board {
    /// Create a fresh board: head at the spawn point, not yet moving,
    /// body length 1, food somewhere random inside the margins.
    pub fn new(config: GameConfig) -> Self {
        let mut rng = rand::thread_rng();
        let food = sample_food(&mut rng, &config);

        Self {
            cells: VecDeque::new(),
            length: 1,
            head: Position::new(config.spawn_x, config.spawn_y),
            velocity: (0, 0),
            food,
            score: 0,
            ticks: 0,
            config,
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Point the snake in a new direction. Directional input overwrites the
    /// velocity outright; there is no queueing of missed presses.
    pub fn steer(&mut self, direction: Direction) {
        if self.reversal_allowed(direction) {
            self.velocity = direction.velocity(self.config.step);
        }
    }

    /// Gate for 180-degree turns. Reversing straight onto the opposite axis
    /// is currently allowed; to forbid it, reject directions opposite to
    /// `Direction::from_velocity(self.velocity)`.
    fn reversal_allowed(&self, _direction: Direction) -> bool {
        true
    }

    /// Move the head by the current velocity, append it to the body, and trim
    /// the oldest segment once the body exceeds the target length. Called
    /// exactly once per tick while playing.
    pub fn advance(&mut self) {
        let (dx, dy) = self.velocity;
        self.head = self.head.moved_by(dx, dy);
        self.cells.push_back(self.head);

        while self.cells.len() > self.length {
            self.cells.pop_front();
        }

        self.ticks += 1;
    }

    /// If the head is within the eat tolerance of the food, award the score,
    /// grow the target length, and relocate the food. The tolerance is a
    /// band, not exact equality: both deltas strictly under `eat_radius`.
    /// Returns whether food was eaten this tick.
    pub fn check_food(&mut self) -> bool {
        let close_x = (self.head.x - self.food.x).abs() < self.config.eat_radius;
        let close_y = (self.head.y - self.food.y).abs() < self.config.eat_radius;

        if close_x && close_y {
            self.score += self.config.food_score;
            self.length += self.config.growth_per_food;
            self.food = self.relocate_food();
            true
        } else {
            false
        }
    }

    /// Check the head against the body and the walls. The body check skips
    /// the head itself, so a length-1 snake can never self-collide. Bounds
    /// are inclusive: exactly 0 or width/height is still in play.
    pub fn check_collision(&self) -> Option<Collision> {
        let body = self.cells.len().saturating_sub(1);
        if self.cells.iter().take(body).any(|&cell| cell == self.head) {
            return Some(Collision::SelfCollision);
        }

        let head = self.head;
        if head.x < 0 || head.x > self.config.width || head.y < 0 || head.y > self.config.height {
            return Some(Collision::Wall);
        }

        None
    }

    /// Pick a new food position, never the one just eaten
    fn relocate_food(&mut self) -> Position {
        loop {
            let candidate = sample_food(&mut self.rng, &self.config);
            if candidate != self.food {
                return candidate;
            }
        }
    }
}

/// Uniformly random position inside the food margins
fn sample_food(rng: &mut ThreadRng, config: &GameConfig) -> Position {
    let x = rng.gen_range(config.food_margin..=config.width - config.food_margin);
    let y = rng.gen_range(config.food_margin..=config.height - config.food_margin);
    Position::new(x, y)
}
