/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Returns the velocity (dx, dy) for moving in this direction at the
    /// given speed. Screen coordinates: y grows downward.
    pub fn velocity(self, step: i32) -> (i32, i32) {
        match self {
            Direction::Up => (0, -step),
            Direction::Down => (0, step),
            Direction::Left => (-step, 0),
            Direction::Right => (step, 0),
        }
    }

    /// Recover the direction of a velocity pair, if it is moving at all
    pub fn from_velocity(velocity: (i32, i32)) -> Option<Direction> {
        match velocity {
            (0, 0) => None,
            (x, 0) if x > 0 => Some(Direction::Right),
            (_, 0) => Some(Direction::Left),
            (0, y) if y > 0 => Some(Direction::Down),
            _ => Some(Direction::Up),
        }
    }
}
