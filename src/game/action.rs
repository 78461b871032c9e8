use serde::{Deserialize, Serialize};

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Maps a key identifier to a direction.
    ///
    /// Only `w`/`a`/`s`/`d` and the four `Arrow*` names are recognised.
    /// Case matters: `W` is not a steering key.
    pub fn from_key(key: &str) -> Option<Direction> {
        match key {
            "w" | "ArrowUp" => Some(Direction::Up),
            "a" | "ArrowLeft" => Some(Direction::Left),
            "s" | "ArrowDown" => Some(Direction::Down),
            "d" | "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Unit vector (dx, dy) for this direction. Up is +y.
    pub fn unit_vector(&self) -> (f32, f32) {
        match self {
            Direction::Up => (0.0, 1.0),
            Direction::Down => (0.0, -1.0),
            Direction::Left => (-1.0, 0.0),
            Direction::Right => (1.0, 0.0),
        }
    }
}
