use serde::{Deserialize, Serialize};

use super::action::Direction;

/// Tolerance for position comparison. Interpolated coordinates are never exact.
pub const EPSILON: f32 = 0.25;

/// A position on the game grid, in tile units. Tile centres sit on half-integers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move `distance` units in a direction
    pub fn moved_in_direction(&self, direction: Direction, distance: f32) -> Self {
        let (dx, dy) = direction.unit_vector();
        self.moved_by(dx * distance, dy * distance)
    }

    /// Both axes within [`EPSILON`]
    pub fn approx_eq(&self, other: &Position) -> bool {
        (self.x - other.x).abs() < EPSILON && (self.y - other.y).abs() < EPSILON
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
}

impl Snake {
    /// Lay `length` segments out horizontally, head on the right, centred on x = 0
    pub fn starter(length: usize) -> Self {
        let half = length as f32 / 2.0;
        let body = (0..length)
            .map(|i| Position::new(half - 0.5 - i as f32, -0.5))
            .collect();

        Self { body }
    }

    pub fn from_positions(body: Vec<Position>) -> Self {
        Self { body }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Check if any segment, head included, covers `pos`
    pub fn covers(&self, pos: Position) -> bool {
        self.body.iter().any(|p| p.approx_eq(&pos))
    }

    /// Follow-the-leader shift. Returns the pre-step positions.
    pub fn advance_to(&mut self, new_head: Position) -> Vec<Position> {
        let before = self.body.clone();
        self.body.pop();
        self.body.insert(0, new_head);
        before
    }

    /// Append a segment at the given position
    pub fn grow_at(&mut self, pos: Position) {
        self.body.push(pos);
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the board
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Logical grid state: snake, food and counters
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub board_size: usize,
    /// Last direction actually applied to the head
    pub heading: Option<Direction>,
    pub food_eaten: u32,
    pub moves: u32,
    pub is_alive: bool,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, food: Position, board_size: usize) -> Self {
        Self {
            snake,
            food,
            board_size,
            heading: None,
            food_eaten: 0,
            moves: 0,
            is_alive: true,
        }
    }

    /// Check if a position lies strictly inside the board, the open square (-N/2, N/2).
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        let half = self.board_size as f32 / 2.0;
        pos.x > -half && pos.x < half && pos.y > -half && pos.y < half
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(0.5, 0.5);
        assert_eq!(pos.moved_by(1.0, 0.0), Position::new(1.5, 0.5));
        assert_eq!(
            pos.moved_in_direction(Direction::Up, 0.5),
            Position::new(0.5, 1.0)
        );
        assert_eq!(
            pos.moved_in_direction(Direction::Left, 0.5),
            Position::new(0.0, 0.5)
        );
    }

    #[test]
    fn test_approx_eq_uses_strict_epsilon() {
        let a = Position::new(0.5, 0.5);
        assert!(a.approx_eq(&Position::new(0.7, 0.3)));
        assert!(!a.approx_eq(&Position::new(0.75, 0.5)));
        assert!(!a.approx_eq(&Position::new(0.5, 1.0)));
    }

    #[test]
    fn test_starter_layout() {
        let snake = Snake::starter(10);
        assert_eq!(snake.len(), 10);
        assert_eq!(snake.head(), Position::new(4.5, -0.5));
        assert_eq!(snake.body[1], Position::new(3.5, -0.5));
        assert_eq!(snake.tail(), Position::new(-4.5, -0.5));
    }

    #[test]
    fn test_advance_shifts_body() {
        let mut snake = Snake::starter(3);
        let before = snake.advance_to(Position::new(1.5, 0.0));

        assert_eq!(before, Snake::starter(3).body);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(1.5, 0.0));
        assert_eq!(snake.body[1], before[0]);
        assert_eq!(snake.body[2], before[1]);
    }

    #[test]
    fn test_covers() {
        let snake = Snake::starter(3);
        assert!(snake.covers(Position::new(1.0, -0.5))); // head
        assert!(snake.covers(Position::new(0.1, -0.4))); // body, within epsilon
        assert!(!snake.covers(Position::new(0.5, -0.5))); // between segments
        assert!(!snake.covers(Position::new(3.5, 3.5))); // empty
    }

    #[test]
    fn test_bounds_checking() {
        let state = GameState::new(Snake::starter(3), Position::new(1.5, 1.5), 8);

        assert!(state.is_in_bounds(Position::new(-3.5, -3.5)));
        assert!(state.is_in_bounds(Position::new(3.5, 3.5)));
        assert!(!state.is_in_bounds(Position::new(4.0, 0.5)));
        assert!(!state.is_in_bounds(Position::new(0.5, -4.5)));
        // The edge itself is outside
        assert!(!state.is_in_bounds(Position::new(-4.0, 0.5)));
    }
}
