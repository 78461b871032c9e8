use super::{
    action::Direction,
    board::generate_tiles,
    config::GameConfig,
    error::GameError,
    state::{CollisionType, GameState, Position, Snake},
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info, warn};

/// Old and new logical position of one segment for a single move
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentMove {
    pub index: usize,
    pub from: Position,
    pub to: Position,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StepResult {
    /// Per-segment transitions, head first. Empty when nothing moved.
    pub moves: Vec<SegmentMove>,
    /// Whether the snake ate food and gained a tail segment
    pub growth: bool,
    /// Type of collision if one occurred
    pub collision: Option<CollisionType>,
    /// Whether the game has terminated
    pub terminated: bool,
}

impl StepResult {
    pub fn moved(&self) -> bool {
        !self.moves.is_empty()
    }
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    tiles: Vec<Position>,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Engine with a reproducible food sequence
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Result<Self, GameError> {
        config.validate()?;
        let tiles = generate_tiles(config.board_size);
        Ok(Self { config, tiles, rng })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Tile layout for this engine's board
    pub fn tiles(&self) -> &[Position] {
        &self.tiles
    }

    /// Reset the game to initial state
    pub fn reset(&mut self) -> Result<GameState, GameError> {
        let snake = Snake::starter(self.config.starter_length);
        let food = self.spawn_food_avoid_snake(&snake)?;

        Ok(GameState::new(snake, food, self.config.board_size))
    }

    /// Execute one discrete move in the latched direction.
    ///
    /// With no direction the snake stays put. If food cannot be placed after
    /// growing, the state is marked finished and [`GameError::BoardFull`] is
    /// returned; the growth itself has already been applied.
    pub fn step(
        &mut self,
        state: &mut GameState,
        direction: Option<Direction>,
    ) -> Result<StepResult, GameError> {
        if !state.is_alive {
            return Ok(StepResult {
                terminated: true,
                ..Default::default()
            });
        }

        let direction = self.resolve_direction(state, direction);
        let old_tail = state.snake.tail();
        let mut result = StepResult::default();

        if let Some(direction) = direction {
            let new_head = state
                .snake
                .head()
                .moved_in_direction(direction, self.config.snake_speed);

            if let Some(collision) = self.check_collision(state, new_head) {
                info!(?collision, x = new_head.x, y = new_head.y, "snake crashed");
                state.is_alive = false;
                state.moves += 1;
                result.collision = Some(collision);
                result.terminated = true;
                return Ok(result);
            }

            let before = state.snake.advance_to(new_head);
            result.moves = before
                .iter()
                .zip(state.snake.body.iter())
                .enumerate()
                .map(|(index, (&from, &to))| SegmentMove { index, from, to })
                .collect();

            state.heading = Some(direction);
            state.moves += 1;
        }

        if state.snake.head().approx_eq(&state.food) {
            result.growth = true;
            state.snake.grow_at(old_tail);
            state.food_eaten += 1;
            debug!(
                length = state.snake.len(),
                food_eaten = state.food_eaten,
                "snake ate food"
            );

            match self.spawn_food_avoid_snake(&state.snake) {
                Ok(food) => state.food = food,
                Err(err) => {
                    state.is_alive = false;
                    return Err(err);
                }
            }
        }

        Ok(result)
    }

    /// Apply the reversal rule to the latched direction
    fn resolve_direction(
        &self,
        state: &GameState,
        direction: Option<Direction>,
    ) -> Option<Direction> {
        match (direction, state.heading) {
            (Some(wanted), Some(current))
                if self.config.rules.reject_reversal && wanted.is_opposite(current) =>
            {
                Some(current)
            }
            (wanted, _) => wanted,
        }
    }

    /// Check if the new head position causes a collision
    fn check_collision(&self, state: &GameState, pos: Position) -> Option<CollisionType> {
        let rules = &self.config.rules;

        if rules.walls && !state.is_in_bounds(pos) {
            return Some(CollisionType::Wall);
        }

        // Segments 2.. after the shift. The neck sits on the old head and the
        // old tail moves away, so neither can be hit.
        if rules.self_collision {
            let len = state.snake.len();
            let hit = state
                .snake
                .body
                .iter()
                .take(len.saturating_sub(1))
                .skip(1)
                .any(|segment| segment.approx_eq(&pos));
            if hit {
                return Some(CollisionType::SelfCollision);
            }
        }

        None
    }

    /// Spawn food on a random free tile, falling back to a scan of the board
    fn spawn_food_avoid_snake(&mut self, snake: &Snake) -> Result<Position, GameError> {
        for _ in 0..self.config.max_food_attempts {
            let pos = self.tiles[self.rng.gen_range(0..self.tiles.len())];
            if !snake.covers(pos) {
                return Ok(pos);
            }
        }

        warn!(
            attempts = self.config.max_food_attempts,
            "random food placement exhausted, scanning board"
        );

        self.tiles
            .iter()
            .copied()
            .find(|&tile| !snake.covers(tile))
            .ok_or(GameError::BoardFull {
                cells: self.tiles.len(),
            })
    }
}
