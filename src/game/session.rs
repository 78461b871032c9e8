//! Frame-driven game session
//!
//! Owns the grid state, input latch, move clock and segment tweens, and is the
//! single entry point a host render loop talks to. Every frame:
//!
//! 1. in-flight tweens are advanced to the frame timestamp,
//! 2. the move clock decides whether a discrete move is due,
//! 3. if so the grid is stepped and fresh tweens start at the same timestamp.
//!
//! The scene view read afterwards therefore always reflects this frame's move.

use tracing::{debug, info, warn};

use super::{
    config::GameConfig,
    engine::{GameEngine, StepResult},
    error::GameError,
    scheduler::MoveScheduler,
    state::{CollisionType, GameState, Position},
};
use crate::input::InputState;
use crate::tween::Interpolator;

/// Stable identity of a snake segment, kept across moves and resets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(pub usize);

/// One renderable segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentRecord {
    pub id: SegmentId,
    /// Interpolated position, not the logical one
    pub position: Position,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct SceneView<'a> {
    /// Head first
    pub segments: Vec<SegmentRecord>,
    pub food: Position,
    pub tiles: &'a [Position],
    pub scale: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Crashed(CollisionType),
    /// The snake fills the board
    BoardFull,
}

pub struct GameSession {
    engine: GameEngine,
    state: GameState,
    input: InputState,
    scheduler: MoveScheduler,
    interpolator: Interpolator,
    segment_ids: Vec<SegmentId>,
    status: GameStatus,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::from_engine(GameEngine::new(config)?)
    }

    /// Session with a reproducible food sequence
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::from_engine(GameEngine::with_seed(config, seed)?)
    }

    fn from_engine(mut engine: GameEngine) -> Result<Self, GameError> {
        let state = engine.reset()?;
        let timing = engine.config().timing.clone();

        let mut interpolator = Interpolator::new(timing.tween_time_step, timing.easing);
        interpolator.snap_to(&state.snake.body);
        let segment_ids = (0..state.snake.len()).map(SegmentId).collect();

        info!(
            board_size = engine.config().board_size,
            length = state.snake.len(),
            "game session started"
        );

        Ok(Self {
            engine,
            state,
            input: InputState::new(),
            scheduler: MoveScheduler::new(&timing),
            interpolator,
            segment_ids,
            status: GameStatus::Running,
        })
    }

    /// Forward a raw key press. Repeats must be filtered by the caller.
    pub fn press_key(&mut self, key: &str) -> bool {
        self.input.set_direction(key)
    }

    /// Per-frame entry point. `now` is a monotonic timestamp in milliseconds.
    ///
    /// Returns the step result when a discrete move happened this frame,
    /// including the final growth that filled the board.
    pub fn on_frame(&mut self, now: f64) -> Option<StepResult> {
        self.interpolator.advance(now);

        if !self.scheduler.tick(now) || self.status != GameStatus::Running {
            return None;
        }

        match self.engine.step(&mut self.state, self.input.direction()) {
            Ok(result) => {
                for segment in &result.moves {
                    self.interpolator
                        .start(segment.index, segment.from, segment.to, now);
                }

                if result.growth {
                    self.push_segment(self.state.snake.tail());
                }

                if let Some(collision) = result.collision {
                    self.status = GameStatus::Crashed(collision);
                }

                Some(result)
            }
            Err(GameError::BoardFull { cells }) => {
                info!(cells, length = self.state.snake.len(), "board full, game over");
                while self.segment_ids.len() < self.state.snake.len() {
                    self.segment_ids.push(SegmentId(self.segment_ids.len()));
                }
                self.interpolator.snap_to(&self.state.snake.body);
                self.status = GameStatus::BoardFull;
                // The final growth still happened; the move itself is shown snapped
                Some(StepResult {
                    growth: true,
                    terminated: true,
                    ..Default::default()
                })
            }
            Err(err) => {
                warn!(%err, "game step failed");
                None
            }
        }
    }

    /// Start over with the starter snake. Segment ids of the starter segments are kept.
    pub fn reset(&mut self, now: f64) -> Result<(), GameError> {
        self.state = self.engine.reset()?;
        self.input.clear();
        self.scheduler.reset(now);
        self.segment_ids.truncate(self.state.snake.len());
        while self.segment_ids.len() < self.state.snake.len() {
            self.segment_ids.push(SegmentId(self.segment_ids.len()));
        }
        self.interpolator.snap_to(&self.state.snake.body);
        self.status = GameStatus::Running;

        debug!(now, "game session reset");
        Ok(())
    }

    pub fn scene(&self) -> SceneView<'_> {
        let segments = self
            .segment_ids
            .iter()
            .zip(self.interpolator.positions())
            .map(|(&id, &position)| SegmentRecord { id, position })
            .collect();

        SceneView {
            segments,
            food: self.state.food,
            tiles: self.engine.tiles(),
            scale: self.engine.config().game_scale,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn config(&self) -> &GameConfig {
        self.engine.config()
    }

    /// Tweens still running
    pub fn animating(&self) -> usize {
        self.interpolator.in_flight()
    }

    fn push_segment(&mut self, position: Position) {
        // Ids are never reused, so the next one is the current count
        self.segment_ids.push(SegmentId(self.segment_ids.len()));
        self.interpolator.push(position);
    }
}
