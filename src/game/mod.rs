//! Core game logic module for Snake
//!
//! This module contains the grid simulation without any I/O or rendering
//! dependencies. Hosts drive it through [`GameSession`].

pub mod action;
pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod scheduler;
pub mod session;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use board::generate_tiles;
pub use config::{GameConfig, GameRules, TimingConfig};
pub use engine::{GameEngine, SegmentMove, StepResult};
pub use error::GameError;
pub use scheduler::MoveScheduler;
pub use session::{GameSession, GameStatus, SceneView, SegmentId, SegmentRecord};
pub use state::{CollisionType, GameState, Position, Snake, EPSILON};
