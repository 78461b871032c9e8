use thiserror::Error;

/// Errors produced by the game core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Every board cell is covered by the snake, food has nowhere to go
    #[error("board full: no free cell for food among {cells} tiles")]
    BoardFull { cells: usize },
}
