use std::fmt;

/// Failures raised by board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// `spawn_ball` was called while a ball is still on the board.
    BallAlreadySpawned,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BallAlreadySpawned => write!(f, "a ball is already on the board"),
        }
    }
}

impl std::error::Error for BoardError {}
