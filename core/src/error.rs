use thiserror::Error;

use crate::{CellCount, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(ConfigProblem),
    #[error("Invalid coordinates {0:?}")]
    InvalidCoords(Coord2),
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigProblem {
    #[error("board size must be positive, got {0:?}")]
    NonPositiveSize(Coord2),
    #[error("{mines} mines do not fit in {cells} cells")]
    TooManyMines { mines: CellCount, cells: CellCount },
    #[error("expected {expected} cells, got {actual}")]
    CellCountMismatch {
        expected: CellCount,
        actual: CellCount,
    },
}

impl From<ConfigProblem> for GameError {
    fn from(problem: ConfigProblem) -> Self {
        Self::InvalidConfiguration(problem)
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
