#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use game::*;
pub use generator::*;
pub use grid::*;
pub use session::*;
pub use snapshot::*;
pub use types::*;

mod cell;
mod error;
mod game;
mod generator;
mod grid;
mod session;
mod snapshot;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Checks that the board has a positive size and room for every mine.
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        Self::new_unchecked(size, mines).validate()
    }

    pub fn validate(self) -> Result<Self> {
        if self.size.0 <= 0 || self.size.1 <= 0 {
            return Err(ConfigProblem::NonPositiveSize(self.size).into());
        }

        let cells = self.total_cells();
        if self.mines > cells {
            return Err(ConfigProblem::TooManyMines {
                mines: self.mines,
                cells,
            }
            .into());
        }

        Ok(self)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

/// Result of a reveal, and of the game as a whole after it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Ongoing,
    Won,
    Lost,
}

impl Outcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}
