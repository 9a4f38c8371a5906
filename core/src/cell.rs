use serde::{Deserialize, Serialize};

use crate::Coord2;

/// What a cell holds, decided once at generation time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    /// Out-of-bounds sentinel, never stored in a grid.
    Invalid,
    Empty,
    Mine,
    Number,
}

impl Default for CellKind {
    fn default() -> Self {
        Self::Empty
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub position: Coord2,
    pub kind: CellKind,
    /// Mines in the Moore neighborhood; 1..=8 for `Number`, 0 for `Empty`.
    pub adjacent_mines: u8,
    pub revealed: bool,
    pub flagged: bool,
    pub exploded: bool,
}

impl Cell {
    pub const fn new(position: Coord2) -> Self {
        Self {
            position,
            kind: CellKind::Empty,
            adjacent_mines: 0,
            revealed: false,
            flagged: false,
            exploded: false,
        }
    }

    /// Sentinel answered for lookups outside the board.
    pub const fn invalid(position: Coord2) -> Self {
        Self {
            kind: CellKind::Invalid,
            ..Self::new(position)
        }
    }

    pub const fn is_valid(&self) -> bool {
        !matches!(self.kind, CellKind::Invalid)
    }

    pub const fn is_mine(&self) -> bool {
        matches!(self.kind, CellKind::Mine)
    }

    /// Hidden and unflagged, so a reveal would act on it.
    pub const fn is_revealable(&self) -> bool {
        self.is_valid() && !self.revealed && !self.flagged
    }

    pub(crate) fn set_adjacent_mines(&mut self, count: u8) {
        self.adjacent_mines = count;
        self.kind = if count > 0 {
            CellKind::Number
        } else {
            CellKind::Empty
        };
    }
}
