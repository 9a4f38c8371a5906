use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// No board yet, e.g. while a menu is up.
    Setup,
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    pub const fn outcome(self) -> Outcome {
        match self {
            Self::Setup | Self::Playing => Outcome::Ongoing,
            Self::Won => Outcome::Won,
            Self::Lost => Outcome::Lost,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Setup
    }
}

/// One game in progress: the grid plus the rules that mutate it.
///
/// Not deserializable: a game is only rebuilt through [`Game::from_grid`],
/// which recounts the hidden safe cells.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Game {
    grid: Grid,
    hidden_safe_count: CellCount,
    state: GameState,
    exploded_at: Option<Coord2>,
}

impl Game {
    pub fn new(config: GameConfig, generator: impl MinefieldGenerator) -> Result<Self> {
        let grid = generator.generate(config)?;
        log::debug!(
            "New game on {:?} board with {} mines",
            grid.size(),
            grid.mine_count()
        );
        Ok(Self::from_grid(grid))
    }

    pub fn random(config: GameConfig, seed: u64) -> Result<Self> {
        Self::new(config, RandomMinefieldGenerator::new(seed))
    }

    pub fn from_grid(grid: Grid) -> Self {
        let hidden_safe_count = grid.count_cells(|cell| !cell.is_mine() && !cell.revealed);
        Self {
            grid,
            hidden_safe_count,
            state: GameState::Playing,
            exploded_at: None,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn mine_count(&self) -> CellCount {
        self.grid.mine_count()
    }

    /// Correctly flagged mines as of the last toggle; not refreshed when a
    /// win flags the remaining mines.
    pub fn flagged_mine_count(&self) -> CellCount {
        self.grid.flagged_mine_count()
    }

    pub fn flag_count(&self) -> CellCount {
        self.grid.flag_count()
    }

    /// Mine count minus flags placed; negative when over-flagged.
    pub fn mines_left(&self) -> isize {
        (self.grid.mine_count() as isize) - (self.grid.flag_count() as isize)
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.grid.cell_at(coords)
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.grid.cells()
    }

    /// The mine that ended the game, if it was lost.
    pub fn exploded_at(&self) -> Option<Coord2> {
        self.exploded_at
    }

    /// Hidden safe cells still to reveal before the game is won.
    pub fn hidden_safe_count(&self) -> CellCount {
        self.hidden_safe_count
    }

    /// Reveals the cell at `coords`.
    ///
    /// Off-board, revealed and flagged cells are left alone, as is every
    /// cell once the game is over; those calls report the standing outcome.
    pub fn reveal(&mut self, coords: Coord2) -> Outcome {
        if self.state.is_finished() {
            return self.outcome();
        }

        let cell = self.grid.cell_at(coords);
        if !cell.is_revealable() {
            return self.outcome();
        }

        match cell.kind {
            CellKind::Mine => {
                self.explode(coords);
                return Outcome::Lost;
            }
            CellKind::Number => self.reveal_cell(coords),
            CellKind::Empty => self.flood(coords),
            CellKind::Invalid => return self.outcome(),
        }

        if self.check_win() {
            Outcome::Won
        } else {
            Outcome::Ongoing
        }
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        if self.state.is_finished() {
            return MarkOutcome::NoChange;
        }

        let Some(cell) = self.grid.cell_mut(coords) else {
            return MarkOutcome::NoChange;
        };
        if cell.revealed {
            return MarkOutcome::NoChange;
        }

        cell.flagged = !cell.flagged;
        self.grid.recount_flagged_mines();
        MarkOutcome::Changed
    }

    fn reveal_cell(&mut self, coords: Coord2) {
        if let Some(cell) = self.grid.cell_mut(coords) {
            cell.revealed = true;
            self.hidden_safe_count -= 1;
        }
    }

    /// Opens the 4-connected `Empty` region around `start` and the `Number`
    /// cells on its border.
    fn flood(&mut self, start: Coord2) {
        let mut to_visit = Vec::from([start]);
        let mut revealed = 0;

        while let Some(coords) = to_visit.pop() {
            let cell = self.grid.cell_at(coords);
            if cell.revealed || !cell.is_valid() || cell.is_mine() {
                continue;
            }

            self.reveal_cell(coords);
            revealed += 1;

            if cell.kind == CellKind::Empty {
                to_visit.extend(self.grid.orthogonal_neighbors(coords).filter(|&pos| {
                    let neighbor = &self.grid[pos];
                    !neighbor.revealed && !neighbor.is_mine()
                }));
            }
        }

        log::debug!("Flood from {start:?} revealed {revealed} cells");
    }

    fn explode(&mut self, coords: Coord2) {
        if let Some(cell) = self.grid.cell_mut(coords) {
            cell.revealed = true;
            cell.exploded = true;
        }
        for cell in self.grid.cells_mut().filter(|cell| cell.is_mine()) {
            cell.revealed = true;
        }

        self.exploded_at = Some(coords);
        self.state = GameState::Lost;
        log::info!("Game lost, mine hit at {coords:?}");
    }

    /// Wins once no safe cell is hidden, flagging every mine for display.
    fn check_win(&mut self) -> bool {
        if self.hidden_safe_count > 0 {
            return false;
        }

        for cell in self.grid.cells_mut().filter(|cell| cell.is_mine()) {
            cell.flagged = true;
        }

        self.state = GameState::Won;
        log::info!("Game won with {} mines", self.grid.mine_count());
        true
    }
}
