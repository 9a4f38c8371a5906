use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Owned, read-only copy of a game for renderers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: Coord2,
    pub state: GameState,
    pub mine_count: CellCount,
    pub flagged_mine_count: CellCount,
    pub mines_left: isize,
    pub cells: Vec<Cell>,
}

impl Snapshot {
    pub fn from_game(game: &Game) -> Self {
        Self {
            size: game.size(),
            state: game.state(),
            mine_count: game.mine_count(),
            flagged_mine_count: game.flagged_mine_count(),
            mines_left: game.mines_left(),
            cells: game.cells().copied().collect(),
        }
    }

    /// The cell at `coords`, or an `Invalid` sentinel when off the board.
    ///
    /// Cells are laid out column by column, as [`Grid::cells`] yields them.
    pub fn cell_at(&self, coords: Coord2) -> Cell {
        if !in_bounds(coords, self.size) {
            return Cell::invalid(coords);
        }
        let index = coords.0 as usize * self.size.1 as usize + coords.1 as usize;
        self.cells
            .get(index)
            .copied()
            .unwrap_or(Cell::invalid(coords))
    }

    pub fn validate(&self) -> Result<()> {
        let config = GameConfig::new(self.size, self.mine_count)?;
        if self.cells.len() != config.total_cells() as usize {
            return Err(ConfigProblem::CellCountMismatch {
                expected: config.total_cells(),
                actual: self.cells.len() as CellCount,
            }
            .into());
        }
        Ok(())
    }
}

impl From<&Game> for Snapshot {
    fn from(game: &Game) -> Self {
        Self::from_game(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn game(size: Coord2, mines: &[Coord2]) -> Game {
        Game::from_grid(Grid::from_mine_coords(size, mines).unwrap())
    }

    #[test]
    fn from_game_copies_cell_state() {
        let mut game = game((2, 2), &[(0, 0)]);
        game.reveal((1, 1));
        game.toggle_flag((0, 0));

        let snapshot = Snapshot::from_game(&game);

        assert_eq!(snapshot.size, (2, 2));
        assert_eq!(snapshot.state, GameState::Playing);
        assert_eq!(snapshot.cells.len(), 4);
        assert_eq!(snapshot.flagged_mine_count, 1);
        assert_eq!(snapshot.mines_left, 0);

        let opened = snapshot.cell_at((1, 1));
        assert!(opened.revealed);
        assert_eq!(opened.kind, CellKind::Number);
        assert_eq!(opened.adjacent_mines, 1);
        assert!(snapshot.cell_at((0, 0)).flagged);
        assert_eq!(snapshot.cell_at((2, 0)).kind, CellKind::Invalid);
        assert!(snapshot.validate().is_ok());
    }

    #[test]
    fn cell_at_matches_the_game_everywhere() {
        let mut game = game((4, 3), &[(3, 2), (0, 2)]);
        game.reveal((0, 0));
        game.toggle_flag((3, 2));
        let snapshot = Snapshot::from_game(&game);

        for x in -1..=4 {
            for y in -1..=3 {
                assert_eq!(snapshot.cell_at((x, y)), game.cell_at((x, y)));
            }
        }
    }

    #[test]
    fn cell_at_tolerates_short_cell_list() {
        let snapshot = Snapshot {
            size: (2, 2),
            state: GameState::Playing,
            mine_count: 0,
            flagged_mine_count: 0,
            mines_left: 0,
            cells: vec![Cell::new((0, 0))],
        };

        assert_eq!(snapshot.cell_at((0, 0)), Cell::new((0, 0)));
        assert_eq!(snapshot.cell_at((1, 1)).kind, CellKind::Invalid);
    }

    #[test]
    fn snapshot_is_detached_from_the_game() {
        let mut game = game((3, 1), &[(2, 0)]);
        let snapshot = Snapshot::from(&game);

        game.reveal((0, 0));

        assert!(!snapshot.cell_at((0, 0)).revealed);
    }

    #[test]
    fn validate_rejects_cell_count_mismatch() {
        let snapshot = Snapshot {
            size: (2, 2),
            state: GameState::Playing,
            mine_count: 1,
            flagged_mine_count: 0,
            mines_left: 1,
            cells: vec![Cell::new((0, 0))],
        };

        assert_eq!(
            snapshot.validate(),
            Err(GameError::InvalidConfiguration(
                ConfigProblem::CellCountMismatch {
                    expected: 4,
                    actual: 1
                }
            ))
        );
    }

    #[test]
    fn serializes_for_renderers() {
        let mut game = game((2, 1), &[(1, 0)]);
        game.reveal((1, 0));

        let json = serde_json::to_value(Snapshot::from_game(&game)).unwrap();

        assert_eq!(json["state"], "Lost");
        assert_eq!(json["size"], serde_json::json!([2, 1]));
        assert_eq!(json["cells"][1]["kind"], "Mine");
        assert_eq!(json["cells"][1]["exploded"], true);
        assert_eq!(json["cells"][0]["revealed"], false);
    }
}
