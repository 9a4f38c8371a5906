use core::ops::Index;
use ndarray::Array2;
use serde::Serialize;

use crate::*;

/// The board: every cell of one game plus the mine bookkeeping.
///
/// Only [`Game`] mutates a grid once it is generated; everyone else gets a
/// shared reference or a [`Snapshot`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Grid {
    cells: Array2<Cell>,
    mine_count: CellCount,
    flagged_mine_count: CellCount,
}

impl Grid {
    /// All-empty board; callers must keep `size` positive.
    pub(crate) fn empty(size: Coord2) -> Self {
        let cells = Array2::from_shape_fn(size.to_nd_index(), |(x, y)| {
            Cell::new((x as Coord, y as Coord))
        });
        Self {
            cells,
            mine_count: 0,
            flagged_mine_count: 0,
        }
    }

    /// Builds a numbered board with mines exactly at `mine_coords`.
    ///
    /// Repeated coordinates count once.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        GameConfig::new(size, 0)?;

        let mut grid = Self::empty(size);
        for &coords in mine_coords {
            if !grid.contains(coords) {
                return Err(GameError::InvalidCoords(coords));
            }
            grid.place_mine(coords);
        }
        grid.number_cells();
        Ok(grid)
    }

    /// Turns the cell at `coords` into a mine, returning `false` if it
    /// already was one.
    pub(crate) fn place_mine(&mut self, coords: Coord2) -> bool {
        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.is_mine() {
            return false;
        }
        cell.kind = CellKind::Mine;
        self.mine_count += 1;
        true
    }

    /// Classifies every non-mine cell as `Number` or `Empty` from its
    /// Moore neighborhood. Runs over the whole board before any reveal.
    pub(crate) fn number_cells(&mut self) {
        let (width, height) = self.size();
        for x in 0..width {
            for y in 0..height {
                if self[(x, y)].is_mine() {
                    continue;
                }
                let count = self.adjacent_mine_count((x, y));
                self.cells[(x, y).to_nd_index()].set_adjacent_mines(count);
            }
        }
    }

    pub fn size(&self) -> Coord2 {
        let (width, height) = self.cells.dim();
        (width as Coord, height as Coord)
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    pub fn height(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    /// Cells that are both flagged and mines, as of the last flag toggle.
    pub fn flagged_mine_count(&self) -> CellCount {
        self.flagged_mine_count
    }

    /// Every flag on the board, right or wrong.
    pub fn flag_count(&self) -> CellCount {
        self.count_cells(|cell| cell.flagged)
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        in_bounds(coords, self.size())
    }

    /// The cell at `coords`, or an `Invalid` sentinel when off the board.
    pub fn cell_at(&self, coords: Coord2) -> Cell {
        if self.contains(coords) {
            self[coords]
        } else {
            Cell::invalid(coords)
        }
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> Option<&mut Cell> {
        if self.contains(coords) {
            Some(&mut self.cells[coords.to_nd_index()])
        } else {
            None
        }
    }

    /// All cells, column by column.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    pub fn count_cells(&self, predicate: impl Fn(&Cell) -> bool) -> CellCount {
        self.cells.iter().filter(|cell| predicate(cell)).count() as CellCount
    }

    pub fn neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::moore(coords, self.size())
    }

    pub fn orthogonal_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::orthogonal(coords, self.size())
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.neighbors(coords)
            .filter(|&pos| self.cell_at(pos).is_mine())
            .count() as u8
    }

    /// Full-board recount of correctly flagged mines.
    pub(crate) fn recount_flagged_mines(&mut self) {
        self.flagged_mine_count = self.count_cells(|cell| cell.flagged && cell.is_mine());
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_mine_numbers_every_neighbor() {
        let grid = Grid::from_mine_coords((3, 3), &[(1, 1)]).unwrap();

        assert_eq!(grid.mine_count(), 1);
        for cell in grid.cells().filter(|cell| !cell.is_mine()) {
            assert_eq!(cell.kind, CellKind::Number);
            assert_eq!(cell.adjacent_mines, 1);
        }
    }

    #[test]
    fn far_cells_stay_empty() {
        let grid = Grid::from_mine_coords((4, 1), &[(0, 0)]).unwrap();

        assert_eq!(grid[(1, 0)].kind, CellKind::Number);
        assert_eq!(grid[(2, 0)].kind, CellKind::Empty);
        assert_eq!(grid[(3, 0)].adjacent_mines, 0);
    }

    #[test]
    fn duplicate_mine_coords_count_once() {
        let grid = Grid::from_mine_coords((2, 2), &[(0, 0), (0, 0)]).unwrap();

        assert_eq!(grid.mine_count(), 1);
        assert_eq!(grid.game_config(), GameConfig::new((2, 2), 1).unwrap());
    }

    #[test]
    fn out_of_range_mine_coords_are_rejected() {
        assert_eq!(
            Grid::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::InvalidCoords((2, 0)))
        );
    }

    #[test]
    fn cell_at_answers_sentinel_off_board() {
        let grid = Grid::from_mine_coords((2, 3), &[]).unwrap();

        assert_eq!((grid.width(), grid.height()), (2, 3));
        assert_eq!(grid.cell_at((1, 2)).position, (1, 2));
        assert_eq!(grid.cell_at((2, 0)).kind, CellKind::Invalid);
        assert_eq!(grid.cell_at((-1, -1)).kind, CellKind::Invalid);
        assert_eq!(grid.total_cells(), 6);
    }

    #[test]
    fn positions_match_storage_index() {
        let grid = Grid::from_mine_coords((3, 2), &[]).unwrap();

        for x in 0..3 {
            for y in 0..2 {
                assert_eq!(grid[(x, y)].position, (x, y));
            }
        }
    }

    #[test]
    fn eight_surrounding_mines_give_eight() {
        let mines = [
            (0, 0),
            (1, 0),
            (2, 0),
            (0, 1),
            (2, 1),
            (0, 2),
            (1, 2),
            (2, 2),
        ];
        let grid = Grid::from_mine_coords((3, 3), &mines).unwrap();

        assert_eq!(grid[(1, 1)].adjacent_mines, 8);
        assert_eq!(grid.safe_cell_count(), 1);
    }
}
