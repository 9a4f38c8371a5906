use alloc::vec::Vec;

use super::*;

/// Places mines at known coordinates, for replays, puzzles and tests.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMinefieldGenerator {
    mines: Vec<Coord2>,
}

impl FixedMinefieldGenerator {
    pub fn new(mines: impl Into<Vec<Coord2>>) -> Self {
        Self {
            mines: mines.into(),
        }
    }
}

impl MinefieldGenerator for FixedMinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<Grid> {
        let grid = Grid::from_mine_coords(config.size, &self.mines)?;

        if grid.mine_count() != config.mines {
            log::warn!(
                "Fixed minefield count mismatch, actual: {}, requested: {}",
                grid.mine_count(),
                config.mines
            );
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mines_land_where_asked() {
        let config = GameConfig::new((3, 3), 1).unwrap();
        let grid = FixedMinefieldGenerator::new([(1, 1)])
            .generate(config)
            .unwrap();

        assert!(grid[(1, 1)].is_mine());
        assert_eq!(grid.mine_count(), 1);
    }

    #[test]
    fn layout_count_wins_over_config() {
        let config = GameConfig::new((3, 3), 4).unwrap();
        let grid = FixedMinefieldGenerator::new([(0, 0), (2, 2)])
            .generate(config)
            .unwrap();

        assert_eq!(grid.mine_count(), 2);
    }

    #[test]
    fn rejects_off_board_mine() {
        let config = GameConfig::new((3, 3), 1).unwrap();

        assert_eq!(
            FixedMinefieldGenerator::new([(3, 1)]).generate(config),
            Err(GameError::InvalidCoords((3, 1)))
        );
    }
}
