use ndarray::Array2;

use super::*;

/// Uniformly random placement, reproducible from its seed.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<Grid> {
        use rand::prelude::*;

        let config = config.validate()?;
        let (width, height) = config.size;
        let total_cells = config.total_cells();
        let mut grid = Grid::empty(config.size);

        // nothing to sample on a full board
        if config.mines == total_cells {
            log::warn!("Minefield full, every one of {total_cells} cells is a mine");
            for x in 0..width {
                for y in 0..height {
                    grid.place_mine((x, y));
                }
            }
            return Ok(grid);
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut draw = || (rng.random_range(0..width), rng.random_range(0..height));

        if config.mines <= total_cells / 2 {
            // a repeated draw is discarded and retried
            while grid.mine_count() < config.mines {
                grid.place_mine(draw());
            }
        } else {
            // dense boards: sample the safe cells instead, same distribution
            log::debug!(
                "Dense minefield, sampling {} safe cells out of {total_cells}",
                config.safe_cells()
            );
            let mut safe: Array2<bool> = Array2::default(config.size.to_nd_index());
            let mut safe_placed = 0;
            while safe_placed < config.safe_cells() {
                let slot = &mut safe[draw().to_nd_index()];
                if !*slot {
                    *slot = true;
                    safe_placed += 1;
                }
            }
            for x in 0..width {
                for y in 0..height {
                    if !safe[(x, y).to_nd_index()] {
                        grid.place_mine((x, y));
                    }
                }
            }
        }

        grid.number_cells();
        Ok(grid)
    }
}
