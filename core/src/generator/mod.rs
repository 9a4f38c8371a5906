use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Strategy that lays out the mines of a new game and numbers the rest.
pub trait MinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<Grid>;
}
