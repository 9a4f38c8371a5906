use crate::*;

/// Owner of the current game for an embedding layer.
///
/// Starts in [`GameState::Setup`] with no board. A new game replaces the
/// previous one wholesale and returning to setup drops it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    game: Option<Game>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_game(
        &mut self,
        width: Coord,
        height: Coord,
        mine_count: CellCount,
        seed: u64,
    ) -> Result<&Game> {
        let config = GameConfig::new((width, height), mine_count)?;
        self.start(config, RandomMinefieldGenerator::new(seed))
    }

    /// Starts a game from any generator; on error the current game is kept.
    pub fn start(
        &mut self,
        config: GameConfig,
        generator: impl MinefieldGenerator,
    ) -> Result<&Game> {
        let game = Game::new(config, generator)?;
        Ok(&*self.game.insert(game))
    }

    pub fn return_to_setup(&mut self) {
        if self.game.take().is_some() {
            log::debug!("Game discarded, back to setup");
        }
    }

    pub fn state(&self) -> GameState {
        self.game.as_ref().map_or(GameState::Setup, Game::state)
    }

    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    pub fn reveal(&mut self, coords: Coord2) -> Outcome {
        self.game
            .as_mut()
            .map_or(Outcome::Ongoing, |game| game.reveal(coords))
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        self.game
            .as_mut()
            .map_or(MarkOutcome::NoChange, |game| game.toggle_flag(coords))
    }

    pub fn snapshot(&self) -> Option<Snapshot> {
        self.game.as_ref().map(Snapshot::from_game)
    }
}
