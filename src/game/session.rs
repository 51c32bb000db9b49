//! A game session: one collection, one grid, many rounds.

use tracing::info;

use crate::board::{Grid, Tile, TileId};
use crate::core::{GameConfig, GameRng, KanamemoError, Result};
use crate::rules::{MatchEngine, NullRenderer, Renderer, RevealOutcome};
use crate::symbols::{DataSource, SymbolGroupCollection, DEFAULT_ARITY};

/// A running memory game.
///
/// Owns the symbol collection, the grid, the match engine, the RNG and the
/// renderer. Reveal events carry only a tile ID; the game looks the tile up
/// and applies the rules.
pub struct Game<R: Renderer = NullRenderer> {
    groups: SymbolGroupCollection,
    grid: Grid,
    engine: MatchEngine,
    rng: GameRng,
    renderer: R,
    round: u32,
}

/// Builder for creating a [`Game`].
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing config. Its `collection` is not used here.
    pub fn from_config(config: &GameConfig) -> Self {
        Self { config: config.clone() }
    }

    pub fn dimensions(mut self, rows: usize, columns: usize) -> Self {
        self.config.rows = rows;
        self.config.columns = columns;
        self
    }

    pub fn match_size(mut self, tiles: usize) -> Self {
        self.config.tiles_needed_for_match = tiles;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Build the game and deal its first round.
    pub fn build<R: Renderer>(self, groups: SymbolGroupCollection, renderer: R) -> Result<Game<R>> {
        self.config.validate()?;

        let rng = match self.config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        let mut game = Game {
            groups,
            grid: Grid::new(self.config.rows, self.config.columns)?,
            engine: MatchEngine::new(self.config.tiles_needed_for_match)?,
            rng,
            renderer,
            round: 0,
        };
        game.new_round()?;
        Ok(game)
    }
}

impl<R: Renderer> Game<R> {
    /// Load the configured collection from `source` and build a game.
    ///
    /// A failed load is returned as-is and no game is created.
    pub fn from_config(config: &GameConfig, source: &dyn DataSource, renderer: R) -> Result<Self> {
        let groups = SymbolGroupCollection::load(source, &config.collection, DEFAULT_ARITY)?;
        GameBuilder::from_config(config).build(groups, renderer)
    }

    /// Deal a fresh round: repopulate the grid and forget face-up tiles.
    ///
    /// If population fails, the previous round stays in play.
    pub fn new_round(&mut self) -> Result<()> {
        let mut round_rng = self.rng.fork();
        self.grid
            .populate(&self.groups, self.engine.tiles_needed_for_match(), &mut round_rng)?;
        self.engine.clear();
        self.round += 1;

        self.renderer.begin_round(&self.grid);
        self.renderer.render_grid(&self.grid);

        info!(
            round = self.round,
            seed = round_rng.seed(),
            rows = self.grid.rows(),
            columns = self.grid.columns(),
            "round started"
        );
        Ok(())
    }

    /// Process a player's reveal of tile `id`.
    pub fn reveal(&mut self, id: TileId) -> Result<RevealOutcome> {
        if !self.grid.is_populated() {
            return Err(KanamemoError::InvalidState("no round in progress".into()));
        }

        let outcome = self.engine.reveal(&mut self.grid, id, &mut self.renderer)?;
        if outcome.is_match() && self.grid.is_complete() {
            info!(round = self.round, "round complete");
        }
        Ok(outcome)
    }

    // === Queries ===

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.grid.tile(id)
    }

    /// Face-up tiles awaiting resolution, oldest first.
    pub fn revealed(&self) -> Vec<TileId> {
        self.engine.revealed().collect()
    }

    pub fn groups(&self) -> &SymbolGroupCollection {
        &self.groups
    }

    pub fn is_complete(&self) -> bool {
        self.grid.is_complete()
    }

    pub fn unmatched_count(&self) -> usize {
        self.grid.unmatched_count()
    }

    /// Rounds dealt so far, starting at 1.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Seed of the game's RNG. Replaying it reproduces every round.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
