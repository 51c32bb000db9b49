//! Game configuration.
//!
//! A `GameConfig` describes one game: grid dimensions, how many tiles
//! make a match, which symbol collection to load and an optional seed.
//! Configs can be built in code, read from JSON, or overlaid from
//! `KANAMEMO_*` environment variables.

use serde::{Deserialize, Serialize};

use super::error::{KanamemoError, Result};

/// Default collection identifier, bundled with the crate.
pub const DEFAULT_COLLECTION: &str = "hiragana";

/// Game configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Grid rows.
    pub rows: usize,

    /// Grid columns.
    pub columns: usize,

    /// Tiles that must share a group to form a match (2 = pairs).
    pub tiles_needed_for_match: usize,

    /// RNG seed. `None` draws a fresh seed per game.
    pub seed: Option<u64>,

    /// Identifier of the symbol collection to load.
    pub collection: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 4,
            columns: 4,
            tiles_needed_for_match: 2,
            seed: None,
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| KanamemoError::Construction(format!("invalid game config: {e}")))
    }

    /// Set grid dimensions.
    #[must_use]
    pub fn with_dimensions(mut self, rows: usize, columns: usize) -> Self {
        self.rows = rows;
        self.columns = columns;
        self
    }

    /// Set the match size.
    #[must_use]
    pub fn with_match_size(mut self, tiles: usize) -> Self {
        self.tiles_needed_for_match = tiles;
        self
    }

    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the collection identifier.
    #[must_use]
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Total number of grid slots, or `None` if it overflows a `usize`.
    #[must_use]
    pub fn slot_count(&self) -> Option<usize> {
        self.rows.checked_mul(self.columns)
    }

    /// Number of groups a full grid uses.
    #[must_use]
    pub fn groups_needed(&self) -> Option<usize> {
        self.slot_count()
            .map(|slots| slots / self.tiles_needed_for_match.max(1))
    }

    /// Check that the grid can be tiled by complete matches.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.columns == 0 {
            return Err(KanamemoError::Construction(format!(
                "grid must have at least one row and column, got {}x{}",
                self.rows, self.columns
            )));
        }
        if self.tiles_needed_for_match < 2 {
            return Err(KanamemoError::Construction(format!(
                "a match needs at least 2 tiles, got {}",
                self.tiles_needed_for_match
            )));
        }
        let slots = self.slot_count().ok_or_else(|| {
            KanamemoError::Construction(format!(
                "grid of {}x{} has too many slots",
                self.rows, self.columns
            ))
        })?;
        if slots % self.tiles_needed_for_match != 0 {
            return Err(KanamemoError::Construction(format!(
                "{slots} slots cannot be split into matches of {}",
                self.tiles_needed_for_match
            )));
        }
        Ok(())
    }

    /// Overlay values from `KANAMEMO_*` environment variables.
    pub fn apply_env(self) -> Result<Self> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Overlay values from an arbitrary variable lookup.
    ///
    /// Recognized keys: `KANAMEMO_ROWS`, `KANAMEMO_COLUMNS`,
    /// `KANAMEMO_MATCH_SIZE`, `KANAMEMO_SEED`, `KANAMEMO_COLLECTION`.
    pub fn apply_env_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(rows) = parse_var(&lookup, "KANAMEMO_ROWS")? {
            self.rows = rows;
        }
        if let Some(columns) = parse_var(&lookup, "KANAMEMO_COLUMNS")? {
            self.columns = columns;
        }
        if let Some(size) = parse_var(&lookup, "KANAMEMO_MATCH_SIZE")? {
            self.tiles_needed_for_match = size;
        }
        if let Some(seed) = parse_var(&lookup, "KANAMEMO_SEED")? {
            self.seed = Some(seed);
        }
        if let Some(collection) = lookup("KANAMEMO_COLLECTION") {
            let trimmed = collection.trim();
            if !trimmed.is_empty() {
                self.collection = trimmed.to_string();
            }
        }
        Ok(self)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| KanamemoError::Construction(format!("{key}={raw:?}: {e}"))),
    }
}
