//! The tile grid and its population algorithm.
//!
//! ## Population
//!
//! `populate` fills every slot so that each chosen group appears exactly
//! `tiles_per_group` times (2 for a pairs game):
//!
//! 1. Shuffle the pool of slot indices `0..rows * columns`.
//! 2. Shuffle the order in which groups are considered, so a large
//!    collection contributes a different subset each round.
//! 3. For each group, pop `tiles_per_group` slots and place one tile per
//!    slot, each showing a distinct symbol drawn from the group.
//!
//! A collection too small to fill the grid is rejected up front with
//! `Capacity`; the grid is never left partially filled.

use tracing::{debug, warn};

use super::tile::{Tile, TileId};
use crate::core::{GameRng, KanamemoError, OrderedContainer, Result};
use crate::symbols::{GroupId, SymbolGroupCollection};

/// Fixed `rows x columns` array of tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    /// Empty until populated, then exactly `rows * columns` long.
    tiles: Vec<Tile>,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// Fails with `Construction` if either dimension is zero or the slot
    /// count does not fit in a `usize`.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(KanamemoError::Construction(format!(
                "grid must have at least one row and column, got {rows}x{columns}"
            )));
        }
        if rows.checked_mul(columns).is_none() {
            return Err(KanamemoError::Construction(format!(
                "grid of {rows}x{columns} has too many slots"
            )));
        }
        Ok(Self {
            rows,
            columns,
            tiles: Vec::new(),
        })
    }

    /// Create a populated grid from an explicit layout, slot by slot.
    ///
    /// Each entry is the symbol and group for the slot at that position.
    pub fn from_layout<I, S>(rows: usize, columns: usize, layout: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, GroupId)>,
        S: Into<String>,
    {
        let mut grid = Self::new(rows, columns)?;
        let tiles: Vec<Tile> = layout
            .into_iter()
            .enumerate()
            .map(|(slot, (symbol, group))| Tile::new(TileId(slot), symbol, group))
            .collect();

        if tiles.len() != grid.slot_count() {
            return Err(KanamemoError::Construction(format!(
                "layout has {} tiles for {} slots",
                tiles.len(),
                grid.slot_count()
            )));
        }
        grid.tiles = tiles;
        Ok(grid)
    }

    /// Fill every slot with tiles drawn from `groups`.
    ///
    /// Replaces any tiles from a previous round. On error the grid keeps
    /// whatever it held before the call.
    pub fn populate(
        &mut self,
        groups: &SymbolGroupCollection,
        tiles_per_group: usize,
        rng: &mut GameRng,
    ) -> Result<()> {
        let slot_count = self.slot_count();

        if tiles_per_group < 2 {
            return Err(KanamemoError::Construction(format!(
                "a match needs at least 2 tiles, got {tiles_per_group}"
            )));
        }
        if slot_count % tiles_per_group != 0 {
            return Err(KanamemoError::Construction(format!(
                "{slot_count} slots cannot be split into matches of {tiles_per_group}"
            )));
        }

        let needed = slot_count / tiles_per_group;
        if groups.len() < needed {
            warn!(needed, available = groups.len(), "not enough symbol groups for grid");
            return Err(KanamemoError::Capacity {
                needed,
                available: groups.len(),
            });
        }

        let mut slot_pool = OrderedContainer::with_indices(slot_count);
        slot_pool.shuffle(rng);

        let mut group_order = OrderedContainer::with_indices(groups.len());
        group_order.shuffle(rng);

        let mut placed: Vec<Option<Tile>> = vec![None; slot_count];

        for &position in &group_order {
            if slot_pool.len() < tiles_per_group {
                break;
            }
            let Some(group) = groups.at(position) else {
                continue;
            };

            let symbols = group.random_selection(tiles_per_group, rng)?;
            for symbol in symbols {
                let Some(slot) = slot_pool.pop() else {
                    break;
                };
                debug!(slot, group = %group.id(), symbol = %symbol, "placed tile");
                placed[slot] = Some(Tile::new(TileId(slot), symbol, group.id()));
            }
        }

        let tiles = placed
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| KanamemoError::InvalidState("population left a slot empty".into()))?;

        self.tiles = tiles;
        debug!(rows = self.rows, columns = self.columns, groups = needed, "grid populated");
        Ok(())
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of slots.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        // Cannot overflow: checked in `new`
        self.rows * self.columns
    }

    /// Whether the grid holds tiles.
    #[must_use]
    pub fn is_populated(&self) -> bool {
        !self.tiles.is_empty()
    }

    /// All tiles in slot order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tile at a slot, if the grid is populated and the slot exists.
    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index())
    }

    /// Tile at a slot, or `OutOfRange`.
    pub fn get(&self, id: TileId) -> Result<&Tile> {
        self.tiles.get(id.index()).ok_or(KanamemoError::OutOfRange {
            index: id.index(),
            len: self.tiles.len(),
        })
    }

    pub(crate) fn get_mut(&mut self, id: TileId) -> Result<&mut Tile> {
        let len = self.tiles.len();
        self.tiles
            .get_mut(id.index())
            .ok_or(KanamemoError::OutOfRange { index: id.index(), len })
    }

    /// `(row, column)` of a slot.
    #[must_use]
    pub fn position(&self, id: TileId) -> Option<(usize, usize)> {
        (id.index() < self.slot_count()).then(|| (id.index() / self.columns, id.index() % self.columns))
    }

    /// Slot at `(row, column)`.
    #[must_use]
    pub fn id_at(&self, row: usize, column: usize) -> Option<TileId> {
        (row < self.rows && column < self.columns).then(|| TileId(row * self.columns + column))
    }

    /// Tiles belonging to a group.
    pub fn tiles_in_group(&self, group: GroupId) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(move |t| t.group() == group)
    }

    /// Other tiles that complete a match with `id`.
    pub fn partners_of(&self, id: TileId) -> impl Iterator<Item = &Tile> {
        let group = self.tile(id).map(Tile::group);
        self.tiles
            .iter()
            .filter(move |t| t.id() != id && Some(t.group()) == group)
    }

    /// Number of tiles not yet matched.
    #[must_use]
    pub fn unmatched_count(&self) -> usize {
        self.tiles.iter().filter(|t| !t.is_matched()).count()
    }

    /// True once every tile is matched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_populated() && self.unmatched_count() == 0
    }
}
