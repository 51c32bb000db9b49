//! Tiles and their state machine.
//!
//! A tile is one grid cell: a symbol, the group it belongs to, and a
//! lifecycle state.
//!
//! ## Lifecycle
//!
//! ```text
//!          Reveal          Match
//!   Down ---------> Up -----------> Matched
//!     ^             |
//!     +-------------+
//!          Hide
//! ```
//!
//! `Matched` is terminal. Revealing a tile that is already `Up` or
//! `Matched` is a no-op, not an error.

use serde::{Deserialize, Serialize};

use crate::core::{KanamemoError, Result};
use crate::symbols::GroupId;

/// Position of a tile in its grid, `0..rows * columns`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub usize);

impl TileId {
    /// Create a tile ID from a slot index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The slot index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for TileId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Lifecycle state of a tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileState {
    /// Symbol hidden. Initial state.
    #[default]
    Down,
    /// Symbol revealed, waiting for resolution.
    Up,
    /// Part of a completed match. Terminal.
    Matched,
}

/// Something that can happen to a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileEvent {
    /// Player turns the tile over.
    Reveal,
    /// The tile completed a match.
    Match,
    /// The tile was part of a mismatch and is turned back down.
    Hide,
}

impl TileState {
    /// Compute the state reached by applying `event`.
    ///
    /// Returns `Ok(None)` when the event is ignored in this state, and
    /// `InvalidState` when the event is illegal here.
    pub fn transition(self, event: TileEvent) -> Result<Option<TileState>> {
        match (self, event) {
            (TileState::Down, TileEvent::Reveal) => Ok(Some(TileState::Up)),
            (TileState::Up | TileState::Matched, TileEvent::Reveal) => Ok(None),
            (TileState::Up, TileEvent::Match) => Ok(Some(TileState::Matched)),
            (TileState::Up, TileEvent::Hide) => Ok(Some(TileState::Down)),
            (state, event) => Err(KanamemoError::InvalidState(format!(
                "cannot apply {event:?} to a tile that is {state:?}"
            ))),
        }
    }

    /// Short lowercase name, for logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            TileState::Down => "down",
            TileState::Up => "up",
            TileState::Matched => "matched",
        }
    }
}

/// A single grid cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    id: TileId,
    symbol: String,
    /// Owning group. Only used for identity comparisons.
    group: GroupId,
    state: TileState,
}

impl Tile {
    /// Create a face-down tile.
    pub fn new(id: TileId, symbol: impl Into<String>, group: GroupId) -> Self {
        Self {
            id,
            symbol: symbol.into(),
            group,
            state: TileState::Down,
        }
    }

    /// The tile's slot.
    #[must_use]
    pub fn id(&self) -> TileId {
        self.id
    }

    /// The symbol shown when the tile is up.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The group this tile's symbol came from.
    #[must_use]
    pub fn group(&self) -> GroupId {
        self.group
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> TileState {
        self.state
    }

    #[must_use]
    pub fn is_down(&self) -> bool {
        self.state == TileState::Down
    }

    #[must_use]
    pub fn is_up(&self) -> bool {
        self.state == TileState::Up
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.state == TileState::Matched
    }

    /// True if both tiles came from the same group, whatever symbols they show.
    #[must_use]
    pub fn is_in_same_group_as(&self, other: &Tile) -> bool {
        self.group == other.group
    }

    /// Apply an event. Returns whether the state changed.
    pub fn apply(&mut self, event: TileEvent) -> Result<bool> {
        match self.state.transition(event)? {
            Some(next) => {
                self.state = next;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
