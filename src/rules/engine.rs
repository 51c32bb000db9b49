//! Up-tile resolution: deciding matches and mismatches.
//!
//! The engine keeps the face-up tiles in reveal order. Each reveal:
//!
//! 1. Turns the tile up and appends it to the revealed queue.
//! 2. If the queue now holds more than `tiles_needed_for_match` tiles, the
//!    previous move was an unresolved mismatch: every tile except the
//!    newest is turned back down and dequeued.
//! 3. If the queue holds exactly `tiles_needed_for_match` tiles, they are
//!    matched when they all share one group, and otherwise left face up so
//!    the player can study them until the next reveal.
//!
//! Reveals of tiles that are already up or matched change nothing.

use std::collections::VecDeque;

use smallvec::SmallVec;
use tracing::debug;

use super::render::{ClickHandler, Renderer};
use crate::board::{Grid, TileEvent, TileId};
use crate::core::{KanamemoError, Result};
use crate::symbols::GroupId;

/// Tile IDs touched by one reveal.
pub type TileList = SmallVec<[TileId; 4]>;

/// Result of processing one reveal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The tile was already up or matched; nothing changed.
    Ignored,
    /// The tile is now up and more tiles are needed.
    ///
    /// `hidden` lists tiles of a stale mismatch that were turned back down.
    Pending { hidden: TileList },
    /// The revealed tiles all share `group` and are now matched.
    Matched { group: GroupId, tiles: TileList },
    /// The revealed tiles do not share a group. They stay up until the next reveal.
    Mismatched { tiles: TileList },
}

impl RevealOutcome {
    /// Whether this reveal completed a match.
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, RevealOutcome::Matched { .. })
    }

    /// Whether this reveal left a mismatch face up.
    #[must_use]
    pub fn is_mismatch(&self) -> bool {
        matches!(self, RevealOutcome::Mismatched { .. })
    }
}

/// Tracks face-up tiles and applies the match rules.
#[derive(Clone, Debug)]
pub struct MatchEngine {
    tiles_needed_for_match: usize,
    /// Face-up tiles, oldest first. Never holds matched tiles.
    revealed: VecDeque<TileId>,
}

impl MatchEngine {
    /// Create an engine matching groups of `tiles_needed_for_match` tiles.
    ///
    /// Fails with `Construction` below 2.
    pub fn new(tiles_needed_for_match: usize) -> Result<Self> {
        if tiles_needed_for_match < 2 {
            return Err(KanamemoError::Construction(format!(
                "a match needs at least 2 tiles, got {tiles_needed_for_match}"
            )));
        }
        Ok(Self {
            tiles_needed_for_match,
            revealed: VecDeque::with_capacity(tiles_needed_for_match + 1),
        })
    }

    #[must_use]
    pub fn tiles_needed_for_match(&self) -> usize {
        self.tiles_needed_for_match
    }

    /// Face-up tiles awaiting resolution, oldest first.
    pub fn revealed(&self) -> impl Iterator<Item = TileId> + '_ {
        self.revealed.iter().copied()
    }

    /// Number of face-up tiles awaiting resolution.
    #[must_use]
    pub fn revealed_len(&self) -> usize {
        self.revealed.len()
    }

    /// Forget all face-up tiles, e.g. when a new round starts.
    pub fn clear(&mut self) {
        self.revealed.clear();
    }

    /// Process a reveal of tile `id`.
    ///
    /// Every transition is rendered as it happens. If an error aborts the
    /// pass, transitions applied before it stay applied.
    pub fn reveal<R>(&mut self, grid: &mut Grid, id: TileId, renderer: &mut R) -> Result<RevealOutcome>
    where
        R: Renderer + ?Sized,
    {
        let tile = grid.get_mut(id)?;
        if !tile.apply(TileEvent::Reveal)? {
            debug!(tile = %id, state = tile.state().name(), "reveal ignored");
            return Ok(RevealOutcome::Ignored);
        }
        renderer.render_tile(tile, ClickHandler::for_state(tile.state()));
        self.revealed.push_back(id);
        debug!(tile = %id, symbol = tile.symbol(), revealed = self.revealed.len(), "tile revealed");

        let mut hidden = TileList::new();
        if self.revealed.len() > self.tiles_needed_for_match {
            while self.revealed.len() > 1 {
                let Some(stale) = self.revealed.pop_front() else {
                    break;
                };
                let tile = grid.get_mut(stale)?;
                tile.apply(TileEvent::Hide)?;
                renderer.render_tile(tile, ClickHandler::for_state(tile.state()));
                hidden.push(stale);
            }
            debug!(count = hidden.len(), "stale mismatch turned down");
        }

        if self.revealed.len() < self.tiles_needed_for_match {
            return Ok(RevealOutcome::Pending { hidden });
        }

        let first = grid.get(self.revealed[0])?.group();
        let mut all_same_group = true;
        for &revealed in &self.revealed {
            if grid.get(revealed)?.group() != first {
                all_same_group = false;
                break;
            }
        }

        if !all_same_group {
            let tiles: TileList = self.revealed.iter().copied().collect();
            debug!(?tiles, "mismatch");
            return Ok(RevealOutcome::Mismatched { tiles });
        }

        let tiles: TileList = self.revealed.drain(..).collect();
        for &matched in &tiles {
            let tile = grid.get_mut(matched)?;
            tile.apply(TileEvent::Match)?;
            renderer.render_tile(tile, ClickHandler::for_state(tile.state()));
        }
        debug!(group = %first, ?tiles, "match");
        Ok(RevealOutcome::Matched { group: first, tiles })
    }
}
