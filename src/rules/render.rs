//! Rendering collaborator interface.
//!
//! The engine never draws anything itself. After every tile transition it
//! hands the tile, together with the click behaviour for its new state, to
//! a `Renderer`. What the renderer does with it is its own business.

use std::fmt::Write as _;

use crate::board::{Grid, Tile, TileState};

/// What a click on a tile should do, given its state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClickHandler {
    /// Face-down tile: clicking reveals it.
    Reveal,
    /// Face-up tile: clicking does nothing.
    AlreadyRevealed,
    /// Matched tile: clicking does nothing.
    Inert,
}

impl ClickHandler {
    /// Select the handler for a tile state.
    #[must_use]
    pub const fn for_state(state: TileState) -> Self {
        match state {
            TileState::Down => ClickHandler::Reveal,
            TileState::Up => ClickHandler::AlreadyRevealed,
            TileState::Matched => ClickHandler::Inert,
        }
    }

    /// Whether a click should be forwarded to the engine as a reveal.
    #[must_use]
    pub const fn reveals(self) -> bool {
        matches!(self, ClickHandler::Reveal)
    }
}

/// Draws tiles and binds their click handlers.
pub trait Renderer {
    /// Called once when a round starts, before any tile is rendered.
    fn begin_round(&mut self, _grid: &Grid) {}

    /// Draw a tile in its current state and bind `handler` to it.
    fn render_tile(&mut self, tile: &Tile, handler: ClickHandler);

    /// Draw every tile of the grid.
    fn render_grid(&mut self, grid: &Grid) {
        for tile in grid.tiles() {
            self.render_tile(tile, ClickHandler::for_state(tile.state()));
        }
    }
}

/// A renderer that draws nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render_tile(&mut self, _tile: &Tile, _handler: ClickHandler) {}
}

/// Renders the grid as plain text, one line per row.
///
/// Face-down tiles show their slot number so a player can name them,
/// face-up tiles show their symbol, matched tiles show it in parentheses.
#[derive(Clone, Debug, Default)]
pub struct TextRenderer {
    columns: usize,
    cells: Vec<String>,
}

impl TextRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of one cell.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }

    /// The whole grid as text.
    #[must_use]
    pub fn frame(&self) -> String {
        let mut out = String::new();
        if self.columns == 0 {
            return out;
        }
        for row in self.cells.chunks(self.columns) {
            let line: Vec<&str> = row.iter().map(String::as_str).collect();
            let _ = writeln!(out, "{}", line.join(" "));
        }
        out
    }

    fn cell_text(tile: &Tile) -> String {
        match tile.state() {
            TileState::Down => format!("[{:>3}]", tile.id().index()),
            TileState::Up => format!("  {}  ", tile.symbol()),
            TileState::Matched => format!(" ({}) ", tile.symbol()),
        }
    }
}

impl Renderer for TextRenderer {
    fn begin_round(&mut self, grid: &Grid) {
        self.columns = grid.columns();
        self.cells = vec![String::new(); grid.slot_count()];
    }

    fn render_tile(&mut self, tile: &Tile, _handler: ClickHandler) {
        if let Some(cell) = self.cells.get_mut(tile.id().index()) {
            *cell = Self::cell_text(tile);
        }
    }
}
