//! # kanamemo
//!
//! A tile-matching memory game engine over kana symbol triples.
//!
//! Every unit of the syllabary comes in three renderings (romaji, hiragana,
//! katakana). The grid is dealt so that each chosen unit appears on two
//! tiles, usually showing different renderings, and the player has to find
//! tiles that mean the same thing rather than tiles that look the same.
//!
//! ## Design Principles
//!
//! 1. **Identity, not text**: Tiles match by the group they were drawn from.
//!    `"a"` and `"ア"` match; two groups that happen to share a symbol don't.
//!
//! 2. **Explicit state machine**: Tiles move Down → Up → Matched (or back
//!    Down after a mismatch) through one transition function.
//!
//! 3. **Collaborators at the edges**: Loading symbol collections and drawing
//!    tiles are traits (`DataSource`, `Renderer`). The core never does I/O
//!    of its own beyond what a source does.
//!
//! 4. **Fail fast**: A collection too small for the grid is an error, never
//!    a half-filled board.
//!
//! ## Modules
//!
//! - `core`: RNG, ordered container, errors, configuration
//! - `symbols`: Symbol groups, collections and their sources
//! - `board`: Tiles and the grid population algorithm
//! - `rules`: Match resolution and the rendering interface
//! - `game`: The game object hosts drive
//!
//! ## Example
//!
//! ```
//! use kanamemo::{GameBuilder, NullRenderer, SymbolGroupCollection, CollectionDocument, TileId};
//!
//! let doc = CollectionDocument::from_sets([["a", "あ", "ア"], ["i", "い", "イ"]]);
//! let groups = SymbolGroupCollection::from_document(&doc, 3).unwrap();
//!
//! let mut game = GameBuilder::new()
//!     .dimensions(1, 4)
//!     .seed(42)
//!     .build(groups, NullRenderer)
//!     .unwrap();
//!
//! let first = TileId(0);
//! let partner = game.grid().partners_of(first).next().unwrap().id();
//!
//! game.reveal(first).unwrap();
//! assert!(game.reveal(partner).unwrap().is_match());
//! assert!(game.revealed().is_empty());
//! ```

pub mod core;
pub mod symbols;
pub mod board;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    GameRng, OrderedContainer,
    KanamemoError, DataSourceError, Result,
    GameConfig,
};

pub use crate::symbols::{
    GroupId, SymbolGroup, SymbolGroupCollection,
    CollectionDocument, DataSource, DirectorySource, MemorySource, builtin_source,
};

pub use crate::board::{Tile, TileEvent, TileId, TileState, Grid};

pub use crate::rules::{
    MatchEngine, RevealOutcome,
    ClickHandler, Renderer, NullRenderer, TextRenderer,
};

pub use crate::game::{Game, GameBuilder};
