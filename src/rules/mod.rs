//! Match rules and the rendering collaborator.
//!
//! `MatchEngine` decides what a reveal does to the face-up tiles.
//! `Renderer` is the seam to whatever draws them; the engine calls into it
//! after every transition but never interprets the result.

pub mod engine;
pub mod render;

pub use engine::{MatchEngine, RevealOutcome, TileList};
pub use render::{ClickHandler, NullRenderer, Renderer, TextRenderer};
