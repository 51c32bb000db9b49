//! The game object the host application owns.
//!
//! A `Game` ties a symbol collection, a grid and the match rules together
//! and is driven one reveal at a time. Hosts create exactly one through
//! `GameBuilder` or `Game::from_config`, deal rounds with `new_round` and
//! forward player clicks to `reveal`.

mod session;

pub use session::{Game, GameBuilder};
