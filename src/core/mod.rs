//! Core engine types: RNG, ordered container, errors, configuration.
//!
//! These are the building blocks every other module leans on. None of
//! them know about tiles or symbols.

pub mod rng;
pub mod ordered;
pub mod error;
pub mod config;

pub use rng::GameRng;
pub use ordered::OrderedContainer;
pub use error::{DataSourceError, KanamemoError, Result};
pub use config::{GameConfig, DEFAULT_COLLECTION};
