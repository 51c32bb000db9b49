//! Symbol groups and where they come from.
//!
//! - `group`: an immutable set of interchangeable symbols
//! - `collection`: the ordered groups for one game
//! - `source`: external collection loaders and the JSON document model

pub mod group;
pub mod collection;
pub mod source;

pub use group::{GroupId, SymbolGroup};
pub use collection::{SymbolGroupCollection, DEFAULT_ARITY};
pub use source::{builtin_source, CollectionDocument, DataSource, DirectorySource, MemorySource};
