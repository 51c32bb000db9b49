//! Error types for the game engine.
//!
//! Every error is local to the operation that raised it. Nothing is retried:
//! a failed collection load prevents the game from starting, and a failed
//! reveal aborts that pass while keeping the transitions already applied.

use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, KanamemoError>;

/// Errors raised by the engine.
#[derive(Debug, Error)]
pub enum KanamemoError {
    /// Malformed input to a container, group, grid or config constructor.
    #[error("construction error: {0}")]
    Construction(String),

    /// The symbol collection could not be fetched or parsed.
    #[error(transparent)]
    DataSource(#[from] DataSourceError),

    /// Not enough symbol groups to fill every slot of the grid.
    #[error("grid needs {needed} symbol groups but only {available} are available")]
    Capacity {
        /// Groups the grid needs.
        needed: usize,
        /// Groups the collection supplies.
        available: usize,
    },

    /// A positional operation received an index outside the sequence.
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the sequence.
        len: usize,
    },

    /// An operation was attempted in a state that does not allow it.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

/// Failures of the external symbol collection source.
#[derive(Debug, Error)]
pub enum DataSourceError {
    /// No collection with this identifier exists.
    #[error("collection not found: {0}")]
    NotFound(String),

    /// The collection exists but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The collection is not a valid `{ "sets": [...] }` document.
    #[error("failed to parse collection: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_message() {
        let err = KanamemoError::Capacity { needed: 8, available: 3 };
        assert_eq!(err.to_string(), "grid needs 8 symbol groups but only 3 are available");
    }

    #[test]
    fn test_data_source_is_transparent() {
        let err: KanamemoError = DataSourceError::NotFound("katakana".into()).into();
        assert_eq!(err.to_string(), "collection not found: katakana");
        assert!(matches!(err, KanamemoError::DataSource(DataSourceError::NotFound(_))));
    }

    #[test]
    fn test_parse_error_converts() {
        let parse = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let err: KanamemoError = DataSourceError::from(parse).into();
        assert!(err.to_string().starts_with("failed to parse collection"));
    }
}
