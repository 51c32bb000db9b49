//! External symbol collection sources.
//!
//! A collection is a JSON document of the form
//! `{ "sets": [["a", "あ", "ア"], ["i", "い", "イ"], ...] }`, one symbol group
//! per inner array. Sources fetch documents by identifier; failures are
//! returned unchanged and never retried.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::core::DataSourceError;

const HIRAGANA_JSON: &str = include_str!("../../data/hiragana.json");

/// Serialized form of a symbol collection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionDocument {
    /// One entry per symbol group.
    pub sets: Vec<Vec<String>>,
}

impl CollectionDocument {
    /// Parse a document from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, DataSourceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a document from in-memory sets.
    pub fn from_sets<I, S, T>(sets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            sets: sets
                .into_iter()
                .map(|set| set.into_iter().map(Into::into).collect())
                .collect(),
        }
    }
}

/// Something that can yield a collection document by identifier.
pub trait DataSource {
    /// Fetch and parse the collection named `collection_id`.
    fn load(&self, collection_id: &str) -> Result<CollectionDocument, DataSourceError>;
}

/// Reads `<root>/<collection_id>.json` from disk.
#[derive(Clone, Debug)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Create a source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory collections are read from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, collection_id: &str) -> PathBuf {
        self.root.join(format!("{collection_id}.json"))
    }
}

impl DataSource for DirectorySource {
    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn load(&self, collection_id: &str) -> Result<CollectionDocument, DataSourceError> {
        let path = self.path_for(collection_id);
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(DataSourceError::NotFound(collection_id.to_string()));
            }
            Err(source) => return Err(DataSourceError::Io { path, source }),
        };
        debug!(bytes = text.len(), "read collection file");
        CollectionDocument::from_json_str(&text)
    }
}

/// Holds collections in memory, keyed by identifier.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    documents: FxHashMap<String, CollectionDocument>,
}

impl MemorySource {
    /// Create an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a collection.
    pub fn insert(&mut self, collection_id: impl Into<String>, document: CollectionDocument) {
        self.documents.insert(collection_id.into(), document);
    }

    /// Add a collection from JSON text.
    pub fn insert_json(&mut self, collection_id: impl Into<String>, json: &str) -> Result<(), DataSourceError> {
        let document = CollectionDocument::from_json_str(json)?;
        self.insert(collection_id, document);
        Ok(())
    }

    /// Builder form of [`MemorySource::insert`].
    #[must_use]
    pub fn with(mut self, collection_id: impl Into<String>, document: CollectionDocument) -> Self {
        self.insert(collection_id, document);
        self
    }

    /// Identifiers of every stored collection.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }
}

impl DataSource for MemorySource {
    fn load(&self, collection_id: &str) -> Result<CollectionDocument, DataSourceError> {
        self.documents
            .get(collection_id)
            .cloned()
            .ok_or_else(|| DataSourceError::NotFound(collection_id.to_string()))
    }
}

/// A source holding the collections bundled with the crate.
///
/// Currently `hiragana`: the 46 basic kana as (romaji, hiragana, katakana).
pub fn builtin_source() -> Result<MemorySource, DataSourceError> {
    let mut source = MemorySource::new();
    source.insert_json(crate::core::DEFAULT_COLLECTION, HIRAGANA_JSON)?;
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document() {
        let doc = CollectionDocument::from_json_str(r#"{ "sets": [["a", "あ", "ア"], ["i", "い", "イ"]] }"#).unwrap();
        assert_eq!(doc.sets.len(), 2);
        assert_eq!(doc.sets[1], vec!["i", "い", "イ"]);
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        assert!(matches!(
            CollectionDocument::from_json_str(r#"{ "groups": [] }"#),
            Err(DataSourceError::Parse(_))
        ));
        assert!(matches!(
            CollectionDocument::from_json_str(r#"{ "sets": [[1, 2, 3]] }"#),
            Err(DataSourceError::Parse(_))
        ));
    }

    #[test]
    fn test_memory_source() {
        let source = MemorySource::new().with("tiny", CollectionDocument::from_sets([["a", "あ", "ア"]]));

        assert_eq!(source.load("tiny").unwrap().sets.len(), 1);
        assert!(matches!(source.load("missing"), Err(DataSourceError::NotFound(id)) if id == "missing"));
        assert_eq!(source.ids().collect::<Vec<_>>(), vec!["tiny"]);
    }

    #[test]
    fn test_builtin_hiragana() {
        let source = builtin_source().unwrap();
        let doc = source.load("hiragana").unwrap();

        assert_eq!(doc.sets.len(), 46);
        assert!(doc.sets.iter().all(|set| set.len() == 3));
        assert_eq!(doc.sets[0], vec!["a", "あ", "ア"]);
    }
}
