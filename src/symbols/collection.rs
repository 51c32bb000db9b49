//! The ordered collection of symbol groups for a game.

use rustc_hash::FxHashSet;
use tracing::{info, warn};

use super::group::{GroupId, SymbolGroup};
use super::source::{CollectionDocument, DataSource};
use crate::core::{GameRng, KanamemoError, OrderedContainer, Result};

/// Symbol variants per group in the standard collections.
pub const DEFAULT_ARITY: usize = 3;

/// Ordered sequence of symbol groups, loaded once per game.
///
/// ## Example
///
/// ```
/// use kanamemo::symbols::{CollectionDocument, SymbolGroupCollection};
///
/// let doc = CollectionDocument::from_sets([["a", "あ", "ア"], ["i", "い", "イ"]]);
/// let groups = SymbolGroupCollection::from_document(&doc, 3).unwrap();
///
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups.iter().next().unwrap().members()[1], "あ");
/// ```
#[derive(Clone, Debug, Default)]
pub struct SymbolGroupCollection {
    groups: OrderedContainer<SymbolGroup>,
}

impl SymbolGroupCollection {
    /// Wrap already-built groups.
    ///
    /// Fails with `Construction` if two groups share an ID.
    pub fn new(groups: Vec<SymbolGroup>) -> Result<Self> {
        let mut seen = FxHashSet::default();
        for group in &groups {
            if !seen.insert(group.id()) {
                return Err(KanamemoError::Construction(format!("duplicate {}", group.id())));
            }
        }
        Ok(Self { groups: groups.into() })
    }

    /// Build groups from a document, one per inner array.
    ///
    /// Groups get IDs in document order. Every array must hold exactly
    /// `arity` symbols.
    pub fn from_document(document: &CollectionDocument, arity: usize) -> Result<Self> {
        if document.sets.is_empty() {
            return Err(KanamemoError::Construction("collection has no symbol sets".into()));
        }

        let groups = document
            .sets
            .iter()
            .enumerate()
            .map(|(index, set)| {
                if set.len() != arity {
                    return Err(KanamemoError::Construction(format!(
                        "set {index} has {} symbols, expected {arity}",
                        set.len()
                    )));
                }
                SymbolGroup::new(GroupId::try_from(index)?, set.iter().cloned())
            })
            .collect::<Result<OrderedContainer<_>>>()?;

        Ok(Self { groups })
    }

    /// Fetch a collection from `source` and build its groups.
    ///
    /// Source failures are propagated as `DataSource` errors.
    pub fn load(source: &dyn DataSource, collection_id: &str, arity: usize) -> Result<Self> {
        let document = source.load(collection_id).map_err(|e| {
            warn!(collection = collection_id, error = %e, "collection load failed");
            KanamemoError::from(e)
        })?;
        let collection = Self::from_document(&document, arity)?;
        info!(collection = collection_id, groups = collection.len(), "loaded symbol collection");
        Ok(collection)
    }

    /// Reorder the groups uniformly at random.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        self.groups.shuffle(rng);
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Group at a position in the current order.
    #[must_use]
    pub fn at(&self, position: usize) -> Option<&SymbolGroup> {
        self.groups.get(position)
    }

    /// Look a group up by identity.
    #[must_use]
    pub fn get(&self, id: GroupId) -> Option<&SymbolGroup> {
        self.groups.iter().find(|g| g.id() == id)
    }

    /// Iterate over groups in the current order.
    pub fn iter(&self) -> std::slice::Iter<'_, SymbolGroup> {
        self.groups.iter()
    }
}

impl<'a> IntoIterator for &'a SymbolGroupCollection {
    type Item = &'a SymbolGroup;
    type IntoIter = std::slice::Iter<'a, SymbolGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DataSourceError;
    use crate::symbols::MemorySource;

    fn two_kana() -> CollectionDocument {
        CollectionDocument::from_sets([["a", "あ", "ア"], ["i", "い", "イ"]])
    }

    #[test]
    fn test_from_document_assigns_ids_in_order() {
        let groups = SymbolGroupCollection::from_document(&two_kana(), 3).unwrap();
        let ids: Vec<_> = groups.iter().map(SymbolGroup::id).collect();
        assert_eq!(ids, vec![GroupId(0), GroupId(1)]);
        assert!(groups.get(GroupId(1)).unwrap().contains("イ"));
        assert!(groups.get(GroupId(2)).is_none());
    }

    #[test]
    fn test_from_document_rejects_wrong_arity() {
        let doc = CollectionDocument::from_sets(vec![vec!["a", "あ", "ア"], vec!["i", "い"]]);
        let err = SymbolGroupCollection::from_document(&doc, 3).unwrap_err();
        assert!(matches!(err, KanamemoError::Construction(msg) if msg.contains("set 1")));
    }

    #[test]
    fn test_from_document_rejects_empty() {
        let err = SymbolGroupCollection::from_document(&CollectionDocument::default(), 3).unwrap_err();
        assert!(matches!(err, KanamemoError::Construction(_)));
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let a = SymbolGroup::new(GroupId(0), ["a", "あ"]).unwrap();
        let b = SymbolGroup::new(GroupId(0), ["i", "い"]).unwrap();
        assert!(SymbolGroupCollection::new(vec![a, b]).is_err());
    }

    #[test]
    fn test_load_propagates_not_found() {
        let source = MemorySource::new();
        let err = SymbolGroupCollection::load(&source, "hiragana", 3).unwrap_err();
        assert!(matches!(err, KanamemoError::DataSource(DataSourceError::NotFound(_))));
    }

    #[test]
    fn test_shuffle_keeps_groups() {
        let doc = CollectionDocument::from_sets((0..12).map(|i| [format!("r{i}"), format!("h{i}"), format!("k{i}")]));
        let mut groups = SymbolGroupCollection::from_document(&doc, 3).unwrap();
        let mut rng = GameRng::new(42);
        groups.shuffle(&mut rng);

        let mut ids: Vec<_> = groups.iter().map(|g| g.id().raw()).collect();
        assert_ne!(ids, (0..12).collect::<Vec<_>>());
        ids.sort_unstable();
        assert_eq!(ids, (0..12).collect::<Vec<_>>());

        // Identity lookup is unaffected by order
        assert!(groups.get(GroupId(5)).unwrap().contains("h5"));
    }
}
