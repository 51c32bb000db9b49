//! Symbol groups: interchangeable renderings of one unit.
//!
//! A group such as `("ka", "か", "カ")` holds symbols that all count as the
//! same thing for matching. Groups are immutable once built.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameRng, KanamemoError, OrderedContainer, Result};

/// Identifier of a group within its collection.
///
/// Tiles compare groups by this identity, never by symbol text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupId(pub u32);

impl GroupId {
    /// Create a new group ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl TryFrom<usize> for GroupId {
    type Error = KanamemoError;

    /// Convert a position in a collection into an ID.
    ///
    /// Fails with `Construction` past `u32::MAX` so that no two groups
    /// share an ID.
    fn try_from(index: usize) -> Result<Self> {
        u32::try_from(index).map(Self).map_err(|_| {
            KanamemoError::Construction(format!("group index {index} does not fit in a group id"))
        })
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Group({})", self.0)
    }
}

/// An immutable set of mutually substitutable symbols.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolGroup {
    id: GroupId,
    /// Symbol variants. Triples are the common case.
    members: SmallVec<[String; 3]>,
}

impl SymbolGroup {
    /// Create a group from its members.
    ///
    /// Fails with `Construction` if `members` is empty.
    pub fn new<I, S>(id: GroupId, members: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let members: SmallVec<[String; 3]> = members.into_iter().map(Into::into).collect();
        if members.is_empty() {
            return Err(KanamemoError::Construction(format!("{id} has no symbols")));
        }
        Ok(Self { id, members })
    }

    /// The group's identity.
    #[must_use]
    pub fn id(&self) -> GroupId {
        self.id
    }

    /// All symbol variants, in their original order.
    #[must_use]
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Number of variants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false; construction rejects empty groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Check whether a symbol belongs to this group.
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.members.iter().any(|m| m == symbol)
    }

    /// Pick `count` distinct members uniformly at random.
    ///
    /// Shuffles a copy of the members and pops `count` of them; the group
    /// itself is left untouched.
    pub fn random_selection(&self, count: usize, rng: &mut GameRng) -> Result<SmallVec<[String; 4]>> {
        if self.members.len() < count {
            return Err(KanamemoError::InvalidState(format!(
                "{} has {} symbols, cannot pick {}",
                self.id,
                self.members.len(),
                count
            )));
        }

        let mut pool = OrderedContainer::from(self.members.as_slice());
        pool.shuffle(rng);

        let mut picked = SmallVec::new();
        while picked.len() < count {
            match pool.pop() {
                Some(symbol) => picked.push(symbol),
                None => break,
            }
        }
        Ok(picked)
    }

    /// Pick two distinct members uniformly at random.
    pub fn random_pair(&self, rng: &mut GameRng) -> Result<(String, String)> {
        let mut pair = self.random_selection(2, rng)?.into_iter();
        match (pair.next(), pair.next()) {
            (Some(first), Some(second)) => Ok((first, second)),
            _ => Err(KanamemoError::InvalidState(format!("{} yielded an incomplete pair", self.id))),
        }
    }
}
