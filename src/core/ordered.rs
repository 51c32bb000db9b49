//! Ordered container with in-place shuffling.
//!
//! `OrderedContainer` wraps an owned `Vec` and adds the positional
//! operations the grid population needs: index initialization, checked
//! swaps and an unbiased Fisher–Yates shuffle.
//!
//! ## Usage
//!
//! ```
//! use kanamemo::core::{GameRng, OrderedContainer};
//!
//! let mut slots = OrderedContainer::with_indices(6);
//! assert_eq!(slots.as_slice(), &[0, 1, 2, 3, 4, 5]);
//!
//! let mut rng = GameRng::new(42);
//! slots.shuffle(&mut rng);
//!
//! let mut sorted = slots.clone().into_vec();
//! sorted.sort();
//! assert_eq!(sorted, vec![0, 1, 2, 3, 4, 5]);
//! ```

use serde::{Deserialize, Serialize};

use super::error::{KanamemoError, Result};
use super::rng::GameRng;

/// An owned, indexable sequence that can shuffle itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderedContainer<T> {
    items: Vec<T>,
}

impl<T> OrderedContainer<T> {
    /// Create an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the container is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get an element by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Append an element at the end.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the last element.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Exchange the elements at `i` and `j`.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        let len = self.items.len();
        for index in [i, j] {
            if index >= len {
                return Err(KanamemoError::OutOfRange { index, len });
            }
        }
        self.items.swap(i, j);
        Ok(())
    }

    /// Shuffle in place with Fisher–Yates.
    ///
    /// Walks `current` down from the length to 1, drawing a uniform index
    /// in `[0, current)` and swapping it with `current - 1`.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        for current in (1..=self.items.len()).rev() {
            let random_index = rng.gen_range_usize(0..current);
            self.items.swap(current - 1, random_index);
        }
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// View the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consume the container, returning the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl OrderedContainer<usize> {
    /// Create a container holding `0..len`.
    #[must_use]
    pub fn with_indices(len: usize) -> Self {
        Self { items: (0..len).collect() }
    }

    /// Overwrite every element with its own position.
    pub fn init_with_indices(&mut self) {
        for (i, item) in self.items.iter_mut().enumerate() {
            *item = i;
        }
    }
}

impl<T> Default for OrderedContainer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for OrderedContainer<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T: Clone> From<&[T]> for OrderedContainer<T> {
    fn from(items: &[T]) -> Self {
        Self { items: items.to_vec() }
    }
}

impl<T> FromIterator<T> for OrderedContainer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl<T> std::ops::Index<usize> for OrderedContainer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a OrderedContainer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
