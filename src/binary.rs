//! Array-backed binary heap engine
//!
//! [`HeapEngine`] keeps its elements in a single `Vec<T>`. The tree is implicit
//! in the indices: for a slot `i` the parent is `(i - 1) / 2`, the children are
//! `2i + 1` and `2i + 2`. Every parent dominates its children under the
//! configured [`HeapMode`].
//!
//! # Time Complexity
//!
//! | Operation    | Complexity         |
//! |--------------|--------------------|
//! | `insert`     | O(log n)           |
//! | `extract`    | O(log n)           |
//! | `peek`       | O(1)               |
//! | `build_heap` | O(n)               |
//! | `snapshot`   | O(n)               |
//! | `size`       | O(1)               |
//!
//! # Layout determinism
//!
//! Sift-down picks the right child whenever the two children are equal under
//! the ordering, and elements only move on strict domination. The resulting
//! array layout is therefore fully determined by the operation sequence.
//!
//! # Example
//!
//! ```rust
//! use binary_heap_engine::HeapEngine;
//!
//! let mut heap = HeapEngine::max();
//! heap.build_heap(&[4, 8, 2, 6, 10, 3, 1, 7, 5, 9]);
//! assert_eq!(heap.peek(), Some(&10));
//!
//! let mut drained = Vec::new();
//! while let Some(value) = heap.extract() {
//!     drained.push(value);
//! }
//! assert_eq!(drained, vec![10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
//! assert!(heap.is_empty());
//! ```

use std::fmt;

use tracing::debug;

use crate::config::HeapConfig;
use crate::error::{HeapError, Result};
use crate::mode::HeapMode;

/// A binary heap whose ordering direction is chosen at construction
///
/// The engine exclusively owns its backing store. Contents leave the engine
/// only as copies ([`snapshot`](Self::snapshot)) or by value
/// ([`extract`](Self::extract), [`into_vec`](Self::into_vec)).
///
/// `T`'s [`Ord`] implementation must be a total order. If it is not, no memory
/// unsafety or panic results, but the extraction order is unspecified.
#[derive(Debug, Clone)]
pub struct HeapEngine<T> {
    /// Heap-ordered backing store
    data: Vec<T>,
    mode: HeapMode,
}

impl<T: Ord> HeapEngine<T> {
    /// Creates an empty heap with the given ordering direction
    pub fn new(mode: HeapMode) -> Self {
        Self {
            data: Vec::new(),
            mode,
        }
    }

    /// Creates an empty heap that extracts the largest element first
    pub fn max() -> Self {
        Self::new(HeapMode::Max)
    }

    /// Creates an empty heap that extracts the smallest element first
    pub fn min() -> Self {
        Self::new(HeapMode::Min)
    }

    /// Creates an empty heap from a [`HeapConfig`], reserving its capacity
    ///
    /// Public callers go through [`HeapConfig::build`].
    pub(crate) fn with_config(config: &HeapConfig) -> Self {
        Self {
            data: Vec::with_capacity(config.initial_capacity),
            mode: config.mode,
        }
    }

    /// Builds a heap in O(n) by taking ownership of `data`
    ///
    /// This is [`build_heap`](Self::build_heap) without the copy.
    pub fn from_vec(mode: HeapMode, data: Vec<T>) -> Self {
        let mut heap = Self { data, mode };
        heap.heapify();
        heap
    }

    /// Ordering direction of this heap
    pub fn mode(&self) -> HeapMode {
        self.mode
    }

    /// Number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Same as [`len`](Self::len)
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of elements the backing store can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Inserts a value and sifts it up to its position
    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Returns the dominant element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Removes and returns the dominant element
    ///
    /// The last element is moved into the root and sifted down. Returns `None`
    /// and leaves the heap untouched if it is empty.
    pub fn extract(&mut self) -> Option<T> {
        if self.data.is_empty() {
            debug!(mode = %self.mode, "extract on empty heap");
            return None;
        }

        let result = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Some(result)
    }

    /// Removes every element, keeping the allocated capacity
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the heap and returns the backing store in array order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Checks the heap property on every parent/child pair
    ///
    /// Returns the first violation in child-index order. O(n).
    pub fn check_invariant(&self) -> Result<()> {
        for child in 1..self.data.len() {
            let parent = (child - 1) / 2;
            if !self.mode.dominates(&self.data[parent], &self.data[child]) {
                return Err(HeapError::InvariantViolated { parent, child });
            }
        }
        Ok(())
    }

    /// Returns true if the heap property holds
    pub fn is_valid(&self) -> bool {
        self.check_invariant().is_ok()
    }

    /// Restores the heap property over the whole store, bottom-up
    ///
    /// Only internal slots `0..len / 2` are sifted; the leaves already form
    /// trivial heaps.
    fn heapify(&mut self) {
        let internal_nodes = self.data.len() / 2;
        for index in (0..internal_nodes).rev() {
            self.sift_down(index);
        }
        debug!(
            mode = %self.mode,
            len = self.data.len(),
            internal_nodes,
            "built heap"
        );
    }

    /// Move element at index up while it strictly dominates its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self
                .mode
                .strictly_dominates(&self.data[index], &self.data[parent])
            {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down while a child strictly dominates it
    ///
    /// The left child is chosen only if it strictly dominates the right one;
    /// on a tie the right child is chosen.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;

            let child = if right >= len
                || self
                    .mode
                    .strictly_dominates(&self.data[left], &self.data[right])
            {
                left
            } else {
                right
            };

            if self
                .mode
                .strictly_dominates(&self.data[child], &self.data[index])
            {
                self.data.swap(index, child);
                index = child;
            } else {
                break;
            }
        }
    }
}

impl<T: Ord + Clone> HeapEngine<T> {
    /// Replaces the contents with a copy of `elements` and heapifies in O(n)
    ///
    /// The engine keeps no reference to `elements`.
    pub fn build_heap(&mut self, elements: &[T]) {
        self.data = elements.to_vec();
        self.heapify();
    }

    /// Returns an independent copy of the backing store in array order
    ///
    /// The copy is in heap layout, not sorted order.
    pub fn snapshot(&self) -> Vec<T> {
        self.data.clone()
    }
}

impl<T: Ord> Default for HeapEngine<T> {
    fn default() -> Self {
        Self::max()
    }
}

/// Appends the batch, then either rebuilds the whole store in O(n + k) or
/// sifts each new element up in O(k log n).
///
/// A batch at least as large as the current contents triggers the rebuild.
/// Otherwise the result is laid out exactly as though each element had been
/// passed to [`insert`](HeapEngine::insert) in order.
impl<T: Ord> Extend<T> for HeapEngine<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let start = self.data.len();
        self.data.extend(iter);
        let added = self.data.len() - start;

        if added >= start {
            self.heapify();
        } else {
            for index in start..self.data.len() {
                self.sift_up(index);
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Display for HeapEngine<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{array: {:?}}}", self.mode.heap_name(), self.data)
    }
}
