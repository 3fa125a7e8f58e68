//! Construction settings for [`HeapEngine`]

use serde::{Deserialize, Serialize};

use crate::binary::HeapEngine;
use crate::mode::HeapMode;

/// Settings applied when an engine is created
///
/// Missing fields take their default when deserialized, so `{}` is a valid
/// configuration describing an empty max heap.
///
/// # Example
///
/// ```rust
/// use binary_heap_engine::{HeapConfig, HeapMode};
///
/// let config = HeapConfig::default().with_mode(HeapMode::Min).with_capacity(16);
/// let mut heap = config.build::<u32>();
/// heap.insert(4);
/// heap.insert(2);
/// assert_eq!(heap.peek(), Some(&2));
/// assert!(heap.capacity() >= 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeapConfig {
    /// Ordering direction of the heap
    pub mode: HeapMode,
    /// Number of slots reserved up front in the backing store
    pub initial_capacity: usize,
}

impl HeapConfig {
    /// Sets the ordering direction
    pub fn with_mode(mut self, mode: HeapMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the number of slots to reserve
    pub fn with_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Creates an empty engine from these settings
    pub fn build<T: Ord>(&self) -> HeapEngine<T> {
        HeapEngine::with_config(self)
    }
}
