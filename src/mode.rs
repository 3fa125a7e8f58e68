//! Ordering direction of a heap
//!
//! Both directions share the same sift algorithms. The only thing that changes
//! between them is which of two elements *dominates* the other, and that is
//! decided here.
//!
//! | Mode  | `dominates(a, b)` | Extracted first |
//! |-------|-------------------|-----------------|
//! | `Max` | `a >= b`          | largest         |
//! | `Min` | `a <= b`          | smallest        |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HeapError;

/// Ordering direction, fixed when a heap is constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeapMode {
    /// Largest element sits at the root
    #[default]
    Max,
    /// Smallest element sits at the root
    Min,
}

impl HeapMode {
    /// Returns true if `a` may sit above `b` in the heap
    #[inline]
    pub fn dominates<T: Ord + ?Sized>(self, a: &T, b: &T) -> bool {
        match self {
            HeapMode::Max => a >= b,
            HeapMode::Min => a <= b,
        }
    }

    /// Returns true if `a` must sit above `b`, i.e. they are not equal
    ///
    /// The sift loops only move an element when this holds, so equal
    /// elements are never swapped.
    #[inline]
    pub fn strictly_dominates<T: Ord + ?Sized>(self, a: &T, b: &T) -> bool {
        match self {
            HeapMode::Max => a > b,
            HeapMode::Min => a < b,
        }
    }

    /// Name used by [`Display`](fmt::Display) on a heap, e.g. `MaxHeap`
    pub(crate) fn heap_name(self) -> &'static str {
        match self {
            HeapMode::Max => "MaxHeap",
            HeapMode::Min => "MinHeap",
        }
    }
}

impl fmt::Display for HeapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapMode::Max => f.write_str("max"),
            HeapMode::Min => f.write_str("min"),
        }
    }
}

impl FromStr for HeapMode {
    type Err = HeapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "max" | "descending" => Ok(HeapMode::Max),
            "min" | "ascending" => Ok(HeapMode::Min),
            _ => Err(HeapError::UnknownMode(s.to_string())),
        }
    }
}
