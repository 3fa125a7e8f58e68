//! Error type for the surfaces around the heap engine
//!
//! The core operations never fail: an empty heap is reported through `Option`.
//! [`HeapError`] covers mode parsing and explicit invariant checks.

use thiserror::Error;

/// Error type for heap configuration and verification
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The string does not name an ordering mode
    #[error("unknown heap mode `{0}` (expected `max` or `min`)")]
    UnknownMode(String),
    /// The element at `parent` does not dominate the element at `child`
    #[error("heap property violated between parent index {parent} and child index {child}")]
    InvariantViolated {
        /// Index of the parent slot
        parent: usize,
        /// Index of the child slot that out-ranks its parent
        child: usize,
    },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, HeapError>;
