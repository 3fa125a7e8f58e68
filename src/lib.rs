//! Binary Heap Engine for Rust
//!
//! This crate provides an array-backed binary heap whose ordering direction is
//! chosen at construction time. One engine, [`HeapEngine`], serves both
//! max-heaps and min-heaps by sharing its sift algorithms and delegating the
//! comparison to a [`HeapMode`].
//!
//! # Features
//!
//! - **Insert**: O(log n) sift-up after an amortized O(1) append
//! - **Extract**: O(log n) sift-down after moving the last element to the root
//! - **Peek**: O(1) access to the dominant element
//! - **Build**: O(n) bottom-up construction from an arbitrary sequence
//! - **Deterministic layout**: ties during sift-down always go to the right child
//!
//! # Example
//!
//! ```rust
//! use binary_heap_engine::{HeapEngine, HeapMode};
//!
//! let mut heap = HeapEngine::new(HeapMode::Min);
//! heap.build_heap(&[30, 10, 50, 2, 25]);
//! assert_eq!(heap.peek(), Some(&2));
//!
//! let drained: Vec<_> = std::iter::from_fn(|| heap.extract()).collect();
//! assert_eq!(drained, vec![2, 10, 25, 30, 50]);
//! ```

pub mod binary;
pub mod config;
pub mod error;
pub mod mode;

pub use binary::HeapEngine;
pub use config::HeapConfig;
pub use error::{HeapError, Result};
pub use mode::HeapMode;
