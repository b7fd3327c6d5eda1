//! # linkdeque
//!
//! A thread-safe double-ended queue backed by a doubly linked list, with an
//! optional capacity bound that evicts from the opposite end on overflow.
//!
//! ## Features
//!
//! - **O(1) ends**: `append`, `append_left`, `try_pop` and `try_pop_left`
//! - **Bounded mode**: appending to a full deque evicts the element at the other end
//! - **Indexed peek**: lookups walk from whichever end is closer
//! - **Rotation**: cyclic rotation in either direction under one lock acquisition
//! - **Consistent iteration**: an iterator holds the lock for its whole lifetime
//!
//! ## Quick Start
//!
//! ```rust
//! use linkdeque::Deque;
//!
//! let deque = Deque::bounded(3);
//! for i in 0..5 {
//!     deque.append(i);
//! }
//!
//! // The two oldest elements were evicted from the left end
//! assert_eq!(deque.len(), 3);
//! assert_eq!(deque.peek(0), 2);
//! assert_eq!(deque.try_pop(), Ok(4));
//! ```
//!
//! ## Thread Safety
//!
//! A [`Deque`] is guarded by a single non-reentrant mutex. It can be shared
//! across threads behind an `Arc` without additional synchronization. Every
//! operation is linearizable; iteration observes one consistent state and
//! blocks writers until the iterator is dropped.

#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

pub mod deque;
pub mod metrics;
mod sync;

pub use crate::deque::{All, Capacity, Deque, Values};
pub use crate::metrics::{DequeMetrics, MetricsCollector};

use core::fmt;

/// Returned when removing from an empty deque
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PopError;

impl fmt::Display for PopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pop from empty deque")
    }
}

impl std::error::Error for PopError {}

/// Returned when peeking at an index outside the deque
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeekError {
    /// The offending index
    pub index: usize,
}

impl fmt::Display for PeekError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "index {} out of bounds", self.index)
    }
}

impl std::error::Error for PeekError {}

/// Returned when a capacity setting cannot be turned into a [`Capacity`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapacityError {
    /// A negative value other than the `-1` unbounded sentinel
    Negative(i64),
    /// Text that is neither a non-negative integer nor an unbounded keyword
    Unparsable(String),
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapacityError::Negative(raw) => write!(
                f,
                "invalid capacity {}: expected a non-negative bound or -1 for unbounded",
                raw
            ),
            CapacityError::Unparsable(text) => write!(f, "cannot parse capacity from {:?}", text),
        }
    }
}

impl std::error::Error for CapacityError {}

/// Error types for linkdeque operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Removal attempted on an empty deque
    Pop(PopError),
    /// Index out of bounds
    Peek(PeekError),
    /// Invalid capacity configuration
    Capacity(CapacityError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Pop(err) => write!(f, "deque: {}", err),
            Error::Peek(err) => write!(f, "deque: {}", err),
            Error::Capacity(err) => write!(f, "deque: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Pop(err) => Some(err),
            Error::Peek(err) => Some(err),
            Error::Capacity(err) => Some(err),
        }
    }
}

impl From<PopError> for Error {
    fn from(err: PopError) -> Self {
        Error::Pop(err)
    }
}

impl From<PeekError> for Error {
    fn from(err: PeekError) -> Self {
        Error::Peek(err)
    }
}

impl From<CapacityError> for Error {
    fn from(err: CapacityError) -> Self {
        Error::Capacity(err)
    }
}

/// Result type for linkdeque operations
pub type Result<T> = core::result::Result<T, Error>;
