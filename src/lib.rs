#![no_std]

//! `GrowVec`: a growable, contiguous vector that manages its own raw buffer.
//!
//! `GrowVec<T>` owns a single allocation and tracks two counts: `capacity`,
//! the number of allocated slots, and `len`, the number of constructed
//! elements at the front of those slots. Everything past `len` is raw memory
//! that is never read, copied or dropped.
//!
//! This crate is `no_std` compatible and only needs `alloc`.
//!
//! # Capacity Policy
//!
//! - Growth: when an append or insert finds `len == capacity`, the capacity
//!   doubles (`0` grows to `1`). Pushing `N` elements onto an empty vector
//!   leaves the capacity at the smallest power of two `>= N`.
//! - Shrink: after every removal (`pop`, `remove`, `erase`, `erase_range`,
//!   shrinking `resize`), the capacity halves while `len <= capacity >> 2`.
//!   The check repeats, so one bulk removal can halve several times, and
//!   popping down to empty always ends with no allocation.
//! - `reserve(n)` grows to exactly `n` slots and never shrinks;
//!   `shrink_to_fit()` reallocates to exactly `len` slots; `clear()`
//!   destroys every element and releases the buffer.
//!
//! ```
//! use growvec::GrowVec;
//!
//! let mut v = GrowVec::new();
//! for i in 0..=128 {
//!     v.push(i);
//! }
//! assert_eq!((v.len(), v.capacity()), (129, 256));
//!
//! for _ in 0..64 {
//!     v.pop();
//! }
//! assert_eq!((v.len(), v.capacity()), (65, 256));
//!
//! v.pop();
//! assert_eq!((v.len(), v.capacity()), (64, 128));
//! ```
//!
//! ## Time Complexity
//! - `push()`, `emplace_with()`: amortized O(1)
//! - `pop()`: amortized O(1)
//! - `insert()`, `erase()`, `remove()`: O(n) for the shifted tail
//! - `insert_iter()`, `erase_range()`: O(n + k)
//! - `at()`, indexing, cursor arithmetic: O(1)
//!
//! # Shifting
//!
//! Insertion moves the tail towards the back and constructs the new values
//! in the slots the tail vacated; erasure destroys the doomed elements and
//! moves the tail down over them. Moves are bitwise, so a slot is either
//! live or raw at every step and no element is ever dropped twice.
//!
//! ```
//! use growvec::growvec;
//!
//! let mut v = growvec![1, 2, 3];
//! let first = v.insert_iter(1, [10, 20]);
//! assert_eq!(*first, 10);
//! assert_eq!(v, [1, 10, 20, 2, 3]);
//!
//! let mut v = growvec![1, 2, 3, 4, 5];
//! let after = v.erase_range(1..4).slot();
//! assert_eq!(v, [1, 5]);
//! assert_eq!(after, 1);
//! ```
//!
//! # Cursors
//!
//! [`Cursor`] and [`CursorMut`] are random-access positions over the live
//! elements, generic over [`Forward`] and [`Reverse`] travel. They support
//! increment, decrement, offset arithmetic, relative subscripting,
//! differences and ordering. A mutable cursor converts into a read-only one
//! at the same position, never the other way round.
//!
//! ```
//! use growvec::growvec;
//!
//! let v = growvec![1, 2, 3, 4];
//!
//! let mut cursor = v.begin();
//! cursor += 2;
//! assert_eq!(*cursor, 3);
//! assert_eq!(cursor[-1], 2);
//! assert_eq!(v.end() - cursor, 2);
//!
//! let mut back = v.rbegin();
//! back.inc();
//! assert_eq!(*back, 3);
//! assert_eq!(back.slot(), 2);
//! assert_eq!(v.rend().slot(), -1);
//! ```
//!
//! A cursor borrows the vector, so any call that could reallocate or shift
//! elements ends its lifetime at compile time.
//!
//! # Bounds-Checked Access
//!
//! [`GrowVec::at`] returns [`GrowVecError::IndexOutOfBounds`] past the end.
//! Indexing through the slice view panics instead.
//!
//! ```
//! use growvec::{growvec, GrowVecError};
//!
//! let v = growvec![10, 20];
//! assert_eq!(v.at(1), Ok(&20));
//! assert_eq!(
//!     v.at(2),
//!     Err(GrowVecError::IndexOutOfBounds { index: 2, length: 2 })
//! );
//! ```
//!
//! ## `no_std` Compatibility
//!
//! Enable the optional `std` feature to get `std::error::Error` through
//! `thiserror`'s std support:
//! ```toml
//! [dependencies]
//! growvec = { version = "0.1", features = ["std"] }
//! ```

extern crate alloc;

mod container;
mod cursor;
mod error;
mod iter;
mod raw_buffer;

// Re-export public types and traits
pub use container::GrowVec;
pub use cursor::{Cursor, CursorMut, Direction, Forward, Reverse, Span};
pub use error::GrowVecError;
pub use iter::IntoIter;

/// Creates a [`GrowVec`] from a list of elements or from `value; count`.
///
/// ```
/// use growvec::growvec;
///
/// let v = growvec![1, 2, 3];
/// assert_eq!(v, [1, 2, 3]);
///
/// let zeros = growvec![0u8; 4];
/// assert_eq!(zeros, [0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! growvec {
    () => {
        $crate::GrowVec::new()
    };
    ($value:expr; $count:expr) => {{
        let mut vec = $crate::GrowVec::new();
        vec.resize($count, $value);
        vec
    }};
    ($($value:expr),+ $(,)?) => {
        $crate::GrowVec::from([$($value),+])
    };
}
