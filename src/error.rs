use thiserror::Error;

/// Error types for `GrowVec` operations
///
/// Only recoverable conditions are represented here. Allocation failure is
/// fatal and goes through `handle_alloc_error` instead.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum GrowVecError {
    /// Index is beyond the current vector length
    #[error("Index out of bounds: index {index} is beyond vector length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the vector
        length: usize,
    },
    /// Element access attempted on a vector with no live elements
    #[error("Operation on empty vector")]
    EmptyVector,
}
