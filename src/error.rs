use thiserror::Error;

/// Errors reported by the checked (`try_*`) bit-set operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitSetError {
    /// A bit-set must hold at least one bit.
    #[error("bit-set capacity must be greater than zero")]
    ZeroCapacity,

    /// The index does not address a bit inside the set.
    #[error("bit index {index} out of range for capacity {capacity}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Capacity of the set that was addressed.
        capacity: usize,
    },

    /// Two sets of different capacity were combined.
    #[error("capacity mismatch: {left} != {right}")]
    CapacityMismatch {
        /// Capacity of the receiving set.
        left: usize,
        /// Capacity of the argument set.
        right: usize,
    },

    /// The word storage could not be allocated.
    #[error("failed to allocate {words} storage words")]
    Allocation {
        /// Number of 32-bit words requested.
        words: usize,
    },
}
