//! Error type for checked construction.

/// Error type for fallible `BigInt` construction.
///
/// Arithmetic itself never returns errors: outgrowing the preallocated buffer
/// mid-operation is a programming-contract violation and panics instead of
/// corrupting the value.
#[derive(Debug, thiserror::Error)]
pub enum BigIntError {
    /// The requested capacity cannot hold the initial value at the requested
    /// start offset.
    #[error(
        "capacity of {capacity_digits} digits ({capacity_limbs} limbs) cannot hold \
         {needed_limbs} limb(s) at start offset {start_offset}"
    )]
    CapacityExceeded {
        /// Requested capacity in decimal digits.
        capacity_digits: usize,
        /// Limb slots derived from the capacity.
        capacity_limbs: usize,
        /// Limbs needed by the initial value.
        needed_limbs: usize,
        /// Requested start offset.
        start_offset: usize,
    },

    /// The requested capacity is smaller than a single limb.
    #[error("capacity of {capacity_digits} digits is smaller than one limb")]
    CapacityTooSmall {
        /// Requested capacity in decimal digits.
        capacity_digits: usize,
    },
}
