//! # decbig-core
//!
//! Fixed-capacity, windowed decimal big-integer arithmetic.
//!
//! [`BigInt`] keeps non-negative numbers as base-1e17 limbs inside a buffer
//! sized once at construction. A sliding window over the buffer and a
//! reduced radix on the least significant limb give two things a general
//! bignum library does not: numbers can be placed high in a shared-size
//! buffer and grown downward one decimal digit at a time in amortized O(1)
//! ([`BigInt::multiply_by_10`]), and reduced-precision leading-digit copies
//! can be split off cheaply ([`BigInt::window`]) for estimation loops such
//! as digit-by-digit square-root extraction.
//!
//! The engine trades generality for speed inside that pre-sized buffer: no
//! signed values, no division, and growth past the construction capacity is
//! a programming error that panics rather than reallocating.
//!
//! # Example
//! ```
//! use decbig_core::BigInt;
//!
//! let mut a = BigInt::new(9_999);
//! let b = BigInt::new(9_999);
//! a *= &b;
//! assert_eq!(a.to_string(), "99980001");
//! assert_eq!(a.digit_sum(0), 36);
//! assert_eq!(a.modulo(17), 99_980_001 % 17);
//! ```

mod add;
mod bigint;
mod cmp;
pub mod constants;
mod error;
mod limbs;
mod mul;
pub mod mulmod;
mod ops;
mod query;
mod sub;

pub use bigint::BigInt;
pub use constants::{
    DEFAULT_CAPACITY_DIGITS, MULMOD_CAPACITY_DIGITS, THRESHOLD, THRESHOLD_EXP, U64_SAFE_DIGITS,
    WINDOW_CAPACITY_DIGITS,
};
pub use error::BigIntError;
pub use mulmod::{mul_mod, pow_mod};
