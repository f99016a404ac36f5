//! Modular arithmetic helpers bridging native `u64` fast paths and the
//! engine.
//!
//! Modular exponentiation over native integers wants `a * b % m` without
//! leaving `u64`. When the product would overflow, a short-lived small
//! capacity [`BigInt`] performs the multiply-then-reduce instead; the
//! fallback is rare enough that the allocation does not matter.

use crate::bigint::BigInt;
use crate::constants::MULMOD_CAPACITY_DIGITS;

/// `(a * b) % m` without overflow.
///
/// Uses native multiplication when it fits, otherwise routes through a
/// three-limb `BigInt`.
///
/// # Panics
/// If `m` is zero.
#[must_use]
pub fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    assert!(m > 0, "modulus must be non-zero");
    match a.checked_mul(b) {
        Some(product) => product % m,
        None => {
            let mut wide = BigInt::with_capacity(a, 0, MULMOD_CAPACITY_DIGITS);
            wide *= b;
            wide.modulo(m)
        }
    }
}

/// `base^exp % m` by square-and-multiply on top of [`mul_mod`].
///
/// # Panics
/// If `m` is zero.
#[must_use]
pub fn pow_mod(base: u64, mut exp: u64, m: u64) -> u64 {
    assert!(m > 0, "modulus must be non-zero");
    let mut result = 1 % m;
    let mut base = base % m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}
