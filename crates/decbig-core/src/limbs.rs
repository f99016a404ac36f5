//! Single-limb arithmetic primitives.
//!
//! Every primitive takes the limb radix as an explicit argument; the least
//! significant limb of a [`crate::BigInt`] may run under a smaller power of
//! ten than the rest of the buffer, and the caller selects which one applies.
//! Wide intermediates use `u128` so that a `u64` addend or factor can never
//! overflow.

/// Add `n` into `limb` under `radix`, returning the carry for the next limb.
#[inline]
pub(crate) fn accumulate(limb: &mut u64, n: u128, radix: u64) -> u128 {
    let sum = u128::from(*limb) + n;
    let radix = u128::from(radix);
    #[allow(clippy::cast_possible_truncation)]
    {
        *limb = (sum % radix) as u64;
    }
    sum / radix
}

/// Multiply `limb` by `factor`, add `carry`, and split the result into a
/// reduced limb and the carry for the next limb.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn mul_carry(limb: u64, factor: u64, carry: u128, radix: u64) -> (u64, u128) {
    let product = u128::from(limb) * u128::from(factor) + carry;
    let radix = u128::from(radix);
    ((product % radix) as u64, product / radix)
}

/// Subtract `b + borrow` from `limb` under `radix`, returning the new borrow.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn borrowing_sub(limb: &mut u64, b: u64, borrow: u64, radix: u64) -> u64 {
    let diff = i128::from(*limb) - i128::from(b) - i128::from(borrow);
    if diff < 0 {
        *limb = (diff + i128::from(radix)) as u64;
        1
    } else {
        *limb = diff as u64;
        0
    }
}
