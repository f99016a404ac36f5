//! Derived read-only queries: digit count, prefix digit sum, modular
//! reduction, best-effort native conversion, and decimal rendering.

use std::fmt;

use crate::bigint::BigInt;
use crate::constants::{radix_width, value_width, THRESHOLD_EXP, U64_SAFE_DIGITS};

impl BigInt {
    /// Total number of decimal digits.
    ///
    /// Interior limbs count `THRESHOLD_EXP` digits each; the most significant
    /// limb counts its own width, and the least significant limb counts the
    /// width implied by `start_threshold`.
    #[must_use]
    pub fn digit_count(&self) -> usize {
        let msd_width = value_width(self.limbs[self.end - 1]);
        if self.active_limb_count() == 1 {
            return msd_width;
        }
        let interior = (self.active_limb_count() - 2) * THRESHOLD_EXP;
        msd_width + interior + radix_width(self.start_threshold)
    }

    /// Sum of decimal digits read most-significant-first, stopping after
    /// `limit` digits. `limit == 0` sums every digit.
    #[must_use]
    pub fn digit_sum(&self, limit: usize) -> u64 {
        let mut counted = 0usize;
        let mut sum = 0u64;
        for j in (self.start..self.end).rev() {
            let rendered = if j == self.end - 1 {
                self.limbs[j].to_string()
            } else {
                let width = if j == self.start {
                    radix_width(self.start_threshold)
                } else {
                    THRESHOLD_EXP
                };
                format!("{:0width$}", self.limbs[j])
            };
            for byte in rendered.bytes() {
                if limit != 0 && counted >= limit {
                    return sum;
                }
                counted += 1;
                sum += u64::from(byte - b'0');
            }
        }
        sum
    }

    /// `self mod m` by Horner reduction from the least significant limb,
    /// with a running power-of-radix weight updated per limb.
    ///
    /// # Panics
    /// If `m` is zero.
    #[must_use]
    pub fn modulo(&self, m: u64) -> u64 {
        assert!(m > 0, "modulus must be non-zero");
        let m = u128::from(m);
        let mut acc: u128 = 0;
        let mut weight: u128 = 1 % m;
        for j in self.start..self.end {
            acc = (acc + (u128::from(self.limbs[j]) % m) * weight) % m;
            weight = weight * (u128::from(self.radix_at(j)) % m) % m;
        }
        #[allow(clippy::cast_possible_truncation)]
        let reduced = acc as u64;
        reduced
    }

    /// Best-effort conversion back to a native integer.
    ///
    /// Only reliable while the active window fits in `u64` range; beyond
    /// [`U64_SAFE_DIGITS`] digits a diagnostic is emitted and the wrapped
    /// value is returned anyway.
    #[must_use]
    pub fn to_u64(&self) -> u64 {
        let digits = self.digit_count();
        if digits > U64_SAFE_DIGITS {
            tracing::warn!(
                digits,
                "BigInt wider than the safe u64 range; to_u64 result is unreliable"
            );
        }
        let mut acc: u64 = 0;
        for j in (self.start..self.end).rev() {
            acc = acc
                .wrapping_mul(self.radix_at(j))
                .wrapping_add(self.limbs[j]);
        }
        acc
    }
}

/// Decimal rendering: most significant limb unpadded, interior limbs padded
/// to `THRESHOLD_EXP` digits, start limb padded to the `start_threshold`
/// width.
impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.limbs[self.end - 1])?;
        for j in (self.start + 1..self.end - 1).rev() {
            write!(f, "{:0width$}", self.limbs[j], width = THRESHOLD_EXP)?;
        }
        if self.active_limb_count() > 1 {
            let width = radix_width(self.start_threshold);
            write!(f, "{:0width$}", self.limbs[self.start])?;
        }
        Ok(())
    }
}
