//! Borrow subtraction, including re-alignment of mismatched start radixes.

use crate::bigint::BigInt;
use crate::constants::THRESHOLD;
use crate::limbs::borrowing_sub;

impl BigInt {
    /// `self -= other`.
    ///
    /// Precondition: `self >= other` under the same alignment convention as
    /// addition. The precondition is unchecked in release builds; violating
    /// it leaves the value unspecified. Test builds trip a `debug_assert!`.
    ///
    /// When the two operands run their least significant limb under
    /// different radixes, both are first re-aligned to the smaller of the
    /// two `start_threshold`s so the borrow loop sees a common limb scale.
    pub(crate) fn sub_big(&mut self, other: &BigInt) {
        if self.start_threshold == other.start_threshold {
            self.sub_aligned(other);
            return;
        }
        let common = self.start_threshold.min(other.start_threshold);
        if self.start_threshold > common {
            self.normalize_start_threshold(common);
        }
        if other.start_threshold > common {
            let mut aligned = other.clone();
            aligned.normalize_start_threshold(common);
            self.sub_aligned(&aligned);
        } else {
            self.sub_aligned(other);
        }
    }

    fn sub_aligned(&mut self, other: &BigInt) {
        debug_assert_eq!(self.start_threshold, other.start_threshold);
        debug_assert!(!(*other > *self), "subtrahend must not exceed minuend");
        let mut borrow = 0u64;
        for i in other.start..other.end {
            let j = self.start + (i - other.start);
            let radix = self.radix_at(j);
            borrow = borrowing_sub(&mut self.limbs[j], other.limbs[i], borrow, radix);
        }
        let mut j = self.start + (other.end - other.start);
        while borrow != 0 {
            let radix = self.radix_at(j);
            borrow = borrowing_sub(&mut self.limbs[j], 0, borrow, radix);
            j += 1;
        }
        self.trim_leading_zeros();
        self.debug_check();
    }

    /// Radix-conversion step: shrink `start_threshold` to `new_threshold`
    /// (a smaller power of ten dividing it), preserving the value.
    ///
    /// The most significant sub-threshold digits of the start limb move into
    /// the limbs above it, which are rescaled by the width ratio.
    fn normalize_start_threshold(&mut self, new_threshold: u64) {
        debug_assert!(new_threshold < self.start_threshold);
        debug_assert_eq!(self.start_threshold % new_threshold, 0);

        let factor = self.start_threshold / new_threshold;
        let split_hi = self.limbs[self.start] / new_threshold;
        self.limbs[self.start] %= new_threshold;

        let mut carry = u128::from(split_hi);
        for j in self.start + 1..self.end {
            let scaled = u128::from(self.limbs[j]) * u128::from(factor) + carry;
            #[allow(clippy::cast_possible_truncation)]
            {
                self.limbs[j] = (scaled % u128::from(THRESHOLD)) as u64;
            }
            carry = scaled / u128::from(THRESHOLD);
        }
        let mut j = self.end;
        while carry != 0 {
            self.grow_to(j);
            #[allow(clippy::cast_possible_truncation)]
            {
                self.limbs[j] = (carry % u128::from(THRESHOLD)) as u64;
            }
            carry /= u128::from(THRESHOLD);
            j += 1;
        }
        self.start_threshold = new_threshold;
        self.debug_check();
    }
}
