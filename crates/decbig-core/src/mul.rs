//! Scalar multiplication with optional limb shift, and schoolbook
//! multiplication built on top of it.

use crate::bigint::BigInt;
use crate::constants::THRESHOLD;
use crate::limbs::{accumulate, mul_carry};

impl BigInt {
    /// `self *= factor * THRESHOLD^limb_shift`.
    ///
    /// Factor `0` collapses the value to zero; factor `1` with no shift is a
    /// no-op. The shifted form writes into a fresh buffer and is the inner
    /// step of long multiplication, where `limb_shift` positions the partial
    /// product of one multiplier limb.
    ///
    /// The shifted form requires a full start limb (`start_threshold ==
    /// THRESHOLD`); shifting a sub-threshold window would change the value's
    /// decimal scale mid-number.
    ///
    /// # Panics
    /// If the product outgrows the buffer capacity.
    pub fn multiply_scalar(&mut self, factor: u64, limb_shift: usize) {
        if factor == 0 {
            self.reset_to_zero();
            return;
        }
        if factor == 1 && limb_shift == 0 {
            return;
        }

        if limb_shift == 0 {
            let mut carry: u128 = 0;
            for j in self.start..self.end {
                let (limb, next) = mul_carry(self.limbs[j], factor, carry, self.radix_at(j));
                self.limbs[j] = limb;
                carry = next;
            }
            let mut j = self.end;
            while carry != 0 {
                self.grow_to(j);
                carry = accumulate(&mut self.limbs[j], carry, THRESHOLD);
                j += 1;
            }
        } else {
            debug_assert_eq!(
                self.start_threshold, THRESHOLD,
                "limb-shifted multiply requires a full start limb"
            );
            let mut shifted = vec![0u64; self.limbs.len()];
            let mut carry: u128 = 0;
            for j in self.start..self.end {
                let target = j + limb_shift;
                assert!(
                    target < shifted.len(),
                    "BigInt capacity exceeded: limb index {target} outside buffer of {} limbs",
                    shifted.len()
                );
                let (limb, next) = mul_carry(self.limbs[j], factor, carry, THRESHOLD);
                shifted[target] = limb;
                carry = next;
            }
            let mut end = self.end + limb_shift;
            while carry != 0 {
                assert!(
                    end < shifted.len(),
                    "BigInt capacity exceeded: limb index {end} outside buffer of {} limbs",
                    shifted.len()
                );
                #[allow(clippy::cast_possible_truncation)]
                {
                    shifted[end] = (carry % u128::from(THRESHOLD)) as u64;
                }
                carry /= u128::from(THRESHOLD);
                end += 1;
            }
            self.limbs = shifted;
            self.end = end;
        }
        self.debug_check();
    }

    /// Schoolbook `self *= other`: for every active limb of `other`, the
    /// digit-shifted scalar partial product is accumulated into a zeroed
    /// accumulator at `self`'s start offset.
    ///
    /// O(n*m) in limb counts. Operand sizes here are bounded in practice, so
    /// the simple cache-friendly limb loop wins over sub-quadratic schemes.
    /// Both operands must have full start limbs.
    pub(crate) fn mul_big(&mut self, other: &BigInt) {
        debug_assert_eq!(self.start_threshold, THRESHOLD);
        debug_assert_eq!(other.start_threshold, THRESHOLD);
        let original = self.clone();
        self.reset_to_zero();
        for i in other.start..other.end {
            let mut partial = original.clone();
            partial.multiply_scalar(other.limbs[i], i - other.start);
            self.add_big(&partial);
        }
        self.debug_check();
    }
}
