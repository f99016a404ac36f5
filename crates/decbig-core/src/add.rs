//! Limb-wise addition with heterogeneous carry radixes.

use crate::bigint::BigInt;
use crate::constants::THRESHOLD;
use crate::limbs::accumulate;

impl BigInt {
    /// `self += other`, aligning `other`'s limbs so that its first active
    /// limb lands on `self`'s first active limb.
    ///
    /// Callers are responsible for the alignment being meaningful: both
    /// operands must carry the same decimal scale at their respective start
    /// offsets. The first touched limb is reduced under whatever radix
    /// governs that position; every limb above carries under `THRESHOLD`.
    pub(crate) fn add_big(&mut self, other: &BigInt) {
        let mut carry: u128 = 0;
        for i in other.start..other.end {
            let j = self.start + (i - other.start);
            self.grow_to(j);
            let radix = self.radix_at(j);
            carry = accumulate(&mut self.limbs[j], u128::from(other.limbs[i]) + carry, radix);
        }
        let mut j = self.start + (other.end - other.start);
        while carry != 0 {
            self.grow_to(j);
            carry = accumulate(&mut self.limbs[j], carry, THRESHOLD);
            j += 1;
        }
        self.debug_check();
    }

    /// `self += n`, injecting the scalar at the start limb under
    /// `start_threshold` and propagating the carry upward.
    pub(crate) fn add_scalar(&mut self, n: u64) {
        let radix = self.start_threshold;
        let mut carry = accumulate(&mut self.limbs[self.start], u128::from(n), radix);
        let mut j = self.start + 1;
        while carry != 0 {
            self.grow_to(j);
            carry = accumulate(&mut self.limbs[j], carry, THRESHOLD);
            j += 1;
        }
        self.debug_check();
    }
}
