//! Window-based comparison.
//!
//! Comparisons look only at the active limb windows: first by window length,
//! then limb by limb from the most significant end. They are meaningful only
//! for operands built with compatible construction conventions (same limb
//! alignment and start radix); comparing numbers whose windows encode
//! different decimal scales is a caller error the engine does not detect.

use std::cmp::Ordering;

use crate::bigint::BigInt;

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.active() == other.active()
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let len_cmp = self.active_limb_count().cmp(&other.active_limb_count());
        if len_cmp != Ordering::Equal {
            return Some(len_cmp);
        }
        for (a, b) in self.active().iter().rev().zip(other.active().iter().rev()) {
            if a != b {
                return Some(a.cmp(b));
            }
        }
        Some(Ordering::Equal)
    }
}
