//! The `BigInt` entity: a fixed-capacity limb buffer with a sliding window.
//!
//! Limbs are base-[`THRESHOLD`](crate::constants::THRESHOLD) decimal chunks,
//! least significant first. Two cursors delimit the active half-open window
//! `[start, end)`; the limb at `start` may run under a reduced power-of-ten
//! radix (`start_threshold`), which is what makes the amortized decimal-digit
//! append in [`BigInt::multiply_by_10`] possible.

use crate::constants::{
    PowerOfTen, DEFAULT_CAPACITY_DIGITS, THRESHOLD, THRESHOLD_EXP, WINDOW_CAPACITY_DIGITS,
};
use crate::error::BigIntError;

/// Arbitrary-precision non-negative integer over a fixed-capacity buffer of
/// decimal limbs.
///
/// The buffer size is chosen at construction and never grows; an operation
/// that would need a limb past the buffer panics. Copying a `BigInt` copies
/// the whole buffer, so hot paths should prefer the compound operators
/// (`+=`, `-=`, `*=`) over the value-returning ones.
///
/// # Invariants
/// - every active limb except the most significant is `< THRESHOLD`, and the
///   limb at `start` is `< start_threshold`;
/// - the window always contains at least one limb (zero is a single `0` limb);
/// - no leading zero limb unless the value is zero;
/// - `start_threshold` is a power of ten dividing `THRESHOLD`;
/// - limbs outside the active window are zero, so the window can grow over
///   them without clearing.
#[derive(Clone, Debug)]
pub struct BigInt {
    pub(crate) limbs: Vec<u64>,
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) start_threshold: u64,
}

impl BigInt {
    /// Construct from a native value with the default capacity
    /// ([`DEFAULT_CAPACITY_DIGITS`] decimal digits) at start offset 0.
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self::with_capacity(value, 0, DEFAULT_CAPACITY_DIGITS)
    }

    /// Construct at a non-zero start offset inside a default-capacity buffer.
    ///
    /// Placing the window high in the buffer leaves room below it for
    /// [`BigInt::multiply_by_10`] to open fresh least-significant limbs.
    #[must_use]
    pub fn with_offset(value: u64, start_offset: usize) -> Self {
        Self::with_capacity(value, start_offset, DEFAULT_CAPACITY_DIGITS)
    }

    /// Construct with an explicit capacity in decimal digits.
    ///
    /// # Panics
    /// If the capacity cannot hold `value` at `start_offset`. Use
    /// [`BigInt::try_with_capacity`] to handle that case without panicking.
    #[must_use]
    pub fn with_capacity(value: u64, start_offset: usize, capacity_digits: usize) -> Self {
        Self::try_with_capacity(value, start_offset, capacity_digits)
            .expect("BigInt capacity must hold the initial value")
    }

    /// Checked construction: decomposes `value` into base-`THRESHOLD` limbs
    /// starting at `start_offset`.
    pub fn try_with_capacity(
        value: u64,
        start_offset: usize,
        capacity_digits: usize,
    ) -> Result<Self, BigIntError> {
        let capacity_limbs = capacity_digits / THRESHOLD_EXP;
        if capacity_limbs == 0 {
            return Err(BigIntError::CapacityTooSmall { capacity_digits });
        }
        let needed_limbs = if value >= THRESHOLD { 2 } else { 1 };
        if start_offset + needed_limbs > capacity_limbs {
            return Err(BigIntError::CapacityExceeded {
                capacity_digits,
                capacity_limbs,
                needed_limbs,
                start_offset,
            });
        }

        let mut limbs = vec![0u64; capacity_limbs];
        let mut end = start_offset;
        let mut n = value;
        while n >= THRESHOLD {
            limbs[end] = n % THRESHOLD;
            end += 1;
            n /= THRESHOLD;
        }
        limbs[end] = n;
        end += 1;

        Ok(Self {
            limbs,
            start: start_offset,
            end,
            start_threshold: THRESHOLD,
        })
    }

    /// Start offset of the active window.
    #[must_use]
    pub fn start_offset(&self) -> usize {
        self.start
    }

    /// Number of active limbs.
    #[must_use]
    pub fn active_limb_count(&self) -> usize {
        self.end - self.start
    }

    /// Radix currently governing the least significant limb.
    #[must_use]
    pub fn start_threshold(&self) -> u64 {
        self.start_threshold
    }

    /// Whether the value is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.active().iter().all(|&limb| limb == 0)
    }

    /// Amortized multiply by ten.
    ///
    /// While the least significant limb has spare decimal width, only that
    /// limb and `start_threshold` are touched; a full carry pass over the
    /// buffer happens implicitly, one limb at a time, as the sub-threshold
    /// limb saturates and a fresh limb is opened below the window.
    ///
    /// # Panics
    /// If the window is already at the bottom of the buffer when a fresh
    /// limb is needed.
    pub fn multiply_by_10(&mut self) {
        if self.start_threshold == THRESHOLD {
            assert!(
                self.start > 0,
                "BigInt capacity exceeded: no limb left below the window"
            );
            self.start -= 1;
            self.start_threshold = 10;
            self.limbs[self.start] = 0;
        } else {
            self.start_threshold *= 10;
            self.limbs[self.start] *= 10;
        }
    }

    /// Truncated most-significant-aligned copy with the default window
    /// capacity ([`WINDOW_CAPACITY_DIGITS`]).
    ///
    /// See [`BigInt::window_with_capacity`].
    #[must_use]
    pub fn window(&self, from_end: usize) -> Self {
        self.window_with_capacity(from_end, WINDOW_CAPACITY_DIGITS)
    }

    /// Copy of the `from_end + 1` most significant limbs (or the whole number
    /// if that exceeds the active length), placed at offset 0 of a fresh
    /// buffer.
    ///
    /// The copy drops low-order limbs, so it is a reduced-precision
    /// approximation suitable for comparing leading digits of two numbers
    /// with the same limb alignment — not an exact value.
    ///
    /// # Panics
    /// If `capacity_digits` cannot hold the copied limbs.
    #[must_use]
    pub fn window_with_capacity(&self, from_end: usize, capacity_digits: usize) -> Self {
        let take = (from_end + 1).min(self.active_limb_count());
        let lo = self.end - take;
        let mut out = Self::with_capacity(0, 0, capacity_digits);
        assert!(
            take <= out.limbs.len(),
            "window capacity of {capacity_digits} digits cannot hold {take} limbs"
        );
        out.limbs[..take].copy_from_slice(&self.limbs[lo..self.end]);
        out.end = take;
        out
    }

    /// Active limb slice, least significant first.
    pub(crate) fn active(&self) -> &[u64] {
        &self.limbs[self.start..self.end]
    }

    /// Radix governing the limb at `index`: `start_threshold` for the first
    /// window position, `THRESHOLD` everywhere else.
    pub(crate) fn radix_at(&self, index: usize) -> u64 {
        if index == self.start {
            self.start_threshold
        } else {
            THRESHOLD
        }
    }

    /// Extend the window so that `index` is active.
    ///
    /// Relies on the invariant that limbs above the window are zero.
    pub(crate) fn grow_to(&mut self, index: usize) {
        assert!(
            index < self.limbs.len(),
            "BigInt capacity exceeded: limb index {index} outside buffer of {} limbs",
            self.limbs.len()
        );
        if index >= self.end {
            self.end = index + 1;
        }
    }

    /// Drop leading zero limbs, keeping at least one active limb.
    pub(crate) fn trim_leading_zeros(&mut self) {
        while self.end - self.start > 1 && self.limbs[self.end - 1] == 0 {
            self.end -= 1;
        }
    }

    /// Collapse to the value zero in place, keeping buffer and start offset.
    pub(crate) fn reset_to_zero(&mut self) {
        for limb in &mut self.limbs[self.start..self.end] {
            *limb = 0;
        }
        self.end = self.start + 1;
    }

    /// Debug-build sanity check of the struct invariants.
    pub(crate) fn debug_check(&self) {
        debug_assert!(self.end > self.start, "window must hold at least one limb");
        debug_assert!(self.end <= self.limbs.len());
        debug_assert!(
            THRESHOLD % self.start_threshold == 0,
            "start_threshold must divide THRESHOLD"
        );
        debug_assert!(self.start_threshold.is_power_of_ten());
        #[cfg(debug_assertions)]
        {
            for (i, &limb) in self.limbs.iter().enumerate() {
                if i < self.start || i >= self.end {
                    debug_assert!(limb == 0, "limb {i} outside the window must be zero");
                } else if i == self.start {
                    debug_assert!(limb < self.start_threshold || self.end == self.start + 1);
                } else if i < self.end - 1 {
                    debug_assert!(limb < THRESHOLD, "interior limb {i} out of range");
                }
            }
        }
    }
}
