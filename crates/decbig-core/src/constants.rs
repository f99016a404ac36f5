//! Constants for the limb representation and the default buffer sizes.

/// Limb radix: every limb except possibly the least significant holds a value
/// in `[0, THRESHOLD)`.
pub const THRESHOLD: u64 = 100_000_000_000_000_000; // 1e17

/// Number of decimal digits per full limb.
pub const THRESHOLD_EXP: usize = 17;

const _: () = assert!(10u64.pow(THRESHOLD_EXP as u32) == THRESHOLD);

/// Default buffer capacity, in decimal digits, for `BigInt::new`.
pub const DEFAULT_CAPACITY_DIGITS: usize = 11_000;

/// Default capacity, in decimal digits, for truncated window copies.
pub const WINDOW_CAPACITY_DIGITS: usize = 250;

/// Capacity, in decimal digits, of the short-lived operands used by the
/// native-overflow fallback in [`crate::mulmod`]. Three limbs: enough for any
/// `u64 * u64` product (at most 39 digits).
pub const MULMOD_CAPACITY_DIGITS: usize = 51;

/// Widest decimal number that is guaranteed to fit in a `u64`.
/// `u64::MAX` has 20 digits, so 20-digit values are already unreliable.
pub const U64_SAFE_DIGITS: usize = 19;

/// Decimal width of a limb slot governed by `radix` (a power of ten).
pub(crate) fn radix_width(radix: u64) -> usize {
    debug_assert!(radix >= 10 && radix.is_power_of_ten());
    radix.ilog10() as usize
}

/// Decimal width of a value (`0` counts as one digit).
pub(crate) fn value_width(value: u64) -> usize {
    value.checked_ilog10().map_or(1, |w| w as usize + 1)
}

pub(crate) trait PowerOfTen {
    fn is_power_of_ten(self) -> bool;
}

impl PowerOfTen for u64 {
    fn is_power_of_ten(self) -> bool {
        self != 0 && 10u64.pow(self.ilog10()) == self
    }
}
