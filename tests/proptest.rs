//! Property-based tests pitting the engine against num-bigint as an
//! independent arbitrary-precision reference.

use std::str::FromStr;

use num_bigint::BigUint;
use proptest::prelude::*;

use decbig_core::BigInt;

/// Build a `BigInt` from a decimal string by full-carry digit appends.
fn bigint_from_decimal(s: &str) -> BigInt {
    bigint_from_decimal_at(s, 0)
}

/// Same, placed at `offset` limbs so the window can later grow downward.
fn bigint_from_decimal_at(s: &str, offset: usize) -> BigInt {
    let mut out = BigInt::with_offset(0, offset);
    for byte in s.bytes() {
        out.multiply_scalar(10, 0);
        out += u64::from(byte - b'0');
    }
    out
}

fn reference(s: &str) -> BigUint {
    BigUint::from_str(s).expect("reference parse")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(30))]

    /// (a - b) + b == a whenever a >= b.
    #[test]
    fn sub_add_round_trip(x in "[1-9][0-9]{0,38}", y in "[1-9][0-9]{0,38}") {
        let (a, b) = if reference(&x) >= reference(&y) { (x, y) } else { (y, x) };
        let big_a = bigint_from_decimal(&a);
        let big_b = bigint_from_decimal(&b);
        let mut result = big_a.clone();
        result -= &big_b;
        result += &big_b;
        prop_assert_eq!(result.to_string(), a);
        prop_assert!(result == big_a);
    }

    /// Scalar multiplication matches the reference.
    #[test]
    fn scalar_mul_matches_reference(a in "[1-9][0-9]{0,38}", k in any::<u64>()) {
        let mut big = bigint_from_decimal(&a);
        big *= k;
        let expected = reference(&a) * k;
        prop_assert_eq!(big.to_string(), expected.to_string());
    }

    /// Schoolbook multiplication matches the reference.
    #[test]
    fn big_mul_matches_reference(a in "[1-9][0-9]{0,38}", b in "[1-9][0-9]{0,38}") {
        let mut big = bigint_from_decimal(&a);
        big *= &bigint_from_decimal(&b);
        let expected = reference(&a) * reference(&b);
        prop_assert_eq!(big.to_string(), expected.to_string());
    }

    /// Addition matches the reference.
    #[test]
    fn add_matches_reference(a in "[1-9][0-9]{0,38}", b in "[1-9][0-9]{0,38}") {
        let mut big = bigint_from_decimal(&a);
        big += &bigint_from_decimal(&b);
        let expected = reference(&a) + reference(&b);
        prop_assert_eq!(big.to_string(), expected.to_string());
    }

    /// d amortized decimal shifts equal d appended zeros.
    #[test]
    fn multiply_by_10_appends_zeros(a in "[1-9][0-9]{0,30}", d in 0usize..40) {
        let mut big = bigint_from_decimal_at(&a, 8);
        for _ in 0..d {
            big.multiply_by_10();
        }
        let expected = format!("{a}{}", "0".repeat(d));
        prop_assert_eq!(big.to_string(), expected);
        prop_assert_eq!(big.digit_count(), a.len() + d);
    }

    /// Appending random digits through the sub-threshold path tracks the
    /// decimal string exactly.
    #[test]
    fn digit_appends_track_string(s in "[1-9][0-9]{0,60}") {
        let mut bytes = s.bytes();
        let first = u64::from(bytes.next().unwrap() - b'0');
        let mut big = BigInt::with_offset(first, 8);
        for byte in bytes {
            big.multiply_by_10();
            big += u64::from(byte - b'0');
        }
        prop_assert_eq!(big.to_string(), s.clone());
        prop_assert_eq!(big.digit_count(), s.len());
    }

    /// Prefix digit sums agree with the rendered string.
    #[test]
    fn digit_sum_matches_string_prefix(a in "[1-9][0-9]{0,38}", limit in 0usize..45) {
        let big = bigint_from_decimal(&a);
        let take = if limit == 0 { a.len() } else { limit.min(a.len()) };
        let expected: u64 = a.bytes().take(take).map(|b| u64::from(b - b'0')).sum();
        prop_assert_eq!(big.digit_sum(limit), expected);
    }

    /// Horner modular reduction agrees with the reference for primes and
    /// composites alike.
    #[test]
    fn modulo_matches_reference(a in "[1-9][0-9]{0,38}", m in 1u64..1_000_000_000_000) {
        let big = bigint_from_decimal(&a);
        let expected = reference(&a) % BigUint::from(m);
        prop_assert_eq!(BigUint::from(big.modulo(m)), expected);
    }

    /// Window comparison reproduces numeric ordering for same-convention
    /// operands.
    #[test]
    fn comparison_matches_reference(a in "[1-9][0-9]{0,38}", b in "[1-9][0-9]{0,38}") {
        let big_a = bigint_from_decimal(&a);
        let big_b = bigint_from_decimal(&b);
        let (ref_a, ref_b) = (reference(&a), reference(&b));
        prop_assert_eq!(big_a == big_b, ref_a == ref_b);
        prop_assert_eq!(big_a > big_b, ref_a > ref_b);
        prop_assert_eq!(big_a < big_b, ref_a < ref_b);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(15))]

    /// mul_mod equals the u128 reference for arbitrary operands.
    #[test]
    fn mul_mod_matches_reference(a in any::<u64>(), b in any::<u64>(), m in 1u64..) {
        let expected = u64::try_from(u128::from(a) * u128::from(b) % u128::from(m)).unwrap();
        prop_assert_eq!(decbig_core::mul_mod(a, b, m), expected);
    }
}
