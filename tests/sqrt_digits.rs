//! Integration test driving the engine the way its square-root consumer
//! does: digit-by-digit root extraction with scalar multiplies, compound
//! subtraction, comparisons, and the amortized decimal append, checked
//! against integer square roots from num-bigint.

use num_bigint::BigUint;
use num_integer::Roots;

use decbig_core::BigInt;

/// First `count` decimal digits of sqrt(n) for a single-digit radicand,
/// via classic digit-by-digit extraction: at every step, find the largest
/// digit x with (20*root + x) * x <= remainder, subtract, and bring down
/// the next pair of zeros.
fn sqrt_digits(n: u64, count: usize) -> (String, BigInt) {
    assert!((2..=9).contains(&n));
    let mut remainder = BigInt::new(n);
    let mut root = BigInt::with_offset(0, 16);
    let mut out = String::new();
    for _ in 0..count {
        let mut digit = 0u64;
        let mut chosen: Option<BigInt> = None;
        for x in 1..=9u64 {
            let mut trial = root.clone();
            trial.multiply_scalar(20, 0);
            trial += x;
            trial.multiply_scalar(x, 0);
            if trial <= remainder {
                digit = x;
                chosen = Some(trial);
            } else {
                break;
            }
        }
        if let Some(trial) = chosen {
            remainder -= &trial;
        }
        root.multiply_scalar(10, 0);
        root += digit;
        out.push(char::from(b'0' + u8::try_from(digit).unwrap()));
        remainder.multiply_scalar(100, 0);
    }
    (out, root)
}

/// Reference: decimal digits of isqrt(n * 100^(count-1)).
fn reference_sqrt_digits(n: u64, count: usize) -> String {
    let scaled = BigUint::from(n) * BigUint::from(100u32).pow(u32::try_from(count - 1).unwrap());
    scaled.sqrt().to_string()
}

#[test]
fn irrational_roots_match_reference() {
    for n in [2u64, 3, 5, 7, 8] {
        let (digits, _) = sqrt_digits(n, 60);
        assert_eq!(digits, reference_sqrt_digits(n, 60), "sqrt({n})");
    }
}

#[test]
fn perfect_square_root_terminates_in_zeros() {
    let (digits, _) = sqrt_digits(4, 40);
    assert_eq!(digits, format!("2{}", "0".repeat(39)));
    let (digits, _) = sqrt_digits(9, 40);
    assert_eq!(digits, format!("3{}", "0".repeat(39)));
}

#[test]
fn root_digit_sum_matches_extracted_digits() {
    let (digits, root) = sqrt_digits(2, 100);
    let expected: u64 = digits.bytes().map(|b| u64::from(b - b'0')).sum();
    assert_eq!(root.digit_sum(0), expected);
    assert_eq!(root.digit_count(), 100);
    assert_eq!(root.to_string(), digits);
}

#[test]
fn windowed_views_keep_leading_digits() {
    // A reduced-precision window of the running root keeps whole leading
    // limbs; the rendered window is a prefix of the full rendering.
    let (_, root) = sqrt_digits(3, 90);
    let full = root.to_string();
    let limbs = root.active_limb_count();
    assert!(limbs > 3);
    for keep in 1..3usize {
        let window = root.window(keep);
        let dropped = limbs - (keep + 1);
        let expected = &full[..full.len() - dropped * 17];
        assert_eq!(window.to_string(), expected, "window({keep})");
    }
    // A window wider than the number is the whole number.
    assert_eq!(root.window(limbs + 5).to_string(), full);
}

#[test]
fn rough_estimates_order_like_full_values() {
    // The consumer compares truncated views of two same-scale numbers to
    // decide the next digit; ordering on the windows must agree with
    // ordering on the full values when the leading limbs differ.
    let mut a = BigInt::new(1);
    for _ in 0..79 {
        a.multiply_scalar(10, 0);
    }
    let mut b = a.clone();
    b += 1_000_000; // perturbs the lowest limb only
    assert!(b > a);
    // Leading limbs unchanged: the rough views are equal.
    assert!(a.window(2) == b.window(2));

    let mut c = a.clone();
    c.multiply_scalar(3, 0);
    assert!(c.window(2) > a.window(2));
}
