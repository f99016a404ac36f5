#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use decbig_core::BigInt;

fn from_digits(digits: &[u8]) -> (BigInt, BigUint) {
    let mut big = BigInt::new(0);
    let mut reference = BigUint::ZERO;
    for &d in digits {
        let d = u64::from(d % 10);
        big.multiply_scalar(10, 0);
        big += d;
        reference = reference * 10u32 + d;
    }
    (big, reference)
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 || data.len() > 200 {
        return;
    }
    // First byte picks the operation, the rest splits into two operands.
    let op = data[0] % 4;
    let split = 1 + (usize::from(data[1]) % (data.len() - 2).max(1));
    let (lhs_digits, rhs_digits) = data[2..].split_at(split.min(data.len() - 2));

    let (mut a, ref_a) = from_digits(lhs_digits);
    let (b, ref_b) = from_digits(rhs_digits);

    match op {
        0 => {
            a += &b;
            assert_eq!(a.to_string(), (ref_a + ref_b).to_string());
        }
        1 => {
            if ref_a >= ref_b {
                a -= &b;
                assert_eq!(a.to_string(), (ref_a - ref_b).to_string());
            }
        }
        2 => {
            a *= &b;
            assert_eq!(a.to_string(), (ref_a * ref_b).to_string());
        }
        _ => {
            let m = u64::from_le_bytes([
                data[0], data[1], data[2], data[3], 0, 0, 0, 0,
            ])
            .max(1);
            a *= &b;
            assert_eq!(
                BigUint::from(a.modulo(m)),
                ref_a * ref_b % BigUint::from(m)
            );
        }
    }
});
