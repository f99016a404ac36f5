#![no_main]

use libfuzzer_sys::fuzz_target;

use decbig_core::BigInt;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() || data.len() > 500 {
        return;
    }
    // Interleave amortized decimal appends with full-carry scalar shifts and
    // track the rendered string exactly.
    let first = u64::from(data[0] % 9) + 1;
    let mut big = BigInt::with_offset(first, 40);
    let mut expected = first.to_string();
    for &byte in &data[1..] {
        if byte & 0x80 == 0 {
            big.multiply_by_10();
            let d = u64::from(byte % 10);
            big += d;
            expected.push(char::from(b'0' + (byte % 10)));
        } else {
            big.multiply_scalar(10, 0);
            expected.push('0');
        }
    }
    assert_eq!(big.to_string(), expected);
    assert_eq!(big.digit_count(), expected.len());
});
