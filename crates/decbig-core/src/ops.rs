//! `std::ops` operator surface.
//!
//! Compound operators mutate in place; the value-returning forms clone first,
//! which duplicates the whole limb buffer. Hot paths should prefer `+=`,
//! `-=`, `*=`.

use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use crate::bigint::BigInt;

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        self.add_big(rhs);
    }
}

impl AddAssign<u64> for BigInt {
    fn add_assign(&mut self, rhs: u64) {
        self.add_scalar(rhs);
    }
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        self.sub_big(rhs);
    }
}

impl SubAssign<u64> for BigInt {
    fn sub_assign(&mut self, rhs: u64) {
        self.sub_big(&BigInt::new(rhs));
    }
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        self.mul_big(rhs);
    }
}

impl MulAssign<u64> for BigInt {
    fn mul_assign(&mut self, rhs: u64) {
        self.multiply_scalar(rhs, 0);
    }
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        let mut out = self.clone();
        out += rhs;
        out
    }
}

impl Add<u64> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: u64) -> BigInt {
        let mut out = self.clone();
        out += rhs;
        out
    }
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        let mut out = self.clone();
        out -= rhs;
        out
    }
}

impl Sub<u64> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: u64) -> BigInt {
        let mut out = self.clone();
        out -= rhs;
        out
    }
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        let mut out = self.clone();
        out *= rhs;
        out
    }
}

impl Mul<u64> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: u64) -> BigInt {
        let mut out = self.clone();
        out *= rhs;
        out
    }
}
