//! Arithmetic in `Z_q` for `q = 12289`.
//!
//! Coefficients are canonical `u32` values in `[0, q)`. Products fit in
//! `u64` with room to spare, so reduction is a plain remainder; no
//! Montgomery or Barrett machinery is needed at this modulus size.

use crate::params::Q;

/// `a + b mod q`.
#[inline]
#[must_use]
pub fn add(a: u32, b: u32) -> u32 {
    let s = a + b;
    if s >= Q {
        s - Q
    } else {
        s
    }
}

/// `a - b mod q`.
#[inline]
#[must_use]
pub fn sub(a: u32, b: u32) -> u32 {
    if a >= b {
        a - b
    } else {
        a + Q - b
    }
}

/// `a * b mod q`.
#[inline]
#[must_use]
pub fn mul(a: u32, b: u32) -> u32 {
    ((u64::from(a) * u64::from(b)) % u64::from(Q)) as u32
}

/// `base^exp mod q` by square-and-multiply.
#[must_use]
pub fn pow(base: u32, mut exp: u32) -> u32 {
    let mut acc = 1;
    let mut sq = base % Q;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = mul(acc, sq);
        }
        sq = mul(sq, sq);
        exp >>= 1;
    }
    acc
}

/// Multiplicative inverse of a nonzero element, via Fermat's little theorem.
#[must_use]
pub fn inv(a: u32) -> u32 {
    debug_assert!(a % Q != 0, "zero has no inverse");
    pow(a, Q - 2)
}

/// Lift a canonical coefficient to its centered representative in
/// `[-(q-1)/2, (q-1)/2]`.
#[inline]
#[must_use]
pub fn center(a: u32) -> i32 {
    debug_assert!(a < Q);
    if a > Q / 2 {
        a as i32 - Q as i32
    } else {
        a as i32
    }
}
