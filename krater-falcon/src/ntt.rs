//! Iterative negacyclic number-theoretic transform.
//!
//! Multiplication in `Z_q[x]/(x^n + 1)` is done by twisting coefficients
//! with powers of a `2n`-th root of unity `psi`, running a plain cyclic
//! radix-2 transform on `omega = psi^2`, and untwisting on the way back.
//! Twiddle factors are derived from the field generator per call; at this
//! modulus size the derivation is a handful of exponentiations and not
//! worth caching. Loop bounds depend only on `n`, never on coefficient
//! values.

use alloc::vec::Vec;

use crate::field::{add, inv, mul, pow, sub};
use crate::params::{GENERATOR, Q};

/// Primitive `2n`-th root of unity for the given ring dimension.
///
/// `n` must be a power of two with `2n` dividing `q - 1`.
#[must_use]
pub fn psi(n: usize) -> u32 {
    debug_assert!(n.is_power_of_two() && (Q - 1) % (2 * n as u32) == 0);
    pow(GENERATOR, (Q - 1) / (2 * n as u32))
}

/// In-place bit-reversal permutation.
fn bit_reverse_permute(a: &mut [u32]) {
    let bits = a.len().trailing_zeros();
    for i in 0..a.len() {
        let j = i.reverse_bits() >> (usize::BITS - bits);
        if i < j {
            a.swap(i, j);
        }
    }
}

/// Iterative cyclic transform (Cooley-Tukey, decimation-in-time) with root
/// of unity `omega` of order `a.len()`.
fn cyclic_transform(a: &mut [u32], omega: u32) {
    let n = a.len();
    bit_reverse_permute(a);

    let mut len = 2;
    while len <= n {
        let w_len = pow(omega, (n / len) as u32);
        let mut start = 0;
        while start < n {
            let mut w = 1;
            for j in start..start + len / 2 {
                let u = a[j];
                let t = mul(w, a[j + len / 2]);
                a[j] = add(u, t);
                a[j + len / 2] = sub(u, t);
                w = mul(w, w_len);
            }
            start += len;
        }
        len <<= 1;
    }
}

/// Forward negacyclic transform, in place.
///
/// `coeffs.len()` must be a power of two no larger than 2048.
pub fn ntt(coeffs: &mut [u32]) {
    let psi = psi(coeffs.len());

    let mut p = 1;
    for c in coeffs.iter_mut() {
        *c = mul(*c, p);
        p = mul(p, psi);
    }

    cyclic_transform(coeffs, mul(psi, psi));
}

/// Inverse negacyclic transform, in place.
pub fn intt(coeffs: &mut [u32]) {
    let n = coeffs.len();
    let psi = psi(n);
    let psi_inv = inv(psi);

    cyclic_transform(coeffs, inv(mul(psi, psi)));

    // Fold the 1/n scaling into the untwist walk.
    let mut p = inv(n as u32 % Q);
    for c in coeffs.iter_mut() {
        *c = mul(*c, p);
        p = mul(p, psi_inv);
    }
}

/// `f * g mod (q, x^n + 1)`.
///
/// Both inputs must have the same power-of-two length and canonical
/// coefficients.
#[must_use]
pub fn multiply(f: &[u32], g: &[u32]) -> Vec<u32> {
    debug_assert_eq!(f.len(), g.len());

    let mut fh = f.to_vec();
    let mut gh = g.to_vec();
    ntt(&mut fh);
    ntt(&mut gh);

    for (a, b) in fh.iter_mut().zip(gh.iter()) {
        *a = mul(*a, *b);
    }

    intt(&mut fh);
    fh
}
