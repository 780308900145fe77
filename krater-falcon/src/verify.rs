//! The lattice relation check.

use krater_core::{Error, Result};

use crate::field::{center, sub};
use crate::ntt::multiply;
use crate::params::{sq_norm_bound, Q};

/// Check one polynomial input: expected length and canonical coefficients.
fn check_poly(poly: &[u32], n: usize) -> Result<()> {
    if poly.len() != n {
        return Err(Error::InvalidCoefficientCount {
            expected: n,
            actual: poly.len(),
        });
    }
    if poly.iter().any(|&c| c >= Q) {
        return Err(Error::EncodingError);
    }
    Ok(())
}

/// Verify a lattice-based signature half against a public key and message
/// point.
///
/// Reconstructs `s0 = msg_point - s1 * pk` in the ring and accepts when the
/// centered squared norm of `(s0, s1)` is within the bound for degree `n`.
///
/// # Errors
///
/// - [`Error::UnsupportedRingDegree`] unless `n` is 512 or 1024
/// - [`Error::InvalidCoefficientCount`] if any input is not `n` long
/// - [`Error::EncodingError`] if any coefficient is `>= q`
/// - [`Error::VerificationFailed`] when the norm bound is exceeded
pub fn verify_lattice_based(s1: &[u32], pk: &[u32], msg_point: &[u32], n: usize) -> Result<()> {
    let Some(bound) = sq_norm_bound(n) else {
        return Err(Error::UnsupportedRingDegree { degree: n });
    };

    check_poly(s1, n)?;
    check_poly(pk, n)?;
    check_poly(msg_point, n)?;

    let s1h = multiply(s1, pk);

    // Norm accumulation cannot overflow: n * 2 * (q/2)^2 < 2^38.
    let mut sq_norm: u64 = 0;
    for i in 0..n {
        let s0 = i64::from(center(sub(msg_point[i], s1h[i])));
        let s1c = i64::from(center(s1[i]));
        sq_norm += (s0 * s0 + s1c * s1c) as u64;
    }

    if sq_norm <= bound {
        Ok(())
    } else {
        Err(Error::VerificationFailed)
    }
}
