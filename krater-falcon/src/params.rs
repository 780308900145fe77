//! Fixed parameters for the two supported ring degrees.

/// Field modulus, `q = 3 * 2^12 + 1`. NTT-friendly: `2^13 | q - 1`, so the
/// field has primitive `2n`-th roots of unity for both supported degrees.
pub const Q: u32 = 12289;

/// A generator of the full multiplicative group of `Z_q` (order `q - 1`).
pub const GENERATOR: u32 = 11;

/// Degree-512 ring dimension.
pub const N_512: usize = 512;

/// Degree-1024 ring dimension.
pub const N_1024: usize = 1024;

/// Maximum accepted squared norm of `(s0, s1)` at degree 512.
pub const SQ_NORM_BOUND_512: u64 = 34_034_726;

/// Maximum accepted squared norm of `(s0, s1)` at degree 1024.
pub const SQ_NORM_BOUND_1024: u64 = 70_265_242;

/// The squared-norm bound for a supported degree, if any.
#[must_use]
pub fn sq_norm_bound(n: usize) -> Option<u64> {
    match n {
        N_512 => Some(SQ_NORM_BOUND_512),
        N_1024 => Some(SQ_NORM_BOUND_1024),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modulus_is_ntt_friendly() {
        assert_eq!(Q, 3 * (1 << 12) + 1);
        assert_eq!((Q - 1) % (2 * N_1024 as u32), 0);
    }

    #[test]
    fn bounds_only_for_supported_degrees() {
        assert_eq!(sq_norm_bound(512), Some(SQ_NORM_BOUND_512));
        assert_eq!(sq_norm_bound(1024), Some(SQ_NORM_BOUND_1024));
        assert_eq!(sq_norm_bound(256), None);
        assert_eq!(sq_norm_bound(0), None);
    }
}
