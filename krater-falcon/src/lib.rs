//! Lattice-based signature verification over `Z_q[x]/(x^n + 1)`.
//!
//! Verification reconstructs the candidate short vector from the signature
//! half `s1`, the public key `h`, and the message point `c`:
//!
//! ```text
//! s0 = c - s1 * h  (mod q, mod x^n + 1)
//! ```
//!
//! and accepts when the centered squared norm of `(s0, s1)` stays under the
//! degree-specific bound. Ring multiplication runs through an iterative
//! negacyclic number-theoretic transform; both supported degrees (512 and
//! 1024) share one code path, with twiddle factors derived on the fly from
//! the field generator.
//!
//! All inputs are public, so the arithmetic makes no constant-time claims;
//! it does keep iteration counts data-independent.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
// Clippy allowances for cryptographic code patterns
#![allow(
    clippy::many_single_char_names,
    clippy::similar_names,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_lossless,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::needless_range_loop
)]

extern crate alloc;

pub mod field;
pub mod ntt;
pub mod params;
pub mod verify;

pub use verify::verify_lattice_based;
