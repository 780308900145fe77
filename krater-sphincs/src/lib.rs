//! Hash-based hypertree signature verification.
//!
//! This crate implements the verification half of a stateless hash-based
//! signature scheme built from three components:
//!
//! - **FORS**: Forest of Random Subsets, a few-time signature over
//!   message-derived leaf indices
//! - **WOTS+**: Winternitz one-time hash chains authenticating each
//!   subtree root
//! - **Hypertree**: a 63-level stack of 7 Merkle subtrees of height 9
//!
//! Verification recovers the public-key root from the signature alone:
//! FORS public-key recovery, then one WOTS+ chain recovery and one Merkle
//! authentication-path climb per hypertree layer, finishing with a
//! constant-time comparison against the embedded root. There is no
//! intermediate pass/fail signal and no data-dependent early exit.
//!
//! # Parameter set
//!
//! A single 128-bit-security instance is supported (16-byte hash outputs,
//! 7856-byte signatures). Two interchangeable hash engines are provided:
//!
//! | Engine | Primitive | Address layout |
//! |--------|-----------|----------------|
//! | [`hash_sha2::Sha2Engine`] | incremental SHA-256, seeded state | dense (byte-packed) |
//! | [`hash_blake2::Blake2Engine`] | one-shot Blake2s | sparse (word-aligned) |
//!
//! All hash inputs travel as word-aligned buffers ([`words::WordSpan`])
//! rather than per-byte streams, so node values never get repacked between
//! tree levels.
//!
//! # Example
//!
//! ```ignore
//! use krater_sphincs::{PublicKey, Signature, SphincsSha2_128s};
//! use krater_core::Verifier;
//!
//! let pk = PublicKey::from_bytes(&pk_bytes)?;
//! let sig = Signature::from_bytes(&sig_bytes)?;
//! SphincsSha2_128s::verify(&pk, message, &sig)?;
//! ```

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
    clippy::missing_panics_doc,
    clippy::doc_markdown,
    clippy::needless_range_loop
)]

extern crate alloc;

// Core building blocks
pub mod address;
pub mod digest;
pub mod hash;
pub mod params;
pub mod words;

mod utils;

/// SHA-256 based incremental hash engine.
#[cfg(feature = "sha2-engine")]
pub mod hash_sha2;

/// Blake2s based one-shot hash engine.
#[cfg(feature = "blake2-engine")]
pub mod hash_blake2;

// Tree algorithms
pub mod fors;
pub mod merkle;
pub mod wots;

// Top-level verification
pub mod verify;

// Scheme front doors
#[cfg(feature = "blake2-engine")]
mod sphincs_blake2_128s;
#[cfg(feature = "sha2-engine")]
mod sphincs_sha2_128s;

#[cfg(feature = "blake2-engine")]
pub use sphincs_blake2_128s::SphincsBlake2_128s;
#[cfg(feature = "sha2-engine")]
pub use sphincs_sha2_128s::SphincsSha2_128s;

pub use krater_core::Verifier;
pub use verify::{PublicKey, Signature};
pub use words::HashOutput;
