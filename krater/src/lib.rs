//! # Krater
//!
//! Post-quantum signature verification core, covering two unrelated
//! signature families behind one error type and one verifier trait:
//!
//! - **Hash-based hypertree** (`sphincs`): FORS + WOTS+ + Merkle hypertree
//!   public-key recovery, 128-bit-security parameter set, SHA-256 or
//!   Blake2s hash engines
//! - **Lattice-based** (`falcon`): NTT ring arithmetic over q = 12289 and
//!   the short-vector relation check at degrees 512 and 1024
//!
//! Verification only: no key generation and no signing.
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `sphincs` (default): hash-based verification
//! - `falcon` (default): lattice-based verification
//!
//! ## Example
//!
//! ```ignore
//! use krater::sphincs::{PublicKey, Signature, SphincsSha2_128s};
//! use krater::traits::Verifier;
//!
//! let pk = PublicKey::from_bytes(&pk_bytes)?;
//! let sig = Signature::from_bytes(&sig_bytes)?;
//! SphincsSha2_128s::verify(&pk, message, &sig)?;
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub use krater_core::{Error, Result};

/// Core traits for signature verification.
pub mod traits {
    pub use krater_core::Verifier;
}

/// Hash-based hypertree signature verification.
#[cfg(feature = "sphincs")]
pub mod sphincs {
    pub use krater_core::Verifier;
    pub use krater_sphincs::*;
}

/// Lattice-based signature verification.
#[cfg(feature = "falcon")]
pub mod falcon {
    pub use krater_falcon::*;
}
