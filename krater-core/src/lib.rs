//! # Krater Core
//!
//! Core traits and utilities for the Krater post-quantum signature
//! verification library.
//!
//! This crate provides:
//! - Common error types
//! - The `Verifier` trait implemented by each signature scheme
//! - Secure memory handling with zeroize integration

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod traits;

pub use error::{Error, Result};
pub use traits::Verifier;

/// Re-export zeroize for convenience.
pub use zeroize::{Zeroize, ZeroizeOnDrop};

/// Re-export subtle for constant-time operations.
pub use subtle;
