//! SHA2-128s verifier front door.
//!
//! Seeded incremental SHA-256 engine, dense address layout.

use krater_core::{Result, Verifier};

use crate::hash_sha2::Sha2Engine;
use crate::params::{PK_BYTES, SIG_BYTES};
use crate::verify::{verify_hash_based, PublicKey, Signature};

/// The 128-bit-security, small-signature instance over SHA-256.
#[derive(Clone, Copy, Debug)]
pub struct SphincsSha2_128s;

impl Verifier for SphincsSha2_128s {
    type VerificationKey = PublicKey;
    type Signature = Signature;

    const VERIFICATION_KEY_SIZE: usize = PK_BYTES;
    const SIGNATURE_SIZE: usize = SIG_BYTES;

    fn verify(pk: &PublicKey, message: &[u8], signature: &Signature) -> Result<()> {
        verify_hash_based::<Sha2Engine>(pk, message, signature)
    }
}
