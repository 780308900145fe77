//! Blake2-128s verifier front door.
//!
//! One-shot Blake2s engine, sparse address layout.

use krater_core::{Result, Verifier};

use crate::hash_blake2::Blake2Engine;
use crate::params::{PK_BYTES, SIG_BYTES};
use crate::verify::{verify_hash_based, PublicKey, Signature};

/// The 128-bit-security, small-signature instance over Blake2s.
#[derive(Clone, Copy, Debug)]
pub struct SphincsBlake2_128s;

impl Verifier for SphincsBlake2_128s {
    type VerificationKey = PublicKey;
    type Signature = Signature;

    const VERIFICATION_KEY_SIZE: usize = PK_BYTES;
    const SIGNATURE_SIZE: usize = SIG_BYTES;

    fn verify(pk: &PublicKey, message: &[u8], signature: &Signature) -> Result<()> {
        verify_hash_based::<Blake2Engine>(pk, message, signature)
    }
}
