//! Verification trait shared by the signature schemes.

use crate::Result;

/// Signature verification trait.
///
/// Each supported scheme exposes its verification entry point through this
/// trait so a batch-verification pipeline can dispatch over schemes
/// uniformly. Verification is a pure function: no state survives across
/// calls, and identical inputs always produce identical outcomes.
///
/// # Example
///
/// ```ignore
/// use krater_core::Verifier;
///
/// MyScheme::verify(&pk, message, &sig)?;
/// ```
pub trait Verifier {
    /// Verification key (public key).
    type VerificationKey: Clone;

    /// Signature to verify.
    type Signature: Clone;

    /// Size of the serialized verification key in bytes.
    const VERIFICATION_KEY_SIZE: usize;

    /// Size of the serialized signature in bytes.
    const SIGNATURE_SIZE: usize;

    /// Verify a signature over a message.
    ///
    /// # Arguments
    ///
    /// * `pk` - The verification (public) key.
    /// * `message` - The message that was signed.
    /// * `signature` - The signature to verify.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the signature is valid, `Err(Error::VerificationFailed)`
    /// otherwise. Malformed inputs are rejected before any cryptographic
    /// work with a distinguishable length error.
    fn verify(
        pk: &Self::VerificationKey,
        message: &[u8],
        signature: &Self::Signature,
    ) -> Result<()>;
}
