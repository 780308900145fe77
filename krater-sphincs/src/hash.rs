//! Hash engine capability trait.

use crate::address::{Address, AddressLayout};
use crate::words::{HashOutput, WordArray};

/// Tweakable hash engine backing every tree operation.
///
/// An engine is constructed once per verification call from the public seed
/// (the "seeded" state) and reused for every subsequent domain-separated
/// hash; for the incremental SHA-256 backend this amortizes a fixed
/// one-block absorption across thousands of calls. Engines hold no state
/// beyond that seed material, so independent verification calls never
/// interact.
///
/// Which of the two address word layouts the engine consumes is part of its
/// identity: the rest of the system stays layout-agnostic.
pub trait HashEngine {
    /// Address layout this engine feeds to the primitive.
    const LAYOUT: AddressLayout;

    /// Build the seeded state from the public seed.
    fn from_seed(pk_seed: &HashOutput) -> Self;

    /// Chain/leaf hash: one 16-byte input.
    fn f(&self, adrs: &Address, input: &HashOutput) -> HashOutput;

    /// Node hash: two 16-byte children.
    fn h(&self, adrs: &Address, left: &HashOutput, right: &HashOutput) -> HashOutput;

    /// Compression hash over a variable-length run of digests
    /// (WOTS+ chain endpoints or FORS roots).
    fn t(&self, adrs: &Address, inputs: &[HashOutput]) -> HashOutput;

    /// Extended message digest: randomizer, seeds, and message expanded to
    /// `out_len` bytes of pseudorandom output.
    fn hash_message(
        &self,
        randomizer: &HashOutput,
        pk_root: &HashOutput,
        message: &[u8],
        out_len: usize,
    ) -> WordArray;
}
