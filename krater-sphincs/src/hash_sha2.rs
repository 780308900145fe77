//! Incremental SHA-256 hash engine.
//!
//! Every tweakable hash is `Trunc_16(SHA-256(pk_seed || toByte(0, 48) ||
//! ADRS_dense || inputs))`. The `pk_seed || padding` prefix fills exactly one
//! 64-byte compression block, so it is absorbed once at engine construction
//! and the midstate cloned per call. Addresses contribute their 22
//! meaningful dense-layout bytes: five full words plus a two-byte partial
//! word.
//!
//! The extended message digest is MGF1-SHA-256 over
//! `R || pk_seed || SHA-256(R || pk_seed || pk_root || M)` with a big-endian
//! 4-byte block counter.

use crate::address::{Address, AddressLayout};
use crate::hash::HashEngine;
use crate::params::N;
use crate::words::{output_from_bytes, output_to_bytes, HashOutput, WordArray, WordSpan};
use sha2::{Digest, Sha256};

use alloc::vec::Vec;

/// Zero padding aligning the seed prefix to the SHA-256 block: toByte(0, 64 - N).
const SEED_PADDING: [u8; 64 - N] = [0u8; 64 - N];

/// SHA-256 output size in bytes.
const SHA256_LEN: usize = 32;

/// Feed a word span to a hasher, big-endian per word.
fn absorb(hasher: &mut Sha256, span: &WordSpan<'_>) {
    for word in span.words() {
        hasher.update(word.to_be_bytes());
    }
    let (tail, len) = span.partial_bytes();
    hasher.update(&tail[..len]);
}

/// Incremental SHA-256 engine with a pre-absorbed seed block.
#[derive(Clone)]
pub struct Sha2Engine {
    base: Sha256,
    pk_seed: [u8; N],
}

impl Sha2Engine {
    /// Truncated seeded hash over an address and a run of digest inputs.
    fn thash<'a>(
        &self,
        adrs: &Address,
        inputs: impl IntoIterator<Item = &'a HashOutput>,
    ) -> HashOutput {
        let mut hasher = self.base.clone();
        let words = adrs.to_words(AddressLayout::Dense);
        absorb(&mut hasher, &WordSpan::new(&words[..5], words[5], 2));
        for input in inputs {
            absorb(&mut hasher, &WordSpan::full(&input[..]));
        }
        let digest = hasher.finalize();
        let mut out = [0u8; N];
        out.copy_from_slice(&digest[..N]);
        output_from_bytes(&out)
    }
}

/// MGF1 mask generation over pre-hashed seed parts.
fn mgf1_sha256(seed_parts: &[&[u8]], mask_len: usize) -> Vec<u8> {
    let num_blocks = mask_len.div_ceil(SHA256_LEN);
    let mut output = Vec::with_capacity(num_blocks * SHA256_LEN);

    // Absorb the seed once, clone the midstate per counter block.
    let mut base_hasher = Sha256::new();
    for part in seed_parts {
        base_hasher.update(part);
    }

    for i in 0..num_blocks as u32 {
        let mut hasher = base_hasher.clone();
        hasher.update(i.to_be_bytes());
        output.extend_from_slice(&hasher.finalize());
    }

    output.truncate(mask_len);
    output
}

impl HashEngine for Sha2Engine {
    const LAYOUT: AddressLayout = AddressLayout::Dense;

    fn from_seed(pk_seed: &HashOutput) -> Self {
        let seed_bytes = output_to_bytes(pk_seed);
        let mut base = Sha256::new();
        base.update(seed_bytes);
        base.update(SEED_PADDING);
        Self {
            base,
            pk_seed: seed_bytes,
        }
    }

    fn f(&self, adrs: &Address, input: &HashOutput) -> HashOutput {
        self.thash(adrs, [input])
    }

    fn h(&self, adrs: &Address, left: &HashOutput, right: &HashOutput) -> HashOutput {
        self.thash(adrs, [left, right])
    }

    fn t(&self, adrs: &Address, inputs: &[HashOutput]) -> HashOutput {
        self.thash(adrs, inputs)
    }

    fn hash_message(
        &self,
        randomizer: &HashOutput,
        pk_root: &HashOutput,
        message: &[u8],
        out_len: usize,
    ) -> WordArray {
        let r = output_to_bytes(randomizer);
        let root = output_to_bytes(pk_root);

        let mut hasher = Sha256::new();
        hasher.update(r);
        hasher.update(self.pk_seed);
        hasher.update(root);
        hasher.update(message);
        let inner = hasher.finalize();

        let expanded = mgf1_sha256(&[&r, &self.pk_seed, &inner], out_len);
        WordArray::from_bytes(&expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::AddressType;
    use crate::params::XDIGEST_BYTES;

    fn engine() -> Sha2Engine {
        Sha2Engine::from_seed(&[0x0102_0304, 0x0506_0708, 0x090A_0B0C, 0x0D0E_0F10])
    }

    #[test]
    fn f_matches_unseeded_computation() {
        // The pre-absorbed midstate must be equivalent to hashing the full
        // input stream from scratch.
        let eng = engine();
        let mut adrs = Address::new();
        adrs.set_address_type(AddressType::ForsTree);
        adrs.set_tree_index(42);
        let input: HashOutput = [1, 2, 3, 4];

        let out = eng.f(&adrs, &input);

        let mut hasher = Sha256::new();
        hasher.update(output_to_bytes(&[0x0102_0304, 0x0506_0708, 0x090A_0B0C, 0x0D0E_0F10]));
        hasher.update(SEED_PADDING);
        let words = adrs.to_words(AddressLayout::Dense);
        let mut dense = Vec::new();
        for w in &words[..5] {
            dense.extend_from_slice(&w.to_be_bytes());
        }
        dense.extend_from_slice(&words[5].to_be_bytes()[..2]);
        hasher.update(&dense);
        hasher.update(output_to_bytes(&input));
        let digest = hasher.finalize();
        assert_eq!(output_to_bytes(&out), digest[..16]);
    }

    #[test]
    fn f_is_deterministic_and_domain_separated() {
        let eng = engine();
        let mut adrs1 = Address::new();
        adrs1.set_address_type(AddressType::ForsTree);
        let mut adrs2 = adrs1;
        adrs2.set_tree_index(1);
        let input: HashOutput = [0; 4];

        assert_eq!(eng.f(&adrs1, &input), eng.f(&adrs1, &input));
        assert_ne!(eng.f(&adrs1, &input), eng.f(&adrs2, &input));
    }

    #[test]
    fn h_orders_children() {
        let eng = engine();
        let adrs = Address::new();
        let a: HashOutput = [1; 4];
        let b: HashOutput = [2; 4];
        assert_ne!(eng.h(&adrs, &a, &b), eng.h(&adrs, &b, &a));
    }

    #[test]
    fn t_compresses_runs() {
        let eng = engine();
        let adrs = Address::new();
        let inputs = [[1u32; 4]; 35];
        let out = eng.t(&adrs, &inputs);
        assert_eq!(out.len(), 4);
        // h(a, b) and t([a, b]) share the same domain and inputs.
        assert_eq!(eng.t(&adrs, &inputs[..2]), eng.h(&adrs, &inputs[0], &inputs[1]));
    }

    #[test]
    fn mgf1_prefix_property() {
        let seed = b"expansion seed";
        let long = mgf1_sha256(&[seed.as_slice()], 64);
        let short = mgf1_sha256(&[seed.as_slice()], 32);
        assert_eq!(long.len(), 64);
        assert_eq!(&long[..32], &short[..]);
    }

    #[test]
    fn hash_message_shape() {
        let eng = engine();
        let digest = eng.hash_message(&[7; 4], &[9; 4], b"msg", XDIGEST_BYTES);
        assert_eq!(digest.byte_len(), XDIGEST_BYTES);

        // 30 bytes = 7 full words + 2 partial bytes.
        let (words, _, partial_len) = digest.clone().into_components();
        assert_eq!(words.len(), 7);
        assert_eq!(partial_len, 2);

        // Sensitive to every input.
        assert_ne!(
            digest,
            eng.hash_message(&[7; 4], &[9; 4], b"msh", XDIGEST_BYTES)
        );
        assert_ne!(
            digest,
            eng.hash_message(&[8; 4], &[9; 4], b"msg", XDIGEST_BYTES)
        );
    }
}
