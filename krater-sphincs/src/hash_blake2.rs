//! One-shot Blake2s hash engine.
//!
//! Every tweakable hash is `Trunc_16(Blake2s-256(pk_seed || ADRS_sparse ||
//! inputs))`. The primitive consumes the stream in 16-word (64-byte) blocks
//! and zero-pads the final partial block internally; the 8-word digest is
//! truncated to 4 words. Addresses use the sparse layout so every sub-field
//! lands 4-byte aligned in the block.
//!
//! The extended message digest reuses the counter-block expansion shape of
//! the SHA-256 engine, with Blake2s as the expander.

use crate::address::{Address, AddressLayout};
use crate::hash::HashEngine;
use crate::params::N;
use crate::words::{output_from_bytes, output_to_bytes, HashOutput, WordArray, WordSpan};
use blake2::{Blake2s256, Digest};

use alloc::vec::Vec;

/// Blake2s-256 output size in bytes.
const BLAKE2S_LEN: usize = 32;

/// Feed a word span to a hasher, big-endian per word.
fn absorb(hasher: &mut Blake2s256, span: &WordSpan<'_>) {
    for word in span.words() {
        hasher.update(word.to_be_bytes());
    }
    let (tail, len) = span.partial_bytes();
    hasher.update(&tail[..len]);
}

/// Counter-block expansion of pre-hashed seed parts.
fn blake2_expand(seed_parts: &[&[u8]], mask_len: usize) -> Vec<u8> {
    let num_blocks = mask_len.div_ceil(BLAKE2S_LEN);
    let mut output = Vec::with_capacity(num_blocks * BLAKE2S_LEN);

    let mut base_hasher = Blake2s256::new();
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

/// One-shot Blake2s engine.
#[derive(Clone)]
pub struct Blake2Engine {
    pk_seed: [u8; N],
}

impl Blake2Engine {
    /// Truncated seeded hash over an address and a run of digest inputs.
    fn thash<'a>(
        &self,
        adrs: &Address,
        inputs: impl IntoIterator<Item = &'a HashOutput>,
    ) -> HashOutput {
        let mut hasher = Blake2s256::new();
        hasher.update(self.pk_seed);
        let words = adrs.to_words(AddressLayout::Sparse);
        absorb(&mut hasher, &WordSpan::full(&words));
        for input in inputs {
            absorb(&mut hasher, &WordSpan::full(&input[..]));
        }
        let digest = hasher.finalize();
        let mut out = [0u8; N];
        out.copy_from_slice(&digest[..N]);
        output_from_bytes(&out)
    }
}

impl HashEngine for Blake2Engine {
    const LAYOUT: AddressLayout = AddressLayout::Sparse;

    fn from_seed(pk_seed: &HashOutput) -> Self {
        Self {
            pk_seed: output_to_bytes(pk_seed),
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

        let mut hasher = Blake2s256::new();
        hasher.update(r);
        hasher.update(self.pk_seed);
        hasher.update(root);
        hasher.update(message);
        let inner = hasher.finalize();

        let expanded = blake2_expand(&[&r, &self.pk_seed, &inner], out_len);
        WordArray::from_bytes(&expanded)
    }
}
