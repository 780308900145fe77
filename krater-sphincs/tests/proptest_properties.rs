//! End-to-end verification properties.
//!
//! Verification is the only product surface, so these tests carry their own
//! minimal reference signer built from the public building blocks (PRF-typed
//! hashes for secret derivation, full chain walks, bottom-up tree hashing).
//! Signing the 128s parameter set is slow, so one signature per engine is
//! produced once and shared; the properties then probe it with cheap
//! per-case perturbations.

#![cfg(feature = "sha2-engine")]

use std::sync::OnceLock;

use proptest::prelude::*;

use krater_core::Error;
use krater_sphincs::address::{Address, AddressType};
use krater_sphincs::digest::split_xdigest;
use krater_sphincs::fors::{ForsSignature, ForsTreeSig};
use krater_sphincs::hash::HashEngine;
use krater_sphincs::hash_sha2::Sha2Engine;
use krater_sphincs::params::{
    D, FORS_HEIGHT, FORS_TREES, SIG_BYTES, TREE_HEIGHT, W, WOTS_LEN, XDIGEST_BYTES,
};
use krater_sphincs::verify::{verify_hash_based, WotsMerkleSignature};
use krater_sphincs::wots::{message_digits, WotsSignature};
use krater_sphincs::words::{output_to_bytes, HashOutput};
use krater_sphincs::{PublicKey, Signature};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ---------------------------------------------------------------------------
// Reference signer
// ---------------------------------------------------------------------------

struct RefSigner<E: HashEngine> {
    engine: E,
    sk_seed: HashOutput,
}

impl<E: HashEngine> RefSigner<E> {
    fn new(pk_seed: &HashOutput, sk_seed: HashOutput) -> Self {
        Self {
            engine: E::from_seed(pk_seed),
            sk_seed,
        }
    }

    fn wots_sk(&self, layer: u8, tree: u64, keypair: u16, chain: u8) -> HashOutput {
        let mut adrs = Address::new();
        adrs.set_hypertree_layer(layer);
        adrs.set_hypertree_address(tree);
        adrs.set_address_type(AddressType::WotsPrf);
        adrs.set_keypair(keypair);
        adrs.set_wots_chain_addr(chain);
        self.engine.f(&adrs, &self.sk_seed)
    }

    fn fors_sk(&self, tree: u64, keypair: u16, abs_index: u32) -> HashOutput {
        let mut adrs = Address::new();
        adrs.set_hypertree_address(tree);
        adrs.set_address_type(AddressType::ForsPrf);
        adrs.set_keypair(keypair);
        adrs.set_tree_index(abs_index);
        self.engine.f(&adrs, &self.sk_seed)
    }

    /// Walk chain `chain` from its secret element through `steps` steps.
    fn wots_chain(&self, layer: u8, tree: u64, keypair: u16, chain: u8, steps: u32) -> HashOutput {
        let mut adrs = Address::new();
        adrs.set_hypertree_layer(layer);
        adrs.set_hypertree_address(tree);
        adrs.set_address_type(AddressType::WotsHash);
        adrs.set_keypair(keypair);
        adrs.set_wots_chain_addr(chain);

        let mut node = self.wots_sk(layer, tree, keypair, chain);
        for step in 0..steps {
            adrs.set_wots_hash_addr(step as u8);
            node = self.engine.f(&adrs, &node);
        }
        node
    }

    fn wots_leaf(&self, layer: u8, tree: u64, keypair: u16) -> HashOutput {
        let mut heads = [[0u32; 4]; WOTS_LEN];
        for (chain, head) in heads.iter_mut().enumerate() {
            *head = self.wots_chain(layer, tree, keypair, chain as u8, (W as u32) - 1);
        }

        let mut adrs = Address::new();
        adrs.set_hypertree_layer(layer);
        adrs.set_hypertree_address(tree);
        adrs.set_address_type(AddressType::WotsPk);
        adrs.set_keypair(keypair);
        self.engine.t(&adrs, &heads)
    }

    /// Hash a leaf level up to its root, recording the auth path for
    /// `target`. `index_offset` shifts node indices for side-by-side trees.
    fn treehash(
        &self,
        adrs: &mut Address,
        mut level: Vec<HashOutput>,
        target: u32,
        index_offset: u32,
    ) -> (HashOutput, Vec<HashOutput>) {
        let height = level.len().trailing_zeros() as usize;
        let mut path = Vec::with_capacity(height);
        let mut idx = target;

        for h in 0..height {
            path.push(level[(idx ^ 1) as usize]);
            adrs.set_tree_height(h as u8 + 1);
            level = level
                .chunks(2)
                .enumerate()
                .map(|(i, pair)| {
                    adrs.set_tree_index(i as u32 + (index_offset >> (h + 1)));
                    self.engine.h(adrs, &pair[0], &pair[1])
                })
                .collect();
            idx >>= 1;
        }

        (level[0], path)
    }

    /// Root of the hypertree subtree at (`layer`, `tree`), plus the auth
    /// path for leaf `target`.
    fn subtree(&self, layer: u8, tree: u64, target: u32) -> (HashOutput, Vec<HashOutput>) {
        let leaves: Vec<HashOutput> = (0..1u32 << TREE_HEIGHT)
            .map(|i| self.wots_leaf(layer, tree, i as u16))
            .collect();

        let mut adrs = Address::new();
        adrs.set_hypertree_layer(layer);
        adrs.set_hypertree_address(tree);
        adrs.set_address_type(AddressType::Tree);
        self.treehash(&mut adrs, leaves, target, 0)
    }

    fn public_key(&self, pk_seed: &HashOutput) -> PublicKey {
        let (pk_root, _) = self.subtree(D as u8 - 1, 0, 0);
        PublicKey {
            pk_seed: *pk_seed,
            pk_root,
        }
    }

    fn sign_fors(&self, md: &[u8; 21], tree: u64, keypair: u16) -> (ForsSignature, HashOutput) {
        let indices = krater_sphincs::fors::message_indices(md);

        let trees: [ForsTreeSig; FORS_TREES] = core::array::from_fn(|i| {
            let offset = (i as u32) << FORS_HEIGHT;
            let idx = indices[i];

            let mut adrs = Address::new();
            adrs.set_hypertree_address(tree);
            adrs.set_address_type(AddressType::ForsTree);
            adrs.set_keypair(keypair);

            let leaves: Vec<HashOutput> = (0..1u32 << FORS_HEIGHT)
                .map(|j| {
                    let sk = self.fors_sk(tree, keypair, offset + j);
                    adrs.set_tree_height(0);
                    adrs.set_tree_index(offset + j);
                    self.engine.f(&adrs, &sk)
                })
                .collect();

            let (_, auth) = self.treehash(&mut adrs, leaves, idx, offset);
            ForsTreeSig {
                sk: self.fors_sk(tree, keypair, offset + idx),
                auth: auth.try_into().unwrap(),
            }
        });

        let sig = ForsSignature { trees };
        let mut adrs = Address::new();
        adrs.set_hypertree_address(tree);
        adrs.set_address_type(AddressType::ForsTree);
        adrs.set_keypair(keypair);
        let pk = krater_sphincs::fors::fors_pk_from_sig(&self.engine, &sig, md, &mut adrs);
        (sig, pk)
    }

    fn sign_wots(&self, msg: &HashOutput, layer: u8, tree: u64, keypair: u16) -> WotsSignature {
        let digits = message_digits(&output_to_bytes(msg));
        WotsSignature {
            chains: core::array::from_fn(|i| {
                self.wots_chain(layer, tree, keypair, i as u8, digits[i])
            }),
        }
    }

    fn sign(&self, pk: &PublicKey, message: &[u8], randomizer: HashOutput) -> Signature {
        let digest = self
            .engine
            .hash_message(&randomizer, &pk.pk_root, message, XDIGEST_BYTES);
        let split = split_xdigest(&digest.to_bytes()).unwrap();

        let mut tree = split.tree;
        let mut leaf_idx = split.leaf_idx;

        let (fors, mut node) = self.sign_fors(&split.md, tree, leaf_idx as u16);

        let layers: [WotsMerkleSignature; D] = core::array::from_fn(|layer| {
            let wots = self.sign_wots(&node, layer as u8, tree, leaf_idx as u16);
            let (root, auth) = self.subtree(layer as u8, tree, leaf_idx);
            node = root;

            leaf_idx = (tree & ((1 << TREE_HEIGHT) - 1)) as u32;
            tree >>= TREE_HEIGHT;

            WotsMerkleSignature {
                wots,
                auth: auth.try_into().unwrap(),
            }
        });

        Signature {
            randomizer,
            fors,
            layers,
        }
    }
}

// ---------------------------------------------------------------------------
// Shared fixture: one signature per engine
// ---------------------------------------------------------------------------

const MESSAGE: &[u8] = b"attested firmware image v2.4.1";

struct Fixture {
    pk: PublicKey,
    sig: Signature,
}

fn fixture<E: HashEngine>(cell: &OnceLock<Fixture>, tag: u64) -> &Fixture {
    cell.get_or_init(|| {
        let mut rng = StdRng::seed_from_u64(tag);
        let pk_seed: HashOutput = rng.random();
        let sk_seed: HashOutput = rng.random();
        let randomizer: HashOutput = rng.random();

        let signer = RefSigner::<E>::new(&pk_seed, sk_seed);
        let pk = signer.public_key(&pk_seed);
        let sig = signer.sign(&pk, MESSAGE, randomizer);
        Fixture { pk, sig }
    })
}

fn sha2_fixture() -> &'static Fixture {
    static CELL: OnceLock<Fixture> = OnceLock::new();
    fixture::<Sha2Engine>(&CELL, 0x5eed)
}

// ---------------------------------------------------------------------------
// Deterministic end-to-end checks
// ---------------------------------------------------------------------------

#[test]
fn sha2_signature_verifies() {
    let fx = sha2_fixture();
    assert!(verify_hash_based::<Sha2Engine>(&fx.pk, MESSAGE, &fx.sig).is_ok());
}

#[test]
fn sha2_verification_is_idempotent() {
    let fx = sha2_fixture();
    for _ in 0..3 {
        assert!(verify_hash_based::<Sha2Engine>(&fx.pk, MESSAGE, &fx.sig).is_ok());
    }
}

#[test]
fn sha2_wrong_root_fails() {
    let fx = sha2_fixture();
    let mut pk = fx.pk;
    pk.pk_root[3] ^= 1;
    assert!(matches!(
        verify_hash_based::<Sha2Engine>(&pk, MESSAGE, &fx.sig),
        Err(Error::VerificationFailed)
    ));
}

#[test]
fn sha2_wrong_seed_fails() {
    let fx = sha2_fixture();
    let mut pk = fx.pk;
    pk.pk_seed[0] ^= 1;
    assert!(verify_hash_based::<Sha2Engine>(&pk, MESSAGE, &fx.sig).is_err());
}

#[cfg(feature = "blake2-engine")]
#[test]
fn blake2_signature_verifies_and_rejects_tampering() {
    use krater_sphincs::hash_blake2::Blake2Engine;

    static CELL: OnceLock<Fixture> = OnceLock::new();
    let fx = fixture::<Blake2Engine>(&CELL, 0xb2a);

    assert!(verify_hash_based::<Blake2Engine>(&fx.pk, MESSAGE, &fx.sig).is_ok());
    assert!(verify_hash_based::<Blake2Engine>(&fx.pk, b"other message", &fx.sig).is_err());

    let mut sig = fx.sig.clone();
    sig.fors.trees[0].sk[0] ^= 1;
    assert!(verify_hash_based::<Blake2Engine>(&fx.pk, MESSAGE, &sig).is_err());
}

// ---------------------------------------------------------------------------
// Perturbation properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Any single flipped bit anywhere in the signature is rejected.
    #[test]
    fn sha2_bit_flip_anywhere_fails(bit in 0usize..SIG_BYTES * 8) {
        let fx = sha2_fixture();

        let mut bytes = fx.sig.to_bytes();
        bytes[bit / 8] ^= 1 << (bit % 8);
        let tampered = Signature::from_bytes(&bytes).unwrap();

        prop_assert!(verify_hash_based::<Sha2Engine>(&fx.pk, MESSAGE, &tampered).is_err());
    }

    /// Any single-byte change to the message is rejected.
    #[test]
    fn sha2_tampered_message_fails(pos in 0usize..MESSAGE.len(), delta in 1u8..=255) {
        let fx = sha2_fixture();

        let mut tampered = MESSAGE.to_vec();
        tampered[pos] ^= delta;

        prop_assert!(verify_hash_based::<Sha2Engine>(&fx.pk, &tampered, &fx.sig).is_err());
    }

    /// Truncating the message wrecks verification too.
    #[test]
    fn sha2_length_change_fails(cut in 1usize..MESSAGE.len()) {
        let fx = sha2_fixture();
        prop_assert!(
            verify_hash_based::<Sha2Engine>(&fx.pk, &MESSAGE[..cut], &fx.sig).is_err()
        );
    }
}
