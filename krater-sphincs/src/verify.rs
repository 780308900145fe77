//! Hypertree signature verification.
//!
//! A signature is accepted only if the chain of recoveries — extended
//! digest, FORS public key, then seven alternating WOTS+ recoveries and
//! Merkle climbs — lands exactly on the root committed in the public key.
//! No intermediate value is checked on its own; a single flipped bit
//! anywhere surfaces as a root mismatch at the top.

use alloc::vec::Vec;

use krater_core::subtle::ConstantTimeEq;
use krater_core::{Error, Result};

use crate::address::{Address, AddressType};
use crate::digest::split_xdigest;
use crate::fors::{ForsSignature, ForsTreeSig};
use crate::hash::HashEngine;
use crate::merkle::compute_root;
use crate::params::{D, N, PK_BYTES, SIG_BYTES, TREE_HEIGHT, XDIGEST_BYTES};
use crate::wots::{wots_pk_from_sig, WotsSignature};
use crate::words::{output_from_bytes, output_to_bytes, HashOutput};

/// A hash-based verification key: public seed plus hypertree root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey {
    /// Public seed binding every tweakable hash to this key.
    pub pk_seed: HashOutput,
    /// Root of the top-layer subtree.
    pub pk_root: HashOutput,
}

/// One hypertree layer of a signature: a WOTS+ signature over the child
/// root plus the authentication path to the subtree root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WotsMerkleSignature {
    /// WOTS+ signature over the node below this subtree.
    pub wots: WotsSignature,
    /// Sibling nodes from the signing leaf to just below the subtree root.
    pub auth: [HashOutput; TREE_HEIGHT],
}

/// A full hash-based signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    /// Randomizer mixed into the message digest.
    pub randomizer: HashOutput,
    /// FORS leaf reveals for the message hash.
    pub fors: ForsSignature,
    /// One WOTS+/Merkle pair per hypertree layer, bottom first.
    pub layers: [WotsMerkleSignature; D],
}

/// Sequential big-endian reader over a checked-length byte slice.
struct Reader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    fn output(&mut self) -> HashOutput {
        let mut buf = [0u8; N];
        buf.copy_from_slice(&self.bytes[self.offset..self.offset + N]);
        self.offset += N;
        output_from_bytes(&buf)
    }
}

impl PublicKey {
    /// Parse a 32-byte verification key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKeyLength`] on any other length.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PK_BYTES {
            return Err(Error::InvalidKeyLength {
                expected: PK_BYTES,
                actual: bytes.len(),
            });
        }
        let mut reader = Reader::new(bytes);
        Ok(Self {
            pk_seed: reader.output(),
            pk_root: reader.output(),
        })
    }

    /// Serialize to the 32-byte wire form.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; PK_BYTES] {
        let mut out = [0u8; PK_BYTES];
        out[..N].copy_from_slice(&output_to_bytes(&self.pk_seed));
        out[N..].copy_from_slice(&output_to_bytes(&self.pk_root));
        out
    }
}

impl Signature {
    /// Parse a 7856-byte signature.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSignatureLength`] on any other length.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SIG_BYTES {
            return Err(Error::InvalidSignatureLength {
                expected: SIG_BYTES,
                actual: bytes.len(),
            });
        }

        let mut reader = Reader::new(bytes);
        let randomizer = reader.output();
        let fors = ForsSignature {
            trees: core::array::from_fn(|_| ForsTreeSig {
                sk: reader.output(),
                auth: core::array::from_fn(|_| reader.output()),
            }),
        };
        let layers = core::array::from_fn(|_| WotsMerkleSignature {
            wots: WotsSignature {
                chains: core::array::from_fn(|_| reader.output()),
            },
            auth: core::array::from_fn(|_| reader.output()),
        });

        Ok(Self {
            randomizer,
            fors,
            layers,
        })
    }

    /// Serialize to the 7856-byte wire form.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(SIG_BYTES);
        let mut push = |output: &HashOutput| out.extend_from_slice(&output_to_bytes(output));

        push(&self.randomizer);
        for tree in &self.fors.trees {
            push(&tree.sk);
            for node in &tree.auth {
                push(node);
            }
        }
        for layer in &self.layers {
            for chain in &layer.wots.chains {
                push(chain);
            }
            for node in &layer.auth {
                push(node);
            }
        }
        out
    }
}

/// Verify a hash-based signature under the given engine.
///
/// # Errors
///
/// Returns [`Error::VerificationFailed`] if the recomputed hypertree root
/// does not match the public key, or a length error from digest splitting.
pub fn verify_hash_based<E: HashEngine>(
    pk: &PublicKey,
    message: &[u8],
    sig: &Signature,
) -> Result<()> {
    let engine = E::from_seed(&pk.pk_seed);

    let digest = engine.hash_message(&sig.randomizer, &pk.pk_root, message, XDIGEST_BYTES);
    let split = split_xdigest(&digest.to_bytes())?;

    let mut tree = split.tree;
    let mut leaf_idx = split.leaf_idx;

    let mut adrs = Address::new();
    adrs.set_hypertree_address(tree);
    adrs.set_address_type(AddressType::ForsTree);
    adrs.set_keypair(leaf_idx as u16);
    let mut node = crate::fors::fors_pk_from_sig(&engine, &sig.fors, &split.md, &mut adrs);

    for (layer, layer_sig) in sig.layers.iter().enumerate() {
        let mut subtree_adrs = Address::new();
        subtree_adrs.set_hypertree_layer(layer as u8);
        subtree_adrs.set_hypertree_address(tree);

        // The keypair binds only the WOTS+ recovery; tree nodes are shared
        // across leaves and hash under a keypair-free address.
        let mut wots_adrs = subtree_adrs.with_type(AddressType::WotsHash);
        wots_adrs.set_keypair(leaf_idx as u16);
        node = wots_pk_from_sig(&engine, &layer_sig.wots, &output_to_bytes(&node), &mut wots_adrs);

        let mut tree_adrs = subtree_adrs.with_type(AddressType::Tree);
        node = compute_root(&engine, &mut tree_adrs, &node, &layer_sig.auth, leaf_idx, 0);

        leaf_idx = (tree & ((1 << TREE_HEIGHT) - 1)) as u32;
        tree >>= TREE_HEIGHT;
    }

    let matches = output_to_bytes(&node).ct_eq(&output_to_bytes(&pk.pk_root));
    if bool::from(matches) {
        Ok(())
    } else {
        Err(Error::VerificationFailed)
    }
}
