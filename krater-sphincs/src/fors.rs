//! FORS public-key recovery.
//!
//! The message hash selects one leaf in each of the 14 height-12 trees. The
//! signature reveals the secret element behind each selected leaf plus its
//! authentication path; recovery hashes the element to the leaf, climbs to
//! the root, and compresses all roots under a `ForsPk` address.

use crate::address::{Address, AddressType};
use crate::hash::HashEngine;
use crate::merkle::compute_root;
use crate::params::{FORS_HEIGHT, FORS_TREES, MSG_HASH_BYTES};
use crate::utils::base_2b;
use crate::words::HashOutput;

/// The revealed leaf secret and authentication path for one FORS tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForsTreeSig {
    /// Secret element behind the selected leaf.
    pub sk: HashOutput,
    /// Sibling nodes from the leaf to just below the root.
    pub auth: [HashOutput; FORS_HEIGHT],
}

/// A FORS signature: one revealed leaf per tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForsSignature {
    /// Per-tree leaf reveals, in tree order.
    pub trees: [ForsTreeSig; FORS_TREES],
}

/// Derive the per-tree leaf indices from the message hash.
#[must_use]
pub fn message_indices(md: &[u8; MSG_HASH_BYTES]) -> [u32; FORS_TREES] {
    let digits = base_2b(md, FORS_HEIGHT, FORS_TREES);
    core::array::from_fn(|i| digits[i])
}

/// Recover the FORS public key from a signature over `md`.
///
/// `adrs` carries the layer, tree, and keypair coordinates and must be of
/// type `ForsTree`; the final compression reuses them under a `ForsPk`
/// address.
pub fn fors_pk_from_sig<E: HashEngine>(
    engine: &E,
    sig: &ForsSignature,
    md: &[u8; MSG_HASH_BYTES],
    adrs: &mut Address,
) -> HashOutput {
    let indices = message_indices(md);
    let mut roots = [[0u32; 4]; FORS_TREES];

    for (i, (tree_sig, &leaf_idx)) in sig.trees.iter().zip(indices.iter()).enumerate() {
        let index_offset = (i as u32) << FORS_HEIGHT;

        adrs.set_tree_height(0);
        adrs.set_tree_index(index_offset + leaf_idx);
        let leaf = engine.f(adrs, &tree_sig.sk);

        roots[i] = compute_root(engine, adrs, &leaf, &tree_sig.auth, leaf_idx, index_offset);
    }

    let pk_adrs = adrs.with_type(AddressType::ForsPk);
    engine.t(&pk_adrs, &roots)
}
