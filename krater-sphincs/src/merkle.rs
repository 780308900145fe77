//! Merkle authentication-path verification.
//!
//! One climb routine serves both the FORS trees and the hypertree subtrees.
//! The caller positions the address (type, layer, tree, keypair) and supplies
//! an index offset: FORS trees sit side by side in one address space, so
//! tree `i` offsets its leaves by `i * 2^12`; hypertree subtrees use zero.

use crate::address::Address;
use crate::hash::HashEngine;
use crate::words::HashOutput;

/// Recompute a Merkle root from a leaf and its authentication path.
///
/// `leaf_index` is the position of `leaf` within its own tree; the height of
/// the climb equals `auth_path.len()`. The address is mutated in place as the
/// climb proceeds.
pub fn compute_root<E: HashEngine>(
    engine: &E,
    adrs: &mut Address,
    leaf: &HashOutput,
    auth_path: &[HashOutput],
    leaf_index: u32,
    index_offset: u32,
) -> HashOutput {
    let mut node = *leaf;

    for (j, sibling) in auth_path.iter().enumerate() {
        adrs.set_tree_height(j as u8 + 1);
        adrs.set_tree_index((leaf_index >> (j + 1)) + (index_offset >> (j + 1)));

        node = if (leaf_index >> j) & 1 == 0 {
            engine.h(adrs, &node, sibling)
        } else {
            engine.h(adrs, sibling, &node)
        };
    }

    node
}
