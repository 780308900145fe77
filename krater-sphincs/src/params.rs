//! Parameter constants for the 128-bit-security hypertree instance.
//!
//! A single fixed parameter set is supported; the byte and word layouts
//! derived from these constants are bit-exact serialization formats, so any
//! change here breaks interoperability with externally produced signatures.

/// Hash output length in bytes.
pub const N: usize = 16;

/// Hash output length in 32-bit words.
pub const N_WORDS: usize = 4;

/// Total hypertree height.
pub const FULL_HEIGHT: usize = 63;

/// Number of hypertree layers.
pub const D: usize = 7;

/// Height of each subtree (FULL_HEIGHT / D).
pub const TREE_HEIGHT: usize = 9;

/// Height of each FORS tree.
pub const FORS_HEIGHT: usize = 12;

/// Number of FORS trees.
pub const FORS_TREES: usize = 14;

/// Winternitz parameter.
pub const W: usize = 16;

/// Log2 of the Winternitz parameter.
pub const LG_W: usize = 4;

/// WOTS+ message chains: 8 * N / LG_W.
pub const WOTS_LEN1: usize = 32;

/// WOTS+ checksum chains.
pub const WOTS_LEN2: usize = 3;

/// Total WOTS+ chain count.
pub const WOTS_LEN: usize = WOTS_LEN1 + WOTS_LEN2;

/// Message-hash portion of the extended digest: ceil(FORS_TREES * FORS_HEIGHT / 8).
pub const MSG_HASH_BYTES: usize = (FORS_TREES * FORS_HEIGHT).div_ceil(8);

/// Hypertree-address portion of the extended digest:
/// ceil((FULL_HEIGHT - TREE_HEIGHT) / 8).
pub const TREE_ADDR_BYTES: usize = (FULL_HEIGHT - TREE_HEIGHT).div_ceil(8);

/// Leaf-index portion of the extended digest: ceil(TREE_HEIGHT / 8).
pub const LEAF_IDX_BYTES: usize = TREE_HEIGHT.div_ceil(8);

/// Extended message digest length in bytes.
pub const XDIGEST_BYTES: usize = MSG_HASH_BYTES + TREE_ADDR_BYTES + LEAF_IDX_BYTES;

/// Valid bits in the hypertree-address portion.
pub const TREE_ADDR_BITS: usize = FULL_HEIGHT - TREE_HEIGHT;

/// Public key size in bytes: pk_seed || pk_root.
pub const PK_BYTES: usize = 2 * N;

/// FORS signature size: one revealed leaf plus one auth path per tree.
pub const FORS_SIG_BYTES: usize = FORS_TREES * (1 + FORS_HEIGHT) * N;

/// Per-layer signature size: WOTS+ chains plus subtree auth path.
pub const WOTS_MERKLE_SIG_BYTES: usize = (WOTS_LEN + TREE_HEIGHT) * N;

/// Total signature size: randomizer || FORS || hypertree layers.
pub const SIG_BYTES: usize = N + FORS_SIG_BYTES + D * WOTS_MERKLE_SIG_BYTES;
