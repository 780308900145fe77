//! Extended message digest splitting.
//!
//! The expanded 30-byte digest is partitioned into the FORS message hash,
//! the hypertree address, and the leaf index within the bottom subtree. The
//! two address fields are masked down to the widths the parameter set
//! actually uses (54 bits and 9 bits).

use krater_core::{Error, Result};

use crate::params::{
    MSG_HASH_BYTES, TREE_ADDR_BITS, TREE_ADDR_BYTES, TREE_HEIGHT, XDIGEST_BYTES,
};

/// The pieces of a split extended digest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitDigest {
    /// Message hash fed to FORS index derivation.
    pub md: [u8; MSG_HASH_BYTES],
    /// Hypertree address of the bottom-layer subtree, 54 bits.
    pub tree: u64,
    /// Leaf index within that subtree, 9 bits.
    pub leaf_idx: u32,
}

/// Split an extended digest into message hash, hypertree address, and leaf
/// index.
///
/// # Errors
///
/// Returns [`Error::InvalidDigestLength`] unless `digest` is exactly 30
/// bytes.
pub fn split_xdigest(digest: &[u8]) -> Result<SplitDigest> {
    if digest.len() != XDIGEST_BYTES {
        return Err(Error::InvalidDigestLength {
            expected: XDIGEST_BYTES,
            actual: digest.len(),
        });
    }

    let mut md = [0u8; MSG_HASH_BYTES];
    md.copy_from_slice(&digest[..MSG_HASH_BYTES]);

    let mut tree: u64 = 0;
    for &byte in &digest[MSG_HASH_BYTES..MSG_HASH_BYTES + TREE_ADDR_BYTES] {
        tree = (tree << 8) | u64::from(byte);
    }
    tree &= (1 << TREE_ADDR_BITS) - 1;

    let mut leaf_idx: u32 = 0;
    for &byte in &digest[MSG_HASH_BYTES + TREE_ADDR_BYTES..] {
        leaf_idx = (leaf_idx << 8) | u32::from(byte);
    }
    leaf_idx &= (1 << TREE_HEIGHT) - 1;

    Ok(SplitDigest {
        md,
        tree,
        leaf_idx,
    })
}

#[cfg(test)]
#[allow(clippy::unreadable_literal)]
mod tests {
    use super::*;

    #[test]
    fn reference_split() {
        let digest =
            hex::decode("5f6f74792de379a6337bbad9e4a1621e38c5e3827d8ae84c41501d68e961").unwrap();
        let split = split_xdigest(&digest).unwrap();
        assert_eq!(split.md, digest[..21]);
        assert_eq!(split.tree, 0x0ae84c41501d68);
        assert_eq!(split.leaf_idx, 0x161);
    }

    #[test]
    fn fields_are_masked() {
        let digest = [0xFF; XDIGEST_BYTES];
        let split = split_xdigest(&digest).unwrap();
        assert_eq!(split.tree, (1 << 54) - 1);
        assert_eq!(split.leaf_idx, 0x1FF);
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(matches!(
            split_xdigest(&[0u8; 29]),
            Err(Error::InvalidDigestLength {
                expected: 30,
                actual: 29
            })
        ));
        assert!(matches!(
            split_xdigest(&[0u8; 31]),
            Err(Error::InvalidDigestLength { .. })
        ));
    }
}
