//! Domain-separation addresses.
//!
//! Every hash call mixes in a structured address so that hashes computed for
//! different structural purposes (chain step, tree node, key compression)
//! never collide even on identical input. The address is kept as an explicit
//! bit-field struct with validated setters; the raw word encoding is produced
//! on demand by one of two layout codecs:
//!
//! - **Dense**: byte-packed into 22 bytes (zero-padded to 8 words), with
//!   sub-word field boundaries. This is the wire-exact layout for the
//!   incremental SHA-256 engine.
//! - **Sparse**: one field per 32-bit word, for engines that want 4-byte
//!   aligned sub-fields at the cost of a longer encoding.
//!
//! Setters never disturb unrelated fields; changing the address type clears
//! the type-specific trailing fields but preserves the keypair index, since
//! WOTS and FORS addresses for one leaf share it.

use zeroize::Zeroize;

/// Address type constants selecting the hash domain.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Zeroize)]
pub enum AddressType {
    /// WOTS+ chain-step hash.
    WotsHash = 0,
    /// WOTS+ public key compression.
    WotsPk = 1,
    /// Merkle tree node.
    Tree = 2,
    /// FORS tree node.
    ForsTree = 3,
    /// FORS public key compression.
    ForsPk = 4,
    /// WOTS+ secret chain derivation.
    WotsPrf = 5,
    /// FORS secret leaf derivation.
    ForsPrf = 6,
}

/// Word-encoding strategy for an [`Address`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressLayout {
    /// Byte-packed 22-byte encoding, zero-padded to 8 words.
    Dense,
    /// One field per word.
    Sparse,
}

/// Number of words in an encoded address.
pub const ADDRESS_WORDS: usize = 8;

/// Meaningful bytes in the dense encoding.
pub const DENSE_BYTES: usize = 22;

/// Domain-separation address.
///
/// Created once per verification call and mutated in place as the algorithm
/// walks layers and trees; never persisted or shared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Zeroize)]
pub struct Address {
    layer: u8,
    tree: u64,
    adrs_type: AddressType,
    keypair: u16,
    // Doubles as the WOTS+ chain index.
    tree_height: u8,
    // Doubles as the WOTS+ hash (step) index.
    tree_index: u32,
}

impl Default for Address {
    fn default() -> Self {
        Self::new()
    }
}

impl Address {
    /// Create a zeroed WOTS-hash address.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            layer: 0,
            tree: 0,
            adrs_type: AddressType::WotsHash,
            keypair: 0,
            tree_height: 0,
            tree_index: 0,
        }
    }

    /// Set the hypertree layer.
    pub fn set_hypertree_layer(&mut self, layer: u8) {
        self.layer = layer;
    }

    /// Set the hypertree address (subtree coordinate), at most 54 bits.
    pub fn set_hypertree_address(&mut self, tree: u64) {
        debug_assert!(tree < 1 << 54, "hypertree address exceeds 54 bits");
        self.tree = tree;
    }

    /// Set the address type, clearing the type-specific trailing fields.
    ///
    /// The keypair index survives the change: WOTS and FORS addresses for
    /// the same leaf share it.
    pub fn set_address_type(&mut self, adrs_type: AddressType) {
        self.adrs_type = adrs_type;
        self.tree_height = 0;
        self.tree_index = 0;
    }

    /// Set the keypair (leaf) index.
    pub fn set_keypair(&mut self, keypair: u16) {
        self.keypair = keypair;
    }

    /// Set the tree height of the node being hashed.
    pub fn set_tree_height(&mut self, height: u8) {
        self.tree_height = height;
    }

    /// Set the tree index of the node being hashed.
    pub fn set_tree_index(&mut self, index: u32) {
        self.tree_index = index;
    }

    /// Set the WOTS+ chain index (shares the height field).
    pub fn set_wots_chain_addr(&mut self, chain: u8) {
        self.tree_height = chain;
    }

    /// Set the WOTS+ hash (step) index (shares the index field).
    pub fn set_wots_hash_addr(&mut self, hash: u8) {
        self.tree_index = u32::from(hash);
    }

    /// Copy of this address with a different type.
    #[must_use]
    pub fn with_type(&self, adrs_type: AddressType) -> Self {
        let mut adrs = *self;
        adrs.set_address_type(adrs_type);
        adrs
    }

    /// Current address type.
    #[must_use]
    pub fn address_type(&self) -> AddressType {
        self.adrs_type
    }

    /// Current keypair index.
    #[must_use]
    pub fn keypair(&self) -> u16 {
        self.keypair
    }

    /// Encode to the fixed word sequence for the given layout.
    #[must_use]
    pub fn to_words(&self, layout: AddressLayout) -> [u32; ADDRESS_WORDS] {
        match layout {
            AddressLayout::Dense => self.to_words_dense(),
            AddressLayout::Sparse => self.to_words_sparse(),
        }
    }

    /// Dense byte layout: layer at byte 0, hypertree address at bytes 1-8
    /// (big-endian), type at byte 9, keypair at bytes 12-13, height/chain at
    /// byte 17, index/hash at bytes 18-21. Bytes 22-31 stay zero.
    fn to_words_dense(&self) -> [u32; ADDRESS_WORDS] {
        let mut bytes = [0u8; 4 * ADDRESS_WORDS];
        bytes[0] = self.layer;
        bytes[1..9].copy_from_slice(&self.tree.to_be_bytes());
        bytes[9] = self.adrs_type as u8;
        bytes[12..14].copy_from_slice(&self.keypair.to_be_bytes());
        bytes[17] = self.tree_height;
        bytes[18..22].copy_from_slice(&self.tree_index.to_be_bytes());

        let mut words = [0u32; ADDRESS_WORDS];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        words
    }

    /// Sparse layout: every logical field gets a word of its own.
    fn to_words_sparse(&self) -> [u32; ADDRESS_WORDS] {
        [
            u32::from(self.layer),
            (self.tree >> 32) as u32,
            self.tree as u32,
            u32::from(self.adrs_type as u8),
            u32::from(self.keypair),
            u32::from(self.tree_height),
            self.tree_index,
            0,
        ]
    }
}
