//! ADRS (Address) structure for domain separation.
//!
//! Every tweakable hash call is bound to a 32-byte address describing where in
//! the hypertree, XMSS or FORS structure the call happens. The engine only
//! reads addresses; callers own and mutate them between calls.
//!
//! The SHA-2 backend hashes a 22-byte compacted form, see [`Address::compress`].

/// Byte offset of the layer word.
pub const OFFSET_LAYER: usize = 0;
/// Byte offset of the 12-byte tree index field.
pub const OFFSET_TREE: usize = 4;
/// Byte offset of the type word.
pub const OFFSET_TYPE: usize = 16;
/// Byte offset of the key pair word.
pub const OFFSET_KEYPAIR: usize = 20;
/// Byte offset of the chain word (WOTS+ types).
pub const OFFSET_CHAIN: usize = 24;
/// Byte offset of the hash word (WOTS+ types).
pub const OFFSET_HASH: usize = 28;
/// Byte offset of the tree height word (tree and FORS types).
pub const OFFSET_TREE_HEIGHT: usize = 24;
/// Byte offset of the tree index word (tree and FORS types).
pub const OFFSET_TREE_INDEX: usize = 28;

/// Size of a full address in bytes.
pub const ADRS_BYTES: usize = 32;
/// Size of the compacted address hashed by the SHA-2 backend.
pub const COMPRESSED_ADRS_BYTES: usize = 22;

/// Address types.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AdrsType {
    /// WOTS+ chain step.
    WotsHash = 0,
    /// WOTS+ public key compression.
    WotsPk = 1,
    /// Merkle tree node.
    Tree = 2,
    /// FORS tree node.
    ForsTree = 3,
    /// FORS roots compression.
    ForsRoots = 4,
    /// WOTS+ secret key generation.
    WotsPrf = 5,
    /// FORS secret key generation.
    ForsPrf = 6,
}

/// 32-byte ADRS structure.
///
/// Layout (all words big-endian):
///
/// | Bytes | Field |
/// |-------|-------|
/// | 0-3   | layer |
/// | 4-15  | tree index (lower 64 bits in 8-15) |
/// | 16-19 | type |
/// | 20-23 | key pair |
/// | 24-27 | chain (WOTS+) / tree height (tree, FORS) |
/// | 28-31 | hash (WOTS+) / tree index (tree, FORS) |
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Address {
    bytes: [u8; ADRS_BYTES],
}

impl Address {
    /// Create a new zeroed address.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bytes: [0u8; ADRS_BYTES],
        }
    }

    /// Create an address from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; ADRS_BYTES]) -> Self {
        Self { bytes }
    }

    /// Raw bytes of the address.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; ADRS_BYTES] {
        &self.bytes
    }

    /// Mutable access to the raw bytes.
    pub fn as_bytes_mut(&mut self) -> &mut [u8; ADRS_BYTES] {
        &mut self.bytes
    }

    fn word(&self, offset: usize) -> u32 {
        u32::from_be_bytes([
            self.bytes[offset],
            self.bytes[offset + 1],
            self.bytes[offset + 2],
            self.bytes[offset + 3],
        ])
    }

    fn set_word(&mut self, offset: usize, value: u32) {
        self.bytes[offset..offset + 4].copy_from_slice(&value.to_be_bytes());
    }

    /// Set the layer word.
    pub fn set_layer(&mut self, layer: u32) {
        self.set_word(OFFSET_LAYER, layer);
    }

    /// Layer word.
    #[must_use]
    pub fn layer(&self) -> u32 {
        self.word(OFFSET_LAYER)
    }

    /// Set the tree index. The upper four bytes of the 12-byte field are cleared.
    pub fn set_tree(&mut self, tree: u64) {
        self.bytes[OFFSET_TREE..OFFSET_TREE + 4].fill(0);
        self.bytes[OFFSET_TREE + 4..OFFSET_TYPE].copy_from_slice(&tree.to_be_bytes());
    }

    /// Lower 64 bits of the tree index.
    #[must_use]
    pub fn tree(&self) -> u64 {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(&self.bytes[OFFSET_TREE + 4..OFFSET_TYPE]);
        u64::from_be_bytes(buf)
    }

    /// Set the type and clear the type-specific words.
    ///
    /// The key pair word survives for every type that has one; only
    /// [`AdrsType::Tree`] drops it.
    pub fn set_type(&mut self, adrs_type: AdrsType) {
        let keypair = self.keypair();
        self.set_word(OFFSET_TYPE, adrs_type as u32);
        self.bytes[OFFSET_KEYPAIR..].fill(0);
        if adrs_type != AdrsType::Tree {
            self.set_keypair(keypair);
        }
    }

    /// Type word.
    #[must_use]
    pub fn adrs_type(&self) -> u32 {
        self.word(OFFSET_TYPE)
    }

    /// Set the key pair word.
    pub fn set_keypair(&mut self, keypair: u32) {
        self.set_word(OFFSET_KEYPAIR, keypair);
    }

    /// Key pair word.
    #[must_use]
    pub fn keypair(&self) -> u32 {
        self.word(OFFSET_KEYPAIR)
    }

    /// Set the chain word.
    pub fn set_chain(&mut self, chain: u32) {
        self.set_word(OFFSET_CHAIN, chain);
    }

    /// Chain word.
    #[must_use]
    pub fn chain(&self) -> u32 {
        self.word(OFFSET_CHAIN)
    }

    /// Set the hash word.
    pub fn set_hash(&mut self, hash: u32) {
        self.set_word(OFFSET_HASH, hash);
    }

    /// Hash word.
    #[must_use]
    pub fn hash(&self) -> u32 {
        self.word(OFFSET_HASH)
    }

    /// Set the tree height word.
    pub fn set_tree_height(&mut self, height: u32) {
        self.set_word(OFFSET_TREE_HEIGHT, height);
    }

    /// Tree height word.
    #[must_use]
    pub fn tree_height(&self) -> u32 {
        self.word(OFFSET_TREE_HEIGHT)
    }

    /// Set the tree index word.
    pub fn set_tree_index(&mut self, index: u32) {
        self.set_word(OFFSET_TREE_INDEX, index);
    }

    /// Tree index word.
    #[must_use]
    pub fn tree_index(&self) -> u32 {
        self.word(OFFSET_TREE_INDEX)
    }

    /// Compact the address to the 22-byte form hashed by the SHA-2 backend.
    ///
    /// Layout: low byte of the layer, low 8 bytes of the tree index, low byte
    /// of the type, then the 12 type-specific bytes unchanged. The high bytes
    /// of the layer, tree and type words are dropped.
    #[must_use]
    pub fn compress(&self) -> [u8; COMPRESSED_ADRS_BYTES] {
        let mut out = [0u8; COMPRESSED_ADRS_BYTES];
        out[0] = self.bytes[OFFSET_LAYER + 3];
        out[1..9].copy_from_slice(&self.bytes[OFFSET_TREE + 4..OFFSET_TYPE]);
        out[9] = self.bytes[OFFSET_TYPE + 3];
        out[10..].copy_from_slice(&self.bytes[OFFSET_KEYPAIR..]);
        out
    }

    /// WOTS+ chain step address.
    #[must_use]
    pub fn wots_hash(layer: u32, tree: u64, keypair: u32, chain: u32, hash: u32) -> Self {
        let mut adrs = Self::at(layer, tree, AdrsType::WotsHash);
        adrs.set_keypair(keypair);
        adrs.set_chain(chain);
        adrs.set_hash(hash);
        adrs
    }

    /// WOTS+ public key compression address.
    #[must_use]
    pub fn wots_pk(layer: u32, tree: u64, keypair: u32) -> Self {
        let mut adrs = Self::at(layer, tree, AdrsType::WotsPk);
        adrs.set_keypair(keypair);
        adrs
    }

    /// WOTS+ secret key generation address.
    #[must_use]
    pub fn wots_prf(layer: u32, tree: u64, keypair: u32, chain: u32) -> Self {
        let mut adrs = Self::at(layer, tree, AdrsType::WotsPrf);
        adrs.set_keypair(keypair);
        adrs.set_chain(chain);
        adrs
    }

    /// Merkle tree node address.
    #[must_use]
    pub fn tree_node(layer: u32, tree: u64, height: u32, index: u32) -> Self {
        let mut adrs = Self::at(layer, tree, AdrsType::Tree);
        adrs.set_tree_height(height);
        adrs.set_tree_index(index);
        adrs
    }

    /// FORS tree node address.
    #[must_use]
    pub fn fors_tree(layer: u32, tree: u64, keypair: u32, height: u32, index: u32) -> Self {
        let mut adrs = Self::at(layer, tree, AdrsType::ForsTree);
        adrs.set_keypair(keypair);
        adrs.set_tree_height(height);
        adrs.set_tree_index(index);
        adrs
    }

    /// FORS roots compression address.
    #[must_use]
    pub fn fors_roots(layer: u32, tree: u64, keypair: u32) -> Self {
        let mut adrs = Self::at(layer, tree, AdrsType::ForsRoots);
        adrs.set_keypair(keypair);
        adrs
    }

    /// FORS secret key generation address.
    #[must_use]
    pub fn fors_prf(layer: u32, tree: u64, keypair: u32, height: u32, index: u32) -> Self {
        let mut adrs = Self::at(layer, tree, AdrsType::ForsPrf);
        adrs.set_keypair(keypair);
        adrs.set_tree_height(height);
        adrs.set_tree_index(index);
        adrs
    }

    /// Copy of the address with a different type.
    #[must_use]
    pub fn with_type(&self, adrs_type: AdrsType) -> Self {
        let mut copy = *self;
        copy.set_type(adrs_type);
        copy
    }

    fn at(layer: u32, tree: u64, adrs_type: AdrsType) -> Self {
        let mut adrs = Self::new();
        adrs.set_layer(layer);
        adrs.set_tree(tree);
        adrs.set_type(adrs_type);
        adrs
    }
}

impl core::fmt::Debug for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Address")
            .field("layer", &self.layer())
            .field("tree", &self.tree())
            .field("type", &self.adrs_type())
            .field("keypair", &self.keypair())
            .field("word2", &self.chain())
            .field("word3", &self.hash())
            .finish()
    }
}
