//! Indexed message digest produced by H_msg.

use crate::params::DigestLayout;
use crate::utils::{extract_u32, extract_u64};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Result of hashing a message: which hypertree leaf signs it and the FORS message.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IndexedDigest {
    /// Index of the bottom-layer XMSS tree, `< 2^(h - h/d)`.
    pub tree_index: u64,
    /// Leaf within that tree, `< 2^(h/d)`.
    pub leaf_index: u32,
    /// FORS message, `ceil(a*k / 8)` bytes.
    pub digest: Vec<u8>,
}

impl IndexedDigest {
    /// Split an H_msg output of `layout.total_bytes()` bytes.
    ///
    /// Left to right: FORS message verbatim, tree index (big-endian, masked to
    /// `tree_bits`), leaf index (big-endian, masked to `leaf_bits`).
    ///
    /// # Panics
    /// Panics if `out` is shorter than `layout.total_bytes()`.
    #[must_use]
    pub fn extract(layout: &DigestLayout, out: &[u8]) -> Self {
        let (digest, rest) = out.split_at(layout.fors_msg_bytes);
        let (tree, rest) = rest.split_at(layout.tree_bytes);
        let leaf = &rest[..layout.leaf_bytes];

        Self {
            tree_index: extract_u64(tree, layout.tree_bits),
            leaf_index: extract_u32(leaf, layout.leaf_bits),
            digest: digest.to_vec(),
        }
    }
}
