//! SHA-2 based tweakable hash backend.
//!
//! - F and PRF always use SHA-256 over `PK.seed || toByte(0, 64-n) || ADRSc || M`.
//! - H, T_l, PRF_msg and H_msg use the "tree digest": SHA-256 when `n <= 16`,
//!   SHA-512 (with 128-byte block padding) otherwise.
//! - Robust masks come from MGF1 keyed by `PK.seed || ADRSc`; F uses
//!   MGF1-SHA-256, H and T_l use MGF1 over the tree digest.
//!
//! The state after absorbing `PK.seed || padding` fills exactly one block and is
//! shared by every F, H, T_l and PRF call, so it is computed once per seed and
//! cloned into a scratch hasher for each call.

use crate::address::{Address, COMPRESSED_ADRS_BYTES};
use crate::hash::TweakableHash;
use crate::params::Params;
use crate::utils::xor_in_place;
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha2::digest::core_api::BlockSizeUser;
use sha2::{Digest, Sha256, Sha512};
use sphincs_core::{Error, Result};
use zeroize::{Zeroize, Zeroizing};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Largest block size among the supported digests (SHA-512).
const MAX_BLOCK_BYTES: usize = 128;

/// Zero bytes for `toByte(0, block - n)`.
const ZERO_PADDING: [u8; MAX_BLOCK_BYTES] = [0u8; MAX_BLOCK_BYTES];

/// SHA-256 output size; F and PRF truncate from it, so it bounds n.
const SHA256_OUTPUT_BYTES: usize = 32;

/// MGF1 mask generation (RFC 8017, B.2.1) over the concatenation of `seed_parts`.
fn mgf1<D: Digest + Clone>(seed_parts: &[&[u8]], mask_len: usize) -> Vec<u8> {
    let hash_len = <D as Digest>::output_size();
    let num_blocks = mask_len.div_ceil(hash_len);
    let mut output = Vec::with_capacity(num_blocks * hash_len);

    // Absorb the seed once, then clone for each counter block
    let mut base_hasher = D::new();
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

/// Concatenate `blocks` and XOR them with an MGF1 mask keyed by `PK.seed || ADRSc`.
fn bitmask<D: Digest + Clone>(
    pk_seed: &[u8],
    adrs_c: &[u8; COMPRESSED_ADRS_BYTES],
    blocks: &[&[u8]],
) -> Vec<u8> {
    let len = blocks.iter().map(|b| b.len()).sum();
    let mut masked = mgf1::<D>(&[pk_seed, adrs_c.as_slice()], len);
    let mut offset = 0;
    for block in blocks {
        xor_in_place(&mut masked[offset..offset + block.len()], block);
        offset += block.len();
    }
    masked
}

/// `Trunc_n(HMAC(key, parts...))`.
fn hmac_trunc<M: Mac + KeyInit>(key: &[u8], parts: &[&[u8]], n: usize) -> Zeroizing<Vec<u8>> {
    let mut mac = <M as Mac>::new_from_slice(key).expect("HMAC accepts any key length");
    for part in parts {
        mac.update(part);
    }
    let mut tag = mac.finalize().into_bytes();
    let out = Zeroizing::new(tag[..n].to_vec());
    tag.zeroize();
    out
}

/// `MGF1(R || PK.seed || D(R || PK.seed || PK.root || M), out_len)`.
fn h_msg_with<D: Digest + Clone>(
    r: &[u8],
    pk_seed: &[u8],
    pk_root: &[u8],
    message: &[u8],
    out_len: usize,
) -> Vec<u8> {
    let inner = D::new()
        .chain_update(r)
        .chain_update(pk_seed)
        .chain_update(pk_root)
        .chain_update(message)
        .finalize();
    mgf1::<D>(&[r, pk_seed, inner.as_slice()], out_len)
}

/// Hash state after absorbing `PK.seed || toByte(0, block - |PK.seed|)`.
#[derive(Clone)]
struct SeededPrefix<D> {
    seed: Vec<u8>,
    state: D,
}

/// Memoized prefix for one digest, rebuilt when a different seed arrives.
#[derive(Clone)]
struct PrefixCache<D> {
    slot: Option<SeededPrefix<D>>,
}

impl<D> Default for PrefixCache<D> {
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<D: Digest + BlockSizeUser + Clone> PrefixCache<D> {
    /// Fresh scratch hasher positioned after the seed block.
    fn hasher(&mut self, pk_seed: &[u8]) -> D {
        if let Some(prefix) = &self.slot {
            if prefix.seed == pk_seed {
                return prefix.state.clone();
            }
        }

        let mut state = D::new();
        state.update(pk_seed);
        state.update(&ZERO_PADDING[..D::block_size() - pk_seed.len()]);
        log::trace!(
            "rebuilding {}-byte block prefix for a new public seed",
            D::block_size()
        );
        self.slot = Some(SeededPrefix {
            seed: pk_seed.to_vec(),
            state: state.clone(),
        });
        state
    }

    /// `Trunc_out_len(D(prefix || ADRSc || blocks...))`.
    fn hash_trunc(
        &mut self,
        pk_seed: &[u8],
        adrs_c: &[u8; COMPRESSED_ADRS_BYTES],
        blocks: &[&[u8]],
        out_len: usize,
    ) -> Vec<u8> {
        let mut hasher = self.hasher(pk_seed);
        hasher.update(adrs_c);
        for block in blocks {
            hasher.update(block);
        }
        let mut hash = hasher.finalize();
        let out = hash[..out_len].to_vec();
        hash.zeroize();
        out
    }
}

/// Digest used for H, T_l, PRF_msg and H_msg.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TreeDigest {
    Sha256,
    Sha512,
}

/// SHA-2 backend.
///
/// Not reentrant: each call mutates the prefix caches. Clone the engine to
/// hand a copy to another thread.
#[derive(Clone)]
pub struct Sha2Engine {
    params: Params,
    tree_digest: TreeDigest,
    sha256: PrefixCache<Sha256>,
    sha512: PrefixCache<Sha512>,
}

impl Sha2Engine {
    /// Build a SHA-2 engine.
    ///
    /// Fails with [`Error::UnsupportedBackend`] when `n` exceeds the SHA-256
    /// output that F and PRF truncate from. This is narrower than
    /// [`Params::new`]: shapes such as `w = 16, n = 256` are valid parameters
    /// and build a `ShakeEngine`, but not a SHA-2 engine.
    /// No published SHA-2 parameter set has `n > 32`.
    pub fn new(params: Params) -> Result<Self> {
        let n = params.n();
        if n > SHA256_OUTPUT_BYTES {
            return Err(Error::UnsupportedBackend { n });
        }

        let tree_digest = if n <= 16 {
            TreeDigest::Sha256
        } else {
            TreeDigest::Sha512
        };
        log::debug!("sha2 engine: {params:?}, tree digest {tree_digest:?}");

        Ok(Self {
            params,
            tree_digest,
            sha256: PrefixCache::default(),
            sha512: PrefixCache::default(),
        })
    }

    /// Whether H, T_l, PRF_msg and H_msg run on SHA-512.
    #[must_use]
    pub fn uses_sha512(&self) -> bool {
        self.tree_digest == TreeDigest::Sha512
    }

    /// F-framing: SHA-256 over the memoized prefix.
    fn sha256_trunc(
        &mut self,
        pk_seed: &[u8],
        adrs_c: &[u8; COMPRESSED_ADRS_BYTES],
        blocks: &[&[u8]],
        out_len: usize,
    ) -> Vec<u8> {
        self.sha256.hash_trunc(pk_seed, adrs_c, blocks, out_len)
    }

    /// H/T_l framing: tree digest over its memoized prefix, with optional mask.
    fn tree_hash(&mut self, pk_seed: &[u8], adrs: &Address, blocks: &[&[u8]]) -> Vec<u8> {
        let n = self.params.n();
        let adrs_c = adrs.compress();

        if self.params.robust() {
            let masked = match self.tree_digest {
                TreeDigest::Sha256 => bitmask::<Sha256>(pk_seed, &adrs_c, blocks),
                TreeDigest::Sha512 => bitmask::<Sha512>(pk_seed, &adrs_c, blocks),
            };
            self.tree_digest_trunc(pk_seed, &adrs_c, &[masked.as_slice()], n)
        } else {
            self.tree_digest_trunc(pk_seed, &adrs_c, blocks, n)
        }
    }

    fn tree_digest_trunc(
        &mut self,
        pk_seed: &[u8],
        adrs_c: &[u8; COMPRESSED_ADRS_BYTES],
        blocks: &[&[u8]],
        out_len: usize,
    ) -> Vec<u8> {
        match self.tree_digest {
            TreeDigest::Sha256 => self.sha256.hash_trunc(pk_seed, adrs_c, blocks, out_len),
            TreeDigest::Sha512 => self.sha512.hash_trunc(pk_seed, adrs_c, blocks, out_len),
        }
    }
}

impl core::fmt::Debug for Sha2Engine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Sha2Engine")
            .field("params", &self.params)
            .field("tree_digest", &self.tree_digest)
            .finish_non_exhaustive()
    }
}

impl TweakableHash for Sha2Engine {
    fn params(&self) -> &Params {
        &self.params
    }

    fn f(&mut self, pk_seed: &[u8], adrs: &Address, m1: &[u8]) -> Vec<u8> {
        // F = Trunc_n(SHA-256(PK.seed || toByte(0, 64-n) || ADRSc || M1'))
        let n = self.params.n();
        let adrs_c = adrs.compress();
        if self.params.robust() {
            let masked = bitmask::<Sha256>(pk_seed, &adrs_c, &[m1]);
            self.sha256_trunc(pk_seed, &adrs_c, &[masked.as_slice()], n)
        } else {
            self.sha256_trunc(pk_seed, &adrs_c, &[m1], n)
        }
    }

    fn h(&mut self, pk_seed: &[u8], adrs: &Address, m1: &[u8], m2: &[u8]) -> Vec<u8> {
        self.tree_hash(pk_seed, adrs, &[m1, m2])
    }

    fn t_l(&mut self, pk_seed: &[u8], adrs: &Address, m: &[u8]) -> Vec<u8> {
        self.tree_hash(pk_seed, adrs, &[m])
    }

    fn prf(&mut self, pk_seed: &[u8], sk_seed: &[u8], adrs: &Address) -> Zeroizing<Vec<u8>> {
        // PRF = Trunc_|SK.seed|(SHA-256(PK.seed || toByte(0, 64-n) || ADRSc || SK.seed))
        debug_assert!(sk_seed.len() <= SHA256_OUTPUT_BYTES);
        let adrs_c = adrs.compress();
        Zeroizing::new(self.sha256_trunc(pk_seed, &adrs_c, &[sk_seed], sk_seed.len()))
    }

    fn prf_msg(&mut self, prf: &[u8], randomizer: &[u8], message: &[u8]) -> Zeroizing<Vec<u8>> {
        // PRF_msg = Trunc_n(HMAC(SK.prf, OptRand || M))
        let n = self.params.n();
        match self.tree_digest {
            TreeDigest::Sha256 => hmac_trunc::<Hmac<Sha256>>(prf, &[randomizer, message], n),
            TreeDigest::Sha512 => hmac_trunc::<Hmac<Sha512>>(prf, &[randomizer, message], n),
        }
    }

    fn h_msg_bytes(
        &mut self,
        r: &[u8],
        pk_seed: &[u8],
        pk_root: &[u8],
        message: &[u8],
        out_len: usize,
    ) -> Vec<u8> {
        match self.tree_digest {
            TreeDigest::Sha256 => h_msg_with::<Sha256>(r, pk_seed, pk_root, message, out_len),
            TreeDigest::Sha512 => h_msg_with::<Sha512>(r, pk_seed, pk_root, message, out_len),
        }
    }
}
