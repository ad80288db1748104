//! SHAKE256-based tweakable hash backend.
//!
//! Every operation is a single SHAKE256 invocation over the full 32-byte
//! address; robust masks are squeezed from a second SHAKE256 instance seeded
//! with `PK.seed || ADRS`. There is no block alignment to exploit, so nothing
//! is memoized.

use crate::address::Address;
use crate::hash::TweakableHash;
use crate::params::Params;
use crate::utils::xor_in_place;
use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake256,
};
use sphincs_core::Result;
use zeroize::Zeroizing;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::vec;

/// Absorb `parts` and squeeze `out_len` bytes.
fn shake256(parts: &[&[u8]], out_len: usize) -> Vec<u8> {
    let mut hasher = Shake256::default();
    for part in parts {
        hasher.update(part);
    }
    let mut reader = hasher.finalize_xof();
    let mut output = vec![0u8; out_len];
    reader.read(&mut output);
    output
}

/// Concatenate `blocks` and XOR them with `SHAKE256(PK.seed || ADRS)`.
fn bitmask(pk_seed: &[u8], adrs: &Address, blocks: &[&[u8]]) -> Vec<u8> {
    let len = blocks.iter().map(|b| b.len()).sum();
    let mut masked = shake256(&[pk_seed, adrs.as_bytes().as_slice()], len);
    let mut offset = 0;
    for block in blocks {
        xor_in_place(&mut masked[offset..offset + block.len()], block);
        offset += block.len();
    }
    masked
}

/// SHAKE256 backend. Stateless apart from its parameters.
#[derive(Clone, Debug)]
pub struct ShakeEngine {
    params: Params,
}

impl ShakeEngine {
    /// Build a SHAKE engine. Every parameter set accepted by [`Params`] is supported.
    pub fn new(params: Params) -> Result<Self> {
        log::debug!("shake engine: {params:?}");
        Ok(Self { params })
    }

    /// `SHAKE256(PK.seed || ADRS || M', 8n)` where `M'` is masked in robust mode.
    fn thash(&self, pk_seed: &[u8], adrs: &Address, blocks: &[&[u8]]) -> Vec<u8> {
        let n = self.params.n();
        if self.params.robust() {
            let masked = bitmask(pk_seed, adrs, blocks);
            shake256(&[pk_seed, adrs.as_bytes().as_slice(), masked.as_slice()], n)
        } else {
            let mut hasher = Shake256::default();
            hasher.update(pk_seed);
            hasher.update(adrs.as_bytes());
            for block in blocks {
                hasher.update(block);
            }
            let mut reader = hasher.finalize_xof();
            let mut output = vec![0u8; n];
            reader.read(&mut output);
            output
        }
    }
}

impl TweakableHash for ShakeEngine {
    fn params(&self) -> &Params {
        &self.params
    }

    fn f(&mut self, pk_seed: &[u8], adrs: &Address, m1: &[u8]) -> Vec<u8> {
        self.thash(pk_seed, adrs, &[m1])
    }

    fn h(&mut self, pk_seed: &[u8], adrs: &Address, m1: &[u8], m2: &[u8]) -> Vec<u8> {
        self.thash(pk_seed, adrs, &[m1, m2])
    }

    fn t_l(&mut self, pk_seed: &[u8], adrs: &Address, m: &[u8]) -> Vec<u8> {
        self.thash(pk_seed, adrs, &[m])
    }

    fn prf(&mut self, pk_seed: &[u8], sk_seed: &[u8], adrs: &Address) -> Zeroizing<Vec<u8>> {
        // PRF = SHAKE256(PK.seed || ADRS || SK.seed, 8n)
        // Streamed so the secret seed is never copied to the heap
        let mut hasher = Shake256::default();
        hasher.update(pk_seed);
        hasher.update(adrs.as_bytes());
        hasher.update(sk_seed);
        let mut reader = hasher.finalize_xof();
        let mut output = Zeroizing::new(vec![0u8; self.params.n()]);
        reader.read(&mut output);
        output
    }

    fn prf_msg(&mut self, prf: &[u8], randomizer: &[u8], message: &[u8]) -> Zeroizing<Vec<u8>> {
        // PRF_msg = SHAKE256(SK.prf || OptRand || M, 8n)
        let mut hasher = Shake256::default();
        hasher.update(prf);
        hasher.update(randomizer);
        hasher.update(message);
        let mut reader = hasher.finalize_xof();
        let mut output = Zeroizing::new(vec![0u8; self.params.n()]);
        reader.read(&mut output);
        output
    }

    fn h_msg_bytes(
        &mut self,
        r: &[u8],
        pk_seed: &[u8],
        pk_root: &[u8],
        message: &[u8],
        out_len: usize,
    ) -> Vec<u8> {
        // H_msg = SHAKE256(R || PK.seed || PK.root || M, 8m)
        shake256(&[r, pk_seed, pk_root, message], out_len)
    }
}
