//! Tweakable hash abstraction.
//!
//! The [`TweakableHash`] trait is the whole contract between this crate and the
//! WOTS+, FORS and hypertree code that consumes it:
//! - **F**: one WOTS+ chain step
//! - **H**: two child nodes into a parent
//! - **T_l**: `l` concatenated blocks into one value (public key compression)
//! - **PRF**: secret key element generation
//! - **PRF_msg**: message randomizer
//! - **H_msg**: message digest split into FORS message and hypertree indices
//!
//! Operations take `&mut self`: the SHA-2 backend refreshes a memoized prefix
//! state on every call. Give each thread its own clone of an engine.

use crate::address::Address;
use crate::digest::IndexedDigest;
use crate::params::Params;
use zeroize::Zeroizing;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Tweakable hash family bound to one [`Params`].
pub trait TweakableHash {
    /// Parameters the engine was constructed with.
    fn params(&self) -> &Params;

    /// F: single-block tweakable hash.
    ///
    /// # Arguments
    /// * `pk_seed` - Public seed (n bytes)
    /// * `adrs` - Address for domain separation
    /// * `m1` - Input block (n bytes)
    ///
    /// # Returns
    /// n-byte hash output
    fn f(&mut self, pk_seed: &[u8], adrs: &Address, m1: &[u8]) -> Vec<u8>;

    /// H: two-block tweakable hash.
    ///
    /// # Arguments
    /// * `pk_seed` - Public seed (n bytes)
    /// * `adrs` - Address for domain separation
    /// * `m1` - Left child (n bytes)
    /// * `m2` - Right child (n bytes)
    ///
    /// # Returns
    /// n-byte hash output
    fn h(&mut self, pk_seed: &[u8], adrs: &Address, m1: &[u8], m2: &[u8]) -> Vec<u8>;

    /// T_l: variable-arity tweakable hash over `m` (l*n bytes).
    fn t_l(&mut self, pk_seed: &[u8], adrs: &Address, m: &[u8]) -> Vec<u8>;

    /// PRF: secret-keyed pseudorandom function. Never masked.
    ///
    /// The SHA-2 backend truncates to `sk_seed.len()` bytes; the SHAKE backend
    /// always returns n bytes.
    fn prf(&mut self, pk_seed: &[u8], sk_seed: &[u8], adrs: &Address) -> Zeroizing<Vec<u8>>;

    /// PRF_msg: n-byte randomizer bound to the secret PRF key and the message.
    fn prf_msg(&mut self, prf: &[u8], randomizer: &[u8], message: &[u8]) -> Zeroizing<Vec<u8>>;

    /// Raw H_msg output of exactly `out_len` bytes.
    fn h_msg_bytes(
        &mut self,
        r: &[u8],
        pk_seed: &[u8],
        pk_root: &[u8],
        message: &[u8],
        out_len: usize,
    ) -> Vec<u8>;

    /// H_msg: digest the message and split it into FORS message and indices.
    ///
    /// # Arguments
    /// * `r` - Randomizer (PRF_msg output)
    /// * `pk_seed` - Public seed (n bytes)
    /// * `pk_root` - Public root (n bytes)
    /// * `message` - Message to sign
    fn h_msg(&mut self, r: &[u8], pk_seed: &[u8], pk_root: &[u8], message: &[u8]) -> IndexedDigest {
        let layout = self.params().digest_layout();
        let out = self.h_msg_bytes(r, pk_seed, pk_root, message, layout.total_bytes());
        IndexedDigest::extract(&layout, &out)
    }

    // --- Buffer-write variants ---
    // Default implementations delegate to the Vec-returning methods.

    /// F into a caller-provided buffer (n bytes).
    fn f_to(&mut self, out: &mut [u8], pk_seed: &[u8], adrs: &Address, m1: &[u8]) {
        let result = self.f(pk_seed, adrs, m1);
        out.copy_from_slice(&result);
    }

    /// H into a caller-provided buffer (n bytes).
    fn h_to(&mut self, out: &mut [u8], pk_seed: &[u8], adrs: &Address, m1: &[u8], m2: &[u8]) {
        let result = self.h(pk_seed, adrs, m1, m2);
        out.copy_from_slice(&result);
    }

    /// T_l into a caller-provided buffer (n bytes).
    fn t_l_to(&mut self, out: &mut [u8], pk_seed: &[u8], adrs: &Address, m: &[u8]) {
        let result = self.t_l(pk_seed, adrs, m);
        out.copy_from_slice(&result);
    }

    /// PRF into a caller-provided buffer.
    ///
    /// Unlike [`prf`](Self::prf), the output is not wrapped in `Zeroizing`;
    /// the caller is responsible for clearing `out`.
    fn prf_to(&mut self, out: &mut [u8], pk_seed: &[u8], sk_seed: &[u8], adrs: &Address) {
        let result = self.prf(pk_seed, sk_seed, adrs);
        out.copy_from_slice(&result);
    }
}
