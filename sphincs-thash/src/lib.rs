//! SPHINCS+ tweakable hash engine
//!
//! This crate provides the hashing layer that the SPHINCS+ hash-based signature
//! scheme is built on: the tweakable hash functions, the keyed PRFs and the
//! message digest, for both the SHA-2 and the SHAKE instantiations, in either
//! robust (bitmasked) or simple mode. WOTS+, FORS and hypertree construction
//! live above this crate and talk to it only through [`TweakableHash`].
//!
//! # Operations
//!
//! | Name | Input | Output |
//! |------|-------|--------|
//! | F | one n-byte block | n bytes |
//! | H | two n-byte blocks | n bytes |
//! | T_l | l n-byte blocks | n bytes |
//! | PRF | secret seed + address | n bytes |
//! | PRF_msg | secret PRF key + randomizer + message | n bytes |
//! | H_msg | randomizer + public key + message | FORS digest, tree index, leaf index |
//!
//! # Parameter Sets
//!
//! | Name | n | h | d | a | k | SHA-2 tree digest |
//! |------|---|---|---|---|---|-------------------|
//! | 128s | 16 | 63 | 7 | 12 | 14 | SHA-256 |
//! | 128f | 16 | 66 | 22 | 6 | 33 | SHA-256 |
//! | 192s | 24 | 63 | 7 | 14 | 17 | SHA-512 |
//! | 192f | 24 | 66 | 22 | 8 | 33 | SHA-512 |
//! | 256s | 32 | 64 | 8 | 14 | 22 | SHA-512 |
//! | 256f | 32 | 68 | 17 | 9 | 35 | SHA-512 |
//!
//! Arbitrary shapes can be built with [`Params::new`]; the SHAKE backend
//! accepts any `n` the WOTS+ checksum table covers, the SHA-2 backend is
//! limited to `n <= 32`.
//!
//! # Example
//!
//! ```rust
//! use sphincs_thash::{Address, EngineConfig, TweakableHash};
//!
//! let mut engine = "sha2-128f-robust".parse::<EngineConfig>()?.build()?;
//!
//! let pk_seed = [0u8; 16];
//! let adrs = Address::wots_hash(0, 0, 0, 0, 0);
//! let node = engine.f(&pk_seed, &adrs, &[1u8; 16]);
//! assert_eq!(node.len(), 16);
//!
//! let digest = engine.h_msg(&[2u8; 16], &pk_seed, &[3u8; 16], b"message");
//! assert!(digest.leaf_index < 1 << engine.params().h_prime());
//! # Ok::<(), sphincs_thash::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
// Clippy allowances for cryptographic code patterns
#![allow(
    clippy::many_single_char_names,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_lossless,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::doc_markdown,
    clippy::wildcard_imports
)]

#[cfg(not(any(feature = "sha2", feature = "shake")))]
compile_error!("enable at least one hash family: `sha2` or `shake`");

// alloc is available in both std and no_std environments
extern crate alloc;

/// Hypertree addresses and their compressed form.
pub mod address;
mod digest;
mod engine;
mod hash;
#[cfg(feature = "sha2")]
mod hash_sha2;
#[cfg(feature = "shake")]
mod hash_shake;
/// Parameter derivation and the published parameter sets.
pub mod params;
mod utils;

// Public exports
pub use address::{Address, AdrsType};
pub use digest::IndexedDigest;
pub use engine::{EngineConfig, HashEngine, HashFamily};
pub use hash::TweakableHash;
#[cfg(feature = "sha2")]
pub use hash_sha2::Sha2Engine;
#[cfg(feature = "shake")]
pub use hash_shake::ShakeEngine;
pub use params::{DigestLayout, ParameterSet, Params};

// Re-export core types
pub use sphincs_core::{Error, Result};
