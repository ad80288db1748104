//! Backend selection.
//!
//! [`HashEngine`] wraps the compiled-in backends behind one concrete type so
//! callers can pick the hash family at runtime without boxing. The family is
//! fixed at construction; every call dispatches through a single `match`.
//!
//! [`EngineConfig`] is the textual form, e.g. `sha2-128f-robust` or
//! `shake-256s-simple`.

use crate::address::Address;
use crate::hash::TweakableHash;
use crate::params::{ParameterSet, Params};
use core::fmt;
use core::str::FromStr;
use sphincs_core::{Error, Result};
use zeroize::Zeroizing;

#[cfg(feature = "sha2")]
use crate::hash_sha2::Sha2Engine;
#[cfg(feature = "shake")]
use crate::hash_shake::ShakeEngine;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Hash family backing a [`HashEngine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashFamily {
    /// SHA-256 / SHA-512 with MGF1 masks and HMAC.
    #[cfg(feature = "sha2")]
    Sha2,
    /// SHAKE256.
    #[cfg(feature = "shake")]
    Shake,
}

impl HashFamily {
    /// Families compiled into this build.
    pub const ALL: &'static [HashFamily] = &[
        #[cfg(feature = "sha2")]
        HashFamily::Sha2,
        #[cfg(feature = "shake")]
        HashFamily::Shake,
    ];

    /// Lower-case name used in [`EngineConfig`] strings.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            #[cfg(feature = "sha2")]
            HashFamily::Sha2 => "sha2",
            #[cfg(feature = "shake")]
            HashFamily::Shake => "shake",
        }
    }

    /// Parse a family name. Families disabled at compile time are unknown.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|family| family.name() == name)
            .ok_or(Error::UnknownParameterSet)
    }
}

impl fmt::Display for HashFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A tweakable hash engine of either family.
#[derive(Clone, Debug)]
pub enum HashEngine {
    /// SHA-2 backend.
    #[cfg(feature = "sha2")]
    Sha2(Sha2Engine),
    /// SHAKE backend.
    #[cfg(feature = "shake")]
    Shake(ShakeEngine),
}

/// Forward a call to whichever backend is active.
macro_rules! dispatch {
    ($self:expr, $engine:ident => $call:expr) => {
        match $self {
            #[cfg(feature = "sha2")]
            HashEngine::Sha2($engine) => $call,
            #[cfg(feature = "shake")]
            HashEngine::Shake($engine) => $call,
        }
    };
}

impl HashEngine {
    /// Construct the backend for `family`.
    ///
    /// Fails with [`Error::UnsupportedBackend`] when the SHA-2 family is asked
    /// for `n > 32`.
    pub fn new(family: HashFamily, params: Params) -> Result<Self> {
        match family {
            #[cfg(feature = "sha2")]
            HashFamily::Sha2 => Sha2Engine::new(params).map(HashEngine::Sha2),
            #[cfg(feature = "shake")]
            HashFamily::Shake => ShakeEngine::new(params).map(HashEngine::Shake),
        }
    }

    /// Family this engine was built for.
    #[must_use]
    pub fn family(&self) -> HashFamily {
        match self {
            #[cfg(feature = "sha2")]
            HashEngine::Sha2(_) => HashFamily::Sha2,
            #[cfg(feature = "shake")]
            HashEngine::Shake(_) => HashFamily::Shake,
        }
    }
}

impl TweakableHash for HashEngine {
    fn params(&self) -> &Params {
        dispatch!(self, e => e.params())
    }

    fn f(&mut self, pk_seed: &[u8], adrs: &Address, m1: &[u8]) -> Vec<u8> {
        dispatch!(self, e => e.f(pk_seed, adrs, m1))
    }

    fn h(&mut self, pk_seed: &[u8], adrs: &Address, m1: &[u8], m2: &[u8]) -> Vec<u8> {
        dispatch!(self, e => e.h(pk_seed, adrs, m1, m2))
    }

    fn t_l(&mut self, pk_seed: &[u8], adrs: &Address, m: &[u8]) -> Vec<u8> {
        dispatch!(self, e => e.t_l(pk_seed, adrs, m))
    }

    fn prf(&mut self, pk_seed: &[u8], sk_seed: &[u8], adrs: &Address) -> Zeroizing<Vec<u8>> {
        dispatch!(self, e => e.prf(pk_seed, sk_seed, adrs))
    }

    fn prf_msg(&mut self, prf: &[u8], randomizer: &[u8], message: &[u8]) -> Zeroizing<Vec<u8>> {
        dispatch!(self, e => e.prf_msg(prf, randomizer, message))
    }

    fn h_msg_bytes(
        &mut self,
        r: &[u8],
        pk_seed: &[u8],
        pk_root: &[u8],
        message: &[u8],
        out_len: usize,
    ) -> Vec<u8> {
        dispatch!(self, e => e.h_msg_bytes(r, pk_seed, pk_root, message, out_len))
    }
}

/// Family, parameter set and masking mode, parseable from `<family>-<set>-<mode>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EngineConfig {
    /// Hash family.
    pub family: HashFamily,
    /// Published parameter shape.
    pub set: ParameterSet,
    /// Robust (`true`) or simple (`false`) tweakable hashing.
    pub robust: bool,
}

impl EngineConfig {
    /// Validate the parameters and construct the engine.
    pub fn build(&self) -> Result<HashEngine> {
        let params = self.set.params(self.robust)?;
        HashEngine::new(self.family, params)
    }
}

impl FromStr for EngineConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split('-');
        let (Some(family), Some(set), Some(mode), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(Error::UnknownParameterSet);
        };

        let robust = match mode {
            "robust" => true,
            "simple" => false,
            _ => return Err(Error::UnknownParameterSet),
        };

        Ok(Self {
            family: HashFamily::from_name(family)?,
            set: ParameterSet::from_name(set)?,
            robust,
        })
    }
}

impl fmt::Display for EngineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = if self.robust { "robust" } else { "simple" };
        write!(f, "{}-{}-{}", self.family, self.set, mode)
    }
}
