//! # SPHINCS+ Core
//!
//! Shared types for the SPHINCS+ tweakable hash engine.
//!
//! This crate provides:
//! - The configuration error type raised when an engine is constructed
//! - Secure memory handling with zeroize integration

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;

pub use error::{Error, Result};

/// Re-export zeroize for convenience.
pub use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};
