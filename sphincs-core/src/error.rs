//! Error types for SPHINCS+ engine construction.
//!
//! Every variant describes a configuration that cannot be turned into a hash
//! engine. Once an engine exists its operations do not fail.

use core::fmt;

/// Result type alias using [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised while deriving parameters or constructing an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Winternitz parameter other than 16 or 256.
    UnsupportedWinternitz {
        /// Requested Winternitz parameter.
        w: u32,
    },

    /// Security parameter outside the `len2` table for the chosen `w`.
    UnsupportedSecurityParameter {
        /// Requested security parameter in bytes.
        n: usize,
        /// Winternitz parameter the table was consulted for.
        w: u32,
    },

    /// Hypertree height not evenly divisible by the layer count.
    InvalidLayerCount {
        /// Total hypertree height.
        h: usize,
        /// Number of hypertree layers.
        d: usize,
    },

    /// Tree or leaf index would not fit in 64 or 32 bits respectively.
    UnsupportedTreeHeight {
        /// Total hypertree height.
        h: usize,
        /// Number of hypertree layers.
        d: usize,
    },

    /// FORS tree height too large for the leaf count to be represented.
    UnsupportedForsHeight {
        /// Requested FORS tree height.
        a: usize,
    },

    /// Security parameter longer than the backend's digest.
    UnsupportedBackend {
        /// Requested security parameter in bytes.
        n: usize,
    },

    /// Parameter set name not recognized.
    UnknownParameterSet,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedWinternitz { w } => {
                write!(f, "unsupported Winternitz parameter {w}: expected 16 or 256")
            }
            Error::UnsupportedSecurityParameter { n, w } => {
                write!(f, "cannot derive len2 for n = {n} with w = {w}")
            }
            Error::InvalidLayerCount { h, d } => {
                write!(f, "hypertree height {h} is not divisible by {d} layers")
            }
            Error::UnsupportedTreeHeight { h, d } => {
                write!(
                    f,
                    "hypertree h = {h}, d = {d} needs indices wider than 64/32 bits"
                )
            }
            Error::UnsupportedForsHeight { a } => {
                write!(f, "unsupported FORS tree height {a}")
            }
            Error::UnsupportedBackend { n } => {
                write!(f, "security parameter n = {n} exceeds the backend digest size")
            }
            Error::UnknownParameterSet => write!(f, "unknown parameter set"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_parameters() {
        let msg = Error::UnsupportedSecurityParameter { n: 257, w: 16 }.to_string();
        assert!(msg.contains("257"));
        assert!(msg.contains("16"));

        let msg = Error::InvalidLayerCount { h: 63, d: 8 }.to_string();
        assert!(msg.contains("63"));
        assert!(msg.contains('8'));
    }

    #[test]
    fn test_errors_compare_by_value() {
        assert_eq!(
            Error::UnsupportedWinternitz { w: 999 },
            Error::UnsupportedWinternitz { w: 999 }
        );
        assert_ne!(
            Error::UnsupportedWinternitz { w: 999 },
            Error::UnknownParameterSet
        );
    }
}
