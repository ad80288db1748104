//! Parameter derivation.
//!
//! [`Params`] is validated once and immutable afterwards. The WOTS+ checksum
//! length `len2` comes from a lookup table keyed by `(w, n)`; the breakpoints
//! are those of the published parameter sets, not a closed form.

use core::fmt;
use sphincs_core::{Error, Result};

/// Winternitz parameters the engine supports.
pub const SUPPORTED_W: [u32; 2] = [16, 256];

/// Widest tree index carried by an [`IndexedDigest`](crate::IndexedDigest).
pub const MAX_TREE_BITS: usize = 64;

/// Widest leaf index carried by an [`IndexedDigest`](crate::IndexedDigest).
pub const MAX_LEAF_BITS: usize = 32;

/// Largest FORS tree height for which `t = 2^a` fits in a `u32`.
pub const MAX_FORS_HEIGHT: usize = 31;

/// `len2` breakpoints for `w = 16`: `(largest n, len2)`.
const LEN2_W16: [(usize, usize); 3] = [(8, 2), (136, 3), (256, 4)];

/// `len2` breakpoints for `w = 256`: `(largest n, len2)`.
const LEN2_W256: [(usize, usize); 2] = [(1, 1), (256, 2)];

/// Look up `(log2(w), len2)` for a Winternitz parameter and security parameter.
fn wots_len2(n: usize, w: u32) -> Result<(usize, usize)> {
    let (log_w, table): (usize, &[(usize, usize)]) = match w {
        16 => (4, &LEN2_W16),
        256 => (8, &LEN2_W256),
        _ => return Err(Error::UnsupportedWinternitz { w }),
    };

    if n == 0 {
        return Err(Error::UnsupportedSecurityParameter { n, w });
    }

    table
        .iter()
        .find(|&&(max_n, _)| n <= max_n)
        .map(|&(_, len2)| (log_w, len2))
        .ok_or(Error::UnsupportedSecurityParameter { n, w })
}

/// Immutable engine configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Params {
    robust: bool,
    n: usize,
    w: u32,
    log_w: usize,
    len1: usize,
    len2: usize,
    d: usize,
    a: usize,
    k: usize,
    h: usize,
}

impl Params {
    /// Derive and validate a parameter set.
    ///
    /// # Arguments
    /// * `robust` - Enable the bitmask countermeasure
    /// * `n` - Security parameter in bytes
    /// * `w` - Winternitz parameter (16 or 256)
    /// * `d` - Hypertree layers
    /// * `a` - FORS tree height
    /// * `k` - FORS tree count
    /// * `h` - Total hypertree height
    pub fn new(robust: bool, n: usize, w: u32, d: usize, a: usize, k: usize, h: usize) -> Result<Self> {
        let (log_w, len2) = wots_len2(n, w)?;

        if d == 0 || h % d != 0 {
            return Err(Error::InvalidLayerCount { h, d });
        }
        let leaf_bits = h / d;
        if leaf_bits > MAX_LEAF_BITS || h - leaf_bits > MAX_TREE_BITS {
            return Err(Error::UnsupportedTreeHeight { h, d });
        }
        if a > MAX_FORS_HEIGHT {
            return Err(Error::UnsupportedForsHeight { a });
        }

        Ok(Self {
            robust,
            n,
            w,
            log_w,
            len1: 8 * n / log_w,
            len2,
            d,
            a,
            k,
            h,
        })
    }

    /// Whether the bitmask countermeasure is enabled.
    #[must_use]
    pub const fn robust(&self) -> bool {
        self.robust
    }

    /// Security parameter n in bytes.
    #[must_use]
    pub const fn n(&self) -> usize {
        self.n
    }

    /// Winternitz parameter w.
    #[must_use]
    pub const fn w(&self) -> u32 {
        self.w
    }

    /// log2(w).
    #[must_use]
    pub const fn log_w(&self) -> usize {
        self.log_w
    }

    /// Number of message chains, `floor(8n / log2(w))`.
    #[must_use]
    pub const fn len1(&self) -> usize {
        self.len1
    }

    /// Number of checksum chains.
    #[must_use]
    pub const fn len2(&self) -> usize {
        self.len2
    }

    /// Total WOTS+ chains, `len1 + len2`.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len1 + self.len2
    }

    /// Hypertree layers.
    #[must_use]
    pub const fn d(&self) -> usize {
        self.d
    }

    /// FORS tree height.
    #[must_use]
    pub const fn a(&self) -> usize {
        self.a
    }

    /// FORS tree count.
    #[must_use]
    pub const fn k(&self) -> usize {
        self.k
    }

    /// Total hypertree height.
    #[must_use]
    pub const fn h(&self) -> usize {
        self.h
    }

    /// Height of a single XMSS layer, `h / d`.
    #[must_use]
    pub const fn h_prime(&self) -> usize {
        self.h / self.d
    }

    /// Leaves per FORS tree, `2^a`.
    #[must_use]
    pub const fn t(&self) -> u32 {
        1 << self.a
    }

    /// Byte and bit widths of the H_msg output.
    #[must_use]
    pub const fn digest_layout(&self) -> DigestLayout {
        let leaf_bits = self.h_prime();
        let tree_bits = self.h - leaf_bits;
        DigestLayout {
            fors_msg_bytes: (self.a * self.k).div_ceil(8),
            tree_bits,
            leaf_bits,
            tree_bytes: tree_bits.div_ceil(8),
            leaf_bytes: leaf_bits.div_ceil(8),
        }
    }
}

/// Partitioning of the H_msg output into FORS message, tree index and leaf index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DigestLayout {
    /// Bytes of FORS message, `ceil(a*k / 8)`.
    pub fors_msg_bytes: usize,
    /// Significant bits of the tree index, `h - h/d`.
    pub tree_bits: usize,
    /// Significant bits of the leaf index, `h/d`.
    pub leaf_bits: usize,
    /// Bytes holding the tree index.
    pub tree_bytes: usize,
    /// Bytes holding the leaf index.
    pub leaf_bytes: usize,
}

impl DigestLayout {
    /// Total H_msg output length m.
    #[must_use]
    pub const fn total_bytes(&self) -> usize {
        self.fors_msg_bytes + self.tree_bytes + self.leaf_bytes
    }
}

/// Published SPHINCS+ parameter shapes (all with `w = 16`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParameterSet {
    /// n=16, h=63, d=7, a=12, k=14.
    L128s,
    /// n=16, h=66, d=22, a=6, k=33.
    L128f,
    /// n=24, h=63, d=7, a=14, k=17.
    L192s,
    /// n=24, h=66, d=22, a=8, k=33.
    L192f,
    /// n=32, h=64, d=8, a=14, k=22.
    L256s,
    /// n=32, h=68, d=17, a=9, k=35.
    L256f,
}

impl ParameterSet {
    /// Every named set, smallest security level first.
    pub const ALL: [ParameterSet; 6] = [
        ParameterSet::L128s,
        ParameterSet::L128f,
        ParameterSet::L192s,
        ParameterSet::L192f,
        ParameterSet::L256s,
        ParameterSet::L256f,
    ];

    /// `(n, h, d, a, k)` for this set.
    #[must_use]
    pub const fn shape(self) -> (usize, usize, usize, usize, usize) {
        match self {
            ParameterSet::L128s => (16, 63, 7, 12, 14),
            ParameterSet::L128f => (16, 66, 22, 6, 33),
            ParameterSet::L192s => (24, 63, 7, 14, 17),
            ParameterSet::L192f => (24, 66, 22, 8, 33),
            ParameterSet::L256s => (32, 64, 8, 14, 22),
            ParameterSet::L256f => (32, 68, 17, 9, 35),
        }
    }

    /// Derive [`Params`] for this set.
    pub fn params(self, robust: bool) -> Result<Params> {
        let (n, h, d, a, k) = self.shape();
        Params::new(robust, n, 16, d, a, k, h)
    }

    /// Short name, e.g. `128f`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ParameterSet::L128s => "128s",
            ParameterSet::L128f => "128f",
            ParameterSet::L192s => "192s",
            ParameterSet::L192f => "192f",
            ParameterSet::L256s => "256s",
            ParameterSet::L256f => "256f",
        }
    }

    /// Look a set up by its short name.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|set| set.name() == name)
            .ok_or(Error::UnknownParameterSet)
    }
}

impl fmt::Display for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
