//! Pluggable strand representations for DNA cut-and-splice experiments.
//!
//! A strand is a mutable sequence of symbols drawn from the four-letter DNA
//! alphabet. Three interchangeable representations implement the [`Strand`]
//! contract:
//!
//! - [`FlatStrand`]: one contiguous string, recopied on every append.
//! - [`BufferedStrand`]: a growable buffer with amortized O(1) append.
//! - [`ChainStrand`]: a linked chain of immutable fragments with O(1)
//!   append, copy-free reversal of the fragment structure, and a scan
//!   cursor that makes sequential indexed access amortized O(1).
//!
//! The cut-and-splice recombination and the character iterator are written
//! once against the contract and work identically across all three.

pub mod errors;
pub mod iter;
pub mod prelude;
pub mod splice;
pub mod strands;
pub mod traits;

pub use errors::{OutOfBounds, UnknownStrandKind};
pub use iter::Symbols;
pub use strands::{BufferedStrand, ChainStrand, FlatStrand};
pub use traits::Strand;

use serde::{Deserialize, Serialize};

/// Selector for the concrete strand representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrandKind {
    /// Contiguous string, copy-on-append.
    Flat,
    /// Growable buffer, amortized-O(1) append.
    Buffered,
    /// Linked fragments, O(1) append and cursor-accelerated access.
    Chain,
}

impl StrandKind {
    /// Construct a strand of this kind representing `source`.
    pub fn strand(&self, source: &str) -> AnyStrand {
        match self {
            StrandKind::Flat => AnyStrand::Flat(FlatStrand::new(source)),
            StrandKind::Buffered => AnyStrand::Buffered(BufferedStrand::new(source)),
            StrandKind::Chain => AnyStrand::Chain(ChainStrand::new(source)),
        }
    }
}

impl Default for StrandKind {
    fn default() -> Self {
        Self::Chain
    }
}

impl std::fmt::Display for StrandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flat => write!(f, "flat"),
            Self::Buffered => write!(f, "buffered"),
            Self::Chain => write!(f, "chain"),
        }
    }
}

impl std::str::FromStr for StrandKind {
    type Err = UnknownStrandKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flat" => Ok(Self::Flat),
            "buffered" => Ok(Self::Buffered),
            "chain" => Ok(Self::Chain),
            _ => Err(UnknownStrandKind(s.to_string())),
        }
    }
}

/// A strand of any concrete kind, selected at runtime.
///
/// Dispatches every [`Strand`] operation to the wrapped representation, so
/// callers that pick a kind from configuration (benchmarks, interactive
/// tools) can still run the generic algorithms.
#[derive(Debug, Clone)]
pub enum AnyStrand {
    Flat(FlatStrand),
    Buffered(BufferedStrand),
    Chain(ChainStrand),
}

impl Strand for AnyStrand {
    fn size(&self) -> usize {
        match self {
            Self::Flat(s) => s.size(),
            Self::Buffered(s) => s.size(),
            Self::Chain(s) => s.size(),
        }
    }

    fn initialize(&mut self, source: &str) {
        match self {
            Self::Flat(s) => s.initialize(source),
            Self::Buffered(s) => s.initialize(source),
            Self::Chain(s) => s.initialize(source),
        }
    }

    fn char_at(&self, index: usize) -> Result<char, OutOfBounds> {
        match self {
            Self::Flat(s) => s.char_at(index),
            Self::Buffered(s) => s.char_at(index),
            Self::Chain(s) => s.char_at(index),
        }
    }

    fn append(&mut self, text: &str) -> &mut Self {
        match self {
            Self::Flat(s) => {
                s.append(text);
            }
            Self::Buffered(s) => {
                s.append(text);
            }
            Self::Chain(s) => {
                s.append(text);
            }
        }
        self
    }

    fn instance(&self, source: &str) -> Self {
        self.kind().strand(source)
    }

    fn reverse(&self) -> Self {
        match self {
            Self::Flat(s) => Self::Flat(s.reverse()),
            Self::Buffered(s) => Self::Buffered(s.reverse()),
            Self::Chain(s) => Self::Chain(s.reverse()),
        }
    }

    fn append_count(&self) -> usize {
        match self {
            Self::Flat(s) => s.append_count(),
            Self::Buffered(s) => s.append_count(),
            Self::Chain(s) => s.append_count(),
        }
    }

    fn kind(&self) -> StrandKind {
        match self {
            Self::Flat(_) => StrandKind::Flat,
            Self::Buffered(_) => StrandKind::Buffered,
            Self::Chain(_) => StrandKind::Chain,
        }
    }

    fn to_text(&self) -> String {
        match self {
            Self::Flat(s) => s.to_text(),
            Self::Buffered(s) => s.to_text(),
            Self::Chain(s) => s.to_text(),
        }
    }
}

impl std::fmt::Display for AnyStrand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<FlatStrand> for AnyStrand {
    fn from(strand: FlatStrand) -> Self {
        Self::Flat(strand)
    }
}

impl From<BufferedStrand> for AnyStrand {
    fn from(strand: BufferedStrand) -> Self {
        Self::Buffered(strand)
    }
}

impl From<ChainStrand> for AnyStrand {
    fn from(strand: ChainStrand) -> Self {
        Self::Chain(strand)
    }
}
