//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use dnastrand::prelude::*;
//!
//! let mut strand = ChainStrand::new("aggtccg");
//! strand.append("aattcaaa");
//! assert_eq!(strand.cut_and_splice("aattc", "TTT").to_text(), "aggtccgTTTaaa");
//! ```

pub use crate::errors::{OutOfBounds, UnknownStrandKind};
pub use crate::iter::Symbols;
pub use crate::splice::{break_count, clean_dna, split_on_enzyme};
pub use crate::strands::{BufferedStrand, ChainStrand, FlatStrand};
pub use crate::traits::Strand;
pub use crate::{AnyStrand, StrandKind};
