use std::fmt;

use crate::errors::OutOfBounds;
use crate::traits::Strand;
use crate::StrandKind;

/// Strand backed by a single contiguous string.
///
/// Every append allocates a fresh string and copies all prior data into it.
/// This representation exists as the baseline for reasoning about the cost
/// of copy-on-append; use [`BufferedStrand`](super::BufferedStrand) or
/// [`ChainStrand`](super::ChainStrand) when building strands incrementally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatStrand {
    text: String,
    appends: usize,
}

impl FlatStrand {
    /// Create a strand representing `source`. No validation is performed.
    pub fn new(source: &str) -> Self {
        Self {
            text: source.to_owned(),
            appends: 0,
        }
    }

    /// Borrow the backing text.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Default for FlatStrand {
    fn default() -> Self {
        Self::new("")
    }
}

impl Strand for FlatStrand {
    fn size(&self) -> usize {
        self.text.len()
    }

    fn initialize(&mut self, source: &str) {
        self.text = source.to_owned();
        self.appends = 0;
    }

    fn char_at(&self, index: usize) -> Result<char, OutOfBounds> {
        self.text
            .as_bytes()
            .get(index)
            .map(|&b| b as char)
            .ok_or(OutOfBounds {
                index,
                len: self.text.len(),
            })
    }

    fn append(&mut self, text: &str) -> &mut Self {
        // A deliberate fresh allocation per call: the whole point of this
        // representation is that prior data is recopied on every append.
        let mut joined = String::with_capacity(self.text.len() + text.len());
        joined.push_str(&self.text);
        joined.push_str(text);
        self.text = joined;
        self.appends += 1;
        self
    }

    fn instance(&self, source: &str) -> Self {
        Self::new(source)
    }

    fn reverse(&self) -> Self {
        Self {
            text: self.text.chars().rev().collect(),
            appends: self.appends,
        }
    }

    fn append_count(&self) -> usize {
        self.appends
    }

    fn kind(&self) -> StrandKind {
        StrandKind::Flat
    }

    fn to_text(&self) -> String {
        self.text.clone()
    }
}

impl fmt::Display for FlatStrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
