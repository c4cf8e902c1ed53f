use std::fmt;

use crate::errors::OutOfBounds;
use crate::traits::Strand;
use crate::StrandKind;

/// Strand backed by a growable byte buffer.
///
/// Behaves exactly like [`FlatStrand`](super::FlatStrand) but appends in
/// amortized O(1), so it is the representation of choice when a strand is
/// built up front and then read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferedStrand {
    buf: Vec<u8>,
    appends: usize,
}

impl BufferedStrand {
    /// Create a strand representing `source`. No validation is performed.
    pub fn new(source: &str) -> Self {
        Self {
            buf: source.as_bytes().to_vec(),
            appends: 0,
        }
    }

    /// Borrow the backing bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }
}

impl Default for BufferedStrand {
    fn default() -> Self {
        Self::new("")
    }
}

impl Strand for BufferedStrand {
    fn size(&self) -> usize {
        self.buf.len()
    }

    fn initialize(&mut self, source: &str) {
        self.buf = source.as_bytes().to_vec();
        self.appends = 0;
    }

    fn char_at(&self, index: usize) -> Result<char, OutOfBounds> {
        self.buf.get(index).map(|&b| b as char).ok_or(OutOfBounds {
            index,
            len: self.buf.len(),
        })
    }

    fn append(&mut self, text: &str) -> &mut Self {
        self.buf.extend_from_slice(text.as_bytes());
        self.appends += 1;
        self
    }

    fn instance(&self, source: &str) -> Self {
        Self::new(source)
    }

    fn reverse(&self) -> Self {
        let mut buf = self.buf.clone();
        buf.reverse();
        Self {
            buf,
            appends: self.appends,
        }
    }

    fn append_count(&self) -> usize {
        self.appends
    }

    fn kind(&self) -> StrandKind {
        StrandKind::Buffered
    }

    fn to_text(&self) -> String {
        String::from_utf8_lossy(&self.buf).into_owned()
    }
}

impl fmt::Display for BufferedStrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_size_and_text() {
        let strand = BufferedStrand::new("aggtccg");
        assert_eq!(strand.size(), 7);
        assert_eq!(strand.to_text(), "aggtccg");
        assert_eq!(strand.append_count(), 0);
    }

    #[test]
    fn test_append_concatenates_and_counts() {
        let mut strand = BufferedStrand::new("acg");
        strand.append("tta").append("cc");
        assert_eq!(strand.to_text(), "acgttacc");
        assert_eq!(strand.size(), 8);
        assert_eq!(strand.append_count(), 2);
    }

    #[test]
    fn test_initialize_resets_state() {
        let mut strand = BufferedStrand::new("acg");
        strand.append("tta");
        strand.initialize("gg");
        assert_eq!(strand.to_text(), "gg");
        assert_eq!(strand.append_count(), 0);
    }

    #[test]
    fn test_char_at_and_out_of_range() {
        let strand = BufferedStrand::new("acgt");
        assert_eq!(strand.char_at(2), Ok('g'));
        let err = strand.char_at(17).unwrap_err();
        assert_eq!(err.index, 17);
        assert_eq!(err.len, 4);
    }

    #[test]
    fn test_reverse_content_and_count() {
        let mut strand = BufferedStrand::new("cgat");
        strand.append("aa");
        let reversed = strand.reverse();
        assert_eq!(reversed.to_text(), "aatagc");
        assert_eq!(reversed.append_count(), strand.append_count());
        assert_eq!(strand.to_text(), "cgataa");
    }

    #[test]
    fn test_instance_builds_same_kind() {
        let strand = BufferedStrand::new("acg");
        let other = strand.instance("tt");
        assert_eq!(other.kind(), StrandKind::Buffered);
        assert_eq!(other.to_text(), "tt");
    }
}
