use crate::traits::Strand;

/// Lazy forward iterator over a strand's symbols.
///
/// Drives [`Strand::char_at`] with strictly increasing indices, so a
/// representation with a sequential-access cursor serves the whole walk in
/// O(n). The iterator is finite (exactly `size()` items) and restartable:
/// each call to [`Strand::symbols`] begins again at index zero.
#[derive(Debug)]
pub struct Symbols<'a, S: Strand> {
    strand: &'a S,
    index: usize,
}

impl<'a, S: Strand> Symbols<'a, S> {
    pub(crate) fn new(strand: &'a S) -> Self {
        Self { strand, index: 0 }
    }
}

impl<S: Strand> Iterator for Symbols<'_, S> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        if self.index >= self.strand.size() {
            return None;
        }
        let symbol = self.strand.char_at(self.index).ok()?;
        self.index += 1;
        Some(symbol)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.strand.size().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<S: Strand> ExactSizeIterator for Symbols<'_, S> {}
