use crate::errors::OutOfBounds;
use crate::iter::Symbols;
use crate::splice;
use crate::StrandKind;

/// Core contract for strand representations.
///
/// A strand is a mutable sequence of symbols drawn from the four-letter DNA
/// alphabet (lowercase `acgt` by convention; the contract itself performs no
/// validation and passes other bytes through uninterpreted). Every
/// representation must support sizing, indexed access, appending, reversal,
/// and reinitialization; the shared algorithms ([`Strand::symbols`] and
/// [`Strand::cut_and_splice`]) are written purely against these primitives
/// and behave identically across all representations.
pub trait Strand {
    /// Total number of symbols in this strand.
    fn size(&self) -> usize;

    /// Reset this strand so it represents exactly `source`, discarding any
    /// previous content and zeroing the append counter. Callable on a fresh
    /// or previously used instance.
    fn initialize(&mut self, source: &str);

    /// Return the symbol at `index`.
    ///
    /// Returns [`OutOfBounds`] when `index >= size()`. Implementations must
    /// be correct for arbitrary access patterns; a representation may cache
    /// scan state so that calls with non-decreasing indices run in amortized
    /// O(1) each.
    fn char_at(&self, index: usize) -> Result<char, OutOfBounds>;

    /// Concatenate `text` to the end of this strand and increment the
    /// append counter by one. Returns `self` so calls can be chained.
    fn append(&mut self, text: &str) -> &mut Self;

    /// Build a new strand of the same concrete kind from `source`.
    ///
    /// Generic algorithms use this to produce same-typed results without
    /// knowing which representation they are working with.
    fn instance(&self, source: &str) -> Self
    where
        Self: Sized;

    /// Return a new strand whose content is the reverse of this strand's.
    ///
    /// The source is left unmodified, and the result carries the source's
    /// append counter as it stood at the time of the call.
    fn reverse(&self) -> Self
    where
        Self: Sized;

    /// Number of times [`Strand::append`] has been called since the last
    /// [`Strand::initialize`]. Reversal does not affect it.
    fn append_count(&self) -> usize;

    /// Tag identifying the concrete representation.
    fn kind(&self) -> StrandKind;

    /// Return `true` if the strand holds no symbols.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Materialize the full content as one contiguous `String`.
    ///
    /// The default walks [`Strand::symbols`]; representations with direct
    /// access to their backing storage override this with a straight copy.
    fn to_text(&self) -> String
    where
        Self: Sized,
    {
        self.symbols().collect()
    }

    /// Lazy forward iterator over the symbols. Each call returns a fresh
    /// iterator starting at index zero.
    fn symbols(&self) -> Symbols<'_, Self>
    where
        Self: Sized,
    {
        Symbols::new(self)
    }

    /// Cut this strand at every occurrence of `enzyme` and splice in
    /// `splicee`, returning the recombinant strand and leaving this strand
    /// unchanged.
    ///
    /// The content is split on every non-overlapping literal occurrence of
    /// the enzyme, keeping empty pieces at the boundaries. The result is
    /// built through [`Strand::instance`] and [`Strand::append`], so its
    /// append counter reflects one call per piece plus one per insertion.
    fn cut_and_splice(&self, enzyme: &str, splicee: &str) -> Self
    where
        Self: Sized,
    {
        let text = self.to_text();
        let pieces = splice::split_on_enzyme(&text, enzyme);
        let mut recombinant = self.instance("");
        for piece in &pieces[..pieces.len() - 1] {
            recombinant.append(piece).append(splicee);
        }
        recombinant.append(pieces[pieces.len() - 1]);
        recombinant
    }
}
