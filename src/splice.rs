//! Shared helpers for the cut-and-splice operation.
//!
//! Splitting on the enzyme is the one piece of cut-and-splice that does not
//! go through the [`Strand`](crate::traits::Strand) contract, so it lives
//! here where every representation (and the tests and benchmarks) can share
//! it.

/// Split `text` on every non-overlapping literal occurrence of `enzyme`.
///
/// Empty pieces produced by leading, trailing, or adjacent occurrences are
/// kept, so the result always has exactly one more piece than there are
/// occurrences. An empty enzyme cuts nothing and yields the whole text as a
/// single piece.
pub fn split_on_enzyme<'a>(text: &'a str, enzyme: &str) -> Vec<&'a str> {
    if enzyme.is_empty() {
        return vec![text];
    }
    text.split(enzyme).collect()
}

/// Number of enzyme occurrences in `text`, i.e. the number of cuts a
/// recombination makes.
pub fn break_count(text: &str, enzyme: &str) -> usize {
    split_on_enzyme(text, enzyme).len() - 1
}

/// Normalize raw input to lowercase DNA, dropping every character outside
/// `acgt`. Strand representations accept the cleaned text as-is and perform
/// no validation of their own.
pub fn clean_dna(raw: &str) -> String {
    raw.chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(|c| matches!(c, 'a' | 'c' | 'g' | 't'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_single_occurrence() {
        let pieces = split_on_enzyme("aggtccgaattcaaa", "aattc");
        assert_eq!(pieces, vec!["aggtccg", "aaa"]);
    }

    #[test]
    fn test_split_no_occurrence() {
        let pieces = split_on_enzyme("aaaa", "gg");
        assert_eq!(pieces, vec!["aaaa"]);
    }

    #[test]
    fn test_split_keeps_leading_empty_piece() {
        let pieces = split_on_enzyme("ggaaa", "gg");
        assert_eq!(pieces, vec!["", "aaa"]);
    }

    #[test]
    fn test_split_keeps_trailing_empty_piece() {
        let pieces = split_on_enzyme("aaagg", "gg");
        assert_eq!(pieces, vec!["aaa", ""]);
    }

    #[test]
    fn test_split_keeps_adjacent_empty_pieces() {
        let pieces = split_on_enzyme("gggg", "gg");
        assert_eq!(pieces, vec!["", "", ""]);
    }

    #[test]
    fn test_split_empty_enzyme_cuts_nothing() {
        let pieces = split_on_enzyme("acgt", "");
        assert_eq!(pieces, vec!["acgt"]);
    }

    #[test]
    fn test_split_empty_text() {
        let pieces = split_on_enzyme("", "gg");
        assert_eq!(pieces, vec![""]);
    }

    #[test]
    fn test_break_count() {
        assert_eq!(break_count("aggtccgaattcaaa", "aattc"), 1);
        assert_eq!(break_count("aaaa", "gg"), 0);
        assert_eq!(break_count("gggg", "gg"), 2);
        assert_eq!(break_count("acgt", ""), 0);
    }

    #[test]
    fn test_clean_dna_lowercases() {
        assert_eq!(clean_dna("ACGT"), "acgt");
        assert_eq!(clean_dna("AcGt"), "acgt");
    }

    #[test]
    fn test_clean_dna_drops_foreign_characters() {
        assert_eq!(clean_dna("ac>gt\nNNN acgt"), "acgtacgt");
        assert_eq!(clean_dna("12345"), "");
    }
}
