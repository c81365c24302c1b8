//! Backward scanning state
//!
//! The scanner tracks the unconsumed prefix of the input (`input[..end]`) and
//! cuts fragments off its tail. It stores offsets only, so the same state
//! drives borrowed iterators and owned, resumable streams alike. Every method
//! returns the byte range of the fragment it produced.

use std::ops::Range;

use super::separator::{Separator, SeparatorPolicy};
use super::utf8::last_char_len;

/// Backward scanner over an input of known length
#[derive(Debug, Clone)]
pub struct BackwardScanner {
    end: usize,
    done: bool,
}

impl BackwardScanner {
    /// Create a scanner positioned at the end of an input of `len` bytes
    #[inline]
    pub fn new(len: usize) -> Self {
        BackwardScanner { end: len, done: false }
    }

    /// End of the unconsumed prefix
    #[inline]
    pub fn position(&self) -> usize {
        self.end
    }

    /// Check if the scanner has produced its last fragment
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Stop the scanner; no further fragments will be produced
    #[inline]
    pub fn finish(&mut self) {
        self.done = true;
    }

    /// Cut at the last occurrence of `sep` in the unconsumed prefix
    ///
    /// Returns `None` without changing state when there is no occurrence.
    #[inline]
    pub fn cut_last(
        &mut self,
        input: &[u8],
        sep: &Separator<'_>,
        policy: SeparatorPolicy,
    ) -> Option<Range<usize>> {
        if self.done {
            return None;
        }
        let m = sep.rfind(&input[..self.end])?;
        let fragment = m + policy.skip(sep.len())..self.end;
        self.end = m;
        Some(fragment)
    }

    /// Peel the last character off the unconsumed prefix
    #[inline]
    pub fn peel_char(&mut self, input: &[u8]) -> Option<Range<usize>> {
        if self.done || self.end == 0 {
            return None;
        }
        let start = self.end - last_char_len(&input[..self.end]);
        let fragment = start..self.end;
        self.end = start;
        Some(fragment)
    }

    /// Take whatever is left of the unconsumed prefix and finish
    #[inline]
    pub fn take_remainder(&mut self) -> Option<Range<usize>> {
        if self.done {
            return None;
        }
        self.done = true;
        Some(0..self.end)
    }

    /// Produce the next fragment of an unlimited backward split
    ///
    /// With a needle, every match yields a fragment and the remainder is
    /// yielded last (possibly empty). With an empty separator every character
    /// is its own fragment and there is no remainder step.
    pub fn next_fragment(
        &mut self,
        input: &[u8],
        sep: &Separator<'_>,
        policy: SeparatorPolicy,
    ) -> Option<Range<usize>> {
        if self.done {
            return None;
        }
        match sep {
            Separator::Chars => {
                let fragment = self.peel_char(input);
                if fragment.is_none() {
                    self.done = true;
                }
                fragment
            }
            Separator::Needle(_) => self
                .cut_last(input, sep, policy)
                .or_else(|| self.take_remainder()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cut_last() {
        let input = b"a,b,c";
        let sep = Separator::new(b",");
        let mut scanner = BackwardScanner::new(input.len());
        assert_eq!(scanner.cut_last(input, &sep, SeparatorPolicy::Exclude), Some(4..5));
        assert_eq!(scanner.position(), 3);
        assert_eq!(scanner.cut_last(input, &sep, SeparatorPolicy::Retain), Some(1..3));
        assert_eq!(scanner.cut_last(input, &sep, SeparatorPolicy::Exclude), None);
        assert_eq!(scanner.position(), 1);
        assert_eq!(scanner.take_remainder(), Some(0..1));
        assert!(scanner.is_done());
        assert_eq!(scanner.take_remainder(), None);
    }

    #[test]
    fn test_peel_char() {
        let input = "x\u{263A}".as_bytes();
        let mut scanner = BackwardScanner::new(input.len());
        assert_eq!(scanner.peel_char(input), Some(1..4));
        assert_eq!(scanner.peel_char(input), Some(0..1));
        assert_eq!(scanner.peel_char(input), None);
    }

    #[test]
    fn test_next_fragment_remainder_last() {
        let input = b"a,";
        let sep = Separator::new(b",");
        let mut scanner = BackwardScanner::new(input.len());
        let policy = SeparatorPolicy::Exclude;
        assert_eq!(scanner.next_fragment(input, &sep, policy), Some(2..2));
        assert_eq!(scanner.next_fragment(input, &sep, policy), Some(0..1));
        assert_eq!(scanner.next_fragment(input, &sep, policy), None);
        assert_eq!(scanner.next_fragment(input, &sep, policy), None);
    }

    #[test]
    fn test_next_fragment_chars_has_no_remainder() {
        let sep = Separator::new(b"");
        let mut scanner = BackwardScanner::new(0);
        assert_eq!(scanner.next_fragment(b"", &sep, SeparatorPolicy::Exclude), None);
        assert!(scanner.is_done());
    }

    #[test]
    fn test_finish_stops_scanner() {
        let input = b"a,b";
        let sep = Separator::new(b",");
        let mut scanner = BackwardScanner::new(input.len());
        scanner.finish();
        assert_eq!(scanner.next_fragment(input, &sep, SeparatorPolicy::Exclude), None);
    }
}
