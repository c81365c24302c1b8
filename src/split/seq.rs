//! Lazy backward splitter

use std::fmt;
use std::iter::FusedIterator;

use super::Haystack;
use crate::core::utf8::MAX_CHAR_LEN;
use crate::core::{BackwardScanner, Separator, SeparatorPolicy};

/// Single-use iterator over the fragments of a backward split
///
/// Yields exactly the fragments of the unlimited eager split, in the same
/// order, computing one fragment per call to `next`. Once it returns `None`
/// it stays exhausted.
pub struct SplitBackwardSeq<'a, 's, H: ?Sized> {
    haystack: &'a H,
    sep: Separator<'s>,
    policy: SeparatorPolicy,
    scanner: BackwardScanner,
}

impl<'a, 's, H: Haystack + ?Sized> SplitBackwardSeq<'a, 's, H> {
    pub(crate) fn new(haystack: &'a H, sep: &'s [u8], policy: SeparatorPolicy) -> Self {
        SplitBackwardSeq {
            haystack,
            sep: Separator::new(sep),
            policy,
            scanner: BackwardScanner::new(haystack.as_bytes().len()),
        }
    }

    /// The part of the input not yet handed out
    pub fn remainder(&self) -> &'a H {
        if self.scanner.is_done() {
            self.haystack.fragment(0..0)
        } else {
            self.haystack.fragment(0..self.scanner.position())
        }
    }
}

impl<'a, H: Haystack + ?Sized> Iterator for SplitBackwardSeq<'a, '_, H> {
    type Item = &'a H;

    #[inline]
    fn next(&mut self) -> Option<&'a H> {
        let range = self
            .scanner
            .next_fragment(self.haystack.as_bytes(), &self.sep, self.policy)?;
        Some(self.haystack.fragment(range))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.scanner.is_done() {
            return (0, Some(0));
        }
        let remaining = self.scanner.position();
        match self.sep {
            Separator::Chars => (remaining.div_ceil(MAX_CHAR_LEN), Some(remaining)),
            Separator::Needle(_) => (1, Some(remaining + 1)),
        }
    }
}

impl<H: Haystack + ?Sized> FusedIterator for SplitBackwardSeq<'_, '_, H> {}

impl<H: ?Sized> fmt::Debug for SplitBackwardSeq<'_, '_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitBackwardSeq")
            .field("sep", &self.sep.as_bytes())
            .field("policy", &self.policy)
            .field("position", &self.scanner.position())
            .field("done", &self.scanner.is_done())
            .finish()
    }
}
