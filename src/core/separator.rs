//! Compiled separators
//!
//! A non-empty separator is compiled once into a memchr reverse searcher
//! (SIMD-accelerated where available) and reused for every backward search
//! over the input. An empty separator switches the splitter to per-character
//! decomposition.

use memchr::memmem::{self, FinderRev};

/// A separator ready for backward searching
#[derive(Debug, Clone)]
pub enum Separator<'n> {
    /// Empty separator: split after every character
    Chars,
    /// Non-empty separator with its compiled reverse searcher
    Needle(FinderRev<'n>),
}

impl<'n> Separator<'n> {
    /// Compile a separator
    pub fn new(sep: &'n [u8]) -> Self {
        if sep.is_empty() {
            Separator::Chars
        } else {
            Separator::Needle(FinderRev::new(sep))
        }
    }

    /// Separator bytes (empty for `Chars`)
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Separator::Chars => &[],
            Separator::Needle(finder) => finder.needle(),
        }
    }

    /// Separator length in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Separator::Chars)
    }

    /// Find the last occurrence within `haystack`
    #[inline]
    pub fn rfind(&self, haystack: &[u8]) -> Option<usize> {
        match self {
            Separator::Chars => None,
            Separator::Needle(finder) => finder.rfind(haystack),
        }
    }

    /// Count non-overlapping occurrences within `haystack`
    pub fn count(&self, haystack: &[u8]) -> usize {
        match self {
            Separator::Chars => 0,
            Separator::Needle(finder) => memmem::find_iter(haystack, finder.needle()).count(),
        }
    }

    /// Detach from the borrowed needle (copies the separator bytes)
    pub fn into_owned(self) -> Separator<'static> {
        match self {
            Separator::Chars => Separator::Chars,
            Separator::Needle(finder) => Separator::Needle(finder.into_owned()),
        }
    }
}

/// Whether a fragment keeps the separator that precedes it in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeparatorPolicy {
    /// Separator bytes are dropped from every fragment
    Exclude,
    /// Separator bytes stay at the front of the fragment that follows them
    Retain,
}

impl SeparatorPolicy {
    /// Offset from a match position to the start of the fragment after it
    #[inline]
    pub fn skip(self, sep_len: usize) -> usize {
        match self {
            SeparatorPolicy::Exclude => sep_len,
            SeparatorPolicy::Retain => 0,
        }
    }
}
