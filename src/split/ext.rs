//! Method-call syntax for backward splitting

use super::{Haystack, SplitBackwardSeq};

/// Backward splitting as methods on `str` and `[u8]`
///
/// ```
/// use backsplit::SplitBackwardExt;
///
/// assert_eq!("usr/local/bin".split_backward_n("/", 2), Some(vec!["bin", "usr/local"]));
/// assert_eq!(b"k=v".split_backward_after(&b"="[..]), [&b"=v"[..], &b"k"[..]]);
/// ```
pub trait SplitBackwardExt: Haystack {
    fn split_backward<'a>(&'a self, sep: &Self) -> Vec<&'a Self> {
        super::split_backward(self, sep)
    }

    fn split_backward_n<'a>(&'a self, sep: &Self, n: isize) -> Option<Vec<&'a Self>> {
        super::split_backward_n(self, sep, n)
    }

    fn split_backward_after<'a>(&'a self, sep: &Self) -> Vec<&'a Self> {
        super::split_backward_after(self, sep)
    }

    fn split_backward_after_n<'a>(&'a self, sep: &Self, n: isize) -> Option<Vec<&'a Self>> {
        super::split_backward_after_n(self, sep, n)
    }

    fn split_backward_seq<'a, 's>(&'a self, sep: &'s Self) -> SplitBackwardSeq<'a, 's, Self> {
        super::split_backward_seq(self, sep)
    }

    fn split_backward_after_seq<'a, 's>(&'a self, sep: &'s Self) -> SplitBackwardSeq<'a, 's, Self> {
        super::split_backward_after_seq(self, sep)
    }
}

impl SplitBackwardExt for str {}

impl SplitBackwardExt for [u8] {}
