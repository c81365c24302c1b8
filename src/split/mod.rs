//! Backward splitting over string and byte slices
//!
//! Fragments borrow the input and are returned in scan order: the piece
//! nearest the end of the input comes first.
//!
//! ```
//! use backsplit::{split_backward, split_backward_n};
//!
//! assert_eq!(split_backward("a,b,c", ","), ["c", "b", "a"]);
//! assert_eq!(split_backward_n("a,b,c", ",", 2), Some(vec!["c", "a,b"]));
//! assert_eq!(split_backward_n("a,b,c", ",", 0), None);
//! ```

mod ext;
mod seq;

use std::ops::Range;

use crate::core::{split_ranges, Separator, SeparatorPolicy};

pub use ext::SplitBackwardExt;
pub use seq::SplitBackwardSeq;

/// Input that can be split: viewed as bytes, sliced by byte range
///
/// Implemented for `str` and `[u8]`. For `str`, every range produced by the
/// splitter falls on character boundaries.
pub trait Haystack {
    fn as_bytes(&self) -> &[u8];

    /// Sub-slice covering `range`
    fn fragment(&self, range: Range<usize>) -> &Self;
}

impl Haystack for str {
    #[inline]
    fn as_bytes(&self) -> &[u8] {
        str::as_bytes(self)
    }

    #[inline]
    fn fragment(&self, range: Range<usize>) -> &str {
        &self[range]
    }
}

impl Haystack for [u8] {
    #[inline]
    fn as_bytes(&self) -> &[u8] {
        self
    }

    #[inline]
    fn fragment(&self, range: Range<usize>) -> &[u8] {
        &self[range]
    }
}

/// Slices `s` into all substrings separated by `sep`, starting from the end
///
/// If `s` does not contain a non-empty `sep`, the result is `[s]`. If `sep` is
/// empty, `s` is split after each UTF-8 sequence from the end (malformed bytes
/// individually); if both are empty the result is empty.
pub fn split_backward<'a, H: Haystack + ?Sized>(s: &'a H, sep: &H) -> Vec<&'a H> {
    gen_split_backward(s, sep, SeparatorPolicy::Exclude, -1).unwrap_or_default()
}

/// Like [`split_backward`], but with a count:
///
/// - `n > 0`: at most `n` substrings; the last one is the unsplit remainder
/// - `n == 0`: `None`
/// - `n < 0`: all substrings
pub fn split_backward_n<'a, H: Haystack + ?Sized>(
    s: &'a H,
    sep: &H,
    n: isize,
) -> Option<Vec<&'a H>> {
    gen_split_backward(s, sep, SeparatorPolicy::Exclude, n)
}

/// Slices `s` after each instance of `sep`, starting from the end
///
/// Each fragment keeps the separator in front of it, so the fragments
/// concatenated in reverse order rebuild `s`.
pub fn split_backward_after<'a, H: Haystack + ?Sized>(s: &'a H, sep: &H) -> Vec<&'a H> {
    gen_split_backward(s, sep, SeparatorPolicy::Retain, -1).unwrap_or_default()
}

/// Like [`split_backward_after`], with the count semantics of [`split_backward_n`]
pub fn split_backward_after_n<'a, H: Haystack + ?Sized>(
    s: &'a H,
    sep: &H,
    n: isize,
) -> Option<Vec<&'a H>> {
    gen_split_backward(s, sep, SeparatorPolicy::Retain, n)
}

/// Lazy form of [`split_backward`]
///
/// Yields the same fragments without building the vector. Stop early by
/// dropping the iterator.
pub fn split_backward_seq<'a, 's, H: Haystack + ?Sized>(
    s: &'a H,
    sep: &'s H,
) -> SplitBackwardSeq<'a, 's, H> {
    SplitBackwardSeq::new(s, sep.as_bytes(), SeparatorPolicy::Exclude)
}

/// Lazy form of [`split_backward_after`]
pub fn split_backward_after_seq<'a, 's, H: Haystack + ?Sized>(
    s: &'a H,
    sep: &'s H,
) -> SplitBackwardSeq<'a, 's, H> {
    SplitBackwardSeq::new(s, sep.as_bytes(), SeparatorPolicy::Retain)
}

fn gen_split_backward<'a, H: Haystack + ?Sized>(
    s: &'a H,
    sep: &H,
    policy: SeparatorPolicy,
    n: isize,
) -> Option<Vec<&'a H>> {
    let sep = Separator::new(sep.as_bytes());
    split_ranges(s.as_bytes(), &sep, policy, n)
        .map(|ranges| ranges.into_iter().map(|range| s.fragment(range)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ABCD: &str = "abcd";
    const FACES: &str = "\u{263A}\u{263B}\u{2639}";
    const COMMAS: &str = "1,2,3,4";
    const DOTS: &str = "1....2....3....4";

    struct SplitCase {
        s: &'static [u8],
        sep: &'static [u8],
        n: isize,
        want: Option<Vec<&'static [u8]>>,
    }

    fn case(s: &'static str, sep: &'static str, n: isize, want: &[&'static str]) -> SplitCase {
        SplitCase {
            s: s.as_bytes(),
            sep: sep.as_bytes(),
            n,
            want: Some(want.iter().map(|w| w.as_bytes()).collect()),
        }
    }

    fn split_cases() -> Vec<SplitCase> {
        vec![
            case("", "", -1, &[]),
            case(ABCD, "", 2, &["d", "abc"]),
            case(ABCD, "", 4, &["d", "c", "b", "a"]),
            case(ABCD, "", -1, &["d", "c", "b", "a"]),
            case(FACES, "", -1, &["\u{2639}", "\u{263B}", "\u{263A}"]),
            case(FACES, "", 3, &["\u{2639}", "\u{263B}", "\u{263A}"]),
            case(FACES, "", 17, &["\u{2639}", "\u{263B}", "\u{263A}"]),
            case("\u{263A}\u{FFFD}\u{2639}", "", -1, &["\u{2639}", "\u{FFFD}", "\u{263A}"]),
            SplitCase { s: ABCD.as_bytes(), sep: b"a", n: 0, want: None },
            case(ABCD, "a", -1, &["bcd", ""]),
            case(ABCD, "z", -1, &["abcd"]),
            case(COMMAS, ",", -1, &["4", "3", "2", "1"]),
            case(DOTS, "...", -1, &["4", "3.", "2.", "1."]),
            case(FACES, "\u{2639}", -1, &["", "\u{263A}\u{263B}"]),
            case(FACES, "~", -1, &[FACES]),
            case("1 2 3 4", " ", 3, &["4", "3", "1 2"]),
            case("1 2", " ", 3, &["2", "1"]),
            case("", "T", isize::MAX / 4, &[""]),
            SplitCase {
                s: b"\xff-\xff",
                sep: b"",
                n: -1,
                want: Some(vec![&b"\xff"[..], &b"-"[..], &b"\xff"[..]]),
            },
            SplitCase {
                s: b"\xff-\xff",
                sep: b"-",
                n: -1,
                want: Some(vec![&b"\xff"[..], &b"\xff"[..]]),
            },
        ]
    }

    fn split_after_cases() -> Vec<SplitCase> {
        vec![
            case(ABCD, "a", -1, &["abcd", ""]),
            case(ABCD, "z", -1, &["abcd"]),
            case(ABCD, "", -1, &["d", "c", "b", "a"]),
            case(COMMAS, ",", -1, &[",4", ",3", ",2", "1"]),
            case(DOTS, "...", -1, &["...4", "...3.", "...2.", "1."]),
            case(FACES, "\u{2639}", -1, &["\u{2639}", "\u{263A}\u{263B}"]),
            case(FACES, "~", -1, &[FACES]),
            case(FACES, "", -1, &["\u{2639}", "\u{263B}", "\u{263A}"]),
            case("1 2 3 4", " ", 3, &[" 4", " 3", "1 2"]),
            case("1 2 3", " ", 3, &[" 3", " 2", "1"]),
            case("1 2", " ", 3, &[" 2", "1"]),
            case("123", "", 2, &["3", "12"]),
            case("123", "", 17, &["3", "2", "1"]),
        ]
    }

    #[test]
    fn test_split_backward_table() {
        for tt in split_cases() {
            let got = split_backward_n(tt.s, tt.sep, tt.n);
            assert_eq!(got, tt.want, "split_backward_n({:?}, {:?}, {})", tt.s, tt.sep, tt.n);

            if tt.n < 0 {
                let want = tt.want.unwrap_or_default();
                let collected: Vec<_> = split_backward_seq(tt.s, tt.sep).collect();
                assert_eq!(collected, want, "split_backward_seq({:?}, {:?})", tt.s, tt.sep);
                assert_eq!(split_backward(tt.s, tt.sep), want);
            }
        }
    }

    #[test]
    fn test_split_backward_after_table() {
        for tt in split_after_cases() {
            let got = split_backward_after_n(tt.s, tt.sep, tt.n);
            assert_eq!(got, tt.want, "split_backward_after_n({:?}, {:?}, {})", tt.s, tt.sep, tt.n);

            let want = tt.want.unwrap_or_default();
            if tt.n < 0 {
                let collected: Vec<_> = split_backward_after_seq(tt.s, tt.sep).collect();
                assert_eq!(collected, want, "split_backward_after_seq({:?}, {:?})", tt.s, tt.sep);
                assert_eq!(split_backward_after(tt.s, tt.sep), want);
            }

            let rebuilt: Vec<u8> = want.iter().rev().flat_map(|f| f.iter().copied()).collect();
            assert_eq!(rebuilt, tt.s);
        }
    }

    #[test]
    fn test_worked_examples() {
        assert_eq!(split_backward("a,b,c", ","), ["c", "b", "a"]);
        assert_eq!(
            split_backward("a man a plan a canal panama", "a "),
            ["canal panama", "plan ", "man ", ""]
        );
        assert_eq!(split_backward(" xyz ", ""), [" ", "z", "y", "x", " "]);
        assert_eq!(split_backward("", "Bernardo O'Higgins"), [""]);
        assert_eq!(split_backward_n("a,b,c", ",", 2), Some(vec!["c", "a,b"]));
        assert_eq!(split_backward_n("a,b,c", ",", 0), None);
        assert_eq!(split_backward_after("a,b,c", ","), [",c", ",b", "a"]);
        assert_eq!(split_backward_after_n("a,b,c", ",", 2), Some(vec![",c", "a,b"]));
    }

    #[test]
    fn test_zero_limit_differs_from_empty() {
        assert_eq!(split_backward_n("", "", 0), None);
        assert_eq!(split_backward_n("", "", -1), Some(vec![]));
        assert_eq!(split_backward_n("", "", 5), Some(vec![]));
    }

    #[test]
    fn test_seq_stops_early() {
        let mut seq = split_backward_seq("a,b,c,d", ",");
        assert_eq!(seq.next(), Some("d"));
        assert_eq!(seq.next(), Some("c"));
        drop(seq);

        let first_two: Vec<_> = split_backward_seq("a,b,c,d", ",").take(2).collect();
        assert_eq!(first_two, ["d", "c"]);
    }

    #[test]
    fn test_seq_is_single_use() {
        let mut seq = split_backward_after_seq("x;y", ";");
        assert_eq!(seq.by_ref().count(), 2);
        assert_eq!(seq.next(), None);
        assert_eq!(seq.count(), 0);
    }

    #[test]
    fn test_seq_empty_remainder_offered_last() {
        let collected: Vec<_> = split_backward_seq(",a", ",").collect();
        assert_eq!(collected, ["a", ""]);
    }

    proptest! {
        #[test]
        fn prop_seq_matches_eager(s in "[ab,]{0,24}", sep in "[ab,]{0,3}") {
            let eager = split_backward(s.as_str(), sep.as_str());
            let lazy: Vec<_> = split_backward_seq(s.as_str(), sep.as_str()).collect();
            prop_assert_eq!(&lazy, &eager);

            let eager = split_backward_after(s.as_str(), sep.as_str());
            let lazy: Vec<_> = split_backward_after_seq(s.as_str(), sep.as_str()).collect();
            prop_assert_eq!(lazy, eager);
        }

        #[test]
        fn prop_seq_matches_eager_bytes(
            s in prop::collection::vec(any::<u8>(), 0..32),
            sep in prop::collection::vec(prop_oneof![Just(0u8), Just(0xe2), Just(0x98), Just(0xff)], 0..3),
        ) {
            let eager = split_backward(s.as_slice(), sep.as_slice());
            let lazy: Vec<_> = split_backward_seq(s.as_slice(), sep.as_slice()).collect();
            prop_assert_eq!(lazy, eager);
        }

        #[test]
        fn prop_after_rebuilds_input(s in "[ab,\u{e9}]{0,24}", sep in "[ab,\u{e9}]{0,3}") {
            let fragments = split_backward_after(s.as_str(), sep.as_str());
            let rebuilt: String = fragments.iter().rev().copied().collect();
            prop_assert_eq!(rebuilt, s);
        }

        #[test]
        fn prop_unlimited_join_rebuilds_input(s in "[ab,]{0,24}", sep in "[ab,]{1,3}") {
            let mut fragments = split_backward(s.as_str(), sep.as_str());
            fragments.reverse();
            prop_assert_eq!(fragments.join(sep.as_str()), s);
        }

        #[test]
        fn prop_missing_separator_is_identity(s in "[ab]{0,24}", sep in ",[ab,]{0,2}") {
            prop_assert_eq!(split_backward(s.as_str(), sep.as_str()), vec![s.as_str()]);
        }

        #[test]
        fn prop_limit_keeps_prefix_of_unlimited(
            s in "[ab,]{0,24}",
            sep in "[ab,]{0,2}",
            n in 1isize..8,
        ) {
            let all = split_backward(s.as_str(), sep.as_str());
            let limited = split_backward_n(s.as_str(), sep.as_str(), n).unwrap_or_default();
            let expected_len = all.len().min(n as usize);
            prop_assert_eq!(limited.len(), expected_len);
            if expected_len > 0 {
                let last = expected_len - 1;
                prop_assert_eq!(&limited[..last], &all[..last]);

                // The remainder is the unconsumed prefix: the rest of the
                // unlimited split glued back together.
                let mut rest = all[last..].to_vec();
                rest.reverse();
                prop_assert_eq!(limited[last], rest.join(sep.as_str()));
            }
        }

        #[test]
        fn prop_zero_limit_is_none(s in "[ab,]{0,8}", sep in "[ab,]{0,2}") {
            prop_assert_eq!(split_backward_n(s.as_str(), sep.as_str(), 0), None);
            prop_assert_eq!(split_backward_after_n(s.as_str(), sep.as_str(), 0), None);
        }
    }
}
