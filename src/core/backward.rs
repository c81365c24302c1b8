//! Eager backward split over byte ranges
//!
//! Fragments are returned as ranges into the input, in scan order: the
//! fragment nearest the end of the input comes first. Callers turn them into
//! slices or sub-binaries.

use std::ops::Range;

use super::scanner::BackwardScanner;
use super::separator::{Separator, SeparatorPolicy};
use super::utf8::char_count;

/// Split `input` backward at `sep`, producing at most `n` fragments
///
/// - `n > 0`: at most `n` fragments; the last one is the unsplit remainder
/// - `n == 0`: `None`
/// - `n < 0`: all fragments
pub fn split_ranges(
    input: &[u8],
    sep: &Separator<'_>,
    policy: SeparatorPolicy,
    n: isize,
) -> Option<Vec<Range<usize>>> {
    if n == 0 {
        return None;
    }
    if sep.is_empty() {
        return Some(explode_ranges(input, n));
    }

    let limit = match usize::try_from(n) {
        Ok(n) => n,
        Err(_) => sep.count(input) + 1,
    };
    let limit = limit.min(input.len() + 1);

    let mut fragments = Vec::with_capacity(limit);
    let mut scanner = BackwardScanner::new(input.len());
    while fragments.len() + 1 < limit {
        match scanner.cut_last(input, sep, policy) {
            Some(fragment) => fragments.push(fragment),
            None => break,
        }
    }
    fragments.extend(scanner.take_remainder());
    Some(fragments)
}

/// Split `input` into characters from the end, at most `n` of them
///
/// `n < 0` means no limit. When capped, the last fragment is the whole
/// leftover prefix. Empty input yields no fragments at all.
pub fn explode_ranges(input: &[u8], n: isize) -> Vec<Range<usize>> {
    let total = char_count(input);
    let n = match usize::try_from(n) {
        Ok(n) if n <= total => n,
        _ => total,
    };

    let mut fragments = Vec::with_capacity(n);
    if n == 0 {
        return fragments;
    }

    let mut scanner = BackwardScanner::new(input.len());
    while fragments.len() + 1 < n {
        match scanner.peel_char(input) {
            Some(fragment) => fragments.push(fragment),
            None => break,
        }
    }
    fragments.extend(scanner.take_remainder());
    fragments
}
