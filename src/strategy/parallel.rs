//! Parallel Batch Splitting
//!
//! Uses Rayon to split many inputs by the same separator in parallel.

use std::ops::Range;

use rayon::prelude::*;

use crate::core::{split_ranges, Separator, SeparatorPolicy};

/// Split every input backward with the same separator and limit
///
/// Results are in input order; each entry follows the eager split rules
/// (`None` when `n == 0`).
pub fn split_many(
    inputs: &[&[u8]],
    sep: &Separator<'_>,
    policy: SeparatorPolicy,
    n: isize,
) -> Vec<Option<Vec<Range<usize>>>> {
    inputs
        .par_iter()
        .map(|input| split_ranges(input, sep, policy, n))
        .collect()
}
