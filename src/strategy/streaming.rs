//! Owned Split Stream
//!
//! Lazy backward split over an owned input buffer, resumable across calls.
//! Each `take_ranges` call computes only the fragments it returns; closing
//! the stream stops it for good.

use std::ops::Range;
use std::sync::Arc;

use crate::core::{BackwardScanner, Separator, SeparatorPolicy};

/// Stateful, single-use backward splitter that owns its input
pub struct SplitStream {
    /// Input bytes (fragments are ranges into this buffer)
    input: Vec<u8>,
    /// Compiled separator, usually shared through the separator cache
    sep: Arc<Separator<'static>>,
    policy: SeparatorPolicy,
    scanner: BackwardScanner,
    /// Number of fragments handed out so far
    emitted: usize,
}

impl SplitStream {
    /// Create a new stream positioned at the end of `input`
    pub fn new(input: Vec<u8>, sep: Arc<Separator<'static>>, policy: SeparatorPolicy) -> Self {
        let scanner = BackwardScanner::new(input.len());
        SplitStream {
            input,
            sep,
            policy,
            scanner,
            emitted: 0,
        }
    }

    /// The buffer that returned ranges refer to
    #[inline]
    pub fn input(&self) -> &[u8] {
        &self.input
    }

    /// Take up to `max` next fragments; empty once the stream is exhausted
    pub fn take_ranges(&mut self, max: usize) -> Vec<Range<usize>> {
        let mut ranges = Vec::with_capacity(max.min(64));
        while ranges.len() < max {
            match self.scanner.next_fragment(&self.input, &self.sep, self.policy) {
                Some(range) => ranges.push(range),
                None => break,
            }
        }
        self.emitted += ranges.len();
        ranges
    }

    /// Like `take_ranges`, also reporting whether this call exhausted the stream
    ///
    /// The flag is true only on the take that moves the stream to done. With an
    /// empty separator that can be a take returning no fragments.
    pub fn take_batch(&mut self, max: usize) -> (Vec<Range<usize>>, bool) {
        let was_done = self.is_done();
        let ranges = self.take_ranges(max);
        (ranges, !was_done && self.is_done())
    }

    /// Stop producing fragments
    pub fn close(&mut self) {
        self.scanner.finish();
    }

    /// Check if no further fragments will be produced
    ///
    /// For a non-empty separator this turns true right after the remainder is
    /// taken; with an empty separator it needs one more (empty) take.
    pub fn is_done(&self) -> bool {
        self.scanner.is_done()
    }

    /// Number of fragments handed out so far
    pub fn emitted(&self) -> usize {
        self.emitted
    }
}
