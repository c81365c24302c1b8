//! backsplit - Backward (right-to-left) string splitting
//!
//! Splits a string at each occurrence of a separator, scanning from the end,
//! with an optional cap on the number of pieces. Fragments borrow the input.
//!
//! Access shapes:
//! - Eager: `split_backward`, `split_backward_n`, `split_backward_after`, `split_backward_after_n`
//! - Lazy: `split_backward_seq`, `split_backward_after_seq` (single-use iterators)
//! - Methods: `SplitBackwardExt` on `str` and `[u8]`
//! - Native: NIFs for `Elixir.BackSplit.Native` (sub-binaries, streams, batches)

use rustler::{Atom, Binary, Env, NifResult, ResourceArc, Term};

mod cache;
mod core;
mod error;
mod resource;
mod split;
mod strategy;
mod term;

pub use split::{
    split_backward, split_backward_after, split_backward_after_n, split_backward_after_seq,
    split_backward_n, split_backward_seq, Haystack, SplitBackwardExt, SplitBackwardSeq,
};

use crate::core::{split_ranges, SeparatorPolicy};
use error::NativeError;
use resource::{SplitStreamRef, SplitStreamResource};

// ============================================================================
// Allocator Configuration
// ============================================================================

// Only enabled for the NIF build; a global allocator here would clash with any
// Rust crate that depends on this one and picks its own.
#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

// ============================================================================
// Argument Helpers
// ============================================================================

/// Elixir integers are unbounded; anything outside `isize` keeps its sign
#[inline]
fn limit_from(n: i64) -> isize {
    isize::try_from(n).unwrap_or(if n < 0 { -1 } else { isize::MAX })
}

#[inline]
fn policy_from(after: bool) -> SeparatorPolicy {
    if after {
        SeparatorPolicy::Retain
    } else {
        SeparatorPolicy::Exclude
    }
}

/// Shared body of the eager split NIFs
fn split_to_term<'a>(
    env: Env<'a>,
    input: &Binary<'a>,
    sep: &Binary<'a>,
    policy: SeparatorPolicy,
    n: isize,
) -> NifResult<Term<'a>> {
    tracing::trace!(
        input_len = input.len(),
        sep_len = sep.len(),
        n,
        ?policy,
        "split_backward"
    );
    let separator = cache::separator(sep.as_slice());
    let ranges = split_ranges(input.as_slice(), &separator, policy, n);
    term::split_result_to_term(env, input, ranges.as_deref())
}

// ============================================================================
// Eager Split
// ============================================================================

/// Split backward at every separator; separator dropped
#[rustler::nif(name = "split_backward")]
fn nif_split_backward<'a>(env: Env<'a>, input: Binary<'a>, sep: Binary<'a>) -> NifResult<Term<'a>> {
    split_to_term(env, &input, &sep, SeparatorPolicy::Exclude, -1)
}

/// Split backward into at most `n` pieces; `nil` when `n == 0`
#[rustler::nif(name = "split_backward_n")]
fn nif_split_backward_n<'a>(
    env: Env<'a>,
    input: Binary<'a>,
    sep: Binary<'a>,
    n: i64,
) -> NifResult<Term<'a>> {
    split_to_term(env, &input, &sep, SeparatorPolicy::Exclude, limit_from(n))
}

/// Split backward after every separator; separator kept on the following piece
#[rustler::nif(name = "split_backward_after")]
fn nif_split_backward_after<'a>(
    env: Env<'a>,
    input: Binary<'a>,
    sep: Binary<'a>,
) -> NifResult<Term<'a>> {
    split_to_term(env, &input, &sep, SeparatorPolicy::Retain, -1)
}

/// Limited form of `split_backward_after`; `nil` when `n == 0`
#[rustler::nif(name = "split_backward_after_n")]
fn nif_split_backward_after_n<'a>(
    env: Env<'a>,
    input: Binary<'a>,
    sep: Binary<'a>,
    n: i64,
) -> NifResult<Term<'a>> {
    split_to_term(env, &input, &sep, SeparatorPolicy::Retain, limit_from(n))
}

// ============================================================================
// Lazy Split Stream
// ============================================================================

/// Create a lazy split stream over a copy of `input`
#[rustler::nif]
fn split_stream_new(input: Binary, sep: Binary, after: bool) -> SplitStreamRef {
    tracing::trace!(input_len = input.len(), sep_len = sep.len(), after, "split_stream_new");
    let separator = cache::separator(sep.as_slice());
    ResourceArc::new(SplitStreamResource::new(
        input.as_slice().to_vec(),
        separator,
        policy_from(after),
    ))
}

/// Take up to `max` next fragments; `[]` once the stream is exhausted or closed
#[rustler::nif]
fn split_stream_take<'a>(env: Env<'a>, stream: SplitStreamRef, max: usize) -> NifResult<Term<'a>> {
    let mut inner = stream.inner.lock().map_err(|_| NativeError::StreamPoisoned)?;
    let (ranges, exhausted) = inner.take_batch(max);
    if exhausted {
        tracing::debug!(emitted = inner.emitted(), "split stream exhausted");
    }
    Ok(term::owned_fragments_to_term(env, inner.input(), &ranges))
}

/// Stop a stream early; later takes return `[]`
#[rustler::nif]
fn split_stream_close(stream: SplitStreamRef) -> NifResult<Atom> {
    let mut inner = stream.inner.lock().map_err(|_| NativeError::StreamPoisoned)?;
    if !inner.is_done() {
        tracing::debug!(emitted = inner.emitted(), "split stream closed early");
    }
    inner.close();
    Ok(rustler::types::atom::ok())
}

// ============================================================================
// Parallel Batch Split
// ============================================================================

/// Split many inputs with the same separator and limit, in parallel
#[rustler::nif(schedule = "DirtyCpu")]
fn split_backward_many<'a>(
    env: Env<'a>,
    inputs: Vec<Binary<'a>>,
    sep: Binary<'a>,
    n: i64,
    after: bool,
) -> NifResult<Term<'a>> {
    tracing::trace!(inputs = inputs.len(), sep_len = sep.len(), n, after, "split_backward_many");
    let separator = cache::separator(sep.as_slice());
    let slices: Vec<&[u8]> = inputs.iter().map(|input| input.as_slice()).collect();
    let results = strategy::parallel::split_many(&slices, &separator, policy_from(after), limit_from(n));

    let mut list = Term::list_new_empty(env);
    for (input, ranges) in inputs.iter().zip(results).rev() {
        let result = term::split_result_to_term(env, input, ranges.as_deref())?;
        list = list.list_prepend(result);
    }
    Ok(list)
}

// ============================================================================
// NIF Initialization
// ============================================================================

rustler::init!("Elixir.BackSplit.Native");
