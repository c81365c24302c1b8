//! Elixir Term Conversion Utilities
//!
//! Converts split results (byte ranges) into Elixir lists of binaries.

use std::ops::Range;

use rustler::{Binary, Encoder, Env, NewBinary, NifResult, Term};

/// Convert fragment ranges over `input` into a list of sub-binaries
///
/// Sub-binaries share the input's storage, so no fragment bytes are copied.
pub fn fragments_to_term<'a>(
    env: Env<'a>,
    input: &Binary<'a>,
    ranges: &[Range<usize>],
) -> NifResult<Term<'a>> {
    let mut list = Term::list_new_empty(env);
    for range in ranges.iter().rev() {
        let fragment = input.make_subbinary(range.start, range.len())?;
        list = list.list_prepend(fragment.to_term(env));
    }
    Ok(list)
}

/// Convert an eager split result: `nil` when absent (limit 0), a list otherwise
pub fn split_result_to_term<'a>(
    env: Env<'a>,
    input: &Binary<'a>,
    ranges: Option<&[Range<usize>]>,
) -> NifResult<Term<'a>> {
    match ranges {
        Some(ranges) => fragments_to_term(env, input, ranges),
        None => Ok(rustler::types::atom::nil().encode(env)),
    }
}

/// Convert fragment ranges over an owned buffer into a list of fresh binaries
pub fn owned_fragments_to_term<'a>(env: Env<'a>, input: &[u8], ranges: &[Range<usize>]) -> Term<'a> {
    let mut list = Term::list_new_empty(env);
    for range in ranges.iter().rev() {
        let binary = bytes_to_binary(env, &input[range.clone()]);
        list = list.list_prepend(binary);
    }
    list
}

/// Create a binary from bytes
pub fn bytes_to_binary<'a>(env: Env<'a>, bytes: &[u8]) -> Term<'a> {
    let mut binary = NewBinary::new(env, bytes.len());
    binary.as_mut_slice().copy_from_slice(bytes);
    binary.into()
}
