//! UTF-8 decoding from the tail
//!
//! The empty-separator split peels one character at a time off the end of the
//! input. Input is arbitrary bytes: a byte that does not end a valid UTF-8
//! sequence is treated as a one-byte character of its own.

/// Maximum length of a UTF-8 encoded character
pub const MAX_CHAR_LEN: usize = 4;

/// Check if byte can start a UTF-8 sequence (i.e. is not a continuation byte)
#[inline]
fn is_char_start(b: u8) -> bool {
    b & 0xC0 != 0x80
}

/// Length in bytes of the last character of `bytes`
///
/// Returns the length of the valid UTF-8 sequence ending at `bytes.len()`, or 1
/// if the tail is malformed. Returns 0 only for empty input.
#[inline]
pub fn last_char_len(bytes: &[u8]) -> usize {
    let end = bytes.len();
    let last = match bytes.last() {
        Some(&b) => b,
        None => return 0,
    };

    // ASCII fast path
    if last < 0x80 {
        return 1;
    }

    let lim = end.saturating_sub(MAX_CHAR_LEN);
    let start = match (lim..end).rev().find(|&i| is_char_start(bytes[i])) {
        Some(start) => start,
        None => return 1,
    };

    // Everything after `start` is a continuation byte, so a successful decode
    // here is exactly one character.
    match std::str::from_utf8(&bytes[start..]) {
        Ok(_) => end - start,
        Err(_) => 1,
    }
}

/// Number of characters in `bytes`, counting each malformed byte as one
pub fn char_count(bytes: &[u8]) -> usize {
    bytes
        .utf8_chunks()
        .map(|chunk| chunk.valid().chars().count() + chunk.invalid().len())
        .sum()
}
