//! Core backward-splitting primitives
//!
//! - Separator: compiled reverse searcher (memchr `FinderRev`) or per-character mode
//! - Scanner: offset-only backward cursor shared by the eager and lazy paths
//! - Backward: eager split producing byte ranges, with limit handling
//! - Utf8: tail decoding and character counting for the empty-separator case

pub mod backward;
pub mod scanner;
pub mod separator;
pub mod utf8;

pub use backward::split_ranges;
pub use scanner::BackwardScanner;
pub use separator::{Separator, SeparatorPolicy};
