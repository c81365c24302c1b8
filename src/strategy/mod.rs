//! Splitting Strategy Module
//!
//! Beyond the borrowed eager/lazy API in `split`:
//! - Streaming: owned, resumable lazy split (backs the stream resource)
//! - Parallel: batch split of many inputs with Rayon

pub mod parallel;
pub mod streaming;

pub use streaming::SplitStream;
