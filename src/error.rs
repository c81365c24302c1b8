//! Error types for the native layer
//!
//! Splitting itself cannot fail. These cover the resource plumbing around it.

use thiserror::Error;

/// Errors raised by NIF entry points
#[derive(Error, Debug)]
pub enum NativeError {
    /// The stream mutex was poisoned by a panic in another call
    #[error("split stream state is poisoned")]
    StreamPoisoned,
}

impl From<NativeError> for rustler::Error {
    fn from(err: NativeError) -> Self {
        rustler::Error::Term(Box::new(err.to_string()))
    }
}
