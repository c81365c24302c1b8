//! ResourceArc Wrappers
//!
//! Persistent state for lazy split streams driven from Elixir.

use crate::core::{Separator, SeparatorPolicy};
use crate::strategy::SplitStream;
use rustler::ResourceArc;
use std::sync::{Arc, Mutex};

/// Wrapper for SplitStream that can be stored in a ResourceArc
pub struct SplitStreamResource {
    pub inner: Mutex<SplitStream>,
}

impl SplitStreamResource {
    pub fn new(input: Vec<u8>, sep: Arc<Separator<'static>>, policy: SeparatorPolicy) -> Self {
        SplitStreamResource {
            inner: Mutex::new(SplitStream::new(input, sep, policy)),
        }
    }
}

#[rustler::resource_impl]
impl rustler::Resource for SplitStreamResource {}

/// Type alias for the ResourceArc
pub type SplitStreamRef = ResourceArc<SplitStreamResource>;
