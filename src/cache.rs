//! Separator Cache
//!
//! Compiled reverse searchers keyed by separator bytes, shared across NIF
//! calls. Callers from Elixir tend to reuse a handful of separators, so the
//! searcher setup is paid once per separator rather than once per call.

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, OnceLock};

use lru::LruCache;

use crate::core::Separator;

/// Maximum number of compiled separators kept alive
pub const SEPARATOR_CACHE_CAPACITY: usize = 64;

type SeparatorCache = Mutex<LruCache<Vec<u8>, Arc<Separator<'static>>>>;

static SEPARATORS: OnceLock<SeparatorCache> = OnceLock::new();

fn cache() -> &'static SeparatorCache {
    SEPARATORS.get_or_init(|| {
        let capacity = NonZeroUsize::new(SEPARATOR_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN);
        Mutex::new(LruCache::new(capacity))
    })
}

/// Get the compiled separator for `sep`, compiling and caching it on a miss
///
/// A poisoned cache is bypassed: the separator is compiled uncached.
pub fn separator(sep: &[u8]) -> Arc<Separator<'static>> {
    if sep.is_empty() {
        return Arc::new(Separator::Chars);
    }

    let mut cache = match cache().lock() {
        Ok(guard) => guard,
        Err(_) => {
            tracing::warn!(sep_len = sep.len(), "separator cache poisoned, compiling uncached");
            return Arc::new(Separator::new(sep).into_owned());
        }
    };

    if let Some(compiled) = cache.get(sep) {
        return Arc::clone(compiled);
    }

    tracing::debug!(sep_len = sep.len(), "separator cache miss");
    let compiled = Arc::new(Separator::new(sep).into_owned());
    cache.put(sep.to_vec(), Arc::clone(&compiled));
    compiled
}
