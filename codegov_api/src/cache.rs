//! Per-client memoization of parsed JSON responses, keyed by request URL.

use std::sync::Arc;

use dashmap::DashMap;
use futures::future::{BoxFuture, Shared};
use futures::FutureExt;
use serde_json::Value;

use crate::Error;

/// A pending-or-resolved fetch, shareable between concurrent callers.
pub(crate) type SharedFetch = Shared<BoxFuture<'static, Result<Arc<Value>, Error>>>;

/// Maps the exact request URL string to its parsed JSON payload.
///
/// The entry is inserted before the request completes, so concurrent calls
/// for the same URL await one shared in-flight future instead of issuing
/// duplicate requests. Keys are literal URL strings, query order included,
/// so differing pagination or filters never collide. Entries are never
/// evicted; they live as long as the owning client.
pub(crate) struct UrlCache {
    entries: DashMap<String, SharedFetch>,
}

impl UrlCache {
    pub(crate) fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Returns the entry for `key`, creating it from `make` on first use.
    /// The returned handle may still be in flight.
    pub(crate) fn get_or_insert_with<F>(&self, key: &str, make: F) -> SharedFetch
    where
        F: FnOnce() -> BoxFuture<'static, Result<Arc<Value>, Error>>,
    {
        self.entries
            .entry(key.to_string())
            .or_insert_with(|| make().shared())
            .clone()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
