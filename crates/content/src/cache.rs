use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use foundation::{Clock, SystemClock, Time};

use crate::error::FetchError;
use crate::query::EntriesQuery;
use crate::source::{ContentSource, LocalBoxFuture};
use crate::wire::EntriesResponse;

#[derive(Debug, Clone)]
struct CacheEntry {
    fetched_at: Time,
    response: EntriesResponse,
}

/// Hit/miss counters, mostly for diagnostics and tests.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Per-query TTL cache in front of another source.
///
/// Keyed by [`EntriesQuery::cache_key`] in a `BTreeMap` for stable iteration.
/// Only successful responses are cached; a failure is passed through and the
/// next call asks the inner source again.
#[derive(Debug)]
pub struct CachedSource<S, C = SystemClock> {
    inner: S,
    clock: C,
    ttl_s: f64,
    entries: RefCell<BTreeMap<String, CacheEntry>>,
    stats: Cell<CacheStats>,
}

impl<S: ContentSource> CachedSource<S, SystemClock> {
    pub fn new(inner: S, ttl_secs: u64) -> Self {
        Self::with_clock(inner, ttl_secs, SystemClock)
    }
}

impl<S: ContentSource, C: Clock> CachedSource<S, C> {
    pub fn with_clock(inner: S, ttl_secs: u64, clock: C) -> Self {
        Self {
            inner,
            clock,
            ttl_s: ttl_secs as f64,
            entries: RefCell::new(BTreeMap::new()),
            stats: Cell::new(CacheStats::default()),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn stats(&self) -> CacheStats {
        self.stats.get()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn invalidate(&self, query: &EntriesQuery) -> bool {
        self.entries.borrow_mut().remove(&query.cache_key()).is_some()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    fn lookup_fresh(&self, key: &str) -> Option<EntriesResponse> {
        let now = self.clock.now();
        let entries = self.entries.borrow();
        let entry = entries.get(key)?;
        (now.seconds_since(entry.fetched_at) < self.ttl_s).then(|| entry.response.clone())
    }

    fn record(&self, hit: bool) {
        let mut stats = self.stats.get();
        if hit {
            stats.hits += 1;
        } else {
            stats.misses += 1;
        }
        self.stats.set(stats);
    }
}

impl<S: ContentSource, C: Clock> ContentSource for CachedSource<S, C> {
    fn entries<'a>(
        &'a self,
        query: &'a EntriesQuery,
    ) -> LocalBoxFuture<'a, Result<EntriesResponse, FetchError>> {
        Box::pin(async move {
            let key = query.cache_key();
            if let Some(response) = self.lookup_fresh(&key) {
                self.record(true);
                tracing::trace!(query = %key, "content cache hit");
                return Ok(response);
            }
            self.record(false);

            // No borrow is held across the await.
            let response = self.inner.entries(query).await?;
            self.entries.borrow_mut().insert(
                key,
                CacheEntry {
                    fetched_at: self.clock.now(),
                    response: response.clone(),
                },
            );
            Ok::<_, FetchError>(response)
        })
    }
}
