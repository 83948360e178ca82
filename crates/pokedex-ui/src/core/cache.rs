//! Keyed query cache with freshness windows and in-flight deduplication.
//!
//! # Design
//! - Time is passed in (`now_ms`) so freshness is testable without a clock.
//! - A fetch is started only through [`KeyedCache::begin_fetch`], which refuses
//!   when the key is fresh or already in flight.
//! - `invalidate_all` bumps a generation; completions carrying an older ticket are
//!   dropped so a fetch started before logout cannot repopulate the cache.
//! - Failures are recorded on the failing key only, so an error never shows up
//!   under another query.
//! - Starting a fetch evicts other entries that have been stale for a further full
//!   window, so abandoned search terms do not pile up.

use std::collections::BTreeMap;
use std::time::Duration;

use pokedex_api_models::{InitialData, ListQuery, PokemonDetail, PokemonListResponse};

/// Freshness window for list and detail queries.
pub const LIST_TTL: Duration = Duration::from_secs(60);
/// Freshness window for the count-only query.
pub const COUNT_TTL: Duration = Duration::from_secs(5 * 60);

/// Proof that a fetch was started under a given cache generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

#[derive(Clone, Debug, PartialEq)]
struct Entry<V> {
    value: Option<V>,
    error: Option<String>,
    fetched_at_ms: u64,
    in_flight: bool,
}

impl<V> Entry<V> {
    const fn stored(value: V, now_ms: u64) -> Self {
        Self {
            value: Some(value),
            error: None,
            fetched_at_ms: now_ms,
            in_flight: false,
        }
    }
}

/// Cache of values keyed by `K`, each fresh for `ttl` after it was stored.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyedCache<K: Ord, V> {
    ttl_ms: u64,
    generation: u64,
    entries: BTreeMap<K, Entry<V>>,
}

impl<K: Ord + Clone, V: Clone> KeyedCache<K, V> {
    /// Empty cache with the given freshness window.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl_ms: u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX),
            generation: 0,
            entries: BTreeMap::new(),
        }
    }

    /// Last stored value regardless of age.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key).and_then(|entry| entry.value.as_ref())
    }

    /// Message of the last failed fetch for `key`, until the next attempt starts.
    #[must_use]
    pub fn error(&self, key: &K) -> Option<&str> {
        self.entries.get(key).and_then(|entry| entry.error.as_deref())
    }

    /// Mark `key` as in flight when a fetch is needed.
    ///
    /// Returns `None` when the value is fresh or another fetch is outstanding.
    /// Issuing a ticket clears the key's previous error.
    pub fn begin_fetch(&mut self, key: &K, now_ms: u64) -> Option<FetchTicket> {
        self.evict_stale(key, now_ms);
        let ttl_ms = self.ttl_ms;
        let entry = self.entries.entry(key.clone()).or_insert(Entry {
            value: None,
            error: None,
            fetched_at_ms: 0,
            in_flight: false,
        });
        let fresh = entry.value.is_some() && now_ms.saturating_sub(entry.fetched_at_ms) < ttl_ms;
        if entry.in_flight || fresh {
            return None;
        }
        entry.in_flight = true;
        entry.error = None;
        Some(FetchTicket {
            generation: self.generation,
        })
    }

    /// Store the result of a fetch started with `ticket`.
    ///
    /// Returns `false` when the ticket predates an invalidation and the value was dropped.
    pub fn complete(&mut self, key: &K, value: V, ticket: FetchTicket, now_ms: u64) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.entries.insert(key.clone(), Entry::stored(value, now_ms));
        true
    }

    /// Record a failed fetch on `key`, keeping any previous value.
    pub fn fail(&mut self, key: &K, ticket: FetchTicket, message: impl Into<String>, now_ms: u64) {
        if ticket.generation != self.generation {
            return;
        }
        if let Some(entry) = self.entries.get_mut(key) {
            entry.in_flight = false;
            entry.error = Some(message.into());
            // An error-only entry ages from the failure.
            if entry.value.is_none() {
                entry.fetched_at_ms = now_ms;
            }
        }
    }

    /// Insert a value obtained elsewhere (server render) as freshly fetched.
    pub fn seed(&mut self, key: K, value: V, now_ms: u64) {
        self.entries.insert(key, Entry::stored(value, now_ms));
    }

    /// Drop every entry and orphan outstanding fetches.
    pub fn invalidate_all(&mut self) {
        self.entries.clear();
        self.generation = self.generation.wrapping_add(1);
    }

    /// Drop idle entries older than twice the window, except `keep`.
    fn evict_stale(&mut self, keep: &K, now_ms: u64) {
        let horizon = self.ttl_ms.saturating_mul(2);
        self.entries.retain(|key, entry| {
            entry.in_flight || key == keep || now_ms.saturating_sub(entry.fetched_at_ms) < horizon
        });
    }

    #[cfg(test)]
    fn get_fresh(&self, key: &K, now_ms: u64) -> Option<&V> {
        self.entries
            .get(key)
            .filter(|entry| now_ms.saturating_sub(entry.fetched_at_ms) < self.ttl_ms)
            .and_then(|entry| entry.value.as_ref())
    }

    #[cfg(test)]
    fn is_in_flight(&self, key: &K) -> bool {
        self.entries.get(key).is_some_and(|entry| entry.in_flight)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// The three query families the catalog uses.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryCache {
    /// Pages keyed by `(offset, limit, search)`.
    pub lists: KeyedCache<ListQuery, PokemonListResponse>,
    /// Records keyed by id.
    pub details: KeyedCache<u32, PokemonDetail>,
    /// Total counts keyed by the probe query.
    pub counts: KeyedCache<ListQuery, u64>,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self {
            lists: KeyedCache::new(LIST_TTL),
            details: KeyedCache::new(LIST_TTL),
            counts: KeyedCache::new(COUNT_TTL),
        }
    }
}

impl QueryCache {
    /// Seed from server-rendered data; list seeds only land on the first unfiltered page.
    pub fn seed_initial(&mut self, initial: InitialData, now_ms: u64) {
        match initial {
            InitialData::List(list) => self.lists.seed(ListQuery::page(0, None), list, now_ms),
            InitialData::Detail(detail) => self.details.seed(detail.id, detail, now_ms),
        }
    }

    /// Drop everything, including outstanding fetches.
    pub fn invalidate_all(&mut self) {
        self.lists.invalidate_all();
        self.details.invalidate_all();
        self.counts.invalidate_all();
    }
}
