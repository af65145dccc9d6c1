// crates/tripmap-core/src/cache.rs

//! # Query Cache
//!
//! Explicit read-through cache for backend query results, owned by the map
//! coordinator. Consumers read `get(key)` states; nothing outside the
//! owner mutates entries directly.
//!
//! Loads are generation-ticketed: starting a new load supersedes any
//! in-flight one, and completing a superseded ticket is discarded so a
//! stale response can never revert the view to older state.

use crate::model::{Country, Postcard};

/// Observable state of one cached query.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> CacheState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            CacheState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, CacheState::Ready(_))
    }
}

/// Keys of the queries the coordinator caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Countries,
    Postcards,
}

/// Proof that a load was started; completing with a stale ticket is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    key: QueryKey,
    generation: u64,
}

impl LoadTicket {
    pub fn key(&self) -> QueryKey {
        self.key
    }
}

#[derive(Debug)]
struct Slot<T> {
    state: CacheState<T>,
    generation: u64,
    version: u64,
    stale: bool,
}

impl<T> Slot<T> {
    fn new() -> Self {
        Self {
            state: CacheState::Loading,
            generation: 0,
            version: 0,
            stale: true,
        }
    }

    fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.stale = false;
        // Keep any Ready data visible while the reload is in flight; only a
        // completed, current-generation response replaces it.
        if matches!(self.state, CacheState::Failed(_)) {
            self.state = CacheState::Loading;
        }
        self.generation
    }

    fn complete(&mut self, generation: u64, result: Result<T, String>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.state = match result {
            Ok(data) => CacheState::Ready(data),
            Err(msg) => CacheState::Failed(msg),
        };
        self.version += 1;
        true
    }

    fn invalidate(&mut self) {
        // Supersede any in-flight load and mark for refetch.
        self.generation += 1;
        self.stale = true;
    }
}

/// The read-through cache for the country list and postcard records.
#[derive(Debug)]
pub struct QueryCache {
    countries: Slot<Vec<Country>>,
    postcards: Slot<Vec<Postcard>>,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            countries: Slot::new(),
            postcards: Slot::new(),
        }
    }

    pub fn countries(&self) -> &CacheState<Vec<Country>> {
        &self.countries.state
    }

    pub fn postcards(&self) -> &CacheState<Vec<Postcard>> {
        &self.postcards.state
    }

    /// Marks a key stale and supersedes any in-flight load for it.
    /// The owner is expected to start a fresh load next.
    pub fn invalidate(&mut self, key: QueryKey) {
        match key {
            QueryKey::Countries => self.countries.invalidate(),
            QueryKey::Postcards => self.postcards.invalidate(),
        }
    }

    /// Whether a key needs a (re)fetch.
    pub fn is_stale(&self, key: QueryKey) -> bool {
        match key {
            QueryKey::Countries => self.countries.stale,
            QueryKey::Postcards => self.postcards.stale,
        }
    }

    /// Starts a load for `key`; any previous in-flight load is superseded.
    pub fn begin_load(&mut self, key: QueryKey) -> LoadTicket {
        let generation = match key {
            QueryKey::Countries => self.countries.begin(),
            QueryKey::Postcards => self.postcards.begin(),
        };
        LoadTicket { key, generation }
    }

    /// Completes a country load. Returns `false` when the ticket was
    /// superseded and the response discarded.
    pub fn complete_countries(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Country>, String>,
    ) -> bool {
        debug_assert_eq!(ticket.key, QueryKey::Countries);
        if ticket.key != QueryKey::Countries {
            return false;
        }
        self.countries.complete(ticket.generation, result)
    }

    /// Completes a postcard load. Returns `false` when discarded as stale.
    pub fn complete_postcards(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Postcard>, String>,
    ) -> bool {
        debug_assert_eq!(ticket.key, QueryKey::Postcards);
        if ticket.key != QueryKey::Postcards {
            return false;
        }
        self.postcards.complete(ticket.generation, result)
    }

    /// Monotonic counter bumped on every accepted completion for a key;
    /// consumers use it to detect that a restyle pass is due.
    pub fn version(&self, key: QueryKey) -> u64 {
        match key {
            QueryKey::Countries => self.countries.version,
            QueryKey::Postcards => self.postcards.version,
        }
    }
}
