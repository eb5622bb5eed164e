//! Bounded roster cache keyed by team code.
//!
//! Finished rosters live in an LRU. Builds in progress live in a separate
//! map of shared once-cells, so concurrent requests for the same team wait on
//! a single in-flight fetch and eviction never touches a running build.
//! Failed fetches leave nothing behind and the next request fetches again.

use lru::LruCache;
use std::collections::HashMap;
use std::future::Future;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::{Mutex, OnceCell};
use tracing::{debug, info, instrument};

use crate::data_fetcher::api::normalize_team_code;
use crate::data_fetcher::models::Roster;
use crate::error::AppError;

type RosterSlot = Arc<OnceCell<Arc<Roster>>>;

struct Entries {
    ready: LruCache<String, Arc<Roster>>,
    in_flight: HashMap<String, RosterSlot>,
}

pub struct RosterCache {
    entries: Mutex<Entries>,
}

impl RosterCache {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: Mutex::new(Entries {
                ready: LruCache::new(capacity),
                in_flight: HashMap::new(),
            }),
        }
    }

    /// # Errors
    /// * `AppError::Config` - `capacity` is zero
    pub fn with_capacity(capacity: usize) -> Result<Self, AppError> {
        let capacity = NonZeroUsize::new(capacity)
            .ok_or_else(|| AppError::config_error("Roster cache capacity must be at least 1"))?;
        Ok(Self::new(capacity))
    }

    /// Returns the cached roster for `team`, or runs `init` to build it.
    ///
    /// Only one `init` runs per team at a time; other callers for the same
    /// team wait for its result. When a build fails, the error goes to its
    /// caller and the next waiting caller runs its own `init`. Errors are
    /// never cached.
    #[instrument(skip(self, init))]
    pub async fn get_or_try_insert_with<F, Fut>(
        &self,
        team: &str,
        init: F,
    ) -> Result<Arc<Roster>, AppError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Roster, AppError>>,
    {
        let key = normalize_team_code(team);
        let slot = {
            let mut entries = self.entries.lock().await;
            if let Some(roster) = entries.ready.get(&key) {
                debug!("Cache hit for roster: team={key}");
                return Ok(Arc::clone(roster));
            }
            entries
                .in_flight
                .entry(key.clone())
                .or_insert_with(|| Arc::new(OnceCell::new()))
                .clone()
        };

        let result = slot
            .get_or_try_init(|| async move { init().await.map(Arc::new) })
            .await
            .cloned();

        let mut entries = self.entries.lock().await;
        let current = entries
            .in_flight
            .get(&key)
            .is_some_and(|current| Arc::ptr_eq(current, &slot));
        match &result {
            Ok(roster) => {
                debug!(
                    "Roster ready: team={key}, pitchers={}, position_players={}",
                    roster.pitchers().len(),
                    roster.position_players().len()
                );
                if current {
                    entries.in_flight.remove(&key);
                }
                entries.ready.put(key, Arc::clone(roster));
            }
            // Other holders of the slot are waiting to retry the build; the
            // slot stays until the last of them is done with it.
            Err(_) if current && Arc::strong_count(&slot) == 2 => {
                entries.in_flight.remove(&key);
            }
            Err(_) => {}
        }
        // Released under the lock so the next holder sees an exact count
        drop(slot);
        drop(entries);

        result
    }

    /// Cached roster for `team`, if a fetch has completed
    pub async fn get(&self, team: &str) -> Option<Arc<Roster>> {
        let key = normalize_team_code(team);
        self.entries.lock().await.ready.get(&key).cloned()
    }

    /// Drops the cached roster for `team`. A build in progress is unaffected.
    pub async fn invalidate(&self, team: &str) {
        let key = normalize_team_code(team);
        if self.entries.lock().await.ready.pop(&key).is_some() {
            info!("Invalidated cached roster: team={key}");
        }
    }

    /// Number of finished rosters held
    pub async fn len(&self) -> usize {
        self.entries.lock().await.ready.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.ready.is_empty()
    }

    pub async fn capacity(&self) -> usize {
        self.entries.lock().await.ready.cap().get()
    }

    pub async fn clear(&self) {
        self.entries.lock().await.ready.clear();
    }
}

impl Default for RosterCache {
    fn default() -> Self {
        Self::new(
            NonZeroUsize::new(crate::constants::DEFAULT_ROSTER_CACHE_CAPACITY)
                .unwrap_or(NonZeroUsize::MIN),
        )
    }
}
