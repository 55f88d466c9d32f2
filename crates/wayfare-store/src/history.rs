//! The capped, most-recent-first trip history.
//!
//! Every mutation is a read-modify-write of one blob: read the list, change
//! an in-memory copy, write it back with a single `set`. Two writers racing
//! on the same backend (two processes sharing a data directory) can lose an
//! update, since the last `set` wins. That is accepted for a single-user
//! history; the backends offer no transaction to do better.

use wayfare_core::TripRecord;

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// Storage key holding the JSON-encoded `Vec<TripRecord>`.
pub const HISTORY_KEY: &str = "recentTrips";

/// Maximum number of trips retained. Older trips are dropped on insert.
pub const MAX_TRIPS: usize = 10;

pub struct TripHistory<S> {
    store: S,
}

impl<S: KeyValueStore> TripHistory<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// All stored trips, most recent first.
    ///
    /// Read and decode failures yield an empty list: an empty history is an
    /// acceptable degraded state for display.
    pub fn list(&self) -> Vec<TripRecord> {
        match self.load() {
            Ok(trips) => trips,
            Err(error) => {
                tracing::debug!(key = HISTORY_KEY, %error, "trip history unreadable; treating as empty");
                Vec::new()
            }
        }
    }

    /// Looks up a stored trip by id.
    pub fn get(&self, id: &str) -> Option<TripRecord> {
        self.list().into_iter().find(|t| t.id == id)
    }

    /// Stores `trip` at the front of the history, dropping the oldest trips
    /// beyond [`MAX_TRIPS`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be read or written, or the
    /// list cannot be encoded. The previously stored history is left intact.
    pub fn insert(&mut self, trip: TripRecord) -> Result<(), StoreError> {
        let mut trips = self.load_for_write()?;
        trips.insert(0, trip);
        trips.truncate(MAX_TRIPS);
        self.persist(&trips)
    }

    /// Removes every trip whose id is `id`. Returns `true` if anything was
    /// removed; when nothing matches the stored blob is not rewritten.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be read or written.
    pub fn remove(&mut self, id: &str) -> Result<bool, StoreError> {
        let mut trips = self.load_for_write()?;
        let before = trips.len();
        trips.retain(|t| t.id != id);
        if trips.len() == before {
            return Ok(false);
        }
        self.persist(&trips)?;
        Ok(true)
    }

    /// Deletes the stored history entirely.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend rejects the delete.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.store.delete(HISTORY_KEY)
    }

    fn load(&self) -> Result<Vec<TripRecord>, StoreError> {
        match self.store.get(HISTORY_KEY)? {
            Some(blob) => Ok(serde_json::from_str(&blob)?),
            None => Ok(Vec::new()),
        }
    }

    /// Like [`Self::load`] but only backend failures are errors. A blob that
    /// no longer decodes is replaced on the next write, matching what
    /// [`Self::list`] already shows.
    fn load_for_write(&self) -> Result<Vec<TripRecord>, StoreError> {
        let Some(blob) = self.store.get(HISTORY_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&blob) {
            Ok(trips) => Ok(trips),
            Err(error) => {
                tracing::debug!(key = HISTORY_KEY, %error, "discarding undecodable trip history");
                Ok(Vec::new())
            }
        }
    }

    fn persist(&mut self, trips: &[TripRecord]) -> Result<(), StoreError> {
        let blob = serde_json::to_string(trips)?;
        self.store.set(HISTORY_KEY, &blob)
    }
}

#[cfg(test)]
#[path = "history_test.rs"]
mod tests;
