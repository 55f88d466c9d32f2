//! Persistence for the user's recent trips.
//!
//! [`TripHistory`] keeps the ten most recent trips as a single JSON blob in a
//! [`KeyValueStore`]. Backends: [`MemoryStore`] for tests and ephemeral use,
//! [`FileStore`] for an on-disk data directory.

pub mod error;
pub mod history;
pub mod kv;

pub use error::StoreError;
pub use history::{TripHistory, HISTORY_KEY, MAX_TRIPS};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
