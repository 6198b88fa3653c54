//! In-memory adapters.
//!
//! Store workout records and progress snapshots in memory. Useful for
//! testing and development; the production store lives behind the same
//! ports in the app shell.

mod progress_cache;
mod workout_store;

pub use progress_cache::InMemoryProgressCache;
pub use workout_store::InMemoryWorkoutStore;
