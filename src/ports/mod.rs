//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `WorkoutStore` - Persistence gateway for sessions, exercise sessions,
//!   and set logs (the backing relational store is an external collaborator)
//! - `ProgressCache` - Cached progress snapshots for dashboard fallback
//! - `Clock` - Time source, swappable for deterministic tests

mod clock;
mod progress_cache;
mod workout_store;

pub use clock::Clock;
pub use progress_cache::ProgressCache;
pub use workout_store::WorkoutStore;
