//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `clock` - System and manually-driven time sources
//! - `memory` - In-memory store and cache (development/testing)

pub mod clock;
pub mod memory;

pub use clock::{ManualClock, SystemClock};
pub use memory::{InMemoryProgressCache, InMemoryWorkoutStore};
