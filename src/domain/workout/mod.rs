//! Workout module - Session tracking, cycle resolution, and progress.
//!
//! # Module Organization
//!
//! - `active` - The single in-memory Active Workout state container
//! - `cycle` - Pure cycle resolution over completed-session history
//! - `progress` - Per-program completion progress value object
//! - `session` - Read models for completed sessions and set logs
//! - `set_key` - Composite key for optimistic set completions

mod active;
mod cycle;
mod progress;
mod session;
mod set_key;

pub use active::ActiveWorkout;
pub use cycle::{resolve_cycle, CycleResolution};
pub use progress::ProgramProgress;
pub use session::{CompletedSession, SetLogEntry};
pub use set_key::SetKey;
