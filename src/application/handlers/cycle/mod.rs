//! Cycle and progress query handlers.

mod compute_progress;
mod resolve_current_cycle;

pub use compute_progress::ComputeProgressHandler;
pub use resolve_current_cycle::ResolveCurrentCycleHandler;
