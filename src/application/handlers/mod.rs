//! Handlers for the workout tracking use cases.
//!
//! - `cycle` - Cycle resolution and progress aggregation queries
//! - `workout` - Active workout lifecycle and finish reconciliation

pub mod cycle;
pub mod workout;
