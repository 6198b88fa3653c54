//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `program` - Read-only trainer-authored program structure
//! - `workout` - Active workout state, cycle resolution, progress aggregation

pub mod foundation;
pub mod program;
pub mod workout;
