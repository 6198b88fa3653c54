//! Repcycle - Workout cycle and session tracking engine.
//!
//! Core logic for a fitness-coaching client: trainers assign multi-day
//! workout programs; clients execute days, check off prescribed sets, and
//! review history. This crate covers the part with real invariants:
//!
//! - resolving which repetition ("cycle") of a recurring program a client
//!   is currently on,
//! - aggregating per-program completion progress for dashboard display,
//! - managing the single in-progress workout (start, pause/resume with
//!   accurate elapsed-time accounting, optimistic set toggling),
//! - reconciling optimistic set completions into durable records on finish.
//!
//! The backing store is an external collaborator reached through the
//! [`ports::WorkoutStore`] port; screens and data-access plumbing live
//! outside this crate.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod observability;
pub mod ports;
