//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the workout tracking domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ClientId, DayId, ExerciseId, ExerciseSessionId, ProgramId, WorkoutSessionId};
pub use timestamp::Timestamp;
