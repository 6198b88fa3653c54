//! Workout store port - The persistence gateway.
//!
//! Shape, not wire format: the backing store is an external collaborator
//! exposing read/insert/update operations over a relational schema. This
//! crate only depends on the six logical operations below.

use async_trait::async_trait;

use crate::domain::foundation::{
    ClientId, DayId, DomainError, ExerciseId, ExerciseSessionId, ProgramId, WorkoutSessionId,
};
use crate::domain::workout::{CompletedSession, SetLogEntry};

/// Persistence gateway for workout history and session records.
///
/// All operations are asynchronous and may fail with `StoreError`;
/// callers decide whether a failure is fatal (session start) or degrades
/// gracefully (finish reconciliation).
#[async_trait]
pub trait WorkoutStore: Send + Sync {
    /// Lists every completed workout session for a (client, program) pair.
    ///
    /// Sessions from legacy rows may carry no cycle index.
    async fn list_completed_sessions(
        &self,
        client_id: &ClientId,
        program_id: &ProgramId,
    ) -> Result<Vec<CompletedSession>, DomainError>;

    /// Creates a new workout session row for one attempt at one day.
    ///
    /// # Errors
    ///
    /// - `StoreError` on persistence failure; no session exists afterwards
    async fn create_session(
        &self,
        client_id: &ClientId,
        program_id: &ProgramId,
        day_id: &DayId,
        cycle: u32,
    ) -> Result<WorkoutSessionId, DomainError>;

    /// Marks a workout session completed with its total elapsed seconds.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session doesn't exist
    /// - `StoreError` on persistence failure
    async fn complete_session(
        &self,
        session_id: &WorkoutSessionId,
        total_seconds: u64,
    ) -> Result<(), DomainError>;

    /// Creates an exercise session within a workout session.
    ///
    /// Created lazily at finish time, only for exercises that received at
    /// least one completed set.
    async fn create_exercise_session(
        &self,
        session_id: &WorkoutSessionId,
        exercise_id: &ExerciseId,
    ) -> Result<ExerciseSessionId, DomainError>;

    /// Upserts a set log; idempotent on (exercise session, set index).
    async fn upsert_set_log(
        &self,
        exercise_session_id: &ExerciseSessionId,
        set_index: u32,
        completed: bool,
    ) -> Result<(), DomainError>;

    /// Lists the set logs of the most recent completed session for the given
    /// day and cycle.
    async fn list_set_logs(
        &self,
        client_id: &ClientId,
        program_id: &ProgramId,
        day_id: &DayId,
        cycle: u32,
    ) -> Result<Vec<SetLogEntry>, DomainError>;
}
