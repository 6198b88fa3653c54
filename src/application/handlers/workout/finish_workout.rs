//! FinishWorkoutHandler - Reconciles optimistic set completions on finish.
//!
//! Replays the Active Workout's in-memory completion set into durable
//! per-exercise, per-set records, marks the session complete, recomputes
//! and caches progress, and clears the slot. The sequence is best-effort:
//! an individual write failure never traps the user in a stuck session,
//! but every failure is accumulated into the returned report so callers
//! and operators can see exactly what was lost.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::foundation::{DomainError, ErrorCode, ExerciseId, WorkoutSessionId};
use crate::domain::program::Program;
use crate::domain::workout::{ProgramProgress, SetKey};
use crate::ports::{Clock, ProgressCache, WorkoutStore};

use super::WorkoutTracker;

/// One set log that could not be written durably.
#[derive(Debug, Clone)]
pub struct FailedSetLog {
    pub exercise_id: ExerciseId,
    pub set_index: u32,
    pub error: DomainError,
}

/// Outcome of finish reconciliation.
///
/// `session_id` identifies the completed workout session for navigation to
/// a summary view. `skipped` holds keys that did not resolve to a real
/// exercise/set of the program; `failed` holds sets whose durable write
/// failed after resolution.
#[derive(Debug, Clone)]
pub struct FinishReport {
    pub session_id: WorkoutSessionId,
    pub total_seconds: u64,
    pub logged_sets: u32,
    pub skipped: Vec<SetKey>,
    pub failed: Vec<FailedSetLog>,
    /// False when the completion-timestamp write itself failed.
    pub session_marked_complete: bool,
}

/// Handler draining the Active Workout into the persistence gateway.
pub struct FinishWorkoutHandler {
    store: Arc<dyn WorkoutStore>,
    cache: Arc<dyn ProgressCache>,
    clock: Arc<dyn Clock>,
}

impl FinishWorkoutHandler {
    pub fn new(
        store: Arc<dyn WorkoutStore>,
        cache: Arc<dyn ProgressCache>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { store, cache, clock }
    }

    /// Finishes the active workout against its loaded program structure.
    ///
    /// # Errors
    ///
    /// - `NoActiveWorkout` if the tracker slot is empty
    ///
    /// Durable-write failures after that point do not abort the operation;
    /// they are reported in the returned [`FinishReport`].
    pub async fn handle(
        &self,
        tracker: &WorkoutTracker,
        program: &Program,
    ) -> Result<FinishReport, DomainError> {
        let workout = tracker.snapshot().ok_or_else(|| {
            DomainError::new(ErrorCode::NoActiveWorkout, "No workout is in progress")
        })?;

        let session_id = *workout.session_id();
        let total_seconds = workout.elapsed_seconds(self.clock.now());

        // Resolve optimistic keys against the program structure; keys that
        // point at no known exercise or an out-of-prescription set index are
        // dropped rather than failing the whole finish.
        let mut skipped = Vec::new();
        let mut by_exercise: HashMap<ExerciseId, Vec<u32>> = HashMap::new();
        for key in workout.completed_sets() {
            match program.exercise(key.exercise_id()) {
                Some(exercise) if exercise.allows_set_index(key.set_index()) => {
                    by_exercise
                        .entry(*key.exercise_id())
                        .or_default()
                        .push(key.set_index());
                }
                _ => skipped.push(*key),
            }
        }
        if !skipped.is_empty() {
            warn!(
                session_id = %session_id,
                skipped = skipped.len(),
                "dropping completion keys that resolve to no prescribed set"
            );
        }

        // One exercise session per exercise group, then one set log per
        // completed index. Failures are collected and the remaining work
        // continues.
        let mut logged_sets = 0;
        let mut failed = Vec::new();
        for (exercise_id, mut set_indices) in by_exercise {
            set_indices.sort_unstable();

            let exercise_session_id = match self
                .store
                .create_exercise_session(&session_id, &exercise_id)
                .await
            {
                Ok(id) => id,
                Err(error) => {
                    warn!(
                        session_id = %session_id,
                        exercise_id = %exercise_id,
                        %error,
                        "failed to create exercise session; its sets will not be logged"
                    );
                    failed.extend(set_indices.into_iter().map(|set_index| FailedSetLog {
                        exercise_id,
                        set_index,
                        error: error.clone(),
                    }));
                    continue;
                }
            };

            for set_index in set_indices {
                match self
                    .store
                    .upsert_set_log(&exercise_session_id, set_index, true)
                    .await
                {
                    Ok(()) => logged_sets += 1,
                    Err(error) => {
                        warn!(
                            session_id = %session_id,
                            exercise_id = %exercise_id,
                            set_index,
                            %error,
                            "failed to upsert set log"
                        );
                        failed.push(FailedSetLog {
                            exercise_id,
                            set_index,
                            error,
                        });
                    }
                }
            }
        }

        let session_marked_complete =
            match self.store.complete_session(&session_id, total_seconds).await {
                Ok(()) => true,
                Err(error) => {
                    warn!(session_id = %session_id, %error, "failed to mark session complete");
                    false
                }
            };

        self.refresh_progress_cache(&workout, program).await;

        // Clearing last: even a partially persisted finish must not trap the
        // user in a stuck session.
        tracker.clear();

        info!(
            session_id = %session_id,
            total_seconds,
            logged_sets,
            skipped = skipped.len(),
            failed = failed.len(),
            "workout finished"
        );

        Ok(FinishReport {
            session_id,
            total_seconds,
            logged_sets,
            skipped,
            failed,
            session_marked_complete,
        })
    }

    /// Recomputes progress from the post-finish history and caches it.
    /// Failures here are logged, never fatal.
    async fn refresh_progress_cache(
        &self,
        workout: &crate::domain::workout::ActiveWorkout,
        program: &Program,
    ) {
        let sessions = match self
            .store
            .list_completed_sessions(workout.client_id(), workout.program_id())
            .await
        {
            Ok(sessions) => sessions,
            Err(error) => {
                warn!(%error, "could not re-read history to refresh progress cache");
                return;
            }
        };

        let progress = ProgramProgress::from_history(&program.day_summaries(), &sessions);
        if let Err(error) = self
            .cache
            .put(workout.client_id(), workout.program_id(), &progress)
            .await
        {
            warn!(%error, "could not cache recomputed progress");
        }
    }
}
