//! WorkoutTracker - Owner of the single Active Workout slot.
//!
//! All mutation of the in-progress workout funnels through this type, so
//! the one-active-workout invariant is enforced by API shape rather than
//! convention. The slot sits behind a `std::sync::Mutex` whose critical
//! sections are all short synchronous mutations; the lock is never held
//! across an `.await`, so toggles stay instantaneous while finish-time
//! network calls are outstanding.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::info;

use crate::domain::foundation::{ClientId, DomainError, ErrorCode, ProgramId, WorkoutSessionId};
use crate::domain::program::Day;
use crate::domain::workout::{ActiveWorkout, SetKey};
use crate::ports::{Clock, WorkoutStore};

/// Session lifecycle manager: start, pause/resume, optimistic set toggling,
/// and teardown of the single in-progress workout.
pub struct WorkoutTracker {
    store: Arc<dyn WorkoutStore>,
    clock: Arc<dyn Clock>,
    slot: Mutex<Option<ActiveWorkout>>,
}

impl WorkoutTracker {
    pub fn new(store: Arc<dyn WorkoutStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            slot: Mutex::new(None),
        }
    }

    fn slot(&self) -> MutexGuard<'_, Option<ActiveWorkout>> {
        // The slot holds plain state; a poisoned lock still contains a
        // consistent value because every mutation is single-step.
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Starts a workout for one day of one program.
    ///
    /// Creates the durable session row first; the slot is only populated on
    /// success, so a failed start leaves no active workout behind. A second
    /// start fully replaces whatever occupied the slot.
    ///
    /// # Errors
    ///
    /// - `RestDay` if the target day is a rest day
    /// - `StoreError` if the session row could not be created
    pub async fn start(
        &self,
        client_id: ClientId,
        program_id: ProgramId,
        day: &Day,
        cycle: u32,
    ) -> Result<WorkoutSessionId, DomainError> {
        if day.is_rest() {
            return Err(
                DomainError::new(ErrorCode::RestDay, "Cannot start a workout on a rest day")
                    .with_detail("day_id", day.id().to_string()),
            );
        }

        let session_id = self
            .store
            .create_session(&client_id, &program_id, day.id(), cycle)
            .await?;

        let workout = ActiveWorkout::new(
            session_id,
            client_id,
            program_id,
            *day.id(),
            cycle,
            self.clock.now(),
        );

        info!(session_id = %session_id, day_id = %day.id(), cycle, "workout started");
        *self.slot() = Some(workout);
        Ok(session_id)
    }

    /// Records the pause point. No-op if paused or idle.
    pub fn pause(&self) {
        let now = self.clock.now();
        if let Some(workout) = self.slot().as_mut() {
            workout.pause(now);
        }
    }

    /// Resumes a paused workout. No-op if running or idle.
    pub fn resume(&self) {
        let now = self.clock.now();
        if let Some(workout) = self.slot().as_mut() {
            workout.resume(now);
        }
    }

    /// Flips one set's completion state. Pure in-memory mutation: no
    /// network call, cannot fail, no-op when idle.
    pub fn toggle_set(&self, key: SetKey) {
        if let Some(workout) = self.slot().as_mut() {
            workout.toggle_set(key);
        }
    }

    /// Empties the slot unconditionally (after finish or abandonment).
    pub fn clear(&self) {
        *self.slot() = None;
    }

    /// Derived elapsed seconds of the active workout, if any.
    pub fn elapsed_seconds(&self) -> Option<u64> {
        let now = self.clock.now();
        self.slot().as_ref().map(|w| w.elapsed_seconds(now))
    }

    /// Returns true if a workout is active and currently paused.
    pub fn is_paused(&self) -> bool {
        self.slot().as_ref().map(ActiveWorkout::is_paused).unwrap_or(false)
    }

    /// Returns the active workout only if it belongs to this program and
    /// day, so a day screen can tell whether *its* day is in progress.
    pub fn lookup(&self, program_id: &ProgramId, day_id: &crate::domain::foundation::DayId) -> Option<ActiveWorkout> {
        self.slot()
            .as_ref()
            .filter(|w| w.matches(program_id, day_id))
            .cloned()
    }

    /// Read-only copy of the active workout, if any.
    pub fn snapshot(&self) -> Option<ActiveWorkout> {
        self.slot().clone()
    }
}
