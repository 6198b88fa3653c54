//! ActiveWorkout - The mutable working state of an in-progress session.
//!
//! There is at most one of these per client at any time; the slot lives in
//! the application-layer tracker and every mutation funnels through the
//! narrow API here.
//!
//! # Invariants
//!
//! - Elapsed time is always derived from stored timestamps:
//!   `(now or paused_at) - started_at - total_paused`, never negative.
//! - `pause` while paused and `resume` while running are no-ops.
//! - Set toggling is a pure in-memory mutation and cannot fail.

use std::collections::HashSet;

use chrono::Duration;

use crate::domain::foundation::{ClientId, DayId, ProgramId, Timestamp, WorkoutSessionId};
use crate::domain::workout::SetKey;

/// The single in-memory, not-yet-finished session being executed right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveWorkout {
    session_id: WorkoutSessionId,
    client_id: ClientId,
    program_id: ProgramId,
    day_id: DayId,
    cycle: u32,
    started_at: Timestamp,
    total_paused: Duration,
    paused_at: Option<Timestamp>,
    completed_sets: HashSet<SetKey>,
}

impl ActiveWorkout {
    /// Creates a freshly started workout: running, nothing paused, no sets
    /// checked off.
    pub fn new(
        session_id: WorkoutSessionId,
        client_id: ClientId,
        program_id: ProgramId,
        day_id: DayId,
        cycle: u32,
        started_at: Timestamp,
    ) -> Self {
        Self {
            session_id,
            client_id,
            program_id,
            day_id,
            cycle,
            started_at,
            total_paused: Duration::zero(),
            paused_at: None,
            completed_sets: HashSet::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn session_id(&self) -> &WorkoutSessionId {
        &self.session_id
    }

    pub fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    pub fn program_id(&self) -> &ProgramId {
        &self.program_id
    }

    pub fn day_id(&self) -> &DayId {
        &self.day_id
    }

    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    /// Returns the optimistic completion set.
    pub fn completed_sets(&self) -> &HashSet<SetKey> {
        &self.completed_sets
    }

    pub fn is_set_completed(&self, key: &SetKey) -> bool {
        self.completed_sets.contains(key)
    }

    /// Returns true if this workout belongs to the given program and day.
    pub fn matches(&self, program_id: &ProgramId, day_id: &DayId) -> bool {
        &self.program_id == program_id && &self.day_id == day_id
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Records the pause point. No-op if already paused.
    pub fn pause(&mut self, now: Timestamp) {
        if self.paused_at.is_none() {
            self.paused_at = Some(now);
        }
    }

    /// Accumulates the paused interval and resumes. No-op if not paused.
    pub fn resume(&mut self, now: Timestamp) {
        if let Some(paused_at) = self.paused_at.take() {
            let paused_for = now.duration_since(&paused_at);
            // Timestamps only move forward; clamp anyway so elapsed time can
            // never go negative.
            self.total_paused = self.total_paused + paused_for.max(Duration::zero());
        }
    }

    /// Flips membership of `key` in the completion set.
    ///
    /// Pure in-memory mutation: instantaneous, never fails, and a double
    /// toggle restores the original state.
    pub fn toggle_set(&mut self, key: SetKey) {
        if !self.completed_sets.remove(&key) {
            self.completed_sets.insert(key);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Derived values
    // ─────────────────────────────────────────────────────────────────────────

    /// Elapsed active seconds, floored to whole seconds.
    ///
    /// Derived on demand from stored timestamps rather than accumulated by a
    /// timer, so repeated recomputation cannot drift. Frozen while paused.
    pub fn elapsed_seconds(&self, now: Timestamp) -> u64 {
        let end = self.paused_at.unwrap_or(now);
        let active = end.duration_since(&self.started_at) - self.total_paused;
        active.num_seconds().max(0) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use uuid::Uuid;

    fn client() -> ClientId {
        ClientId::new("client-1").unwrap()
    }

    fn workout_started_at(start: Timestamp) -> ActiveWorkout {
        ActiveWorkout::new(
            WorkoutSessionId::new(),
            client(),
            ProgramId::new(),
            DayId::new(),
            0,
            start,
        )
    }

    fn key(n: u128, set_index: u32) -> SetKey {
        SetKey::new(
            crate::domain::foundation::ExerciseId::from_uuid(Uuid::from_u128(n)),
            set_index,
        )
    }

    #[test]
    fn elapsed_counts_forward_from_start() {
        let start = Timestamp::from_unix_secs(10_000);
        let workout = workout_started_at(start);

        assert_eq!(workout.elapsed_seconds(start), 0);
        assert_eq!(workout.elapsed_seconds(start.plus_secs(95)), 95);
    }

    #[test]
    fn elapsed_floors_to_whole_seconds() {
        let start = Timestamp::from_unix_secs(10_000);
        let workout = workout_started_at(start);

        assert_eq!(workout.elapsed_seconds(start.plus_millis(2_900)), 2);
    }

    #[test]
    fn elapsed_is_frozen_while_paused() {
        let start = Timestamp::from_unix_secs(10_000);
        let mut workout = workout_started_at(start);

        workout.pause(start.plus_secs(30));
        assert!(workout.is_paused());
        assert_eq!(workout.elapsed_seconds(start.plus_secs(30)), 30);
        assert_eq!(workout.elapsed_seconds(start.plus_secs(500)), 30);
    }

    #[test]
    fn paused_interval_is_excluded_after_resume() {
        let start = Timestamp::from_unix_secs(10_000);
        let mut workout = workout_started_at(start);

        workout.pause(start.plus_secs(30));
        workout.resume(start.plus_secs(50));

        // 60s wall clock, 20s of it paused.
        assert_eq!(workout.elapsed_seconds(start.plus_secs(60)), 40);
    }

    #[test]
    fn immediate_pause_resume_adds_no_elapsed_time() {
        let start = Timestamp::from_unix_secs(10_000);
        let mut workout = workout_started_at(start);

        let t = start.plus_secs(30);
        workout.pause(t);
        workout.resume(t);

        assert_eq!(workout.elapsed_seconds(start.plus_secs(45)), 45);
    }

    #[test]
    fn double_pause_keeps_first_pause_point() {
        let start = Timestamp::from_unix_secs(10_000);
        let mut workout = workout_started_at(start);

        workout.pause(start.plus_secs(10));
        workout.pause(start.plus_secs(20));
        workout.resume(start.plus_secs(30));

        // Paused from t=10 to t=30.
        assert_eq!(workout.elapsed_seconds(start.plus_secs(40)), 20);
    }

    #[test]
    fn resume_without_pause_is_noop() {
        let start = Timestamp::from_unix_secs(10_000);
        let mut workout = workout_started_at(start);

        workout.resume(start.plus_secs(30));
        assert!(!workout.is_paused());
        assert_eq!(workout.elapsed_seconds(start.plus_secs(60)), 60);
    }

    #[test]
    fn repeated_pause_resume_cycles_accumulate_paused_time() {
        let start = Timestamp::from_unix_secs(10_000);
        let mut workout = workout_started_at(start);

        workout.pause(start.plus_secs(10));
        workout.resume(start.plus_secs(15));
        workout.pause(start.plus_secs(20));
        workout.resume(start.plus_secs(30));

        // 40s wall clock, 15s paused in total.
        assert_eq!(workout.elapsed_seconds(start.plus_secs(40)), 25);
    }

    #[test]
    fn toggle_adds_then_removes_membership() {
        let start = Timestamp::from_unix_secs(10_000);
        let mut workout = workout_started_at(start);
        let k = key(1, 0);

        workout.toggle_set(k);
        assert!(workout.is_set_completed(&k));

        workout.toggle_set(k);
        assert!(!workout.is_set_completed(&k));
    }

    #[test]
    fn matches_requires_both_identities() {
        let start = Timestamp::from_unix_secs(10_000);
        let workout = workout_started_at(start);

        assert!(workout.matches(workout.program_id(), workout.day_id()));
        assert!(!workout.matches(&ProgramId::new(), workout.day_id()));
        assert!(!workout.matches(workout.program_id(), &DayId::new()));
    }

    proptest! {
        #[test]
        fn double_toggle_restores_original_membership(
            initial in proptest::collection::vec((0u128..8, 0u32..5), 0..12),
            toggled in (0u128..8, 0u32..5),
        ) {
            let start = Timestamp::from_unix_secs(10_000);
            let mut workout = workout_started_at(start);
            for (n, idx) in initial {
                workout.toggle_set(key(n, idx));
            }
            let before = workout.completed_sets().clone();

            let k = key(toggled.0, toggled.1);
            workout.toggle_set(k);
            workout.toggle_set(k);

            prop_assert_eq!(workout.completed_sets(), &before);
        }

        #[test]
        fn elapsed_never_decreases_while_running(offsets in proptest::collection::vec(0u64..10_000, 1..20)) {
            let start = Timestamp::from_unix_secs(10_000);
            let workout = workout_started_at(start);

            let mut sorted = offsets;
            sorted.sort_unstable();

            let mut last = 0;
            for offset in sorted {
                let elapsed = workout.elapsed_seconds(start.plus_secs(offset));
                prop_assert!(elapsed >= last);
                last = elapsed;
            }
        }
    }
}
