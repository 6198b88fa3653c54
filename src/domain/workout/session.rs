//! Read models for historical workout data returned by the store.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DayId, ExerciseId, Timestamp};

/// A completed workout session as read from the store.
///
/// Legacy rows may lack a cycle index; those are treated as cycle 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedSession {
    pub day_id: DayId,
    pub cycle: Option<u32>,
    pub completed_at: Timestamp,
    /// Total elapsed seconds; optional decoration, not required for counting.
    pub total_seconds: Option<u64>,
}

impl CompletedSession {
    pub fn new(day_id: DayId, cycle: Option<u32>, completed_at: Timestamp) -> Self {
        Self {
            day_id,
            cycle,
            completed_at,
            total_seconds: None,
        }
    }

    pub fn with_total_seconds(mut self, total_seconds: u64) -> Self {
        self.total_seconds = Some(total_seconds);
        self
    }

    /// Returns the cycle index, treating missing legacy values as cycle 0.
    pub fn cycle_or_legacy(&self) -> u32 {
        self.cycle.unwrap_or(0)
    }
}

/// A durable set-log row: one completed set of one exercise session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetLogEntry {
    pub exercise_id: ExerciseId,
    pub set_index: u32,
}

impl SetLogEntry {
    pub fn new(exercise_id: ExerciseId, set_index: u32) -> Self {
        Self {
            exercise_id,
            set_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_cycle_reads_as_zero() {
        let session = CompletedSession::new(DayId::new(), None, Timestamp::now());
        assert_eq!(session.cycle_or_legacy(), 0);
    }

    #[test]
    fn present_cycle_is_preserved() {
        let session = CompletedSession::new(DayId::new(), Some(4), Timestamp::now());
        assert_eq!(session.cycle_or_legacy(), 4);
    }

    #[test]
    fn total_seconds_is_optional_decoration() {
        let session = CompletedSession::new(DayId::new(), Some(0), Timestamp::now());
        assert_eq!(session.total_seconds, None);

        let with_duration = session.with_total_seconds(1_800);
        assert_eq!(with_duration.total_seconds, Some(1_800));
    }
}
