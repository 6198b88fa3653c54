//! ProgramProgress - Per-program completion progress for dashboard display.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::program::DaySummary;
use crate::domain::workout::{resolve_cycle, CompletedSession};

/// A snapshot of completion progress for one (client, program) pair.
///
/// Progress is reported against a *reference cycle*: the cycle being trained
/// while mid-cycle, or the just-finished cycle when the client completed the
/// last non-rest day and has not started the next repetition. The dashboard
/// therefore shows "12/12 complete" instead of resetting to "0/12" the
/// moment a cycle finishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramProgress {
    total_days: u32,
    completed_days: u32,
    cycle: u32,
    all_complete: bool,
    next_day_index: usize,
}

impl ProgramProgress {
    /// Computes progress from the day list and completed-session history.
    ///
    /// Pure function; the application layer fetches the history once and
    /// reuses it for both cycle resolution and day counting.
    pub fn from_history(days: &[DaySummary], sessions: &[CompletedSession]) -> Self {
        let resolution = resolve_cycle(days, sessions);

        // Display the just-finished cycle until the next one has activity.
        let all_complete = resolution.previous_cycle_complete && resolution.cycle > 0;
        let reference_cycle = if all_complete {
            resolution.cycle - 1
        } else {
            resolution.cycle
        };

        let completed_ids: HashSet<_> = sessions
            .iter()
            .filter(|s| s.cycle_or_legacy() == reference_cycle)
            .map(|s| s.day_id)
            .collect();

        let total_days = days.iter().filter(|d| !d.rest).count() as u32;
        let completed_days = days
            .iter()
            .filter(|d| !d.rest && completed_ids.contains(&d.id))
            .count() as u32;

        let next_day_index = days
            .iter()
            .position(|d| !d.rest && !completed_ids.contains(&d.id))
            .unwrap_or(0);

        Self {
            total_days,
            completed_days,
            cycle: reference_cycle,
            all_complete,
            next_day_index,
        }
    }

    /// Total non-rest days in the program.
    pub fn total_days(&self) -> u32 {
        self.total_days
    }

    /// Non-rest days completed within the reference cycle.
    pub fn completed_days(&self) -> u32 {
        self.completed_days
    }

    /// The reference cycle index progress is reported against.
    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    /// True when every non-rest day of the reference cycle is complete.
    pub fn all_complete(&self) -> bool {
        self.all_complete
    }

    /// Index (into the day list) of the day the client should train next.
    ///
    /// Defaults to 0 when all days are complete or none is found.
    pub fn next_day_index(&self) -> usize {
        self.next_day_index
    }
}
