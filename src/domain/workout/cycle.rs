//! Pure cycle resolution over completed-session history.
//!
//! A cycle is one full repetition through a program's non-rest days; clients
//! repeat programs indefinitely. Resolution is a pure function of the
//! completed-session history, safe to call repeatedly.

use std::collections::HashSet;

use crate::domain::program::DaySummary;
use crate::domain::workout::CompletedSession;

/// Result of resolving which cycle a client is currently on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleResolution {
    /// The cycle the client should train in next.
    pub cycle: u32,

    /// True when the cycle before `cycle` was fully completed, i.e. the
    /// resolver just advanced past it.
    pub previous_cycle_complete: bool,
}

/// Resolves the current cycle for a (client, program) pair.
///
/// Rules:
/// - No completed sessions: cycle 0.
/// - No non-rest days: the program is trivially complete every visit, so the
///   result is always `max_cycle + 1`.
/// - Otherwise the highest cycle seen advances to `max_cycle + 1` only once
///   the completed sessions of `max_cycle` cover every non-rest day.
///
/// Sessions without a cycle index are legacy rows counted as cycle 0.
pub fn resolve_cycle(days: &[DaySummary], sessions: &[CompletedSession]) -> CycleResolution {
    if sessions.is_empty() {
        return CycleResolution {
            cycle: 0,
            previous_cycle_complete: false,
        };
    }

    let max_cycle = sessions
        .iter()
        .map(CompletedSession::cycle_or_legacy)
        .max()
        .unwrap_or(0);

    let non_rest: Vec<_> = days.iter().filter(|d| !d.rest).collect();
    if non_rest.is_empty() {
        return CycleResolution {
            cycle: max_cycle + 1,
            previous_cycle_complete: true,
        };
    }

    let completed_days: HashSet<_> = sessions
        .iter()
        .filter(|s| s.cycle_or_legacy() == max_cycle)
        .map(|s| s.day_id)
        .collect();

    if non_rest.iter().all(|d| completed_days.contains(&d.id)) {
        CycleResolution {
            cycle: max_cycle + 1,
            previous_cycle_complete: true,
        }
    } else {
        CycleResolution {
            cycle: max_cycle,
            previous_cycle_complete: false,
        }
    }
}
