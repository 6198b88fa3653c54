//! Program structure - Trainer-authored, read-only input.
//!
//! A program is an ordered collection of days; each day is either a rest
//! day or holds an ordered collection of exercises. Days and exercises are
//! immutable authoring data owned by the trainer-side system; this crate
//! never mutates them.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DayId, ExerciseId, ProgramId};

/// A per-set prescription: target reps and rest for one set index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetPrescription {
    /// Zero-based set index.
    pub set_index: u32,

    /// Target repetitions for this set.
    pub target_reps: u32,

    /// Target rest after this set, in seconds.
    pub target_rest_secs: u32,
}

impl SetPrescription {
    pub fn new(set_index: u32, target_reps: u32, target_rest_secs: u32) -> Self {
        Self {
            set_index,
            target_reps,
            target_rest_secs,
        }
    }
}

/// One exercise within a day.
///
/// Carries either a flat sets/reps/rest prescription or an ordered list of
/// per-set prescriptions. When per-set prescriptions are present they take
/// precedence over the flat `sets` count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    id: ExerciseId,
    name: String,
    sets: u32,
    reps: u32,
    rest_secs: u32,
    prescriptions: Vec<SetPrescription>,
}

impl Exercise {
    /// Creates an exercise with a flat sets/reps/rest prescription.
    pub fn new(id: ExerciseId, name: impl Into<String>, sets: u32, reps: u32, rest_secs: u32) -> Self {
        Self {
            id,
            name: name.into(),
            sets,
            reps,
            rest_secs,
            prescriptions: Vec::new(),
        }
    }

    /// Replaces the flat prescription with ordered per-set prescriptions.
    pub fn with_prescriptions(mut self, prescriptions: Vec<SetPrescription>) -> Self {
        self.prescriptions = prescriptions;
        self
    }

    pub fn id(&self) -> &ExerciseId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reps(&self) -> u32 {
        self.reps
    }

    pub fn rest_secs(&self) -> u32 {
        self.rest_secs
    }

    /// Returns the ordered per-set prescriptions, if any were authored.
    pub fn prescriptions(&self) -> &[SetPrescription] {
        &self.prescriptions
    }

    /// Returns the number of prescribed sets.
    pub fn set_count(&self) -> u32 {
        if self.prescriptions.is_empty() {
            self.sets
        } else {
            self.prescriptions.len() as u32
        }
    }

    /// Returns true if `set_index` falls within this exercise's prescription.
    ///
    /// With per-set prescriptions the index must match one of them; otherwise
    /// it is bounded by the flat `sets` count.
    pub fn allows_set_index(&self, set_index: u32) -> bool {
        if self.prescriptions.is_empty() {
            set_index < self.sets
        } else {
            self.prescriptions.iter().any(|p| p.set_index == set_index)
        }
    }
}

/// One day within a program: a rest day, or an ordered list of exercises.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    id: DayId,
    name: String,
    rest: bool,
    exercises: Vec<Exercise>,
}

impl Day {
    /// Creates a training day with the given exercises.
    pub fn new(id: DayId, name: impl Into<String>, exercises: Vec<Exercise>) -> Self {
        Self {
            id,
            name: name.into(),
            rest: false,
            exercises,
        }
    }

    /// Creates a rest day.
    pub fn rest(id: DayId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            rest: true,
            exercises: Vec::new(),
        }
    }

    pub fn id(&self) -> &DayId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_rest(&self) -> bool {
        self.rest
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    /// Returns the identity + rest-day flag summary used by cycle resolution.
    pub fn summary(&self) -> DaySummary {
        DaySummary {
            id: self.id,
            rest: self.rest,
        }
    }
}

/// Identity + rest-day flag for a day; the cycle resolver and progress
/// aggregator only need this much of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    pub id: DayId,
    pub rest: bool,
}

impl DaySummary {
    pub fn new(id: DayId, rest: bool) -> Self {
        Self { id, rest }
    }
}

/// Trainer-authored multi-day exercise plan, assigned to a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    id: ProgramId,
    name: String,
    days: Vec<Day>,
}

impl Program {
    pub fn new(id: ProgramId, name: impl Into<String>, days: Vec<Day>) -> Self {
        Self {
            id,
            name: name.into(),
            days,
        }
    }

    pub fn id(&self) -> &ProgramId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    /// Finds a day by identity.
    pub fn day(&self, id: &DayId) -> Option<&Day> {
        self.days.iter().find(|d| d.id() == id)
    }

    /// Finds an exercise by identity across all days.
    pub fn exercise(&self, id: &ExerciseId) -> Option<&Exercise> {
        self.days
            .iter()
            .flat_map(|d| d.exercises().iter())
            .find(|e| e.id() == id)
    }

    /// Returns the day summaries in program order.
    pub fn day_summaries(&self) -> Vec<DaySummary> {
        self.days.iter().map(Day::summary).collect()
    }
}
