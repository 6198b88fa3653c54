//! Composite key identifying one prescribed set of one exercise.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{ExerciseId, ValidationError};

/// Key for an optimistic set completion: (exercise, set index).
///
/// Stored in the Active Workout's completion set and reconciled into
/// durable set logs at finish time. Older clients encoded this as a single
/// `"<exercise-id>-<set-index>"` string; [`FromStr`] accepts that encoding
/// (split at the last hyphen) so legacy keys can still be ingested, while
/// the in-memory representation stays a proper composite key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetKey {
    exercise_id: ExerciseId,
    set_index: u32,
}

impl SetKey {
    pub fn new(exercise_id: ExerciseId, set_index: u32) -> Self {
        Self {
            exercise_id,
            set_index,
        }
    }

    pub fn exercise_id(&self) -> &ExerciseId {
        &self.exercise_id
    }

    pub fn set_index(&self) -> u32 {
        self.set_index
    }
}

impl fmt::Display for SetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.exercise_id, self.set_index)
    }
}

impl FromStr for SetKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (exercise_part, index_part) = s
            .rsplit_once('-')
            .ok_or_else(|| ValidationError::invalid_format("set_key", "missing set index separator"))?;

        let set_index: u32 = index_part
            .parse()
            .map_err(|_| ValidationError::invalid_format("set_key", "set index is not an integer"))?;

        let exercise_id: ExerciseId = exercise_part
            .parse()
            .map_err(|_| ValidationError::invalid_format("set_key", "exercise id is not a valid UUID"))?;

        Ok(Self::new(exercise_id, set_index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_in_legacy_encoding() {
        let id: ExerciseId = "550e8400-e29b-41d4-a716-446655440000".parse().unwrap();
        let key = SetKey::new(id, 2);
        assert_eq!(key.to_string(), "550e8400-e29b-41d4-a716-446655440000-2");
    }

    #[test]
    fn parses_legacy_encoding_at_last_hyphen() {
        // The exercise id itself contains hyphens; only the last one separates
        // the set index.
        let key: SetKey = "550e8400-e29b-41d4-a716-446655440000-7".parse().unwrap();
        assert_eq!(key.set_index(), 7);
        assert_eq!(
            key.exercise_id().to_string(),
            "550e8400-e29b-41d4-a716-446655440000"
        );
    }

    #[test]
    fn roundtrips_through_display() {
        let key = SetKey::new(ExerciseId::new(), 11);
        let parsed: SetKey = key.to_string().parse().unwrap();
        assert_eq!(parsed, key);
    }

    #[test]
    fn rejects_key_without_separator() {
        let result: Result<SetKey, _> = "notakey".parse();
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn rejects_non_numeric_set_index() {
        let result: Result<SetKey, _> = "550e8400-e29b-41d4-a716-446655440000-abc".parse();
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn rejects_truncated_exercise_id() {
        // Truncated 8-character identities from legacy clients do not resolve;
        // they are rejected at parse time rather than carried forward.
        let result: Result<SetKey, _> = "550e8400-3".parse();
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }
}
