//! In-memory workout store adapter.
//!
//! Keeps session, exercise-session, and set-log rows in maps guarded by a
//! single RwLock. Mirrors the durable store's behavior closely enough for
//! tests: sessions are only listed once completed, set-log upserts are
//! idempotent, and `list_set_logs` only surfaces the most recent completed
//! session for a day/cycle.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{
    ClientId, DayId, DomainError, ErrorCode, ExerciseId, ExerciseSessionId, ProgramId, Timestamp,
    WorkoutSessionId,
};
use crate::domain::workout::{CompletedSession, SetLogEntry};
use crate::ports::WorkoutStore;

#[derive(Debug, Clone)]
struct SessionRow {
    client_id: ClientId,
    program_id: ProgramId,
    day_id: DayId,
    cycle: u32,
    started_at: Timestamp,
    completed_at: Option<Timestamp>,
    total_seconds: Option<u64>,
}

#[derive(Debug, Clone)]
struct ExerciseSessionRow {
    session_id: WorkoutSessionId,
    exercise_id: ExerciseId,
}

#[derive(Debug, Default)]
struct Inner {
    sessions: HashMap<WorkoutSessionId, SessionRow>,
    exercise_sessions: HashMap<ExerciseSessionId, ExerciseSessionRow>,
    set_logs: HashMap<(ExerciseSessionId, u32), bool>,
}

/// In-memory implementation of the workout store port.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkoutStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryWorkoutStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a completed session directly (useful for history-driven tests).
    pub async fn seed_completed_session(
        &self,
        client_id: &ClientId,
        program_id: &ProgramId,
        day_id: &DayId,
        cycle: u32,
    ) -> WorkoutSessionId {
        let id = WorkoutSessionId::new();
        let now = Timestamp::now();
        let mut inner = self.inner.write().await;
        inner.sessions.insert(
            id,
            SessionRow {
                client_id: client_id.clone(),
                program_id: *program_id,
                day_id: *day_id,
                cycle,
                started_at: now,
                completed_at: Some(now),
                total_seconds: None,
            },
        );
        id
    }

    /// Number of session rows, completed or not.
    pub async fn session_count(&self) -> usize {
        self.inner.read().await.sessions.len()
    }

    /// Number of exercise-session rows.
    pub async fn exercise_session_count(&self) -> usize {
        self.inner.read().await.exercise_sessions.len()
    }

    /// Number of set-log rows with completed = true.
    pub async fn completed_set_log_count(&self) -> usize {
        self.inner
            .read()
            .await
            .set_logs
            .values()
            .filter(|completed| **completed)
            .count()
    }

    /// Returns true if the session row exists and is marked completed.
    pub async fn is_session_completed(&self, session_id: &WorkoutSessionId) -> bool {
        self.inner
            .read()
            .await
            .sessions
            .get(session_id)
            .map(|row| row.completed_at.is_some())
            .unwrap_or(false)
    }

    /// Returns the stored total seconds for a session, if completed.
    pub async fn session_total_seconds(&self, session_id: &WorkoutSessionId) -> Option<u64> {
        self.inner
            .read()
            .await
            .sessions
            .get(session_id)
            .and_then(|row| row.total_seconds)
    }
}

#[async_trait]
impl WorkoutStore for InMemoryWorkoutStore {
    async fn list_completed_sessions(
        &self,
        client_id: &ClientId,
        program_id: &ProgramId,
    ) -> Result<Vec<CompletedSession>, DomainError> {
        let inner = self.inner.read().await;
        let mut sessions: Vec<_> = inner
            .sessions
            .values()
            .filter(|row| &row.client_id == client_id && &row.program_id == program_id)
            .filter_map(|row| {
                row.completed_at.map(|completed_at| {
                    let mut session =
                        CompletedSession::new(row.day_id, Some(row.cycle), completed_at);
                    if let Some(total) = row.total_seconds {
                        session = session.with_total_seconds(total);
                    }
                    session
                })
            })
            .collect();
        sessions.sort_by_key(|s| s.completed_at);
        Ok(sessions)
    }

    async fn create_session(
        &self,
        client_id: &ClientId,
        program_id: &ProgramId,
        day_id: &DayId,
        cycle: u32,
    ) -> Result<WorkoutSessionId, DomainError> {
        let id = WorkoutSessionId::new();
        let mut inner = self.inner.write().await;
        inner.sessions.insert(
            id,
            SessionRow {
                client_id: client_id.clone(),
                program_id: *program_id,
                day_id: *day_id,
                cycle,
                started_at: Timestamp::now(),
                completed_at: None,
                total_seconds: None,
            },
        );
        Ok(id)
    }

    async fn complete_session(
        &self,
        session_id: &WorkoutSessionId,
        total_seconds: u64,
    ) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;
        let row = inner.sessions.get_mut(session_id).ok_or_else(|| {
            DomainError::new(ErrorCode::SessionNotFound, "Workout session not found")
                .with_detail("session_id", session_id.to_string())
        })?;
        row.completed_at = Some(Timestamp::now());
        row.total_seconds = Some(total_seconds);
        Ok(())
    }

    async fn create_exercise_session(
        &self,
        session_id: &WorkoutSessionId,
        exercise_id: &ExerciseId,
    ) -> Result<ExerciseSessionId, DomainError> {
        let mut inner = self.inner.write().await;
        if !inner.sessions.contains_key(session_id) {
            return Err(
                DomainError::new(ErrorCode::SessionNotFound, "Workout session not found")
                    .with_detail("session_id", session_id.to_string()),
            );
        }
        let id = ExerciseSessionId::new();
        inner.exercise_sessions.insert(
            id,
            ExerciseSessionRow {
                session_id: *session_id,
                exercise_id: *exercise_id,
            },
        );
        Ok(id)
    }

    async fn upsert_set_log(
        &self,
        exercise_session_id: &ExerciseSessionId,
        set_index: u32,
        completed: bool,
    ) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;
        if !inner.exercise_sessions.contains_key(exercise_session_id) {
            return Err(DomainError::new(
                ErrorCode::ExerciseSessionNotFound,
                "Exercise session not found",
            )
            .with_detail("exercise_session_id", exercise_session_id.to_string()));
        }
        inner.set_logs.insert((*exercise_session_id, set_index), completed);
        Ok(())
    }

    async fn list_set_logs(
        &self,
        client_id: &ClientId,
        program_id: &ProgramId,
        day_id: &DayId,
        cycle: u32,
    ) -> Result<Vec<SetLogEntry>, DomainError> {
        let inner = self.inner.read().await;

        // Most recent completed session for this day/cycle only.
        let latest = inner
            .sessions
            .iter()
            .filter(|(_, row)| {
                &row.client_id == client_id
                    && &row.program_id == program_id
                    && &row.day_id == day_id
                    && row.cycle == cycle
                    && row.completed_at.is_some()
            })
            .max_by_key(|(_, row)| row.completed_at);

        let Some((session_id, _)) = latest else {
            return Ok(Vec::new());
        };

        let mut logs = Vec::new();
        for (es_id, es) in &inner.exercise_sessions {
            if &es.session_id != session_id {
                continue;
            }
            for ((log_es, set_index), completed) in &inner.set_logs {
                if log_es == es_id && *completed {
                    logs.push(SetLogEntry::new(es.exercise_id, *set_index));
                }
            }
        }
        Ok(logs)
    }
}
