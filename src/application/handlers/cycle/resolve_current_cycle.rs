//! ResolveCurrentCycleHandler - Query for the client's current cycle.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{ClientId, DomainError, ProgramId};
use crate::domain::program::DaySummary;
use crate::domain::workout::{resolve_cycle, CycleResolution};
use crate::ports::WorkoutStore;

/// Handler resolving which cycle of a program a client is currently on.
///
/// Fetches the completed-session history and delegates to the pure
/// [`resolve_cycle`] function; read-only, safe to call repeatedly. The
/// `days` argument must reflect the authoring-side current state of the
/// program; a stale day list produces an incorrect-but-safe result.
pub struct ResolveCurrentCycleHandler {
    store: Arc<dyn WorkoutStore>,
}

impl ResolveCurrentCycleHandler {
    pub fn new(store: Arc<dyn WorkoutStore>) -> Self {
        Self { store }
    }

    /// Resolves the current cycle for (client, program).
    ///
    /// # Errors
    ///
    /// Propagates store read failures; the caller decides whether to show
    /// cached data or an error state.
    pub async fn handle(
        &self,
        client_id: &ClientId,
        program_id: &ProgramId,
        days: &[DaySummary],
    ) -> Result<CycleResolution, DomainError> {
        let sessions = self
            .store
            .list_completed_sessions(client_id, program_id)
            .await?;

        let resolution = resolve_cycle(days, &sessions);
        debug!(
            client_id = %client_id,
            program_id = %program_id,
            cycle = resolution.cycle,
            sessions = sessions.len(),
            "resolved current cycle"
        );
        Ok(resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DayId, ErrorCode, Timestamp};
    use crate::domain::workout::CompletedSession;
    use async_trait::async_trait;
    use uuid::Uuid;

    struct FixedHistoryStore {
        sessions: Vec<CompletedSession>,
        fail_reads: bool,
    }

    impl FixedHistoryStore {
        fn with_sessions(sessions: Vec<CompletedSession>) -> Self {
            Self {
                sessions,
                fail_reads: false,
            }
        }

        fn failing() -> Self {
            Self {
                sessions: Vec::new(),
                fail_reads: true,
            }
        }
    }

    #[async_trait]
    impl WorkoutStore for FixedHistoryStore {
        async fn list_completed_sessions(
            &self,
            _client_id: &ClientId,
            _program_id: &ProgramId,
        ) -> Result<Vec<CompletedSession>, DomainError> {
            if self.fail_reads {
                return Err(DomainError::store("Simulated read failure"));
            }
            Ok(self.sessions.clone())
        }

        async fn create_session(
            &self,
            _client_id: &ClientId,
            _program_id: &ProgramId,
            _day_id: &DayId,
            _cycle: u32,
        ) -> Result<crate::domain::foundation::WorkoutSessionId, DomainError> {
            unimplemented!("read-only test store")
        }

        async fn complete_session(
            &self,
            _session_id: &crate::domain::foundation::WorkoutSessionId,
            _total_seconds: u64,
        ) -> Result<(), DomainError> {
            unimplemented!("read-only test store")
        }

        async fn create_exercise_session(
            &self,
            _session_id: &crate::domain::foundation::WorkoutSessionId,
            _exercise_id: &crate::domain::foundation::ExerciseId,
        ) -> Result<crate::domain::foundation::ExerciseSessionId, DomainError> {
            unimplemented!("read-only test store")
        }

        async fn upsert_set_log(
            &self,
            _exercise_session_id: &crate::domain::foundation::ExerciseSessionId,
            _set_index: u32,
            _completed: bool,
        ) -> Result<(), DomainError> {
            unimplemented!("read-only test store")
        }

        async fn list_set_logs(
            &self,
            _client_id: &ClientId,
            _program_id: &ProgramId,
            _day_id: &DayId,
            _cycle: u32,
        ) -> Result<Vec<crate::domain::workout::SetLogEntry>, DomainError> {
            Ok(Vec::new())
        }
    }

    fn client() -> ClientId {
        ClientId::new("client-1").unwrap()
    }

    fn day(n: u128) -> DayId {
        DayId::from_uuid(Uuid::from_u128(n))
    }

    fn two_training_days() -> Vec<DaySummary> {
        vec![DaySummary::new(day(1), false), DaySummary::new(day(2), false)]
    }

    #[tokio::test]
    async fn empty_history_resolves_to_cycle_zero() {
        let store = Arc::new(FixedHistoryStore::with_sessions(Vec::new()));
        let handler = ResolveCurrentCycleHandler::new(store);

        let resolution = handler
            .handle(&client(), &ProgramId::new(), &two_training_days())
            .await
            .unwrap();
        assert_eq!(resolution.cycle, 0);
    }

    #[tokio::test]
    async fn completed_history_advances_the_cycle() {
        let sessions = vec![
            CompletedSession::new(day(1), Some(0), Timestamp::now()),
            CompletedSession::new(day(2), Some(0), Timestamp::now()),
        ];
        let store = Arc::new(FixedHistoryStore::with_sessions(sessions));
        let handler = ResolveCurrentCycleHandler::new(store);

        let resolution = handler
            .handle(&client(), &ProgramId::new(), &two_training_days())
            .await
            .unwrap();
        assert_eq!(resolution.cycle, 1);
        assert!(resolution.previous_cycle_complete);
    }

    #[tokio::test]
    async fn legacy_sessions_count_as_cycle_zero() {
        let sessions = vec![CompletedSession::new(day(1), None, Timestamp::now())];
        let store = Arc::new(FixedHistoryStore::with_sessions(sessions));
        let handler = ResolveCurrentCycleHandler::new(store);

        let resolution = handler
            .handle(&client(), &ProgramId::new(), &two_training_days())
            .await
            .unwrap();
        assert_eq!(resolution.cycle, 0);
    }

    #[tokio::test]
    async fn read_failure_propagates_to_caller() {
        let store = Arc::new(FixedHistoryStore::failing());
        let handler = ResolveCurrentCycleHandler::new(store);

        let result = handler
            .handle(&client(), &ProgramId::new(), &two_training_days())
            .await;
        assert!(matches!(
            result,
            Err(DomainError {
                code: ErrorCode::StoreError,
                ..
            })
        ));
    }
}
