//! ComputeProgressHandler - Query for per-program completion progress.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{ClientId, DomainError, ProgramId};
use crate::domain::program::DaySummary;
use crate::domain::workout::ProgramProgress;
use crate::ports::WorkoutStore;

/// Handler computing dashboard progress for one (client, program) pair.
///
/// One history fetch feeds both cycle resolution and day counting; see
/// [`ProgramProgress::from_history`] for the reference-cycle display rule.
pub struct ComputeProgressHandler {
    store: Arc<dyn WorkoutStore>,
}

impl ComputeProgressHandler {
    pub fn new(store: Arc<dyn WorkoutStore>) -> Self {
        Self { store }
    }

    /// Computes current progress.
    ///
    /// # Errors
    ///
    /// Propagates store read failures without defaulting; the caller decides
    /// whether to fall back to a cached snapshot.
    pub async fn handle(
        &self,
        client_id: &ClientId,
        program_id: &ProgramId,
        days: &[DaySummary],
    ) -> Result<ProgramProgress, DomainError> {
        let sessions = self
            .store
            .list_completed_sessions(client_id, program_id)
            .await?;

        let progress = ProgramProgress::from_history(days, &sessions);
        debug!(
            client_id = %client_id,
            program_id = %program_id,
            completed = progress.completed_days(),
            total = progress.total_days(),
            cycle = progress.cycle(),
            "computed program progress"
        );
        Ok(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryWorkoutStore;
    use crate::domain::foundation::{DayId, ErrorCode};
    use uuid::Uuid;

    fn client() -> ClientId {
        ClientId::new("client-1").unwrap()
    }

    fn day(n: u128) -> DayId {
        DayId::from_uuid(Uuid::from_u128(n))
    }

    fn three_training_days() -> Vec<DaySummary> {
        vec![
            DaySummary::new(day(1), false),
            DaySummary::new(day(2), false),
            DaySummary::new(day(3), false),
        ]
    }

    #[tokio::test]
    async fn two_of_three_days_complete_reports_partial_progress() {
        let store = Arc::new(InMemoryWorkoutStore::new());
        let program_id = ProgramId::new();
        store
            .seed_completed_session(&client(), &program_id, &day(1), 0)
            .await;
        store
            .seed_completed_session(&client(), &program_id, &day(2), 0)
            .await;

        let handler = ComputeProgressHandler::new(store);
        let progress = handler
            .handle(&client(), &program_id, &three_training_days())
            .await
            .unwrap();

        assert_eq!(progress.completed_days(), 2);
        assert_eq!(progress.total_days(), 3);
        assert!(!progress.all_complete());
        assert_eq!(progress.next_day_index(), 2);
    }

    #[tokio::test]
    async fn finished_cycle_is_still_displayed_until_new_activity() {
        let store = Arc::new(InMemoryWorkoutStore::new());
        let program_id = ProgramId::new();
        for n in 1..=3 {
            store
                .seed_completed_session(&client(), &program_id, &day(n), 0)
                .await;
        }

        let handler = ComputeProgressHandler::new(store);
        let progress = handler
            .handle(&client(), &program_id, &three_training_days())
            .await
            .unwrap();

        assert_eq!(progress.cycle(), 0);
        assert_eq!(progress.completed_days(), 3);
        assert!(progress.all_complete());
    }

    #[tokio::test]
    async fn read_failure_propagates_to_caller() {
        struct FailingStore;

        #[async_trait::async_trait]
        impl WorkoutStore for FailingStore {
            async fn list_completed_sessions(
                &self,
                _client_id: &ClientId,
                _program_id: &ProgramId,
            ) -> Result<Vec<crate::domain::workout::CompletedSession>, DomainError> {
                Err(DomainError::store("Simulated read failure"))
            }

            async fn create_session(
                &self,
                _client_id: &ClientId,
                _program_id: &ProgramId,
                _day_id: &DayId,
                _cycle: u32,
            ) -> Result<crate::domain::foundation::WorkoutSessionId, DomainError> {
                unimplemented!()
            }

            async fn complete_session(
                &self,
                _session_id: &crate::domain::foundation::WorkoutSessionId,
                _total_seconds: u64,
            ) -> Result<(), DomainError> {
                unimplemented!()
            }

            async fn create_exercise_session(
                &self,
                _session_id: &crate::domain::foundation::WorkoutSessionId,
                _exercise_id: &crate::domain::foundation::ExerciseId,
            ) -> Result<crate::domain::foundation::ExerciseSessionId, DomainError> {
                unimplemented!()
            }

            async fn upsert_set_log(
                &self,
                _exercise_session_id: &crate::domain::foundation::ExerciseSessionId,
                _set_index: u32,
                _completed: bool,
            ) -> Result<(), DomainError> {
                unimplemented!()
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

        let handler = ComputeProgressHandler::new(Arc::new(FailingStore));
        let result = handler
            .handle(&client(), &ProgramId::new(), &three_training_days())
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
