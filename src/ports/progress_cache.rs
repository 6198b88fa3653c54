//! Progress cache port.
//!
//! The finish reconciler recomputes progress after every completed workout
//! and caches it here so dashboard screens can fall back to the last known
//! snapshot when a live read fails.

use async_trait::async_trait;

use crate::domain::foundation::{ClientId, DomainError, ProgramId};
use crate::domain::workout::ProgramProgress;

/// Cache of the last computed progress per (client, program) pair.
#[async_trait]
pub trait ProgressCache: Send + Sync {
    /// Stores the latest progress snapshot, replacing any previous one.
    async fn put(
        &self,
        client_id: &ClientId,
        program_id: &ProgramId,
        progress: &ProgramProgress,
    ) -> Result<(), DomainError>;

    /// Returns the cached snapshot, or `None` if none was stored yet.
    async fn get(
        &self,
        client_id: &ClientId,
        program_id: &ProgramId,
    ) -> Result<Option<ProgramProgress>, DomainError>;
}
