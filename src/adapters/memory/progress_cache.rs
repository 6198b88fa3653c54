//! In-memory progress cache adapter.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{ClientId, DomainError, ProgramId};
use crate::domain::workout::ProgramProgress;
use crate::ports::ProgressCache;

/// In-memory cache of the last computed progress per (client, program).
#[derive(Debug, Clone, Default)]
pub struct InMemoryProgressCache {
    entries: Arc<RwLock<HashMap<(ClientId, ProgramId), ProgramProgress>>>,
}

impl InMemoryProgressCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached snapshots.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns true if no snapshot is cached.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl ProgressCache for InMemoryProgressCache {
    async fn put(
        &self,
        client_id: &ClientId,
        program_id: &ProgramId,
        progress: &ProgramProgress,
    ) -> Result<(), DomainError> {
        let mut entries = self.entries.write().await;
        entries.insert((client_id.clone(), *program_id), progress.clone());
        Ok(())
    }

    async fn get(
        &self,
        client_id: &ClientId,
        program_id: &ProgramId,
    ) -> Result<Option<ProgramProgress>, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries.get(&(client_id.clone(), *program_id)).cloned())
    }
}
