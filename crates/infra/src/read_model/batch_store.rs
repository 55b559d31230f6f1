use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use freshstock_core::{BatchId, Entity};
use freshstock_inventory::{StockBatch, StockIntelligence};

/// Persisted batch record.
///
/// `intelligence_at_write` is the evaluation taken on the creation path. It
/// goes stale as time passes and is kept for audit only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredBatch {
    pub id: BatchId,
    pub created_at: DateTime<Utc>,
    pub batch: StockBatch,
    pub intelligence_at_write: StockIntelligence,
}

impl Entity for StoredBatch {
    type Id = BatchId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Storage for batch records.
pub trait BatchStore: Send + Sync {
    fn get(&self, id: &BatchId) -> Option<StoredBatch>;
    /// Insert, replacing any record with the same id.
    fn insert(&self, record: StoredBatch);
    /// All records in insertion order.
    fn list(&self) -> Vec<StoredBatch>;
    fn remove(&self, id: &BatchId) -> Option<StoredBatch>;
}

impl<S> BatchStore for Arc<S>
where
    S: BatchStore + ?Sized,
{
    fn get(&self, id: &BatchId) -> Option<StoredBatch> {
        (**self).get(id)
    }

    fn insert(&self, record: StoredBatch) {
        (**self).insert(record)
    }

    fn list(&self) -> Vec<StoredBatch> {
        (**self).list()
    }

    fn remove(&self, id: &BatchId) -> Option<StoredBatch> {
        (**self).remove(id)
    }
}

/// In-memory store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryBatchStore {
    inner: RwLock<Vec<StoredBatch>>,
}

impl InMemoryBatchStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BatchStore for InMemoryBatchStore {
    fn get(&self, id: &BatchId) -> Option<StoredBatch> {
        let records = self.inner.read().ok()?;
        records.iter().find(|r| r.id() == id).cloned()
    }

    fn insert(&self, record: StoredBatch) {
        let Ok(mut records) = self.inner.write() else {
            tracing::warn!(batch_id = %record.id, "batch store lock poisoned; record dropped");
            return;
        };
        match records.iter_mut().find(|r| r.id() == record.id()) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }
    }

    fn list(&self) -> Vec<StoredBatch> {
        match self.inner.read() {
            Ok(records) => records.clone(),
            Err(_) => {
                tracing::warn!("batch store lock poisoned; listing empty");
                vec![]
            }
        }
    }

    fn remove(&self, id: &BatchId) -> Option<StoredBatch> {
        let mut records = self.inner.write().ok()?;
        let pos = records.iter().position(|r| r.id() == id)?;
        Some(records.remove(pos))
    }
}
