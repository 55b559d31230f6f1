//! Creation and listing paths around the evaluator.
//!
//! ```text
//! create: validate -> now -> evaluate -> persist (with write-time copy) -> view
//! list:   load all -> now (read once) -> re-evaluate each -> filter -> views
//! ```
//!
//! Stored intelligence is never returned from the read paths.

use std::sync::Arc;

use serde::Deserialize;

use freshstock_core::{BatchId, DomainError, DomainResult};
use freshstock_inventory::{BatchStatus, PricingPolicy, Route, StockBatch, evaluate};

use crate::clock::Clock;
use crate::projections::{BatchView, StockSummary};
use crate::read_model::{BatchStore, StoredBatch};

/// Optional filters applied to recomputed views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct StockFilter {
    pub status: Option<BatchStatus>,
    pub route: Option<Route>,
}

impl StockFilter {
    pub fn matches(&self, view: &BatchView) -> bool {
        self.status.is_none_or(|s| s == view.intelligence.status)
            && self.route.is_none_or(|r| r == view.intelligence.route)
    }
}

#[derive(Debug)]
pub struct StockService<S> {
    store: S,
    clock: Arc<dyn Clock>,
    policy: PricingPolicy,
}

impl<S> StockService<S>
where
    S: BatchStore,
{
    pub fn new(store: S, clock: Arc<dyn Clock>, policy: PricingPolicy) -> Self {
        Self {
            store,
            clock,
            policy,
        }
    }

    /// Validate, evaluate once, and persist a new batch.
    pub fn create(&self, batch: StockBatch) -> DomainResult<BatchView> {
        let batch = batch.validate().inspect_err(|e| {
            tracing::debug!(error = %e, "stock batch rejected");
        })?;

        let now = self.clock.now();
        let intelligence_at_write = evaluate(&batch, now, &self.policy);
        let record = StoredBatch {
            id: BatchId::new(),
            created_at: now,
            batch,
            intelligence_at_write,
        };

        tracing::info!(
            batch_id = %record.id,
            name = %record.batch.name,
            status = %record.intelligence_at_write.status,
            route = %record.intelligence_at_write.route,
            "stock batch created"
        );

        self.store.insert(record.clone());
        Ok(BatchView::at_write(record))
    }

    /// All batches, freshly evaluated against a single reading of the clock.
    pub fn list(&self, filter: &StockFilter) -> Vec<BatchView> {
        let now = self.clock.now();
        self.store
            .list()
            .into_iter()
            .map(|record| BatchView::evaluate(record, now, &self.policy))
            .filter(|view| filter.matches(view))
            .collect()
    }

    pub fn get(&self, id: BatchId) -> DomainResult<BatchView> {
        let record = self.store.get(&id).ok_or_else(DomainError::not_found)?;
        Ok(BatchView::evaluate(record, self.clock.now(), &self.policy))
    }

    pub fn delete(&self, id: BatchId) -> DomainResult<()> {
        match self.store.remove(&id) {
            Some(_) => {
                tracing::info!(batch_id = %id, "stock batch deleted");
                Ok(())
            }
            None => Err(DomainError::not_found()),
        }
    }

    pub fn summary(&self) -> StockSummary {
        StockSummary::from_views(&self.list(&StockFilter::default()))
    }
}
