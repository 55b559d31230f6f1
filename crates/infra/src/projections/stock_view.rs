use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use freshstock_core::BatchId;
use freshstock_inventory::{PricingPolicy, StockBatch, StockIntelligence, evaluate};

use crate::read_model::StoredBatch;

/// A batch merged with its intelligence, as returned to dashboards.
///
/// Serializes as one flat camelCase object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchView {
    pub id: BatchId,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub batch: StockBatch,
    #[serde(flatten)]
    pub intelligence: StockIntelligence,
}

impl BatchView {
    /// Re-evaluate a stored record as of `now`; the stored intelligence is ignored.
    pub fn evaluate(record: StoredBatch, now: DateTime<Utc>, policy: &PricingPolicy) -> Self {
        let intelligence = evaluate(&record.batch, now, policy);
        Self {
            id: record.id,
            created_at: record.created_at,
            batch: record.batch,
            intelligence,
        }
    }

    /// View carrying the write-time evaluation (creation path only).
    pub fn at_write(record: StoredBatch) -> Self {
        Self {
            id: record.id,
            created_at: record.created_at,
            batch: record.batch,
            intelligence: record.intelligence_at_write,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use freshstock_inventory::{BatchStatus, Route};

    #[test]
    fn flattens_batch_and_intelligence() {
        let now = Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap();
        let batch = StockBatch {
            name: "Yoghurt".to_string(),
            total_stock: 10,
            current_stock: 9,
            price: 50.0,
            arrival_date: now - Duration::days(8),
            expiry_date: now + Duration::days(30),
        };
        let policy = PricingPolicy::default();
        let record = StoredBatch {
            id: BatchId::new(),
            created_at: now,
            intelligence_at_write: evaluate(&batch, now, &policy),
            batch,
        };

        let json = serde_json::to_value(BatchView::at_write(record.clone())).unwrap();
        assert_eq!(json["id"], record.id.to_string());
        assert_eq!(json["name"], "Yoghurt");
        assert_eq!(json["currentStock"], 9);
        assert_eq!(json["finalPrice"], 45);
        assert_eq!(json["status"], "Slow Moving");
        assert!(json.get("batch").is_none());
        assert!(json.get("intelligence").is_none());
    }

    #[test]
    fn re_evaluation_ignores_stale_stored_intelligence() {
        let created = Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap();
        let batch = StockBatch {
            name: "Bread".to_string(),
            total_stock: 10,
            current_stock: 2,
            price: 40.0,
            arrival_date: created,
            expiry_date: created + Duration::days(5),
        };
        let policy = PricingPolicy::default();
        let record = StoredBatch {
            id: BatchId::new(),
            created_at: created,
            intelligence_at_write: evaluate(&batch, created, &policy),
            batch,
        };
        assert_eq!(record.intelligence_at_write.status, BatchStatus::Discounted);

        let later = BatchView::evaluate(record, created + Duration::days(6), &policy);
        assert_eq!(later.intelligence.days_to_expiry, -1);
        assert_eq!(later.intelligence.status, BatchStatus::Donate);
        assert_eq!(later.intelligence.route, Route::Ngo);
        assert_eq!(later.created_at, created);
    }
}
