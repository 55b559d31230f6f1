use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use freshstock_core::{DomainError, DomainResult};

/// One inventory entry of a single product.
///
/// This is the raw record: fields are public and the evaluator accepts any
/// values. Use [`StockBatch::validate`] on the creation path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockBatch {
    pub name: String,
    /// Originally received quantity.
    pub total_stock: i64,
    /// Remaining unsold quantity.
    pub current_stock: i64,
    /// Original unit price.
    pub price: f64,
    pub arrival_date: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
}

impl StockBatch {
    /// Check the creation rules, returning the batch with its name trimmed.
    ///
    /// Rules are checked in a fixed order and the first violation is reported.
    pub fn validate(self) -> DomainResult<StockBatch> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DomainError::invalid_input("name cannot be empty"));
        }
        if self.total_stock <= 0 {
            return Err(DomainError::invalid_input("totalStock must be at least 1"));
        }
        if self.current_stock < 0 {
            return Err(DomainError::invalid_input("currentStock cannot be negative"));
        }
        if self.current_stock > self.total_stock {
            return Err(DomainError::invalid_input(format!(
                "currentStock ({}) cannot exceed totalStock ({})",
                self.current_stock, self.total_stock
            )));
        }
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(DomainError::invalid_input(
                "price must be a positive number",
            ));
        }
        if self.expiry_date <= self.arrival_date {
            return Err(DomainError::date_order(self.arrival_date, self.expiry_date));
        }

        Ok(StockBatch {
            name: name.to_string(),
            ..self
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn valid_batch() -> StockBatch {
        StockBatch {
            name: "Tomatoes".to_string(),
            total_stock: 100,
            current_stock: 40,
            price: 120.0,
            arrival_date: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
            expiry_date: Utc.with_ymd_and_hms(2024, 5, 20, 0, 0, 0).unwrap(),
        }
    }

    fn expect_invalid_input(batch: StockBatch) {
        match batch.validate() {
            Err(DomainError::InvalidInput(_)) => {}
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn accepts_valid_batch_and_trims_name() {
        let mut batch = valid_batch();
        batch.name = "  Tomatoes \n".to_string();

        let validated = batch.validate().unwrap();
        assert_eq!(validated.name, "Tomatoes");
        assert_eq!(validated.total_stock, 100);
    }

    #[test]
    fn rejects_blank_name() {
        let mut batch = valid_batch();
        batch.name = "   ".to_string();
        expect_invalid_input(batch);
    }

    #[test]
    fn rejects_non_positive_total_stock() {
        let mut batch = valid_batch();
        batch.total_stock = 0;
        batch.current_stock = 0;
        expect_invalid_input(batch);
    }

    #[test]
    fn rejects_negative_current_stock() {
        let mut batch = valid_batch();
        batch.current_stock = -1;
        expect_invalid_input(batch);
    }

    #[test]
    fn rejects_current_stock_above_total() {
        let mut batch = valid_batch();
        batch.current_stock = 101;
        expect_invalid_input(batch);
    }

    #[test]
    fn accepts_sold_out_and_untouched_batches() {
        let mut batch = valid_batch();
        batch.current_stock = 0;
        assert!(batch.clone().validate().is_ok());
        batch.current_stock = batch.total_stock;
        assert!(batch.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_or_nan_price() {
        for price in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let mut batch = valid_batch();
            batch.price = price;
            expect_invalid_input(batch);
        }
    }

    #[test]
    fn rejects_expiry_not_after_arrival_with_date_order_error() {
        let mut batch = valid_batch();
        batch.expiry_date = batch.arrival_date;
        let err = batch.clone().validate().unwrap_err();
        assert_eq!(
            err,
            DomainError::date_order(batch.arrival_date, batch.expiry_date)
        );

        batch.expiry_date = batch.arrival_date - chrono::Duration::days(1);
        assert!(matches!(
            batch.validate(),
            Err(DomainError::DateOrder { .. })
        ));
    }

    #[test]
    fn field_errors_win_over_date_order() {
        let mut batch = valid_batch();
        batch.price = 0.0;
        batch.expiry_date = batch.arrival_date;
        expect_invalid_input(batch);
    }

    #[test]
    fn deserializes_camel_case_fields() {
        let json = serde_json::json!({
            "name": "Milk",
            "totalStock": 10,
            "currentStock": 9,
            "price": 50.0,
            "arrivalDate": "2024-05-01T00:00:00Z",
            "expiryDate": "2024-05-31T00:00:00Z",
        });
        let batch: StockBatch = serde_json::from_value(json).unwrap();
        assert_eq!(batch.current_stock, 9);
        assert_eq!(batch.expiry_date, Utc.with_ymd_and_hms(2024, 5, 31, 0, 0, 0).unwrap());
    }
}
