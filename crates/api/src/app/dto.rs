use axum::http::StatusCode;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use freshstock_inventory::StockBatch;

use crate::app::errors;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStockRequest {
    pub name: String,
    pub total_stock: i64,
    pub current_stock: i64,
    pub price: f64,
    pub arrival_date: String, // RFC3339 or YYYY-MM-DD
    pub expiry_date: String,  // RFC3339 or YYYY-MM-DD
}

impl CreateStockRequest {
    pub fn into_batch(self) -> Result<StockBatch, axum::response::Response> {
        let arrival_date = parse_date("arrivalDate", &self.arrival_date)?;
        let expiry_date = parse_date("expiryDate", &self.expiry_date)?;
        Ok(StockBatch {
            name: self.name,
            total_stock: self.total_stock,
            current_stock: self.current_stock,
            price: self.price,
            arrival_date,
            expiry_date,
        })
    }
}

// -------------------------
// Parsing helpers
// -------------------------

/// Accepts an RFC3339 timestamp, or a plain date taken as midnight UTC.
pub fn parse_date(field: &str, raw: &str) -> Result<DateTime<Utc>, axum::response::Response> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| {
            errors::json_error(
                StatusCode::BAD_REQUEST,
                "invalid_date",
                format!("{field} must be an RFC3339 timestamp or YYYY-MM-DD date"),
            )
        })
}
