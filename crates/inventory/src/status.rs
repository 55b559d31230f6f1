//! Classification labels produced by the evaluator.

use serde::{Deserialize, Serialize};

/// Freshness/pricing status of a batch.
///
/// Serialized with the human-readable labels dashboards display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BatchStatus {
    Normal,
    Discounted,
    #[serde(rename = "High Discount")]
    HighDiscount,
    #[serde(rename = "Near Expiry")]
    NearExpiry,
    #[serde(rename = "Slow Moving")]
    SlowMoving,
    Donate,
}

impl BatchStatus {
    pub const ALL: [BatchStatus; 6] = [
        BatchStatus::Normal,
        BatchStatus::Discounted,
        BatchStatus::HighDiscount,
        BatchStatus::NearExpiry,
        BatchStatus::SlowMoving,
        BatchStatus::Donate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BatchStatus::Normal => "Normal",
            BatchStatus::Discounted => "Discounted",
            BatchStatus::HighDiscount => "High Discount",
            BatchStatus::NearExpiry => "Near Expiry",
            BatchStatus::SlowMoving => "Slow Moving",
            BatchStatus::Donate => "Donate",
        }
    }

    /// Statuses an expiry tier may assign.
    pub fn is_expiry_tier_status(&self) -> bool {
        matches!(
            self,
            BatchStatus::Discounted | BatchStatus::HighDiscount | BatchStatus::NearExpiry
        )
    }
}

impl core::fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Destination recommended for a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Route {
    Warehouse,
    Marketplace,
    #[serde(rename = "NGO")]
    Ngo,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Warehouse, Route::Marketplace, Route::Ngo];

    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Warehouse => "Warehouse",
            Route::Marketplace => "Marketplace",
            Route::Ngo => "NGO",
        }
    }
}

impl core::fmt::Display for Route {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_serialize_as_displayed() {
        for status in BatchStatus::ALL {
            let json = serde_json::to_value(status).unwrap();
            assert_eq!(json, serde_json::Value::String(status.to_string()));
        }
        for route in Route::ALL {
            let json = serde_json::to_value(route).unwrap();
            assert_eq!(json, serde_json::Value::String(route.to_string()));
        }
    }

    #[test]
    fn labels_parse_from_display_form() {
        let status: BatchStatus = serde_json::from_str("\"Near Expiry\"").unwrap();
        assert_eq!(status, BatchStatus::NearExpiry);
        let route: Route = serde_json::from_str("\"NGO\"").unwrap();
        assert_eq!(route, Route::Ngo);
    }
}
