use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use freshstock_inventory::{BatchStatus, Route};

use super::stock_view::BatchView;

/// Dashboard totals over a set of evaluated batches.
///
/// Every status and route appears in the breakdowns, with zero when unused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSummary {
    pub total_batches: usize,
    pub total_current_stock: i64,
    pub total_market_value: i64,
    pub by_status: BTreeMap<BatchStatus, usize>,
    pub by_route: BTreeMap<Route, usize>,
}

impl StockSummary {
    pub fn from_views<'a>(views: impl IntoIterator<Item = &'a BatchView>) -> Self {
        let mut summary = Self {
            total_batches: 0,
            total_current_stock: 0,
            total_market_value: 0,
            by_status: BatchStatus::ALL.into_iter().map(|s| (s, 0)).collect(),
            by_route: Route::ALL.into_iter().map(|r| (r, 0)).collect(),
        };

        for view in views {
            summary.total_batches += 1;
            summary.total_current_stock = summary
                .total_current_stock
                .saturating_add(view.batch.current_stock);
            summary.total_market_value = summary
                .total_market_value
                .saturating_add(view.intelligence.market_value);
            *summary.by_status.entry(view.intelligence.status).or_insert(0) += 1;
            *summary.by_route.entry(view.intelligence.route).or_insert(0) += 1;
        }

        summary
    }
}
