//! Read-side projections built from stored batches and fresh evaluations.
//!
//! Nothing here is persisted: every view is rebuilt from the stored batch and
//! the current time whenever it is requested.

pub mod stock_summary;
pub mod stock_view;

pub use stock_summary::StockSummary;
pub use stock_view::BatchView;
