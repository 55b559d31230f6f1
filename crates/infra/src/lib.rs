//! Infrastructure layer: clock, storage, and the stock service that ties the
//! evaluator to them.

pub mod clock;
pub mod projections;
pub mod read_model;
pub mod stock_service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use stock_service::{StockFilter, StockService};
