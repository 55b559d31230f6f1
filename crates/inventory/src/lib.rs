//! Inventory domain module: stock batches and their freshness pricing.
//!
//! This crate contains business rules for inventory, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod batch;
pub mod evaluator;
pub mod policy;
pub mod status;

pub use batch::StockBatch;
pub use evaluator::{RuleKind, StockIntelligence, evaluate};
pub use policy::{ExpiryTier, PricingPolicy};
pub use status::{BatchStatus, Route};
