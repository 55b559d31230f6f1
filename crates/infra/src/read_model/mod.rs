//! Batch record storage abstractions.

pub mod batch_store;

pub use batch_store::{BatchStore, InMemoryBatchStore, StoredBatch};
