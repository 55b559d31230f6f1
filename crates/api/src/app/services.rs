use std::sync::Arc;

use freshstock_infra::{
    Clock, StockService, SystemClock,
    read_model::{BatchStore, InMemoryBatchStore},
};
use freshstock_inventory::PricingPolicy;

/// Service shared by all handlers.
pub type AppServices = StockService<Arc<dyn BatchStore>>;

/// In-memory store + wall clock.
pub fn build_services(policy: PricingPolicy) -> AppServices {
    build_services_with_clock(policy, Arc::new(SystemClock))
}

pub fn build_services_with_clock(policy: PricingPolicy, clock: Arc<dyn Clock>) -> AppServices {
    let store: Arc<dyn BatchStore> = Arc::new(InMemoryBatchStore::new());
    StockService::new(store, clock, policy)
}
