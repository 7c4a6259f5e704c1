//! Server state
//!
//! The only shared state is the catalog, which is a process-wide constant;
//! handlers never mutate anything, so no locking is involved.

use pf_catalog::PricingCatalog;

#[derive(Debug, Clone, Copy)]
pub struct AppState {
    pub catalog: &'static PricingCatalog,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            catalog: PricingCatalog::global(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
