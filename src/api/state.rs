//! API server state

use std::sync::Arc;

use crate::store::DayStore;

/// State shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Day store
    pub store: Arc<DayStore>,
}

impl AppState {
    pub fn new(store: Arc<DayStore>) -> Self {
        Self { store }
    }

    /// State backed by a freshly seeded store
    pub fn seeded() -> Self {
        Self::new(Arc::new(DayStore::seeded()))
    }
}
