use std::sync::Arc;

use shared_datastore::ReferenceStore;

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

/// Shared state for the estimate cell's routes.
pub struct EstimateState {
    pub reference: Arc<ReferenceStore>,
}
