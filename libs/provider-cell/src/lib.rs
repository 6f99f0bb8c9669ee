use std::sync::Arc;

use shared_datastore::ReferenceStore;

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

/// Shared state for the provider cell's routes.
pub struct ProviderState {
    pub reference: Arc<ReferenceStore>,
    pub match_limit: usize,
}
