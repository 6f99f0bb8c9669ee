use std::sync::Arc;

use shared_datastore::ReferenceStore;

use crate::services::session::SessionStore;

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

/// Shared state for the intake cell's routes.
pub struct IntakeState {
    pub reference: Arc<ReferenceStore>,
    pub sessions: SessionStore,
}
