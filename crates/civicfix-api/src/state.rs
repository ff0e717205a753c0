use civicfix_core::Config;
use civicfix_db::ComplaintRepository;
use civicfix_storage::Storage;
use std::sync::Arc;

/// Shared application state, injected into every handler.
///
/// Constructed once during startup, after the database pool is open and the
/// uploads directory exists; the listener does not start before this is ready.
pub struct AppState {
    pub config: Config,
    pub complaints: ComplaintRepository,
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(config: Config, complaints: ComplaintRepository, storage: Arc<dyn Storage>) -> Self {
        Self {
            config,
            complaints,
            storage,
        }
    }
}
