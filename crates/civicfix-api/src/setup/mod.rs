//! Application setup and initialization
//!
//! Startup follows a strict order: open the database and create the schema,
//! ensure the uploads directory, build the router - only then does the
//! listener bind. No request is served against an unready store.

pub mod database;
pub mod routes;
pub mod server;
pub mod storage;

use crate::state::AppState;
use anyhow::Result;
use civicfix_core::Config;
use civicfix_db::ComplaintRepository;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Setup database
    let pool = database::setup_database(&config).await?;

    let complaints = ComplaintRepository::new(pool);
    complaints.ensure_schema().await?;

    // Setup upload storage
    let storage = storage::setup_storage(&config).await?;

    let state = Arc::new(AppState::new(config.clone(), complaints, storage));

    // Setup routes
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
