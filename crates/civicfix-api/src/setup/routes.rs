//! Route configuration and setup

use crate::handlers;
use crate::state::AppState;
use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post, put},
    Router,
};
use civicfix_core::Config;
use http::header;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>> {
    let cors = setup_cors(config)?;

    let api = Router::new()
        .route("/", get(handlers::health::liveness))
        .route(
            "/api/complaints",
            post(handlers::complaints::submit_complaint).get(handlers::complaints::list_complaints),
        )
        .route(
            "/api/complaints/{id}",
            put(handlers::complaints::update_status),
        )
        .with_state(state);

    // Stored images by public path; the frontend is an external static-asset
    // collaborator served by the same process, entry document as catch-all.
    let uploads = ServeDir::new(&config.upload_dir);
    let frontend =
        ServeDir::new(&config.frontend_dir).fallback(ServeFile::new(config.frontend_entry_path()));

    let app = api
        .nest_service("/uploads", uploads)
        .fallback_service(frontend)
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

fn setup_cors(config: &Config) -> Result<CorsLayer> {
    let origins: Result<Vec<HeaderValue>, _> = config
        .cors_origins
        .iter()
        .map(|origin| origin.parse())
        .collect();
    let origins = origins.map_err(|e| anyhow::anyhow!("Invalid CORS origin: {}", e))?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}
