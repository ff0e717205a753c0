//! Shared setup for API integration tests: an isolated app with an in-memory
//! database, a temporary uploads directory, and a stub frontend entry.

use axum_test::TestServer;
use civicfix_api::setup::routes::setup_routes;
use civicfix_api::state::AppState;
use civicfix_core::Config;
use civicfix_db::ComplaintRepository;
use civicfix_storage::LocalStorage;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use tempfile::TempDir;

pub const FRONTEND_ENTRY_MARKER: &str = "<title>CivicFix</title>";

/// Test application state
pub struct TestApp {
    pub server: TestServer,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

/// Setup a test application with an isolated database and uploads directory
pub async fn setup_test_app() -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");

    // A single connection keeps every query on the same in-memory database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    let complaints = ComplaintRepository::new(pool);
    complaints
        .ensure_schema()
        .await
        .expect("Failed to create schema");

    let upload_dir = temp_dir.path().join("uploads");
    let storage = Arc::new(
        LocalStorage::new(&upload_dir, "/uploads")
            .await
            .expect("Failed to create upload storage"),
    );

    // Stub frontend served by the catch-all route
    let frontend_dir = temp_dir.path().join("frontend");
    std::fs::create_dir_all(&frontend_dir).expect("Failed to create frontend dir");
    std::fs::write(
        frontend_dir.join("civicfinal.html"),
        format!("<html><head>{}</head></html>", FRONTEND_ENTRY_MARKER),
    )
    .expect("Failed to write frontend entry");

    let config = Config {
        server_port: 0,
        database_path: temp_dir.path().join("database.sqlite"),
        upload_dir,
        upload_public_prefix: "/uploads".to_string(),
        frontend_dir,
        frontend_entry: "civicfinal.html".to_string(),
        cors_origins: vec!["http://localhost:3000".to_string()],
        max_body_bytes: 20 * 1024 * 1024,
        db_max_connections: 1,
        db_timeout_seconds: 5,
    };

    let state = Arc::new(AppState::new(config.clone(), complaints, storage));
    let router = setup_routes(&config, state).expect("Failed to build router");
    let server = TestServer::new(router).expect("Failed to start test server");

    TestApp {
        server,
        _temp_dir: temp_dir,
    }
}

/// A tiny valid 1x1 PNG, good enough for upload round-trips
pub fn test_png() -> Vec<u8> {
    vec![
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // PNG signature
        0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52, // IHDR chunk
        0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, // 1x1 dimensions
        0x08, 0x02, 0x00, 0x00, 0x00, 0x90, 0x77, 0x53, 0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49,
        0x44, 0x41, 0x54, // IDAT chunk
        0x08, 0xD7, 0x63, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x18, 0xDD,
        0x8D, 0x89, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60,
        0x82, // IEND chunk
    ]
}
