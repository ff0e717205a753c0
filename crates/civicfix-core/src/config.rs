//! Configuration module
//!
//! Environment-driven configuration for the API binary. Every setting has a
//! default suitable for local development, matching the service's original
//! deployment layout (database file and uploads directory co-located with the
//! process, frontend one level up).

use anyhow::Context;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MAX_BODY_BYTES: usize = 20 * 1024 * 1024;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_DB_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CORS_ORIGINS: &str =
    "http://127.0.0.1:5500,http://127.0.0.1:5501,http://localhost:3000";

/// Service configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Listen port (`PORT`)
    pub server_port: u16,
    /// SQLite database file (`DATABASE_PATH`)
    pub database_path: PathBuf,
    /// Directory where uploaded images are written (`UPLOAD_DIR`)
    pub upload_dir: PathBuf,
    /// Public URL prefix under which uploads are served
    pub upload_public_prefix: String,
    /// Directory holding the static frontend assets (`FRONTEND_DIR`)
    pub frontend_dir: PathBuf,
    /// Entry document served by the catch-all route (`FRONTEND_ENTRY`)
    pub frontend_entry: String,
    /// Allowed CORS origins (`CORS_ORIGINS`, comma separated)
    pub cors_origins: Vec<String>,
    /// Request body size limit in bytes (`MAX_BODY_BYTES`)
    pub max_body_bytes: usize,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Config {
            server_port: env_parse("PORT", DEFAULT_PORT)?,
            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "database.sqlite".to_string())
                .into(),
            upload_dir: env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| "uploads".to_string())
                .into(),
            upload_public_prefix: "/uploads".to_string(),
            frontend_dir: env::var("FRONTEND_DIR")
                .unwrap_or_else(|_| "..".to_string())
                .into(),
            frontend_entry: env::var("FRONTEND_ENTRY")
                .unwrap_or_else(|_| "civicfinal.html".to_string()),
            cors_origins: parse_origins(
                &env::var("CORS_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string()),
            ),
            max_body_bytes: env_parse("MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?,
            db_max_connections: env_parse("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?,
            db_timeout_seconds: env_parse("DB_TIMEOUT_SECONDS", DEFAULT_DB_TIMEOUT_SECS)?,
        })
    }

    /// Absolute or relative path of the frontend entry document
    pub fn frontend_entry_path(&self) -> PathBuf {
        self.frontend_dir.join(&self.frontend_entry)
    }
}

/// Parse an environment variable, falling back to `default` when unset.
/// An unparseable value is a configuration error, not a silent fallback.
fn env_parse<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("Invalid value for {}: {:?}", key, raw)),
        Err(_) => Ok(default),
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_trims_and_drops_empty() {
        let origins = parse_origins("http://a.example, http://b.example ,,");
        assert_eq!(origins, vec!["http://a.example", "http://b.example"]);
    }

    #[test]
    fn test_parse_origins_defaults() {
        let origins = parse_origins(DEFAULT_CORS_ORIGINS);
        assert_eq!(origins.len(), 3);
        assert!(origins.contains(&"http://localhost:3000".to_string()));
    }

    #[test]
    fn test_frontend_entry_path() {
        let config = Config {
            server_port: DEFAULT_PORT,
            database_path: "database.sqlite".into(),
            upload_dir: "uploads".into(),
            upload_public_prefix: "/uploads".to_string(),
            frontend_dir: "/srv/civicfix".into(),
            frontend_entry: "civicfinal.html".to_string(),
            cors_origins: vec![],
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            db_timeout_seconds: DEFAULT_DB_TIMEOUT_SECS,
        };
        assert_eq!(
            config.frontend_entry_path(),
            PathBuf::from("/srv/civicfix/civicfinal.html")
        );
    }
}
