//! Upload storage setup

use anyhow::{Context, Result};
use civicfix_core::Config;
use civicfix_storage::{LocalStorage, Storage};
use std::sync::Arc;

/// Create the uploads directory and the storage handle serving it.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    let storage = LocalStorage::new(&config.upload_dir, config.upload_public_prefix.clone())
        .await
        .with_context(|| {
            format!(
                "Failed to initialize upload storage at {}",
                config.upload_dir.display()
            )
        })?;

    tracing::info!(
        upload_dir = %config.upload_dir.display(),
        public_prefix = %config.upload_public_prefix,
        "Upload storage ready"
    );

    Ok(Arc::new(storage))
}
