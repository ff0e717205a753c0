use civicfix_core::{AppError, Complaint, NewComplaint};
use sqlx::SqlitePool;

/// Complaint repository
///
/// Owns the id sequence (SQLite AUTOINCREMENT, never reused) and the default
/// status. `createdAt` is assigned by the database at insert time and never
/// touched afterwards.
#[derive(Clone)]
pub struct ComplaintRepository {
    pool: SqlitePool,
}

impl ComplaintRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the complaints table if it does not exist. Safe to run on every
    /// startup.
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS complaints (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT,
                email TEXT,
                phone TEXT,
                category TEXT,
                description TEXT,
                location TEXT,
                status TEXT DEFAULT 'Pending',
                imagePath TEXT,
                createdAt TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to create complaints table");
            AppError::Database(e)
        })?;

        tracing::info!("Complaints schema ready");
        Ok(())
    }

    /// Insert a new complaint and return its generated id.
    ///
    /// `image_paths` is the comma-joined public paths of the uploaded images,
    /// or `None` when the complaint carries no attachments. Status and
    /// createdAt are assigned here, not by the caller.
    #[tracing::instrument(skip(self, complaint), fields(db.table = "complaints", db.operation = "insert"))]
    pub async fn insert(
        &self,
        complaint: &NewComplaint,
        image_paths: Option<String>,
    ) -> Result<i64, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO complaints (name, email, phone, category, description, location, imagePath, createdAt)
            VALUES (?, ?, ?, ?, ?, ?, ?, datetime('now'))
            "#,
        )
        .bind(&complaint.name)
        .bind(&complaint.email)
        .bind(&complaint.phone)
        .bind(&complaint.category)
        .bind(&complaint.description)
        .bind(&complaint.location)
        .bind(&image_paths)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to insert complaint");
            AppError::Database(e)
        })?;

        let id = result.last_insert_rowid();

        tracing::info!(
            complaint_id = id,
            has_images = image_paths.is_some(),
            "Complaint saved"
        );

        Ok(id)
    }

    /// Every complaint, newest first. Fresh query each call; no pagination.
    #[tracing::instrument(skip(self), fields(db.table = "complaints", db.operation = "select"))]
    pub async fn list_all(&self) -> Result<Vec<Complaint>, AppError> {
        let complaints = sqlx::query_as::<_, Complaint>(
            "SELECT * FROM complaints ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to list complaints");
            AppError::Database(e)
        })?;

        Ok(complaints)
    }

    /// Set the status of the complaint with the given id.
    ///
    /// No existence check: updating an id that matches no row succeeds without
    /// touching anything. This laxness is part of the documented contract.
    #[tracing::instrument(skip(self), fields(db.table = "complaints", db.operation = "update"))]
    pub async fn update_status(&self, id: i64, status: &str) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE complaints SET status = ? WHERE id = ?")
            .bind(status)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, complaint_id = id, "Failed to update complaint status");
                AppError::Database(e)
            })?;

        tracing::info!(
            complaint_id = id,
            status = %status,
            rows_affected = result.rows_affected(),
            "Complaint status updated"
        );

        Ok(())
    }
}
