//! Complaint intake handlers: submit, list, update status.

use crate::error::{HttpAppError, ResponseEnvelope};
use crate::state::AppState;
use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use civicfix_core::models::MAX_IMAGES;
use civicfix_core::{AppError, Complaint, NewComplaint, StatusUpdate};
use std::sync::Arc;

const MSG_SAVED: &str = "Complaint saved successfully.";
const MSG_SAVE_FAILED: &str = "Error saving complaint.";
const MSG_LIST_FAILED: &str = "Error fetching complaints.";
const MSG_STATUS_UPDATED: &str = "Status updated successfully.";
const MSG_STATUS_FAILED: &str = "Error updating status.";

/// POST /api/complaints
///
/// Multipart form: the six contact/content fields plus up to three files
/// under the `images` field. No field is validated for presence or format;
/// absent fields are stored as NULL. Each accepted image is written to the
/// upload area before the row is inserted; the first failure aborts the whole
/// request (no partial-failure handling, no cleanup of already-written files).
pub async fn submit_complaint(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<ResponseEnvelope>, HttpAppError> {
    let mut form = NewComplaint::default();
    let mut image_paths: Vec<String> = Vec::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return Err(HttpAppError::from(AppError::BadRequest(format!(
                    "Failed to read multipart: {}",
                    e
                ))));
            }
        };
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        if field_name == "images" {
            if image_paths.len() >= MAX_IMAGES {
                return Err(HttpAppError::from(AppError::BadRequest(format!(
                    "Too many images: at most {} are accepted",
                    MAX_IMAGES
                ))));
            }

            let filename = field.file_name().unwrap_or("upload").to_string();
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();

            let data = field.bytes().await.map_err(|e| {
                HttpAppError::from(AppError::BadRequest(format!(
                    "Failed to read file data: {}",
                    e
                )))
            })?;

            let (_key, public_path) = state
                .storage
                .upload(&filename, &content_type, data.to_vec())
                .await
                .map_err(|e| HttpAppError::with_message(e, MSG_SAVE_FAILED))?;

            image_paths.push(public_path);
        } else {
            let value = field.text().await.map_err(|e| {
                HttpAppError::from(AppError::BadRequest(format!(
                    "Failed to read field '{}': {}",
                    field_name, e
                )))
            })?;

            match field_name.as_str() {
                "name" => form.name = Some(value),
                "email" => form.email = Some(value),
                "phone" => form.phone = Some(value),
                "category" => form.category = Some(value),
                "description" => form.description = Some(value),
                "location" => form.location = Some(value),
                // Unknown fields are ignored, as in any form handler
                _ => {}
            }
        }
    }

    let joined = if image_paths.is_empty() {
        None
    } else {
        Some(image_paths.join(","))
    };

    state
        .complaints
        .insert(&form, joined)
        .await
        .map_err(|e| HttpAppError::with_message(e, MSG_SAVE_FAILED))?;

    Ok(Json(ResponseEnvelope::ok(MSG_SAVED)))
}

/// GET /api/complaints
///
/// Returns the raw ordered array, newest first - deliberately not wrapped in
/// the `{success, message}` envelope the other two operations use.
pub async fn list_complaints(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Complaint>>, HttpAppError> {
    let complaints = state
        .complaints
        .list_all()
        .await
        .map_err(|e| HttpAppError::with_message(e, MSG_LIST_FAILED))?;

    Ok(Json(complaints))
}

/// PUT /api/complaints/{id}
///
/// Accepts any status string. Reports success even when the id matches no
/// row; the store performs no existence check.
pub async fn update_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<StatusUpdate>,
) -> Result<Json<ResponseEnvelope>, HttpAppError> {
    state
        .complaints
        .update_status(id, &body.status)
        .await
        .map_err(|e| HttpAppError::with_message(e, MSG_STATUS_FAILED))?;

    Ok(Json(ResponseEnvelope::ok(MSG_STATUS_UPDATED)))
}
