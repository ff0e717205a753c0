//! Liveness handler

/// Plain-text liveness probe on `/` - process is running.
pub async fn liveness() -> &'static str {
    "CivicFix backend running"
}
