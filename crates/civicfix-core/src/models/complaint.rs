use serde::{Deserialize, Serialize};

/// Status assigned to every complaint at creation time. Updates accept any
/// string; there is no enforced transition graph.
pub const DEFAULT_STATUS: &str = "Pending";

/// Maximum number of image attachments per complaint
pub const MAX_IMAGES: usize = 3;

/// A persisted complaint row.
///
/// Column names keep the original camelCase wire contract (`imagePath`,
/// `createdAt`); `image_paths` holds the comma-joined public paths of the
/// uploaded images, or `None` when the complaint was submitted without any.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub status: String,
    #[cfg_attr(feature = "sqlx", sqlx(rename = "imagePath"))]
    pub image_paths: Option<String>,
    #[cfg_attr(feature = "sqlx", sqlx(rename = "createdAt"))]
    pub created_at: String,
}

impl Complaint {
    /// Individual image paths, in upload order. Empty when none were uploaded.
    pub fn image_path_list(&self) -> Vec<&str> {
        self.image_paths
            .as_deref()
            .map(|joined| joined.split(',').filter(|p| !p.is_empty()).collect())
            .unwrap_or_default()
    }
}

/// Fields accepted by the submit operation. All optional; absent fields are
/// stored as NULL without validation.
#[derive(Debug, Clone, Default)]
pub struct NewComplaint {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
}

/// Body of the update-status operation
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(image_paths: Option<&str>) -> Complaint {
        Complaint {
            id: 1,
            name: Some("A".to_string()),
            email: Some("a@x.com".to_string()),
            phone: Some("1".to_string()),
            category: Some("Pothole".to_string()),
            description: Some("Big hole".to_string()),
            location: Some("Main St".to_string()),
            status: DEFAULT_STATUS.to_string(),
            image_paths: image_paths.map(String::from),
            created_at: "2026-08-29 12:00:00".to_string(),
        }
    }

    #[test]
    fn test_serializes_with_camel_case_field_names() {
        let value = serde_json::to_value(sample(Some("/uploads/1-a.jpg"))).unwrap();
        assert_eq!(value["imagePaths"], "/uploads/1-a.jpg");
        assert_eq!(value["createdAt"], "2026-08-29 12:00:00");
        assert_eq!(value["status"], "Pending");
    }

    #[test]
    fn test_image_paths_null_when_absent() {
        let value = serde_json::to_value(sample(None)).unwrap();
        assert!(value["imagePaths"].is_null());
    }

    #[test]
    fn test_image_path_list_splits_joined_field() {
        let complaint = sample(Some("/uploads/1-a.jpg,/uploads/2-b.png"));
        assert_eq!(
            complaint.image_path_list(),
            vec!["/uploads/1-a.jpg", "/uploads/2-b.png"]
        );
    }

    #[test]
    fn test_image_path_list_empty_when_none() {
        assert!(sample(None).image_path_list().is_empty());
    }
}
