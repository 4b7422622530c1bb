//! Shared data model for the portfolio SPA.
//!
//! This crate is the single place where the wire shape of the backend's
//! project records is defined. Both the fetch layer (`portfolio_client`)
//! and the view layer (`portfolio_app`) depend on it.

use serde::{Deserialize, Serialize};

/// A single portfolio entry as returned by `GET {base}/api/projects/`.
///
/// The backend does not enforce this shape, so deserialization is
/// deliberately tolerant:
///
/// - optional fields (`image`, `link`, `category`) may be absent or `null`
///   and deserialize to `None`; views must render them conditionally,
/// - a missing `technologies` array deserializes to an empty list,
/// - unknown extra fields in the payload (`url`, `created_at`, ...) are
///   ignored.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Project {
    /// Unique identifier, stable across requests.
    pub id: u64,
    pub title: String,
    pub description: String,
    /// URL of the project image, if one was uploaded.
    pub image: Option<String>,
    /// External link to the live project or its repository.
    pub link: Option<String>,
    /// Name of the category the project belongs to.
    pub category: Option<String>,
    /// Ordered technology labels, one badge each.
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_record_roundtrip() {
        let json = r#"{
            "id": 1,
            "title": "A",
            "description": "d",
            "image": "http://localhost:8000/media/project_images/a.png",
            "link": "https://example.com",
            "category": "Web Development",
            "technologies": ["Go", "Rust"]
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, 1);
        assert_eq!(project.title, "A");
        assert_eq!(project.technologies, vec!["Go", "Rust"]);

        let back = serde_json::to_string(&project).unwrap();
        let again: Project = serde_json::from_str(&back).unwrap();
        assert_eq!(project, again);
    }

    #[test]
    fn test_null_and_missing_optionals() {
        // `image` explicitly null, `link`/`category` absent entirely.
        let json = r#"{
            "id": 2,
            "title": "B",
            "description": "d",
            "image": null,
            "technologies": []
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.image, None);
        assert_eq!(project.link, None);
        assert_eq!(project.category, None);
        assert!(project.technologies.is_empty());
    }

    #[test]
    fn test_missing_technologies_defaults_to_empty() {
        let json = r#"{"id": 3, "title": "C", "description": "d"}"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert!(project.technologies.is_empty());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        // The real serializer also emits `url` and `created_at`.
        let json = r#"{
            "id": 4,
            "url": "http://localhost:8000/api/projects/4/",
            "title": "D",
            "description": "d",
            "created_at": "2025-01-01T00:00:00Z",
            "technologies": ["Python"]
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, 4);
        assert_eq!(project.technologies, vec!["Python"]);
    }
}
