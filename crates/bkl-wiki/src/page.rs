//! Wiki page types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A Backlog wiki page. Listing does not return content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Outcome of a rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renamed {
    pub id: i64,
    pub old_name: String,
    pub new_name: String,
}

impl fmt::Display for Renamed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "updated: {} => {}", self.old_name, self.new_name)
    }
}

/// Outcome of a content replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replaced {
    pub id: i64,
    pub name: String,
}

impl fmt::Display for Replaced {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "updated: {}: {}", self.id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ignores_unknown_fields() {
        let json = r#"{
            "id": 1,
            "projectId": 10,
            "name": "Home",
            "content": "hello",
            "tags": [],
            "createdUser": {"id": 3}
        }"#;
        let page: Page = serde_json::from_str(json).unwrap();
        assert_eq!(page.id, 1);
        assert_eq!(page.project_id, 10);
        assert_eq!(page.name, "Home");
        assert_eq!(page.content.as_deref(), Some("hello"));
    }

    #[test]
    fn test_page_without_content_omits_it() {
        let page = Page {
            id: 1,
            project_id: 10,
            name: "Home".to_string(),
            content: None,
        };
        assert_eq!(
            serde_json::to_string(&page).unwrap(),
            r#"{"id":1,"projectId":10,"name":"Home"}"#
        );
    }

    #[test]
    fn test_outcome_display() {
        let renamed = Renamed {
            id: 1,
            old_name: "Draft/Home".to_string(),
            new_name: "Published/Home".to_string(),
        };
        assert_eq!(renamed.to_string(), "updated: Draft/Home => Published/Home");

        let replaced = Replaced {
            id: 7,
            name: "Home".to_string(),
        };
        assert_eq!(replaced.to_string(), "updated: 7: Home");
    }
}
