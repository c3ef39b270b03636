use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Folder, null_as_default};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub is_favorites: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub folder_id: String,
    /// Only present when fetched through the `embed-folder` endpoint.
    #[serde(default)]
    pub folder: Option<Folder>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: Vec<Content>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags_ids: Vec<String>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One named block of a snippet. A snippet bundles one or more of these.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub language: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
}

impl Snippet {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Folder id, or `None` when the snippet sits in the inbox.
    pub fn folder_ref(&self) -> Option<&str> {
        Some(self.folder_id.as_str()).filter(|id| !id.is_empty())
    }

    pub fn has_multiple_fragments(&self) -> bool {
        self.content.len() > 1
    }
}

impl Content {
    pub fn new(
        label: impl Into<String>,
        language: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            language: language.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_embed_folder_payload() {
        let snippet: Snippet = serde_json::from_str(
            r#"{
                "name": "Read file",
                "id": "s1",
                "description": null,
                "isDeleted": false,
                "isFavorites": true,
                "folderId": "f1",
                "folder": {"id": "f1", "name": "Rust", "parentId": null, "icon": "rust"},
                "content": [
                    {"label": "Fragment 1", "language": "rust", "value": "fs::read(p)?"}
                ],
                "tagsIds": ["t1"],
                "createdAt": 1700000000000,
                "updatedAt": 1700000001000,
                "extra": {"ignored": true}
            }"#,
        )
        .unwrap();

        assert_eq!(snippet.description, "");
        assert!(snippet.is_favorites);
        assert_eq!(snippet.folder_ref(), Some("f1"));
        assert_eq!(snippet.folder.as_ref().unwrap().icon, "rust");
        assert_eq!(snippet.content[0].language, "rust");
        assert_eq!(snippet.tags_ids, vec!["t1".to_string()]);
        assert!(!snippet.has_multiple_fragments());
    }

    #[test]
    fn minimal_record_decodes_with_defaults() {
        let snippet: Snippet =
            serde_json::from_str(r#"{"id":"s2","name":"x","folderId":null,"tagsIds":null}"#)
                .unwrap();

        assert_eq!(snippet.folder_ref(), None);
        assert!(snippet.tags_ids.is_empty());
        assert!(snippet.content.is_empty());
        assert!(snippet.updated_at.is_none());
        assert!(!snippet.is_deleted);
    }

    #[test]
    fn only_id_is_required() {
        let snippet: Snippet = serde_json::from_str(r#"{"id":"s3","name":null}"#).unwrap();
        assert_eq!(snippet.name, "");

        let folder: Folder = serde_json::from_str(r#"{"id":"f9"}"#).unwrap();
        assert_eq!(folder.name, "");

        assert!(serde_json::from_str::<Snippet>(r#"{"name":"no id"}"#).is_err());
    }
}
