use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::null_as_default;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub default_language: String,
    #[serde(default)]
    pub is_open: bool,
    #[serde(default)]
    pub is_system: bool,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub index: i64,
    /// Icon name; the launcher looks for `<icons_dir>/<icon>.svg`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon: String,
}

impl Folder {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn new_with_parent(
        id: impl Into<String>,
        name: impl Into<String>,
        parent_id: impl Into<String>,
    ) -> Self {
        let mut folder = Self::new(id, name);
        folder.parent_id = Some(parent_id.into());
        folder
    }

    /// Parent id. Only `null` marks a root; `""` is a link to an unknown folder.
    pub fn parent(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }

    pub fn is_root(&self) -> bool {
        self.parent().is_none()
    }
}
