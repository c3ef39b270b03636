use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Represents a tag that can be applied to snippets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// Unique identifier for the tag
    pub id: String,

    /// Name of the tag (without the # prefix)
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Tag {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }
}
