//! Joins snippets with their folders and tags.
//!
//! The three collections come from independent requests, so references
//! between them are not guaranteed to line up: a tag may have been deleted
//! between the snippet and tag fetches, or a folder id may be stale. Those
//! gaps degrade (dropped tag name, missing folder path) instead of failing.

use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};
use crate::models::{Folder, Snippet, Tag};

pub type FolderIndex<'a> = HashMap<&'a str, &'a Folder>;
pub type TagIndex<'a> = HashMap<&'a str, &'a Tag>;

/// A snippet together with the display data derived from the lookup tables.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedSnippet<'a> {
    pub snippet: &'a Snippet,
    /// Tag names in the snippet's own tag order.
    pub tag_names: Vec<String>,
    /// `Parent/Child/Folder`, or `None` when the snippet has no known folder.
    pub folder_path: Option<String>,
    /// The folder the snippet lives in, used for its icon.
    pub folder: Option<&'a Folder>,
}

impl EnrichedSnippet<'_> {
    /// Folder path, or `fallback` for snippets outside any known folder.
    pub fn folder_label<'s>(&'s self, fallback: &'s str) -> &'s str {
        self.folder_path.as_deref().unwrap_or(fallback)
    }
}

pub fn index_folders(folders: &[Folder]) -> FolderIndex<'_> {
    folders.iter().map(|f| (f.id.as_str(), f)).collect()
}

pub fn index_tags(tags: &[Tag]) -> TagIndex<'_> {
    tags.iter().map(|t| (t.id.as_str(), t)).collect()
}

/// Full path of a folder, from its root ancestor down to the folder itself.
///
/// Returns `Ok(None)` when `folder_id` is not in the index. A parent id that
/// is missing from the index resolves to an empty path, so the result keeps
/// a leading `/` for the missing ancestor (`"/Orphan"`).
pub fn resolve_folder_path(folder_id: &str, folders: &FolderIndex<'_>) -> Result<Option<String>> {
    let Some(mut folder) = folders.get(folder_id).copied() else {
        return Ok(None);
    };

    let mut visited = HashSet::new();
    let mut path_components = Vec::new();

    loop {
        if !visited.insert(folder.id.as_str()) {
            return Err(Error::CycleDetected {
                folder_id: folder.id.clone(),
            });
        }
        path_components.push(folder.name.as_str());

        let Some(parent_id) = folder.parent() else {
            break;
        };
        match folders.get(parent_id).copied() {
            Some(parent) => folder = parent,
            None => {
                path_components.push("");
                break;
            }
        }
    }

    path_components.reverse();
    Ok(Some(path_components.join("/")))
}

/// Maps tag ids to names, keeping order and skipping unknown ids.
pub fn resolve_tag_names(tag_ids: &[String], tags: &TagIndex<'_>) -> Vec<String> {
    tag_ids
        .iter()
        .filter_map(|id| tags.get(id.as_str()))
        .map(|tag| tag.name.clone())
        .collect()
}

/// Builds the enriched view of every snippet that is not in the trash.
pub fn enrich_snippets<'a>(
    snippets: &'a [Snippet],
    tags: &'a [Tag],
    folders: &'a [Folder],
) -> Result<Vec<EnrichedSnippet<'a>>> {
    let tag_index = index_tags(tags);
    let folder_index = index_folders(folders);

    let mut enriched = Vec::with_capacity(snippets.len());
    for snippet in snippets.iter().filter(|s| !s.is_deleted) {
        let indexed_folder = snippet
            .folder_ref()
            .and_then(|id| folder_index.get(id).copied());

        let folder_path = match indexed_folder {
            Some(folder) => resolve_folder_path(&folder.id, &folder_index)?,
            None => None,
        };

        enriched.push(EnrichedSnippet {
            snippet,
            tag_names: resolve_tag_names(&snippet.tags_ids, &tag_index),
            folder_path,
            folder: snippet.folder.as_ref().or(indexed_folder),
        });
    }

    tracing::debug!(
        total = snippets.len(),
        kept = enriched.len(),
        "enriched snippets"
    );
    Ok(enriched)
}
