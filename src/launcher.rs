//! Alfred Script Filter feedback.
//!
//! Only the subset of the format the workflow uses is modelled: items with
//! variables, an optional icon, and `cmd`/`alt` modifiers.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::config::Config;
use crate::enrich::EnrichedSnippet;
use crate::search::SearchMode;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Feedback {
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Item {
    pub uid: String,
    pub title: String,
    pub subtitle: String,
    pub arg: String,
    pub valid: bool,
    /// Text Alfred and the local filter match against instead of the title.
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub match_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub variables: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Mods::is_empty")]
    pub mods: Mods,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Icon {
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Mods {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmd: Option<Modifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<Modifier>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Modifier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arg: Option<String>,
    pub subtitle: String,
    pub valid: bool,
}

impl Mods {
    pub fn is_empty(&self) -> bool {
        self.cmd.is_none() && self.alt.is_none()
    }
}

impl Item {
    /// What the filter scores against: the match text if set, else the title.
    pub fn match_key(&self) -> &str {
        self.match_text.as_deref().unwrap_or(&self.title)
    }
}

impl Feedback {
    pub fn write_json<W: Write>(&self, writer: &mut W) -> serde_json::Result<()> {
        serde_json::to_writer(&mut *writer, self)?;
        writeln!(writer).map_err(serde_json::Error::io)
    }
}

/// Turns enriched snippets into launcher items, one per content fragment.
pub fn build_items(
    snippets: &[EnrichedSnippet<'_>],
    mode: SearchMode,
    config: &Config,
) -> Vec<Item> {
    let mut items = Vec::new();

    for enriched in snippets {
        let snippet = enriched.snippet;
        let folder_label = enriched.folder_label(&config.fallback_label);
        let multiple = snippet.has_multiple_fragments();
        let icon = enriched.folder.and_then(|f| folder_icon(&config.icons_dir, &f.icon));
        let match_text = match mode {
            SearchMode::Title => None,
            SearchMode::Folder => Some(folder_label.to_string()),
            SearchMode::Tag => Some(enriched.tag_names.join(" , ")),
        };

        for (index, fragment) in snippet.content.iter().enumerate() {
            let (uid, subtitle) = if multiple {
                (
                    format!("{}:{}", snippet.id, index),
                    format!("{} - {}", folder_label, fragment.label),
                )
            } else {
                (snippet.id.clone(), folder_label.to_string())
            };

            let variables = BTreeMap::from([
                ("description".to_string(), snippet.description.clone()),
                ("snippet".to_string(), fragment.value.clone()),
            ]);

            items.push(Item {
                uid,
                title: snippet.name.clone(),
                subtitle,
                arg: fragment.value.clone(),
                valid: true,
                match_text: match_text.clone(),
                icon: icon.clone(),
                variables,
                mods: Mods {
                    cmd: Some(Modifier {
                        arg: Some(config.open_url(&snippet.id)),
                        subtitle: format!("Open in {}", config.app_name),
                        valid: true,
                    }),
                    alt: Some(Modifier {
                        arg: None,
                        subtitle: String::from("View snippet"),
                        valid: true,
                    }),
                },
            });
        }
    }

    items
}

/// `<icons_dir>/<name>.svg` if that file exists. Missing icons are not an error.
fn folder_icon(icons_dir: &Path, name: &str) -> Option<Icon> {
    if name.is_empty() {
        return None;
    }

    let path = icons_dir.join(format!("{name}.svg"));
    if path.is_file() {
        Some(Icon {
            path: path.to_string_lossy().into_owned(),
        })
    } else {
        tracing::debug!(icon = name, "no icon file, using default");
        None
    }
}
