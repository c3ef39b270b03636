use crate::launcher::Item;

/// Which field of a snippet the query text is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Title,
    Folder,
    Tag,
}

/// A parsed launcher query: the mode prefix and the text to filter with.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    pub mode: SearchMode,
    pub text: String,
}

impl Query {
    /// `f <text>` searches folders, `t <text>` searches tags, anything else titles.
    pub fn parse(raw: &str) -> Self {
        let mode = if raw.starts_with("f ") {
            SearchMode::Folder
        } else if raw.starts_with("t ") {
            SearchMode::Tag
        } else {
            return Self {
                mode: SearchMode::Title,
                text: raw.to_string(),
            };
        };

        let text = raw
            .split_once(' ')
            .map(|(_, rest)| rest.trim().to_string())
            .unwrap_or_default();

        Self { mode, text }
    }
}

/// Scores `haystack` against `query` as an in-order, case-insensitive
/// subsequence match. Whitespace in the query is ignored.
///
/// Returns `None` when some query character cannot be matched. Contiguous
/// runs and hits at word starts score higher; a late first hit costs a bit.
pub fn fuzzy_score(haystack: &str, query: &str) -> Option<i64> {
    let needle: Vec<char> = query
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(fold_case)
        .collect();
    if needle.is_empty() {
        return Some(0);
    }

    let mut score = 0i64;
    let mut matched = 0;
    let mut previous: Option<char> = None;
    let mut last_hit: Option<usize> = None;

    for (pos, c) in haystack.chars().enumerate() {
        if matched == needle.len() {
            break;
        }

        if fold_case(c) == needle[matched] {
            score += 1;
            if last_hit.is_some_and(|hit| hit + 1 == pos) {
                score += 5;
            }
            if previous.is_none_or(|p| !p.is_alphanumeric()) {
                score += 3;
            }
            if matched == 0 {
                score -= (pos as i64).min(10);
            }
            last_hit = Some(pos);
            matched += 1;
        }
        previous = Some(c);
    }

    (matched == needle.len()).then_some(score)
}

/// Keeps the items matching `text`, best match first. Equal scores keep
/// their original order; empty text keeps everything as is.
pub fn filter_items(items: Vec<Item>, text: &str) -> Vec<Item> {
    if text.trim().is_empty() {
        return items;
    }

    let mut scored: Vec<(i64, Item)> = items
        .into_iter()
        .filter_map(|item| fuzzy_score(item.match_key(), text).map(|score| (score, item)))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    tracing::debug!(query = text, results = scored.len(), "filtered items");
    scored.into_iter().map(|(_, item)| item).collect()
}

fn fold_case(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
