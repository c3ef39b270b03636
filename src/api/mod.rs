//! massCode REST API access.

pub mod client;

pub use client::{Dataset, SnippetClient};

use std::fmt;

/// The three read endpoints the launcher needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Snippets,
    Folders,
    Tags,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Snippets => "snippets/embed-folder",
            Endpoint::Folders => "folders",
            Endpoint::Tags => "tags",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.path())
    }
}
