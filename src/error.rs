use std::path::PathBuf;

use crate::api::Endpoint;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop a launcher run.
///
/// Fetch and decode failures are fatal for the whole run; nothing is printed
/// to the launcher when one of them occurs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to fetch {endpoint}: {source}")]
    Request {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} answered with HTTP {status}")]
    Status {
        endpoint: Endpoint,
        status: reqwest::StatusCode,
    },

    #[error("failed to decode {endpoint} JSON: {source}")]
    Decode {
        endpoint: Endpoint,
        #[source]
        source: serde_json::Error,
    },

    /// A folder's parent chain loops back onto itself.
    #[error("folder hierarchy contains a cycle through folder {folder_id}")]
    CycleDetected { folder_id: String },

    #[error("failed to read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
