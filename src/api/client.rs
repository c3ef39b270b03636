use serde::de::DeserializeOwned;

use super::Endpoint;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{Folder, Snippet, Tag};

/// Everything one launcher run works from.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub snippets: Vec<Snippet>,
    pub tags: Vec<Tag>,
    pub folders: Vec<Folder>,
}

/// Thin client over the massCode read endpoints.
#[derive(Debug, Clone)]
pub struct SnippetClient {
    http: reqwest::Client,
    config: Config,
}

impl SnippetClient {
    pub fn new(config: &Config) -> Result<Self> {
        // The API is always local; never route it through a system proxy.
        let mut builder = reqwest::Client::builder().no_proxy();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(Error::Client)?;

        Ok(Self {
            http,
            config: config.clone(),
        })
    }

    pub async fn snippets(&self) -> Result<Vec<Snippet>> {
        self.fetch(Endpoint::Snippets).await
    }

    pub async fn folders(&self) -> Result<Vec<Folder>> {
        self.fetch(Endpoint::Folders).await
    }

    pub async fn tags(&self) -> Result<Vec<Tag>> {
        self.fetch(Endpoint::Tags).await
    }

    /// Fetches snippets, tags and folders one after the other.
    ///
    /// The first failure aborts the run; there is no partial dataset.
    pub async fn fetch_all(&self) -> Result<Dataset> {
        let snippets = self.snippets().await?;
        let tags = self.tags().await?;
        let folders = self.folders().await?;

        Ok(Dataset {
            snippets,
            tags,
            folders,
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<Vec<T>> {
        let url = self.config.endpoint_url(endpoint.path());
        tracing::debug!(%url, "fetching");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| Error::Request { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status { endpoint, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| Error::Request { endpoint, source })?;
        let items: Vec<T> =
            serde_json::from_slice(&body).map_err(|source| Error::Decode { endpoint, source })?;

        tracing::debug!(%endpoint, count = items.len(), "fetched");
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves canned `(path, status, body)` responses until the test ends.
    async fn serve(routes: Vec<(&'static str, u16, &'static str)>) -> Config {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let routes = routes.clone();
                tokio::spawn(async move {
                    let mut buf = vec![0u8; 8192];
                    let n = socket.read(&mut buf).await.unwrap_or(0);
                    let request = String::from_utf8_lossy(&buf[..n]);
                    let path = request.split_whitespace().nth(1).unwrap_or("/");
                    let (status, body) = routes
                        .iter()
                        .find(|(route, _, _)| *route == path)
                        .map(|(_, status, body)| (*status, *body))
                        .unwrap_or((404, ""));
                    let response = format!(
                        "HTTP/1.1 {status} Canned\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                        body.len()
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        Config {
            base_url: format!("http://{addr}"),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn fetch_all_decodes_every_collection() {
        let config = serve(vec![
            (
                "/snippets/embed-folder",
                200,
                r#"[{"id":"s1","name":"hello","folderId":"f1","tagsIds":["t1"],
                    "content":[{"label":"Fragment 1","language":"sh","value":"echo hi"}],
                    "folder":{"id":"f1","name":"Shell","parentId":null,"icon":"bash"}}]"#,
            ),
            ("/tags", 200, r#"[{"id":"t1","name":"shell"}]"#),
            (
                "/folders",
                200,
                r#"[{"id":"f1","name":"Shell","parentId":null,"icon":"bash","index":0}]"#,
            ),
        ])
        .await;

        let client = SnippetClient::new(&config).unwrap();
        let dataset = client.fetch_all().await.unwrap();

        assert_eq!(dataset.snippets.len(), 1);
        assert_eq!(dataset.snippets[0].content[0].value, "echo hi");
        assert_eq!(dataset.tags[0].name, "shell");
        assert_eq!(dataset.folders[0].icon, "bash");
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let config = serve(vec![("/tags", 500, "oops")]).await;
        let client = SnippetClient::new(&config).unwrap();

        match client.tags().await {
            Err(Error::Status { endpoint, status }) => {
                assert_eq!(endpoint, Endpoint::Tags);
                assert_eq!(status.as_u16(), 500);
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_json_is_a_decode_error() {
        let config = serve(vec![("/folders", 200, "{not json")]).await;
        let client = SnippetClient::new(&config).unwrap();

        assert!(matches!(
            client.folders().await,
            Err(Error::Decode {
                endpoint: Endpoint::Folders,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn first_failure_stops_fetch_all() {
        let config = serve(vec![("/snippets/embed-folder", 200, "[]")]).await;
        let client = SnippetClient::new(&config).unwrap();

        assert!(matches!(
            client.fetch_all().await,
            Err(Error::Status {
                endpoint: Endpoint::Tags,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn unreachable_service_is_a_request_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = Config {
            base_url: format!("http://{addr}"),
            ..Config::default()
        };
        let client = SnippetClient::new(&config).unwrap();

        assert!(matches!(
            client.snippets().await,
            Err(Error::Request {
                endpoint: Endpoint::Snippets,
                ..
            })
        ));
    }
}
