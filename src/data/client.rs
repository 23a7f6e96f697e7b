//! HTTP access to the jService trivia API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::FetchError;
use crate::models::{Category, Clue};

pub const DEFAULT_API_URL: &str = "https://jservice.io/api";

/// Where questions come from.
#[async_trait]
pub trait TriviaSource: Send + Sync {
    /// Draw a random clue and return the category it belongs to.
    async fn random_category(&self) -> Result<Category, FetchError>;

    /// Fetch every clue in a category.
    async fn clues_for_category(&self, category_id: u64) -> Result<Vec<Clue>, FetchError>;
}

/// `TriviaSource` backed by a jService-compatible HTTP API.
#[derive(Clone)]
pub struct JServiceClient {
    client: Client,
    base_url: String,
}

impl JServiceClient {
    /// Build a client for `base_url` whose requests give up after `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("mindfield/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_clues(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<Clue>, FetchError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, ?query, "requesting clues");

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl TriviaSource for JServiceClient {
    async fn random_category(&self) -> Result<Category, FetchError> {
        let clues = self.get_clues("random", &[]).await?;
        Category::from_clues(&clues).ok_or(FetchError::Empty)
    }

    async fn clues_for_category(&self, category_id: u64) -> Result<Vec<Clue>, FetchError> {
        self.get_clues("clues", &[("category", category_id.to_string())])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Answer a single request with `status` and `body`, handing back the
    /// request line that was received.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|window| window == b"\r\n\r\n") {
                let read = stream.read(&mut buf).await.unwrap();
                if read == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..read]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            let _ = stream.shutdown().await;

            String::from_utf8_lossy(&request)
                .lines()
                .next()
                .unwrap_or_default()
                .to_string()
        });

        (format!("http://{}/api", addr), handle)
    }

    /// Client for the local test server, ignoring any proxy settings.
    fn client(base_url: &str) -> JServiceClient {
        JServiceClient {
            client: Client::builder()
                .no_proxy()
                .timeout(Duration::from_secs(5))
                .build()
                .unwrap(),
            base_url: base_url.to_string(),
        }
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = JServiceClient::new("http://localhost:3000/api/", Duration::from_secs(1))
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000/api");
    }

    #[tokio::test]
    async fn test_random_category_parsed() {
        let body = r#"[{"id": 9, "question": "q", "answer": "a",
            "category": {"id": 77, "title": "potpourri", "clues_count": 5}}]"#;
        let (url, server) = serve_once("200 OK", body).await;

        let category = client(&url).random_category().await.unwrap();
        assert_eq!(category.id, 77);
        assert_eq!(category.title, "potpourri");
        assert_eq!(server.await.unwrap(), "GET /api/random HTTP/1.1");
    }

    #[tokio::test]
    async fn test_clues_request_carries_category() {
        let body = r#"[{"id": 1, "question": "q", "answer": "a"}]"#;
        let (url, server) = serve_once("200 OK", body).await;

        let clues = client(&url).clues_for_category(42).await.unwrap();
        assert_eq!(clues.len(), 1);
        assert_eq!(server.await.unwrap(), "GET /api/clues?category=42 HTTP/1.1");
    }

    #[tokio::test]
    async fn test_server_error_is_status() {
        let (url, server) = serve_once("500 Internal Server Error", "oops").await;

        let err = client(&url).clues_for_category(1).await.unwrap_err();
        assert!(matches!(err, FetchError::Status(status) if status.as_u16() == 500));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let (url, server) = serve_once("200 OK", "<html>not json</html>").await;

        let err = client(&url).clues_for_category(1).await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_random_is_empty() {
        let (url, server) = serve_once("200 OK", "[]").await;

        let err = client(&url).random_category().await.unwrap_err();
        assert!(matches!(err, FetchError::Empty));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_refused_connection_is_http_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(&format!("http://{}/api", addr))
            .random_category()
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Http(_)));
    }
}
