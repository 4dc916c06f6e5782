//! HTTP corpus fetching for the benchmark harness.

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

/// Errors surfaced by the corpus fetcher. A failed fetch is fatal to its
/// benchmark run; nothing here is retried.
#[derive(Error, Debug, Clone)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status} error for {url}")]
    Http { status: u16, url: String },

    #[error("Failed to decode response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return FetchError::Http {
                status: status.as_u16(),
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            };
        }

        if err.is_decode() {
            return FetchError::Decode(err.to_string());
        }

        FetchError::Network(err.to_string())
    }
}

pub fn build_client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .expect("HTTP client")
}

/// Fetch the full decoded text behind `url`.
pub async fn fetch_text(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send().await.map_err(FetchError::from)?;

    if !response.status().is_success() {
        return Err(FetchError::Http {
            status: response.status().as_u16(),
            url: url.to_string(),
        });
    }

    response
        .text()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_text_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/corpus.txt"))
            .respond_with(ResponseTemplate::new(200).set_body_string("some benchmark text"))
            .mount(&server)
            .await;

        let client = build_client();
        let url = format!("{}/corpus.txt", server.uri());
        let text = fetch_text(&client, &url).await.unwrap();
        assert_eq!(text, "some benchmark text");
    }

    #[tokio::test]
    async fn test_fetch_text_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = build_client();
        let err = fetch_text(&client, &server.uri()).await.unwrap_err();
        match err {
            FetchError::Http { status, .. } => assert_eq!(status, 404),
            other => panic!("expected HTTP error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_text_unreachable() {
        let client = build_client();
        let err = fetch_text(&client, "http://127.0.0.1:1/corpus.txt")
            .await
            .unwrap_err();
        match err {
            FetchError::Network(_) => {}
            other => panic!("expected network error, got {:?}", other),
        }
    }
}
