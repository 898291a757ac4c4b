// file: src/fetcher/client.rs
// description: Serper search API client issuing one POST per query variant
// reference: https://serper.dev/playground

use crate::error::{Result, SearchError};
use crate::models::SearchResponse;
use crate::utils::validation::Validator;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

/// Anything that can answer a single search query.
#[allow(async_fn_in_trait)]
pub trait SearchBackend {
    async fn search(&self, query: &str) -> Result<SearchResponse>;
}

impl<T: SearchBackend + ?Sized> SearchBackend for &T {
    async fn search(&self, query: &str) -> Result<SearchResponse> {
        (**self).search(query).await
    }
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    q: &'a str,
}

pub struct SerperClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl SerperClient {
    pub fn new(api_key: String, endpoint: String) -> Result<Self> {
        Validator::validate_api_key(&api_key)?;
        Validator::validate_url(&endpoint)?;

        Ok(Self {
            client: Client::new(),
            endpoint,
            api_key,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SearchBackend for SerperClient {
    async fn search(&self, query: &str) -> Result<SearchResponse> {
        Validator::validate_query(query)?;

        debug!("POST {} q={:?}", self.endpoint, query);

        let response = self
            .client
            .post(&self.endpoint)
            .header("X-API-KEY", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&SearchRequest { q: query })
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!("Search API answered {} ({} bytes)", status, body.len());

        parse_response(status, &body)
    }
}

/// Maps a raw HTTP answer onto a result set. Only 200 carries data.
pub fn parse_response(status: u16, body: &str) -> Result<SearchResponse> {
    if status != 200 {
        return Err(SearchError::Upstream {
            status,
            body: body.to_string(),
        });
    }

    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success() {
        let body = r#"{"organic": [{"link": "https://github.com/x/y", "title": "SSRF tool", "snippet": "A tool"}]}"#;
        let response = parse_response(200, body).unwrap();
        assert_eq!(response.organic.len(), 1);
        assert_eq!(response.organic[0].link, "https://github.com/x/y");
    }

    #[test]
    fn test_parse_non_200_surfaces_status_and_body() {
        let err = parse_response(403, r#"{"message": "Unauthorized."}"#).unwrap_err();
        match err {
            SearchError::Upstream { status, body } => {
                assert_eq!(status, 403);
                assert!(body.contains("Unauthorized"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_bad_json() {
        assert!(matches!(
            parse_response(200, "<html>"),
            Err(SearchError::Json(_))
        ));
    }

    #[test]
    fn test_client_requires_key() {
        assert!(
            SerperClient::new(String::new(), "https://google.serper.dev/search".to_string())
                .is_err()
        );
        assert!(SerperClient::new("key".to_string(), "google.serper.dev".to_string()).is_err());

        let client =
            SerperClient::new("key".to_string(), "https://google.serper.dev/search".to_string())
                .unwrap();
        assert_eq!(client.endpoint(), "https://google.serper.dev/search");
    }

    #[tokio::test]
    async fn test_empty_query_rejected_before_network() {
        let client =
            SerperClient::new("key".to_string(), "http://127.0.0.1:9/search".to_string()).unwrap();
        assert!(matches!(
            client.search("  ").await,
            Err(SearchError::Validation(_))
        ));
    }
}
