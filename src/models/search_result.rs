// file: src/models/search_result.rs
// description: organic search hits as returned by the search API
// reference: https://serper.dev response format

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Target URL of the hit
    pub link: String,

    /// Page title
    #[serde(default)]
    pub title: String,

    /// Excerpt of page text, empty when the API omits it
    #[serde(default)]
    pub snippet: String,

    /// Rank reported by the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

impl SearchResult {
    pub fn new(
        link: impl Into<String>,
        title: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            link: link.into(),
            title: title.into(),
            snippet: snippet.into(),
            position: None,
        }
    }
}

/// One result set: the payload for a single query variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub organic: Vec<SearchResult>,
}

impl SearchResponse {
    pub fn new(organic: Vec<SearchResult>) -> Self {
        Self { organic }
    }

    pub fn is_empty(&self) -> bool {
        self.organic.is_empty()
    }
}
