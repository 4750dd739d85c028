//! Remote story collection client.
//!
//! Wraps the Algolia Hacker News search endpoint. The rest of the
//! application only sees the [`StoryClient`] trait, so tests can swap
//! in a scripted client.

use std::future::Future;

use serde::Deserialize;
use thiserror::Error;

/// Default search endpoint. The query string is appended verbatim.
pub const DEFAULT_ENDPOINT: &str = "https://hn.algolia.com/api/v1/search?query=";

/// A single story as returned by the search API.
///
/// Identity is `id`; everything else is display-only and never mutated
/// after deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Story {
    #[serde(rename = "objectID")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Ask/Show HN posts have no external URL.
    pub url: Option<String>,
    #[serde(default)]
    pub author: String,
    #[serde(rename = "num_comments", default)]
    pub comment_count: u32,
    #[serde(default)]
    pub points: i64,
}

/// Search response envelope; stories live under the `hits` key.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    hits: Vec<Story>,
}

/// Errors from a single fetch cycle.
///
/// All of these surface to the user as one generic failure banner; the
/// detail only goes to the log.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned status {0}")]
    Status(u16),

    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

/// One request for a given target string, resolving with the story list
/// or failing. Exactly the interface the search session needs.
pub trait StoryClient: Send + Sync + 'static {
    fn search(
        &self,
        target: &str,
    ) -> impl Future<Output = Result<Vec<Story>, FetchError>> + Send;
}

/// Production client over reqwest.
pub struct AlgoliaClient {
    client: reqwest::Client,
}

impl AlgoliaClient {
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(5))
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self { client })
    }
}

impl StoryClient for AlgoliaClient {
    async fn search(&self, target: &str) -> Result<Vec<Story>, FetchError> {
        tracing::debug!(target = %target, "issuing search request");

        let response = self.client.get(target).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "search request rejected");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| FetchError::MalformedPayload(e.to_string()))?;

        tracing::debug!(hits = body.hits.len(), "search request resolved");
        Ok(body.hits)
    }
}
