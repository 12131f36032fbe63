// SPDX-License-Identifier: MPL-2.0
//! Media host client.
//!
//! The gallery only needs two things from the host: a folder search returning
//! the photos of a category, and plain GETs of rendition URLs (thumbnails,
//! preloads, blur sources). Both sit behind [`MediaSource`] so the catalog and
//! preloader can be exercised against an in-memory source.

use crate::config::{Credentials, MediaHostConfig, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::error::{Error, HttpError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One resource as returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchResource {
    pub public_id: String,
    pub format: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    resources: Vec<SearchResource>,
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    expression: String,
    sort_by: [SortField<'a>; 1],
    max_results: u32,
}

#[derive(Debug, Serialize)]
struct SortField<'a> {
    public_id: &'a str,
}

#[async_trait]
pub trait MediaSource: Send + Sync + 'static {
    /// Resources in `folder`, sorted by identifier descending.
    async fn search(&self, folder: &str) -> Result<Vec<SearchResource>>;

    /// Raw bytes behind a rendition URL.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Sorts by identifier descending and caps the list. The host already does
/// both; this keeps the contract even when it does not.
pub fn normalize_results(mut resources: Vec<SearchResource>, max_results: u32) -> Vec<SearchResource> {
    resources.sort_by(|a, b| b.public_id.cmp(&a.public_id));
    resources.truncate(max_results as usize);
    resources
}

/// HTTP client for the Cloudinary search and delivery APIs.
#[derive(Clone)]
pub struct CloudinaryClient {
    http: reqwest::Client,
    api_base: String,
    cloud_name: String,
    max_results: u32,
    credentials: Option<Credentials>,
}

impl CloudinaryClient {
    pub fn new(config: &MediaHostConfig, credentials: Option<Credentials>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("SuperGlass/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::MediaHost(e.to_string()))?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            cloud_name: config.resolved_cloud_name(),
            max_results: config.max_results(),
            credentials,
        })
    }

    fn search_url(&self) -> String {
        format!("{}/{}/resources/search", self.api_base, self.cloud_name)
    }
}

impl std::fmt::Debug for CloudinaryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudinaryClient")
            .field("api_base", &self.api_base)
            .field("cloud_name", &self.cloud_name)
            .field("max_results", &self.max_results)
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

#[async_trait]
impl MediaSource for CloudinaryClient {
    async fn search(&self, folder: &str) -> Result<Vec<SearchResource>> {
        let Some(credentials) = &self.credentials else {
            return Err(Error::MediaHost("search API credentials are not set".to_string()));
        };
        if self.cloud_name.is_empty() {
            return Err(Error::MediaHost("cloud name is not configured".to_string()));
        }

        let body = SearchRequest {
            expression: format!("folder:{folder}"),
            sort_by: [SortField { public_id: "desc" }],
            max_results: self.max_results,
        };

        let response = self
            .http
            .post(self.search_url())
            .basic_auth(&credentials.api_key, Some(&credentials.api_secret))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::from_status(status.as_u16()).into());
        }

        let text = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&text)?;
        tracing::debug!(folder, count = parsed.resources.len(), "search completed");

        Ok(normalize_results(parsed.resources, self.max_results))
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::from_status(status.as_u16()).into());
        }
        Ok(response.bytes().await?.to_vec())
    }
}

/// Stand-in used when the HTTP client could not be built. Every call fails
/// with the construction error, so the showroom still starts and reports it.
#[derive(Debug, Clone)]
pub struct UnavailableSource {
    reason: Error,
}

impl UnavailableSource {
    pub fn new(reason: Error) -> Self {
        Self { reason }
    }
}

#[async_trait]
impl MediaSource for UnavailableSource {
    async fn search(&self, _folder: &str) -> Result<Vec<SearchResource>> {
        Err(self.reason.clone())
    }

    async fn fetch(&self, _url: &str) -> Result<Vec<u8>> {
        Err(self.reason.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(id: &str) -> SearchResource {
        SearchResource {
            public_id: id.to_string(),
            format: "jpg".to_string(),
            width: 800,
            height: 600,
        }
    }

    #[test]
    fn normalize_sorts_descending_and_caps() {
        let sorted = normalize_results(vec![resource("a"), resource("c"), resource("b")], 2);
        let ids: Vec<_> = sorted.iter().map(|r| r.public_id.as_str()).collect();
        assert_eq!(ids, ["c", "b"]);
    }

    #[test]
    fn search_response_parses_host_payload() {
        let payload = r#"{
            "total_count": 2,
            "resources": [
                {"public_id": "services/ledmirror/b", "format": "png", "width": 1200, "height": 900, "bytes": 1},
                {"public_id": "services/ledmirror/a", "format": "jpg"}
            ]
        }"#;
        let parsed: SearchResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(parsed.resources.len(), 2);
        assert_eq!(parsed.resources[0].width, 1200);
        assert_eq!(parsed.resources[1].height, 0);
    }

    #[test]
    fn search_request_serializes_sort_and_limit() {
        let body = SearchRequest {
            expression: "folder:services/aluminium".to_string(),
            sort_by: [SortField { public_id: "desc" }],
            max_results: 400,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["expression"], "folder:services/aluminium");
        assert_eq!(json["sort_by"][0]["public_id"], "desc");
        assert_eq!(json["max_results"], 400);
    }

    #[tokio::test]
    async fn search_without_credentials_fails_fast() {
        let client = CloudinaryClient::new(&MediaHostConfig::default(), None).unwrap();
        let result = client.search("services/aluminium").await;
        assert!(matches!(result, Err(Error::MediaHost(_))));
    }

    #[tokio::test]
    async fn unavailable_source_repeats_its_reason() {
        let source = UnavailableSource::new(Error::MediaHost("no tls backend".into()));
        assert!(matches!(source.search("x").await, Err(Error::MediaHost(m)) if m == "no tls backend"));
        assert!(source.fetch("https://example.invalid").await.is_err());
    }
}
