//! Catalog API client for the sample marketplace.
//!
//! - [`CatalogApi`] — the three upstream calls the page depends on
//! - [`HttpCatalog`] — reqwest implementation against the real API
//! - [`StaticCatalog`] — in-memory catalog loaded from a JSON fixture
//! - [`feed`] — guarded listing fetch (stale responses are dropped)
//! - [`seed`] — server-side data-fetch step for the first render

pub mod feed;
pub mod fixture;
pub mod seed;

use async_trait::async_trait;
use marketplace_core::{FilterCategory, RequestPayload, ResultPage, Sample};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

pub use feed::{fetch_listing, ListingHandle};
pub use fixture::StaticCatalog;
pub use seed::load_seed;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why an upstream call failed. The page collapses all of these into one
/// "listing request failed" banner; the variants exist for logs.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("malformed response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("sample {0} not found")]
    NotFound(String),
}

// ---------------------------------------------------------------------------
// API seam
// ---------------------------------------------------------------------------

/// The upstream catalog: listing, filter categories, single sample.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait CatalogApi {
    /// `GET /projects` with the payload encoded by [`payload_query`].
    async fn list_projects(&self, payload: &RequestPayload) -> Result<ResultPage, ApiError>;

    /// `GET /projects/filters`.
    async fn filters(&self) -> Result<Vec<FilterCategory>, ApiError>;

    /// `GET /project/{id}`.
    async fn project(&self, id: &str) -> Result<Sample, ApiError>;
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl<T: CatalogApi + Sync + ?Sized> CatalogApi for &T {
    async fn list_projects(&self, payload: &RequestPayload) -> Result<ResultPage, ApiError> {
        (**self).list_projects(payload).await
    }

    async fn filters(&self) -> Result<Vec<FilterCategory>, ApiError> {
        (**self).filters().await
    }

    async fn project(&self, id: &str) -> Result<Sample, ApiError> {
        (**self).project(id).await
    }
}

/// Shared handle to a catalog, cloned into each request task.
#[cfg(not(target_arch = "wasm32"))]
pub type SharedCatalog = std::sync::Arc<dyn CatalogApi + Send + Sync>;
/// Shared handle to a catalog, cloned into each request task.
#[cfg(target_arch = "wasm32")]
pub type SharedCatalog = std::rc::Rc<dyn CatalogApi>;

#[cfg(not(target_arch = "wasm32"))]
#[async_trait]
impl<T: CatalogApi + Send + Sync + ?Sized> CatalogApi for std::sync::Arc<T> {
    async fn list_projects(&self, payload: &RequestPayload) -> Result<ResultPage, ApiError> {
        (**self).list_projects(payload).await
    }

    async fn filters(&self) -> Result<Vec<FilterCategory>, ApiError> {
        (**self).filters().await
    }

    async fn project(&self, id: &str) -> Result<Sample, ApiError> {
        (**self).project(id).await
    }
}

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl<T: CatalogApi + ?Sized> CatalogApi for std::rc::Rc<T> {
    async fn list_projects(&self, payload: &RequestPayload) -> Result<ResultPage, ApiError> {
        (**self).list_projects(payload).await
    }

    async fn filters(&self) -> Result<Vec<FilterCategory>, ApiError> {
        (**self).filters().await
    }

    async fn project(&self, id: &str) -> Result<Sample, ApiError> {
        (**self).project(id).await
    }
}

/// Query pairs for a listing request.
///
/// Tag categories use the bracketed array form (`Use Case[]=Caching`) with
/// one pair per selected option.
pub fn payload_query(payload: &RequestPayload) -> Vec<(String, String)> {
    let mut query = vec![
        ("offset".to_string(), payload.offset.to_string()),
        ("limit".to_string(), payload.limit.to_string()),
        ("sortBy".to_string(), payload.sort_by.clone()),
    ];
    if let Some(text) = &payload.text_filter {
        query.push(("text_filter".to_string(), text.clone()));
    }
    for (category, options) in &payload.tags {
        let key = format!("{category}[]");
        query.extend(options.iter().map(|o| (key.clone(), o.clone())));
    }
    query
}

// ---------------------------------------------------------------------------
// reqwest implementation
// ---------------------------------------------------------------------------

#[derive(Clone, Debug)]
pub struct HttpCatalog {
    base: String,
    client: reqwest::Client,
}

impl HttpCatalog {
    /// Client for the API rooted at `base` (e.g. `https://host/api`).
    pub fn new(base: &str, timeout_secs: u64) -> Result<Self, ApiError> {
        let base = base.trim_end_matches('/').to_string();
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(timeout_secs));
        #[cfg(target_arch = "wasm32")]
        let _ = timeout_secs;
        let client = builder.build().map_err(|source| ApiError::Transport {
            url: base.clone(),
            source,
        })?;
        Ok(Self { base, client })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn shared(self) -> SharedCatalog {
        #[cfg(not(target_arch = "wasm32"))]
        {
            std::sync::Arc::new(self)
        }
        #[cfg(target_arch = "wasm32")]
        {
            std::rc::Rc::new(self)
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        query: &[(String, String)],
    ) -> Result<T, ApiError> {
        debug!(url = url.as_str(), params = query.len(), "GET");
        let resp = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().await.map_err(|source| ApiError::Transport {
            url: url.clone(),
            source,
        })?;
        serde_json::from_slice(&body).map_err(|source| ApiError::Decode { url, source })
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl CatalogApi for HttpCatalog {
    async fn list_projects(&self, payload: &RequestPayload) -> Result<ResultPage, ApiError> {
        let url = format!("{}/projects", self.base);
        self.get_json(url, &payload_query(payload)).await
    }

    async fn filters(&self) -> Result<Vec<FilterCategory>, ApiError> {
        let url = format!("{}/projects/filters", self.base);
        self.get_json(url, &[]).await
    }

    async fn project(&self, id: &str) -> Result<Sample, ApiError> {
        let url = format!("{}/project/{}", self.base, urlencoding::encode(id));
        match self.get_json(url, &[]).await {
            Err(ApiError::Status { status: 404, .. }) => Err(ApiError::NotFound(id.to_string())),
            other => other,
        }
    }
}
