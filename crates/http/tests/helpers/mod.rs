//! Shared fixtures for client integration tests: catalog builders, wrappers
//! that delay or fail upstream calls, and a mock upstream API on an
//! ephemeral port.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use marketplace_core::{FilterCategory, PageEffects, RequestPayload, ResultPage, Sample};
use marketplace_http::{ApiError, CatalogApi, StaticCatalog};
use serde_json::{json, Value};

/// `n` samples with alternating Rust/Go language tags.
pub fn catalog(n: usize) -> StaticCatalog {
    let samples = (0..n)
        .map(|i| {
            let lang = if i % 2 == 0 { "Rust" } else { "Go" };
            serde_json::from_value(json!({
                "id": i.to_string(),
                "app_name": format!("Sample {i}"),
                "description": "demo app",
                "tags": { "Language": [lang], "Use Case": ["Caching"] }
            }))
            .unwrap()
        })
        .collect();
    StaticCatalog::new(samples, filters())
}

pub fn filters() -> Vec<FilterCategory> {
    vec![
        FilterCategory {
            category: "Language".into(),
            options: vec!["Rust".into(), "Go".into()],
        },
        FilterCategory {
            category: "Use Case".into(),
            options: vec!["Caching".into()],
        },
    ]
}

pub struct NoEffects;

impl PageEffects for NoEffects {
    fn replace_url(&mut self, _url: &str) {}
    fn scroll_to_results(&mut self) {}
}

// ---------------------------------------------------------------------------
// Catalog wrappers
// ---------------------------------------------------------------------------

/// Delays listing responses by offset, so tests can make requests finish in
/// any order.
pub struct Delayed<A> {
    inner: A,
    by_offset: HashMap<usize, Duration>,
}

impl<A> Delayed<A> {
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            by_offset: HashMap::new(),
        }
    }

    pub fn delay(mut self, offset: usize, ms: u64) -> Self {
        self.by_offset.insert(offset, Duration::from_millis(ms));
        self
    }
}

#[async_trait]
impl<A: CatalogApi + Send + Sync> CatalogApi for Delayed<A> {
    async fn list_projects(&self, payload: &RequestPayload) -> Result<ResultPage, ApiError> {
        if let Some(d) = self.by_offset.get(&payload.offset) {
            tokio::time::sleep(*d).await;
        }
        self.inner.list_projects(payload).await
    }

    async fn filters(&self) -> Result<Vec<FilterCategory>, ApiError> {
        self.inner.filters().await
    }

    async fn project(&self, id: &str) -> Result<Sample, ApiError> {
        self.inner.project(id).await
    }
}

/// Fails the calls it is told to fail, delegates the rest.
pub struct Failing<A> {
    pub inner: A,
    pub listing: bool,
    pub filters: bool,
}

fn upstream_down(url: &str) -> ApiError {
    ApiError::Status {
        url: url.to_string(),
        status: 503,
    }
}

#[async_trait]
impl<A: CatalogApi + Send + Sync> CatalogApi for Failing<A> {
    async fn list_projects(&self, payload: &RequestPayload) -> Result<ResultPage, ApiError> {
        if self.listing {
            return Err(upstream_down("/projects"));
        }
        self.inner.list_projects(payload).await
    }

    async fn filters(&self) -> Result<Vec<FilterCategory>, ApiError> {
        if self.filters {
            return Err(upstream_down("/projects/filters"));
        }
        self.inner.filters().await
    }

    async fn project(&self, id: &str) -> Result<Sample, ApiError> {
        self.inner.project(id).await
    }
}

// ---------------------------------------------------------------------------
// Mock upstream
// ---------------------------------------------------------------------------

/// A mock listing API. `base` ends in `/api`; `/api/broken` answers 503 for
/// every route and `/api/garbled` answers 200 with a non-JSON body.
pub struct Upstream {
    pub base: String,
    pub queries: Arc<Mutex<Vec<String>>>,
}

pub async fn spawn_upstream() -> Upstream {
    let queries = Arc::new(Mutex::new(Vec::new()));

    let app = Router::new()
        .route("/api/projects", get(projects))
        .route("/api/projects/filters", get(|| async { Json(json!(filters())) }))
        .route("/api/project/{id}", get(project))
        .route("/api/broken/projects", get(|| async { StatusCode::SERVICE_UNAVAILABLE }))
        .route("/api/garbled/projects", get(|| async { "<html>oops</html>" }))
        .with_state(queries.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock upstream");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock upstream");
    });

    Upstream {
        base: format!("http://{addr}/api"),
        queries,
    }
}

async fn projects(
    State(queries): State<Arc<Mutex<Vec<String>>>>,
    RawQuery(raw): RawQuery,
) -> Json<Value> {
    queries.lock().unwrap().push(raw.unwrap_or_default());
    Json(json!({
        "rows": [{ "id": "1", "app_name": "Rate limiter" }],
        "totalResults": 1,
        "executeTime": 0.002
    }))
}

async fn project(Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    if id == "1" {
        Ok(Json(json!({ "id": "1", "app_name": "Rate limiter" })))
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}
