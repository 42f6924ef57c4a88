//! Test harness for the server routes.
//!
//! Builds the router over a fixture catalog (or a failing one) and drives it
//! with `tower::ServiceExt::oneshot`; no sockets involved.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use marketplace_core::{FilterCategory, RequestPayload, ResultPage, Sample};
use marketplace_http::{ApiError, CatalogApi, StaticCatalog};
use marketplace_server::render::SHELL;
use marketplace_server::{build_router, AppState};
use tempfile::TempDir;
use tower::ServiceExt;

pub const API_BASE: &str = "http://api.test/api";

pub fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/catalog.json")
}

pub fn fixture_catalog() -> StaticCatalog {
    StaticCatalog::from_file(&fixture_path()).expect("fixture catalog")
}

/// Upstream where every call fails with HTTP 503.
pub struct DownCatalog;

fn down(what: &str) -> ApiError {
    ApiError::Status {
        url: format!("{API_BASE}/{what}"),
        status: 503,
    }
}

#[async_trait]
impl CatalogApi for DownCatalog {
    async fn list_projects(&self, _payload: &RequestPayload) -> Result<ResultPage, ApiError> {
        Err(down("projects"))
    }

    async fn filters(&self) -> Result<Vec<FilterCategory>, ApiError> {
        Err(down("projects/filters"))
    }

    async fn project(&self, id: &str) -> Result<Sample, ApiError> {
        Err(down(&format!("project/{id}")))
    }
}

pub struct TestServer {
    pub router: Router,
    pub dist: TempDir,
}

impl TestServer {
    /// Router over `api` with an empty dist directory and the built-in shell.
    pub fn new(api: impl CatalogApi + Send + Sync + 'static) -> Self {
        Self::with_template(api, SHELL)
    }

    pub fn with_template(api: impl CatalogApi + Send + Sync + 'static, template: &str) -> Self {
        let dist = TempDir::new().expect("temp dist dir");
        let state = Arc::new(AppState {
            api: Arc::new(api),
            api_base: API_BASE.to_string(),
            template: template.to_string(),
        });
        let router = build_router(state, dist.path());
        Self { router, dist }
    }

    /// Write a file into the dist directory.
    pub fn add_asset(&self, name: &str, content: &str) {
        std::fs::write(self.dist.path().join(name), content).expect("write asset");
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let response = self
            .router
            .clone()
            .oneshot(Request::get(uri).body(Body::empty()).expect("request"))
            .await
            .expect("router is infallible");
        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// The JSON seed embedded in a rendered document.
pub fn embedded_seed(html: &str) -> serde_json::Value {
    let open = r#"<script id="marketplace-seed" type="application/json">"#;
    let start = html.find(open).expect("seed script") + open.len();
    let end = start + html[start..].find("</script>").expect("seed script end");
    serde_json::from_str(&html[start..end]).expect("seed json")
}
