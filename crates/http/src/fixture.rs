//! In-memory catalog served from a JSON fixture.
//!
//! Lets the server run without the upstream API (`--fixture catalog.json`)
//! and gives tests a deterministic [`CatalogApi`]. Filtering is deliberately
//! plain: case-insensitive substring match on name and description, and for
//! each selected category at least one of its options must be on the sample.

use std::path::Path;
use std::time::Instant;

use async_trait::async_trait;
use marketplace_core::{FilterCategory, RequestPayload, ResultPage, Sample};
use serde::Deserialize;
use thiserror::Error;

use crate::{ApiError, CatalogApi};

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("cannot read fixture: {0}")]
    Read(#[from] std::io::Error),
    #[error("invalid fixture: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fixture file layout: `{ "samples": [...], "filters": [...] }`, samples in
/// rank order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaticCatalog {
    #[serde(default)]
    samples: Vec<Sample>,
    #[serde(default)]
    filters: Vec<FilterCategory>,
}

impl StaticCatalog {
    pub fn new(samples: Vec<Sample>, filters: Vec<FilterCategory>) -> Self {
        Self { samples, filters }
    }

    pub fn from_json(text: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, FixtureError> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

fn matches(sample: &Sample, payload: &RequestPayload) -> bool {
    if let Some(text) = &payload.text_filter {
        let needle = text.to_lowercase();
        let hit = sample.app_name.to_lowercase().contains(&needle)
            || sample.description.to_lowercase().contains(&needle);
        if !hit {
            return false;
        }
    }
    payload.tags.iter().all(|(category, wanted)| {
        sample
            .tags
            .get(category)
            .is_some_and(|have| wanted.iter().any(|w| have.contains(w)))
    })
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl CatalogApi for StaticCatalog {
    async fn list_projects(&self, payload: &RequestPayload) -> Result<ResultPage, ApiError> {
        let start = Instant::now();
        let hits: Vec<&Sample> = self.samples.iter().filter(|s| matches(s, payload)).collect();
        let rows = hits
            .iter()
            .skip(payload.offset)
            .take(payload.limit)
            .map(|s| (*s).clone())
            .collect();
        Ok(ResultPage {
            rows,
            total_results: hits.len() as u64,
            execute_time: start.elapsed().as_secs_f64(),
        })
    }

    async fn filters(&self) -> Result<Vec<FilterCategory>, ApiError> {
        Ok(self.filters.clone())
    }

    async fn project(&self, id: &str) -> Result<Sample, ApiError> {
        self.samples
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(id.to_string()))
    }
}
