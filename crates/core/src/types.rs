//! Catalog types shared by the controller, the API client and the page:
//! samples, result pages, filter categories, and the seed handed from the
//! server-side render to the browser.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Rows per page, fixed for every listing request.
pub const PAGE_SIZE: usize = 16;

/// Sort key sent with every listing request.
pub const SORT_KEY: &str = "rank";

// ---------------------------------------------------------------------------
// Catalog entries
// ---------------------------------------------------------------------------

/// A sample application as returned by the listing and single-sample APIs.
///
/// Only the fields the page renders are typed; everything else the API sends
/// is kept in `extra` so a seed round-trips without losing data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub id: String,
    #[serde(default)]
    pub app_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub app_image_urls: Vec<String>,
    /// Tag category → option names this sample carries.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, Vec<String>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Sample {
    /// Name shown on cards; falls back to the id for unnamed entries.
    pub fn display_name(&self) -> &str {
        if self.app_name.trim().is_empty() {
            &self.id
        } else {
            &self.app_name
        }
    }

    /// Every (category, option) pair on this sample, in category order.
    pub fn tag_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags
            .iter()
            .flat_map(|(cat, opts)| opts.iter().map(move |o| (cat.as_str(), o.as_str())))
    }
}

/// One page of listing results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultPage {
    #[serde(default)]
    pub rows: Vec<Sample>,
    #[serde(rename = "totalResults", default)]
    pub total_results: u64,
    /// Server-reported search time in seconds.
    #[serde(rename = "executeTime", default)]
    pub execute_time: f64,
}

/// A filter category and its options, in the order the filters API lists them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCategory {
    pub category: String,
    #[serde(default)]
    pub options: Vec<String>,
}

// ---------------------------------------------------------------------------
// Page seed
// ---------------------------------------------------------------------------

/// Data gathered by the server before the first render.
///
/// Embedded in the rendered page as JSON so the browser starts from exactly
/// the state the server rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageSeed {
    /// Base URL the browser uses for its own listing requests.
    pub api_base: String,
    #[serde(default)]
    pub initial: Option<ResultPage>,
    #[serde(default)]
    pub listing_failed: bool,
    #[serde(default)]
    pub filters: Vec<FilterCategory>,
    #[serde(default)]
    pub linked: Option<Sample>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
