//! Browser glue: DOM effects for the controller and reading the server seed.

use dioxus::prelude::*;
use marketplace_core::{PageEffects, PageSeed};
use tracing::warn;

/// Element id of the JSON seed embedded by the server.
pub const SEED_ELEMENT_ID: &str = "marketplace-seed";

/// Element id scrolled to when the page changes.
pub const RESULTS_ANCHOR_ID: &str = "top-of-results";

/// [`PageEffects`] through `document::eval`.
pub struct BrowserEffects;

impl PageEffects for BrowserEffects {
    fn replace_url(&mut self, url: &str) {
        let Ok(url) = serde_json::to_string(url) else {
            return;
        };
        let _ = document::eval(&format!(
            "window.history.replaceState(window.history.state, '', {url});"
        ));
    }

    fn scroll_to_results(&mut self) {
        let _ = document::eval(&format!(
            r#"const el = document.getElementById("{RESULTS_ANCHOR_ID}");
if (el) {{ el.scrollIntoView({{ block: "start", behavior: "smooth" }}); }}"#
        ));
    }
}

/// The seed the server embedded in the page, if there is one.
pub async fn read_seed() -> Option<PageSeed> {
    let text: String = document::eval(&format!(
        r#"const el = document.getElementById("{SEED_ELEMENT_ID}");
return el ? el.textContent : "";"#
    ))
    .join()
    .await
    .ok()?;

    if text.trim().is_empty() {
        return None;
    }
    serde_json::from_str(&text)
        .map_err(|e| warn!(error = %e, "Ignoring unreadable page seed"))
        .ok()
}

/// `window.location.search` of the current page.
pub async fn location_query() -> String {
    document::eval("return window.location.search;")
        .join()
        .await
        .unwrap_or_default()
}
