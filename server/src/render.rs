//! Server-side render of [`Page`] and the HTML document around it.
//!
//! The document is the front-end's `index.html` when one is deployed, or a
//! built-in shell otherwise. The rendered markup goes into its mount point
//! (`<div id="main">`) and the seed follows as inline JSON the browser reads
//! back on start-up.

use std::path::Path;

use dioxus::prelude::*;
use marketplace_core::PageSeed;
use marketplace_web::browser::SEED_ELEMENT_ID;
use marketplace_web::{Page, PageProps};
use tracing::{debug, info};

/// Mount point the front-end bundle renders into.
pub const MOUNT_POINT: &str = r#"<div id="main"></div>"#;

/// Document used when no front-end `index.html` is deployed.
pub const SHELL: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Redis Marketplace</title>
</head>
<body>
<div id="main"></div>
</body>
</html>
"#;

/// `dist_dir/index.html`, or [`SHELL`] when it is missing or has no mount
/// point.
pub fn load_template(dist_dir: &Path) -> String {
    let path = dist_dir.join("index.html");
    match std::fs::read_to_string(&path) {
        Ok(html) if html.contains(MOUNT_POINT) => {
            info!(path = %path.display(), "Using front-end document");
            html
        }
        Ok(_) => {
            info!(path = %path.display(), "No mount point in front-end document, using shell");
            SHELL.to_string()
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "No front-end document, using shell");
            SHELL.to_string()
        }
    }
}

/// Render the page body for `seed`.
pub fn render_page(seed: &PageSeed) -> String {
    let mut dom = VirtualDom::new_with_props(Page, PageProps { seed: seed.clone() });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Seed JSON safe to place inside a `<script>` element.
pub fn seed_script(seed: &PageSeed) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(seed)?.replace('<', "\\u003c");
    Ok(format!(
        r#"<script id="{SEED_ELEMENT_ID}" type="application/json">{json}</script>"#
    ))
}

/// Full document: `template` with the rendered page and seed at its mount
/// point. A template without one gets both appended.
pub fn render_document(template: &str, seed: &PageSeed) -> Result<String, serde_json::Error> {
    let body = render_page(seed);
    let script = seed_script(seed)?;
    let filled = format!(r#"<div id="main">{body}</div>{script}"#);
    if template.contains(MOUNT_POINT) {
        Ok(template.replacen(MOUNT_POINT, &filled, 1))
    } else {
        Ok(format!("{template}{filled}"))
    }
}
