//! Marketplace front-end — browser (or desktop) entry point.

use dioxus::prelude::*;
use marketplace_core::config::DEFAULT_API_BASE;
use marketplace_core::link::linked_id;
use marketplace_core::PageSeed;
use marketplace_http::{load_seed, HttpCatalog};
use marketplace_web::browser::{location_query, read_seed};
use marketplace_web::{Page, REQUEST_TIMEOUT_SECS};
use tracing::{info, warn};

/// API root used when the page was not served with a seed, baked in at
/// build time.
const API_BASE: Option<&str> = option_env!("MARKETPLACE_API_URL");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("marketplace=info")),
            )
            .with_target(false)
            .try_init();
    }

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_window(
                        WindowBuilder::new()
                            .with_title("Redis Marketplace")
                            .with_inner_size(LogicalSize::new(1280.0, 900.0))
                            .with_min_inner_size(LogicalSize::new(720.0, 500.0))
                            .with_resizable(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}

#[component]
fn App() -> Element {
    let seed = use_resource(|| async move {
        if let Some(seed) = read_seed().await {
            info!("Starting from embedded seed");
            return seed;
        }
        fetch_seed().await
    });

    let ready = seed.read().clone();
    match ready {
        Some(seed) => rsx! { Page { seed } },
        None => rsx! {
            div { class: "page-loading", "Loading samples\u{2026}" }
        },
    }
}

/// No server seed: run the seed step from here against the build-time API.
async fn fetch_seed() -> PageSeed {
    let base = API_BASE.unwrap_or(DEFAULT_API_BASE);
    let linked = linked_id(&location_query().await);
    match HttpCatalog::new(base, REQUEST_TIMEOUT_SECS) {
        Ok(api) => load_seed(&api, base, linked.as_deref()).await,
        Err(e) => {
            warn!(error = %e, "Cannot build API client");
            PageSeed {
                api_base: base.to_string(),
                listing_failed: true,
                ..PageSeed::default()
            }
        }
    }
}
