//! Root page component — hero, search toolbar, filter sidebar, results.

use dioxus::prelude::*;
use marketplace_core::{Listing, PageSeed, QueryController, TagToggle};
use marketplace_http::HttpCatalog;
use tracing::warn;

use crate::linked_sample::LinkedSampleView;
use crate::results::ResultsPanel;
use crate::search::{ExecuteTime, SearchBar};
use crate::sidebar::FilterSidebar;
use crate::state::PageState;
use crate::REQUEST_TIMEOUT_SECS;

static VARIABLES_CSS: Asset = asset!("/assets/styles/variables.css");
static APP_CSS: Asset = asset!("/assets/styles/app.css");

const ADD_APP_URL: &str = "https://github.com/redis-developer/adding-apps-to-redis-marketplace";

#[derive(Props, Clone, PartialEq)]
pub struct PageProps {
    pub seed: PageSeed,
}

/// The catalog page, started from `seed`.
///
/// All state lives in signals created here; children get [`PageState`] and
/// plain values as props.
#[allow(non_snake_case)]
pub fn Page(props: PageProps) -> Element {
    let seed = props.seed;
    let controller = use_signal(|| QueryController::with_linked_sample(seed.linked.clone()));
    let listing = use_signal(|| Listing::seeded(seed.initial.clone(), seed.listing_failed));
    let api = use_signal(|| {
        HttpCatalog::new(&seed.api_base, REQUEST_TIMEOUT_SECS)
            .map_err(|e| warn!(error = %e, "Cannot build API client"))
            .ok()
            .map(HttpCatalog::shared)
    });
    let state = PageState {
        controller,
        listing,
        api,
    };

    let selection = controller.read().tags().clone();
    let has_filters = controller.read().show_execution_time();

    rsx! {
        document::Stylesheet { href: VARIABLES_CSS }
        document::Stylesheet { href: APP_CSS }

        div {
            class: "page",

            Header {}
            Hero {}

            // Add-app link + search
            div {
                class: "toolbar",
                a {
                    class: "add-app-link",
                    href: ADD_APP_URL,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    span { class: "add-app-icon", "+" }
                    "Add your App"
                }
                div {
                    class: "toolbar-search",
                    SearchBar { state, filters: seed.filters.clone() }
                    ExecuteTime { state }
                }
            }

            div {
                class: "card-area",
                LinkedSampleView { state }

                div {
                    class: "catalog",
                    aside {
                        class: "catalog-filters",
                        FilterSidebar {
                            filters: seed.filters.clone(),
                            selection,
                            has_filters,
                            on_toggle: move |toggle: TagToggle| state.toggle_tag(toggle),
                            on_clear: move |_| state.clear_filters(),
                        }
                    }
                    section {
                        class: "catalog-results",
                        ResultsPanel { state }
                    }
                }
            }

            Footer {}
        }
    }
}

#[component]
fn Header() -> Element {
    rsx! {
        header {
            class: "site-header",
            a { class: "site-header-brand", href: "/", "Redis Marketplace" }
        }
    }
}

#[component]
fn Hero() -> Element {
    rsx! {
        div {
            class: "hero",
            h1 { class: "hero-title", "Redis", br {}, "Marketplace" }
            p {
                class: "hero-tagline",
                "See what you can build with Redis.", br {}, "Get started with code samples."
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        footer {
            class: "site-footer",
            span { "Samples are contributed by the community." }
        }
    }
}
