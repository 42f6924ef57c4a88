//! Results area — featured row, the main grid and pagination.

mod pagination;
mod sample_card;
mod tag_chips;

pub use tag_chips::TagChips;

use dioxus::prelude::*;

use crate::browser::RESULTS_ANCHOR_ID;
use crate::state::PageState;
use pagination::Pagination;
use sample_card::SampleCard;

const FEATURED_COUNT: usize = 4;

#[component]
pub fn ResultsPanel(state: PageState) -> Element {
    let (featured, page, pages) = {
        let controller = state.controller.read();
        let total = state.listing.read().total_results();
        (
            !controller.is_search_active(),
            controller.current_page(),
            controller.total_pages(total),
        )
    };
    let (rows, failed, loading, has_page) = {
        let listing = state.listing.read();
        (
            listing.rows().to_vec(),
            listing.has_failed(),
            listing.is_loading(),
            listing.page().is_some(),
        )
    };
    let top: Vec<_> = rows.iter().take(FEATURED_COUNT).cloned().collect();

    rsx! {
        div {
            class: "results-panel",

            if featured {
                h2 { class: "results-heading", "Featured" }
                div {
                    class: "results-grid featured",
                    for sample in top {
                        SampleCard { key: "featured-{sample.id}", sample: sample.clone(), state }
                    }
                }
            }

            h2 { class: "results-heading", "All samples" }
            div { id: RESULTS_ANCHOR_ID, class: "results-anchor" }

            if failed {
                div {
                    class: "results-error",
                    role: "alert",
                    "Server Error. Please try again later!"
                }
            } else if rows.is_empty() && has_page {
                div { class: "results-empty", "No samples match these filters" }
            } else {
                div {
                    class: if loading { "results-grid loading" } else { "results-grid" },
                    for sample in rows {
                        SampleCard { key: "{sample.id}", sample: sample.clone(), state }
                    }
                }
            }

            if has_page && !failed {
                Pagination {
                    current: page,
                    total: pages,
                    disabled: loading,
                    on_change: move |page: usize| state.set_page(page),
                }
            }
        }
    }
}
