//! Panel for the sample named in the page URL (or opened from a card).

use dioxus::prelude::*;

use crate::results::TagChips;
use crate::state::PageState;

/// Kept mounted after closing so the panel collapses instead of vanishing;
/// renders nothing until a sample has been linked.
#[component]
pub fn LinkedSampleView(state: PageState) -> Element {
    let (sample, opened) = {
        let controller = state.controller.read();
        let slot = controller.linked();
        (slot.sample.clone(), slot.opened)
    };
    let Some(sample) = sample else {
        return rsx! {};
    };

    let name = sample.display_name().to_string();
    let images = sample.app_image_urls.clone();

    rsx! {
        section {
            class: if opened { "linked-sample open" } else { "linked-sample closed" },
            aria_hidden: if opened { "false" } else { "true" },

            div {
                class: "linked-sample-header",
                h2 { class: "linked-sample-title", "{name}" }
                button {
                    class: "linked-sample-close",
                    aria_label: "Close",
                    onclick: move |_| state.close_linked(),
                    "\u{00D7}"
                }
            }

            if !images.is_empty() {
                div {
                    class: "linked-sample-gallery",
                    for src in images {
                        img { key: "{src}", class: "linked-sample-image", src: "{src}", alt: "{name}" }
                    }
                }
            }

            p { class: "linked-sample-description", "{sample.description}" }

            if let Some(repo) = sample.repo_url.clone() {
                a {
                    class: "linked-sample-repo",
                    href: "{repo}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "View on GitHub"
                }
            }

            TagChips { sample: sample.clone(), state }
        }
    }
}
