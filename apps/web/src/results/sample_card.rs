//! Card for one sample in the grid.

use dioxus::prelude::*;
use marketplace_core::Sample;

use super::TagChips;
use crate::state::PageState;

#[component]
pub fn SampleCard(sample: Sample, state: PageState) -> Element {
    let name = sample.display_name().to_string();
    let image = sample.app_image_urls.first().cloned();
    let opened = sample.clone();

    rsx! {
        article {
            class: "sample-card",
            onclick: move |_| state.open_linked(opened.clone()),

            if let Some(src) = image {
                img { class: "sample-card-image", src: "{src}", alt: "{name}", loading: "lazy" }
            }
            div {
                class: "sample-card-body",
                h3 { class: "sample-card-title", "{name}" }
                p { class: "sample-card-description", "{sample.description}" }
            }
            TagChips { sample: sample.clone(), state }
        }
    }
}
