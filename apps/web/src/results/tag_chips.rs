use dioxus::prelude::*;
use marketplace_core::Sample;

use crate::state::PageState;

/// A sample's tags as chips. Clicking one filters the catalog on that tag
/// alone without opening the card underneath.
#[component]
pub fn TagChips(sample: Sample, state: PageState) -> Element {
    let chips: Vec<(String, String)> = sample
        .tag_pairs()
        .map(|(category, option)| (category.to_string(), option.to_string()))
        .collect();

    if chips.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "tag-chips",
            for (category, option) in chips {
                {
                    let label = option.clone();
                    rsx! {
                        button {
                            key: "{category}/{option}",
                            class: "tag-chip",
                            title: "{category}",
                            onclick: move |e: Event<MouseData>| {
                                e.stop_propagation();
                                state.select_only(&category, &option);
                            },
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
