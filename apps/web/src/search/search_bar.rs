//! Free-text search input with a suggestion dropdown.

use dioxus::prelude::*;
use marketplace_core::suggest::suggestions;
use marketplace_core::{FilterCategory, Suggestion};

use crate::state::PageState;

#[component]
pub fn SearchBar(state: PageState, filters: Vec<FilterCategory>) -> Element {
    let mut open = use_signal(|| false);

    let text = state
        .controller
        .read()
        .text_filter()
        .unwrap_or_default()
        .to_string();
    let has_text = !text.is_empty();
    let items = if open() {
        suggestions(&text, state.listing.read().rows(), &filters)
    } else {
        Vec::new()
    };

    rsx! {
        div {
            class: if has_text { "search-field has-query" } else { "search-field" },

            svg {
                class: "search-icon",
                width: "16",
                height: "16",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                circle { cx: "11", cy: "11", r: "8" }
                line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
            }

            input {
                class: "search-input",
                r#type: "search",
                placeholder: "Search",
                aria_label: "Search samples",
                aria_autocomplete: "list",
                value: "{text}",
                oninput: move |e: Event<FormData>| {
                    open.set(true);
                    state.set_text_filter(&e.value());
                },
                onkeydown: move |e: Event<KeyboardData>| {
                    if e.key() == Key::Escape {
                        open.set(false);
                    }
                },
            }

            if has_text {
                button {
                    class: "search-clear",
                    aria_label: "Clear search",
                    onclick: move |_| {
                        open.set(false);
                        state.set_text_filter("");
                    },
                    "\u{00D7}"
                }
            }

            if !items.is_empty() {
                ul {
                    class: "search-suggestions",
                    role: "listbox",
                    for item in items {
                        SuggestionRow {
                            suggestion: item,
                            on_pick: move |picked: Suggestion| {
                                open.set(false);
                                state.pick_suggestion(picked);
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SuggestionRow(suggestion: Suggestion, on_pick: EventHandler<Suggestion>) -> Element {
    let (kind, label, detail) = match &suggestion {
        Suggestion::Sample(sample) => (
            "sample",
            sample.display_name().to_string(),
            "Sample".to_string(),
        ),
        Suggestion::Tag { category, option } => ("tag", option.clone(), category.clone()),
    };

    rsx! {
        li {
            class: "search-suggestion search-suggestion-{kind}",
            role: "option",
            // mousedown, so the pick lands before the input loses focus
            onmousedown: move |e: Event<MouseData>| {
                e.prevent_default();
                on_pick.call(suggestion.clone());
            },
            span { class: "search-suggestion-label", "{label}" }
            span { class: "search-suggestion-detail", "{detail}" }
        }
    }
}
