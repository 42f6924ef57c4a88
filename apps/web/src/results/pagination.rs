use dioxus::prelude::*;
use marketplace_core::paging::{pagination_items, PageItem};

#[component]
pub fn Pagination(
    current: usize,
    total: usize,
    disabled: bool,
    on_change: EventHandler<usize>,
) -> Element {
    let items = pagination_items(current, total);

    rsx! {
        nav {
            class: "pagination",
            aria_label: "pagination",
            for (idx, item) in items.into_iter().enumerate() {
                {
                    match item {
                        PageItem::Previous { target, disabled: at_start } => rsx! {
                            button {
                                key: "{idx}",
                                class: "pagination-step",
                                aria_label: "Go to previous page",
                                disabled: disabled || at_start,
                                onclick: move |_| on_change.call(target),
                                "\u{2039}"
                            }
                        },
                        PageItem::Page { number, selected } => rsx! {
                            button {
                                key: "{idx}",
                                class: if selected { "pagination-page selected" } else { "pagination-page" },
                                aria_current: if selected { "page" } else { "false" },
                                disabled,
                                onclick: move |_| {
                                    if !selected {
                                        on_change.call(number);
                                    }
                                },
                                "{number}"
                            }
                        },
                        PageItem::Ellipsis => rsx! {
                            span { key: "{idx}", class: "pagination-ellipsis", "\u{2026}" }
                        },
                        PageItem::Next { target, disabled: at_end } => rsx! {
                            button {
                                key: "{idx}",
                                class: "pagination-step",
                                aria_label: "Go to next page",
                                disabled: disabled || at_end,
                                onclick: move |_| on_change.call(target),
                                "\u{203A}"
                            }
                        },
                    }
                }
            }
        }
    }
}
