//! Tag checkboxes. The component owns no selection state: every checkbox
//! reflects `selection` and reports flips through `on_toggle`.

use std::collections::BTreeSet;

use dioxus::prelude::*;
use marketplace_core::tag_filter::{panel_groups, CategoryGroup};
use marketplace_core::{FilterCategory, TagSelection, TagToggle};

/// Sidebar wrapper: heading, clear button and the [`TagFilter`] panel.
#[component]
pub fn FilterSidebar(
    filters: Vec<FilterCategory>,
    selection: TagSelection,
    has_filters: bool,
    on_toggle: EventHandler<TagToggle>,
    on_clear: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "filter-sidebar",
            div {
                class: "filter-sidebar-header",
                span { class: "filter-sidebar-title", "FILTERS" }
                if has_filters {
                    button {
                        class: "filter-clear",
                        onclick: move |_| on_clear.call(()),
                        "Clear all"
                    }
                }
            }
            if filters.is_empty() {
                div { class: "filter-empty", "No filters available" }
            } else {
                TagFilter { filters, selection, on_toggle }
            }
        }
    }
}

#[component]
pub fn TagFilter(
    filters: Vec<FilterCategory>,
    selection: TagSelection,
    on_toggle: EventHandler<TagToggle>,
) -> Element {
    let mut collapsed = use_signal(BTreeSet::<String>::new);
    let groups = panel_groups(&filters, &selection);

    rsx! {
        div {
            class: "tag-filter",
            for group in groups {
                {
                    let is_collapsed = collapsed.read().contains(&group.category);
                    let name = group.category.clone();
                    rsx! {
                        div {
                            key: "{group.category}",
                            class: "tag-category",
                            div {
                                class: "tag-category-header",
                                onclick: move |_| {
                                    let mut set = collapsed.write();
                                    if !set.remove(&name) {
                                        set.insert(name.clone());
                                    }
                                },
                                span {
                                    class: "tag-category-chevron",
                                    if is_collapsed { "\u{25B8}" } else { "\u{25BE}" }
                                }
                                span { class: "tag-category-name", "{group.category}" }
                            }
                            if !is_collapsed {
                                CategoryOptions { group: group.clone(), on_toggle }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CategoryOptions(group: CategoryGroup, on_toggle: EventHandler<TagToggle>) -> Element {
    rsx! {
        div {
            class: "tag-options",
            for row in group.options.iter() {
                {
                    let toggle = row.toggle(&group.category);
                    rsx! {
                        label {
                            key: "{row.name}",
                            class: if row.checked { "tag-option checked" } else { "tag-option" },
                            input {
                                r#type: "checkbox",
                                name: "{row.name}",
                                checked: row.checked,
                                onchange: move |_| on_toggle.call(toggle.clone()),
                            }
                            span { class: "tag-option-name", "{row.name}" }
                        }
                    }
                }
            }
        }
    }
}
