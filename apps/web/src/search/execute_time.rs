use dioxus::prelude::*;

use crate::state::PageState;

/// "Search time" readout, shown only while a search or tag filter is active.
#[component]
pub fn ExecuteTime(state: PageState) -> Element {
    if !state.controller.read().show_execution_time() {
        return rsx! {
            div { class: "execute-time hidden" }
        };
    }

    let secs = format_secs(state.listing.read().execute_time());

    rsx! {
        div {
            class: "execute-time",
            span { class: "execute-time-label", "Search time:" }
            span { class: "execute-time-value", " {secs} secs" }
        }
    }
}

/// Seconds with three decimals, as the search time readout shows them.
fn format_secs(secs: f64) -> String {
    format!("{secs:.3}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_time_has_three_decimals() {
        assert_eq!(format_secs(0.1 + 0.2), "0.300");
        assert_eq!(format_secs(0.0), "0.000");
        assert_eq!(format_secs(1.23456), "1.235");
    }
}
