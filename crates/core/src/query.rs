//! Query-State Controller.
//!
//! Owns the text filter, tag selection and paging offset, derives the listing
//! request payload from them, and keeps the linked sample in step with the
//! page URL. The controller never performs requests itself: callers read
//! [`QueryController::derived_payload`] after each mutation and hand it to the
//! fetch collaborator.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::link::{share_url, PAGE_PATH};
use crate::paging;
use crate::tag_filter::TagToggle;
use crate::tags::TagSelection;
use crate::types::{Sample, PAGE_SIZE, SORT_KEY};

// ---------------------------------------------------------------------------
// State and payload
// ---------------------------------------------------------------------------

/// Everything that determines the listing request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    /// Never `Some("")`: an empty filter is stored as `None`.
    pub text_filter: Option<String>,
    /// Always a multiple of [`PAGE_SIZE`].
    pub offset: usize,
    pub tags: TagSelection,
}

impl QueryState {
    /// The listing request for this state.
    pub fn payload(&self) -> RequestPayload {
        RequestPayload {
            offset: self.offset,
            limit: PAGE_SIZE,
            sort_by: SORT_KEY.to_string(),
            text_filter: self.text_filter.clone(),
            tags: self.tags.selected(),
        }
    }
}

/// Parameters of one listing request. Derived from [`QueryState`], never
/// edited directly.
///
/// Serializes to the listing API's JSON shape, with one array field per tag
/// category that has something selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestPayload {
    pub offset: usize,
    pub limit: usize,
    #[serde(rename = "sortBy")]
    pub sort_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_filter: Option<String>,
    #[serde(flatten)]
    pub tags: BTreeMap<String, Vec<String>>,
}

impl Default for RequestPayload {
    fn default() -> Self {
        QueryState::default().payload()
    }
}

// ---------------------------------------------------------------------------
// Page side effects
// ---------------------------------------------------------------------------

/// Browser effects the controller asks for. Implemented over the DOM in the
/// web app and by a recorder in tests.
pub trait PageEffects {
    /// Rewrite the address bar in place: no navigation, no new history entry.
    fn replace_url(&mut self, url: &str);

    /// Bring the top of the result list into view. Best-effort.
    fn scroll_to_results(&mut self);
}

/// The deep-linked sample. Closing keeps the sample so the detail view can
/// animate out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkedSlot {
    pub sample: Option<Sample>,
    pub opened: bool,
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryController {
    state: QueryState,
    search_active: bool,
    linked: LinkedSlot,
}

impl QueryController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a sample opened from the page URL.
    pub fn with_linked_sample(sample: Option<Sample>) -> Self {
        let opened = sample.is_some();
        Self {
            linked: LinkedSlot { sample, opened },
            ..Self::default()
        }
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn tags(&self) -> &TagSelection {
        &self.state.tags
    }

    pub fn text_filter(&self) -> Option<&str> {
        self.state.text_filter.as_deref()
    }

    pub fn linked(&self) -> &LinkedSlot {
        &self.linked
    }

    // -- filters --------------------------------------------------------

    pub fn set_text_filter(&mut self, text: &str) {
        self.state.offset = 0;
        self.search_active = !text.is_empty();
        self.state.text_filter = (!text.is_empty()).then(|| text.to_string());
    }

    pub fn set_tag_value(&mut self, category: &str, option: &str, selected: bool) {
        self.state.offset = 0;
        self.state.tags.set(category, option, selected);
    }

    /// Apply a Tag Filter Panel event.
    pub fn apply_toggle(&mut self, toggle: &TagToggle) {
        self.set_tag_value(&toggle.category, &toggle.option, toggle.selected);
    }

    /// Replace the whole selection, e.g. from a tag chip on a card.
    pub fn set_tags(&mut self, tags: TagSelection) {
        self.state.offset = 0;
        self.state.tags = tags;
    }

    /// A tag picked from the search suggestions: the typed text is dropped
    /// and the listing filters on that tag alone.
    pub fn select_tag_suggestion(&mut self, category: &str, option: &str) {
        self.set_text_filter("");
        self.set_tags(TagSelection::single(category, option));
    }

    /// Back to the unfiltered first page. The search box empties with it, so
    /// the search stops being active.
    pub fn clear_filters(&mut self) {
        self.state = QueryState::default();
        self.search_active = false;
    }

    // -- paging ---------------------------------------------------------

    pub fn set_page(&mut self, page: usize, effects: &mut impl PageEffects) {
        self.state.offset = paging::offset_for_page(page);
        effects.scroll_to_results();
    }

    pub fn current_page(&self) -> usize {
        paging::current_page(self.state.offset)
    }

    pub fn total_pages(&self, total_results: Option<u64>) -> usize {
        paging::total_pages(total_results)
    }

    // -- derived --------------------------------------------------------

    pub fn derived_payload(&self) -> RequestPayload {
        self.state.payload()
    }

    /// False until the user types, and again once the search box is emptied.
    /// The featured section shows while this is false.
    pub fn is_search_active(&self) -> bool {
        self.search_active
    }

    /// Whether the "search time" badge is shown.
    pub fn show_execution_time(&self) -> bool {
        self.state.text_filter.is_some() || self.state.tags.any_selected()
    }

    // -- linked sample --------------------------------------------------

    pub fn open_linked_sample(&mut self, sample: Sample, effects: &mut impl PageEffects) {
        effects.replace_url(&share_url(PAGE_PATH, Some(&sample.id)));
        self.linked = LinkedSlot {
            sample: Some(sample),
            opened: true,
        };
    }

    pub fn close_linked_sample(&mut self, effects: &mut impl PageEffects) {
        self.linked.opened = false;
        effects.replace_url(&share_url(PAGE_PATH, None));
    }
}
