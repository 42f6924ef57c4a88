//! Page state: the controller, the visible listing and the API client, held
//! in signals owned by [`Page`](crate::Page) and passed to children as props.

use dioxus::prelude::*;
use marketplace_core::{
    Listing, QueryController, ResultPage, Sample, Suggestion, TagSelection, TagToggle, Ticket,
};
use marketplace_http::{fetch_listing, ApiError, ListingHandle, SharedCatalog};
use tracing::warn;

use crate::browser::BrowserEffects;

/// Handles to the page's signals. `Copy`, so every event handler can own one.
#[derive(Clone, Copy, PartialEq)]
pub struct PageState {
    pub controller: Signal<QueryController>,
    pub listing: Signal<Listing>,
    pub api: Signal<Option<SharedCatalog>>,
}

impl PageState {
    // -- filters (each one refetches) ------------------------------------

    pub fn set_text_filter(mut self, text: &str) {
        self.controller.write().set_text_filter(text);
        self.refetch();
    }

    pub fn toggle_tag(mut self, toggle: TagToggle) {
        self.controller.write().apply_toggle(&toggle);
        self.refetch();
    }

    /// Filter on a single tag, e.g. from a chip on a card.
    pub fn select_only(mut self, category: &str, option: &str) {
        self.controller
            .write()
            .set_tags(TagSelection::single(category, option));
        self.refetch();
    }

    pub fn clear_filters(mut self) {
        self.controller.write().clear_filters();
        self.refetch();
    }

    pub fn set_page(mut self, page: usize) {
        self.controller.write().set_page(page, &mut BrowserEffects);
        self.refetch();
    }

    /// A search suggestion was clicked. Samples open without a refetch.
    pub fn pick_suggestion(mut self, suggestion: Suggestion) {
        match suggestion {
            Suggestion::Sample(sample) => self.open_linked(sample),
            Suggestion::Tag { category, option } => {
                self.controller
                    .write()
                    .select_tag_suggestion(&category, &option);
                self.refetch();
            }
        }
    }

    // -- linked sample (query unchanged, no refetch) ---------------------

    pub fn open_linked(mut self, sample: Sample) {
        self.controller
            .write()
            .open_linked_sample(sample, &mut BrowserEffects);
    }

    pub fn close_linked(mut self) {
        self.controller.write().close_linked_sample(&mut BrowserEffects);
    }

    /// Request the listing for the current payload. The ticket is issued
    /// before this returns; the response lands later on the listing signal.
    fn refetch(mut self) {
        let payload = self.controller.read().derived_payload();
        let api = self.api.read().clone();
        match api {
            Some(api) => {
                let pending = fetch_listing(api, SignalListing(self.listing), payload);
                spawn(async move {
                    pending.await;
                });
            }
            None => {
                warn!("No API client, listing unavailable");
                let ticket = self.listing.write().begin();
                self.listing.write().complete::<()>(ticket, Err(()));
            }
        }
    }
}

/// [`ListingHandle`] over the listing signal.
struct SignalListing(Signal<Listing>);

impl ListingHandle for SignalListing {
    fn begin(&mut self) -> Ticket {
        self.0.write().begin()
    }

    fn complete(&mut self, ticket: Ticket, result: Result<ResultPage, ApiError>) -> bool {
        self.0.write().complete(ticket, result)
    }
}
