//! Guarded listing fetch.
//!
//! The ticket is taken before the request goes out and checked when it comes
//! back, so a slow response to an older payload can never replace the rows
//! of a newer one.

use std::future::Future;
use std::sync::Mutex;

use marketplace_core::{Listing, RequestPayload, ResultPage, Ticket};
use tracing::{debug, warn};

use crate::{ApiError, CatalogApi};

/// Somewhere a [`Listing`] lives for the duration of a request. The listing
/// is only borrowed on either side of the request, never across it.
pub trait ListingHandle {
    fn begin(&mut self) -> Ticket;
    fn complete(&mut self, ticket: Ticket, result: Result<ResultPage, ApiError>) -> bool;
}

impl ListingHandle for &Mutex<Listing> {
    fn begin(&mut self) -> Ticket {
        match self.lock() {
            Ok(mut listing) => listing.begin(),
            Err(poisoned) => poisoned.into_inner().begin(),
        }
    }

    fn complete(&mut self, ticket: Ticket, result: Result<ResultPage, ApiError>) -> bool {
        match self.lock() {
            Ok(mut listing) => listing.complete(ticket, result),
            Err(poisoned) => poisoned.into_inner().complete(ticket, result),
        }
    }
}

/// Issue a ticket for `payload` now, and return the request that applies its
/// response only if nothing newer was issued in the meantime. The future
/// resolves to whether the response was applied.
///
/// The ticket is taken when this function is called, not when the future is
/// first polled, so call order alone decides which request is newest.
pub fn fetch_listing<A, H>(
    api: A,
    mut listing: H,
    payload: RequestPayload,
) -> impl Future<Output = bool>
where
    A: CatalogApi,
    H: ListingHandle,
{
    let ticket = listing.begin();
    async move {
        let result = api.list_projects(&payload).await;
        if let Err(e) = &result {
            warn!(error = %e, offset = payload.offset, "Listing request failed");
        }
        let applied = listing.complete(ticket, result);
        if !applied {
            debug!(?ticket, offset = payload.offset, "Discarded superseded listing response");
        }
        applied
    }
}
