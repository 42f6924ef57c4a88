//! Server-side data-fetch step: everything the first render needs.

use marketplace_core::{PageSeed, RequestPayload};
use tracing::{debug, warn};

use crate::CatalogApi;

/// Gather the first page of results, the filter categories and, when the
/// page URL names one, the linked sample.
///
/// Never fails. A failed listing is recorded in `listing_failed` so the page
/// shows the error banner; failed filters or linked-sample lookups are logged
/// and left empty.
pub async fn load_seed<A>(api: &A, api_base: &str, linked_id: Option<&str>) -> PageSeed
where
    A: CatalogApi + ?Sized,
{
    let payload = RequestPayload::default();
    let (listing, filters, linked) = tokio::join!(
        api.list_projects(&payload),
        api.filters(),
        async {
            match linked_id {
                Some(id) => Some(api.project(id).await),
                None => None,
            }
        }
    );

    let (initial, listing_failed) = match listing {
        Ok(page) => (Some(page), false),
        Err(e) => {
            warn!(error = %e, "Initial listing failed");
            (None, true)
        }
    };

    let filters = filters.unwrap_or_else(|e| {
        warn!(error = %e, "Filter categories unavailable");
        Vec::new()
    });

    let linked = match linked {
        Some(Ok(sample)) => Some(sample),
        Some(Err(e)) => {
            warn!(error = %e, id = linked_id.unwrap_or_default(), "Linked sample unavailable");
            None
        }
        None => None,
    };

    debug!(
        rows = initial.as_ref().map(|p| p.rows.len()).unwrap_or(0),
        filters = filters.len(),
        linked = linked.is_some(),
        "Seed ready"
    );

    PageSeed {
        api_base: api_base.to_string(),
        initial,
        listing_failed,
        filters,
        linked,
    }
}
