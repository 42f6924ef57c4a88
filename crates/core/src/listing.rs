//! Visible listing state with a stale-response guard.
//!
//! Every request takes a [`Ticket`] from [`Listing::begin`]. Only the ticket
//! handed out last may change what is shown; earlier tickets that complete
//! afterwards are dropped, so out-of-order responses never flicker through.

use crate::types::{ResultPage, Sample};

/// Generation number of one listing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing {
    page: Option<ResultPage>,
    failed: bool,
    loading: bool,
    issued: u64,
}

impl Listing {
    /// State taken over from the server-side render.
    pub fn seeded(page: Option<ResultPage>, failed: bool) -> Self {
        Self {
            page,
            failed,
            ..Self::default()
        }
    }

    /// Register a new request. Supersedes every ticket issued before it.
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        self.loading = true;
        Ticket(self.issued)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.issued
    }

    /// Apply the outcome of `ticket`'s request. Returns false, leaving the
    /// state untouched, when a newer request has been issued since.
    ///
    /// A failure keeps the previous rows but flags the listing as failed.
    pub fn complete<E>(&mut self, ticket: Ticket, result: Result<ResultPage, E>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.page = Some(page);
                self.failed = false;
            }
            Err(_) => self.failed = true,
        }
        true
    }

    pub fn page(&self) -> Option<&ResultPage> {
        self.page.as_ref()
    }

    pub fn rows(&self) -> &[Sample] {
        self.page.as_ref().map(|p| p.rows.as_slice()).unwrap_or(&[])
    }

    pub fn total_results(&self) -> Option<u64> {
        self.page.as_ref().map(|p| p.total_results)
    }

    /// Search time in seconds, 0 before any response.
    pub fn execute_time(&self) -> f64 {
        self.page.as_ref().map(|p| p.execute_time).unwrap_or(0.0)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_failed(&self) -> bool {
        self.failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page_of(ids: &[&str], total: u64) -> ResultPage {
        let rows = ids
            .iter()
            .map(|id| serde_json::from_value(json!({ "id": id })).unwrap())
            .collect();
        ResultPage {
            rows,
            total_results: total,
            execute_time: 0.01,
        }
    }

    fn ids(listing: &Listing) -> Vec<&str> {
        listing.rows().iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn latest_request_wins_when_it_resolves_first() {
        let mut listing = Listing::default();
        let first = listing.begin();
        let second = listing.begin();

        assert!(listing.complete::<()>(second, Ok(page_of(&["new"], 1))));
        assert!(!listing.is_loading());

        assert!(!listing.complete::<()>(first, Ok(page_of(&["old"], 1))));
        assert_eq!(ids(&listing), ["new"]);
    }

    #[test]
    fn stale_response_does_not_clear_loading() {
        let mut listing = Listing::default();
        let first = listing.begin();
        let _second = listing.begin();
        assert!(!listing.complete::<()>(first, Ok(page_of(&["old"], 1))));
        assert!(listing.is_loading());
        assert!(listing.rows().is_empty());
    }

    #[test]
    fn failure_keeps_rows_and_sets_flag() {
        let mut listing = Listing::seeded(Some(page_of(&["a", "b"], 2)), false);
        let t = listing.begin();
        assert!(listing.complete(t, Err("boom")));
        assert!(listing.has_failed());
        assert_eq!(ids(&listing), ["a", "b"]);

        let t = listing.begin();
        assert!(listing.complete::<()>(t, Ok(page_of(&["c"], 1))));
        assert!(!listing.has_failed());
    }

    #[test]
    fn stale_failure_is_ignored() {
        let mut listing = Listing::default();
        let first = listing.begin();
        let second = listing.begin();
        assert!(listing.complete::<&str>(second, Ok(page_of(&["ok"], 1))));
        assert!(!listing.complete(first, Err("late")));
        assert!(!listing.has_failed());
    }

    #[test]
    fn seeded_state_exposes_totals() {
        let listing = Listing::seeded(Some(page_of(&["a"], 40)), false);
        assert_eq!(listing.total_results(), Some(40));
        assert!(!listing.is_loading());
        assert!(Listing::default().total_results().is_none());
        assert_eq!(Listing::default().execute_time(), 0.0);
    }
}
