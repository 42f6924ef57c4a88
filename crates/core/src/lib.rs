//! Marketplace core — the framework-independent half of the sample catalog page.
//!
//! Nothing in this crate performs I/O. The page, the server and the API client
//! all build on these types.
//!
//! # Modules
//!
//! - [`types`] — Catalog entries, result pages, filter categories, the page seed
//! - [`tags`] — Tag selection map (category → option → selected)
//! - [`query`] — Query-State Controller and the derived request payload
//! - [`tag_filter`] — Tag Filter Panel model and toggle events
//! - [`paging`] — Page arithmetic and pagination control items
//! - [`listing`] — Visible listing state with the stale-response guard
//! - [`suggest`] — Search-box suggestions (samples and tags)
//! - [`link`] — Shareable URL carrying the linked sample id
//! - [`config`] — `marketplace.toml` loading

pub mod config;
pub mod link;
pub mod listing;
pub mod paging;
pub mod query;
pub mod suggest;
pub mod tag_filter;
pub mod tags;
pub mod types;

pub use listing::{Listing, Ticket};
pub use query::{PageEffects, QueryController, QueryState, RequestPayload};
pub use suggest::Suggestion;
pub use tag_filter::TagToggle;
pub use tags::TagSelection;
pub use types::{FilterCategory, PageSeed, ResultPage, Sample, PAGE_SIZE, SORT_KEY};
