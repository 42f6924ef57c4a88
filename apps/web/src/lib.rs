//! Marketplace front-end — Dioxus components for the sample catalog page.
//!
//! The same [`Page`] renders on the server (pre-render from a [`PageSeed`])
//! and in the browser, where it takes over the seeded state and issues its
//! own listing requests as the user searches, filters and pages.
//!
//! [`PageSeed`]: marketplace_core::PageSeed

pub mod app;
pub mod browser;
mod linked_sample;
mod results;
mod search;
mod sidebar;
pub mod state;

pub use app::{Page, PageProps};

/// Request timeout for the browser's own listing calls.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
