//! Marketplace server — serves the catalog page pre-rendered with the first
//! page of results, and the compiled front-end next to it.
//!
//! # Modules
//!
//! - [`render`] — server-side render of the page and seed embedding
//! - [`routes`] — axum router, handlers and shared state
//! - [`error`] — request-level error type

pub mod error;
pub mod render;
pub mod routes;

pub use error::AppError;
pub use routes::{build_router, AppState};
