//! Server-side seed step.

mod helpers;

use helpers::{catalog, filters, Failing};
use marketplace_http::load_seed;

#[tokio::test]
async fn seed_holds_first_page_filters_and_linked_sample() {
    let api = catalog(20);
    let seed = load_seed(&api, "http://api", Some("7")).await;

    assert_eq!(seed.api_base, "http://api");
    assert!(!seed.listing_failed);
    let initial = seed.initial.expect("initial page");
    assert_eq!(initial.rows.len(), 16);
    assert_eq!(initial.total_results, 20);
    assert_eq!(seed.filters, filters());
    assert_eq!(seed.linked.map(|s| s.id), Some("7".to_string()));
}

#[tokio::test]
async fn unknown_linked_sample_is_dropped() {
    let seed = load_seed(&catalog(3), "http://api", Some("nope")).await;
    assert!(seed.linked.is_none());
    assert!(seed.initial.is_some());
}

#[tokio::test]
async fn listing_failure_is_flagged_not_fatal() {
    let api = Failing {
        inner: catalog(3),
        listing: true,
        filters: false,
    };
    let seed = load_seed(&api, "http://api", None).await;
    assert!(seed.listing_failed);
    assert!(seed.initial.is_none());
    assert_eq!(seed.filters.len(), 2);
}

#[tokio::test]
async fn filters_failure_leaves_empty_sidebar() {
    let api = Failing {
        inner: catalog(3),
        listing: false,
        filters: true,
    };
    let seed = load_seed(&api, "http://api", None).await;
    assert!(!seed.listing_failed);
    assert!(seed.filters.is_empty());
}
