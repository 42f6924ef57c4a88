//! Shareable page URL: the optional `id` parameter naming the linked sample.

/// Query parameter that carries the linked sample id.
pub const LINK_PARAM: &str = "id";

/// Path of the catalog page.
pub const PAGE_PATH: &str = "/";

/// Page URL for `path`: `path?id=<id>` with the id percent-encoded, or the
/// bare path when no sample is linked. Nothing else from the current address
/// is carried over.
pub fn share_url(path: &str, id: Option<&str>) -> String {
    match id {
        Some(id) => format!("{path}?{LINK_PARAM}={}", urlencoding::encode(id)),
        None => path.to_string(),
    }
}

/// The linked sample id in a query string, if present and non-empty.
pub fn linked_id(query: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == LINK_PARAM)
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .map(|value| value.into_owned())
        .filter(|value| !value.is_empty())
}
