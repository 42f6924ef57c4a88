//! Suggestions under the search box: samples to open and tags to filter on.

use crate::types::{FilterCategory, Sample};

/// Samples listed under the search box at most.
pub const MAX_SAMPLE_SUGGESTIONS: usize = 5;
/// Tags listed under the search box at most.
pub const MAX_TAG_SUGGESTIONS: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub enum Suggestion {
    /// Opens the sample as the linked sample.
    Sample(Sample),
    /// Filters on this tag alone.
    Tag { category: String, option: String },
}

/// Suggestions for the text typed so far.
///
/// Samples come from `rows` (the visible listing) whose name or description
/// contains the text; tags come from `filters` whose option name contains
/// it. Matching is case-insensitive; blank text suggests nothing. Samples
/// come first, both groups keep their input order.
pub fn suggestions(text: &str, rows: &[Sample], filters: &[FilterCategory]) -> Vec<Suggestion> {
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let samples = rows
        .iter()
        .filter(|s| {
            s.display_name().to_lowercase().contains(&needle)
                || s.description.to_lowercase().contains(&needle)
        })
        .take(MAX_SAMPLE_SUGGESTIONS)
        .cloned()
        .map(Suggestion::Sample);

    let tags = filters
        .iter()
        .flat_map(|f| f.options.iter().map(move |o| (f, o)))
        .filter(|(_, option)| option.to_lowercase().contains(&needle))
        .take(MAX_TAG_SUGGESTIONS)
        .map(|(f, option)| Suggestion::Tag {
            category: f.category.clone(),
            option: option.clone(),
        });

    samples.chain(tags).collect()
}
