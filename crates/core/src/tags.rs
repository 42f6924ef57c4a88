//! Tag selection: category → option → selected.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which filter options are checked, grouped by category.
///
/// Absent entries read as unselected. An entry explicitly set to `false` is
/// kept in the map but behaves exactly like an absent one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSelection(BTreeMap<String, BTreeMap<String, bool>>);

impl TagSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// A selection with exactly one option checked.
    pub fn single(category: &str, option: &str) -> Self {
        let mut sel = Self::new();
        sel.set(category, option, true);
        sel
    }

    /// Set one option, creating its category if needed.
    pub fn set(&mut self, category: &str, option: &str, selected: bool) {
        self.0
            .entry(category.to_string())
            .or_default()
            .insert(option.to_string(), selected);
    }

    pub fn is_selected(&self, category: &str, option: &str) -> bool {
        self.0
            .get(category)
            .and_then(|opts| opts.get(option))
            .copied()
            .unwrap_or(false)
    }

    /// Selected option names per category. Categories with nothing selected
    /// are left out.
    pub fn selected(&self) -> BTreeMap<String, Vec<String>> {
        self.0
            .iter()
            .filter_map(|(cat, opts)| {
                let on: Vec<String> = opts
                    .iter()
                    .filter(|(_, checked)| **checked)
                    .map(|(name, _)| name.clone())
                    .collect();
                (!on.is_empty()).then(|| (cat.clone(), on))
            })
            .collect()
    }

    pub fn any_selected(&self) -> bool {
        self.0.values().any(|opts| opts.values().any(|&v| v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_entries_read_as_unselected() {
        let sel = TagSelection::new();
        assert!(!sel.is_selected("Language", "Rust"));
        assert!(!sel.any_selected());
    }

    #[test]
    fn last_write_wins() {
        let mut sel = TagSelection::new();
        sel.set("Language", "Rust", true);
        sel.set("Language", "Go", true);
        sel.set("Language", "Rust", false);
        assert!(!sel.is_selected("Language", "Rust"));
        assert!(sel.is_selected("Language", "Go"));
        assert_eq!(sel.selected()["Language"], vec!["Go".to_string()]);
    }

    #[test]
    fn all_false_category_is_omitted() {
        let mut sel = TagSelection::new();
        sel.set("Use Case", "Caching", true);
        sel.set("Use Case", "Caching", false);
        assert!(!sel.is_empty());
        assert!(sel.selected().is_empty());
        assert!(!sel.any_selected());
    }
}
