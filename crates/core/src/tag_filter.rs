//! Tag Filter Panel model.
//!
//! The panel owns no selection state: it is handed the filter categories and
//! the current [`TagSelection`], renders one checkbox per option, and reports
//! each click as a [`TagToggle`] for the controller to apply.

use crate::tags::TagSelection;
use crate::types::FilterCategory;

/// A checkbox click: the option and the value it was switched to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagToggle {
    pub category: String,
    pub option: String,
    pub selected: bool,
}

/// One checkbox row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRow {
    pub name: String,
    pub checked: bool,
}

impl OptionRow {
    /// The event emitted when this row is clicked.
    pub fn toggle(&self, category: &str) -> TagToggle {
        TagToggle {
            category: category.to_string(),
            option: self.name.clone(),
            selected: !self.checked,
        }
    }
}

/// A category heading with its checkbox rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub category: String,
    pub options: Vec<OptionRow>,
}

/// Checkbox groups for `filters`, in input order, checked from `selection`.
pub fn panel_groups(filters: &[FilterCategory], selection: &TagSelection) -> Vec<CategoryGroup> {
    filters
        .iter()
        .map(|f| CategoryGroup {
            category: f.category.clone(),
            options: f
                .options
                .iter()
                .map(|name| OptionRow {
                    name: name.clone(),
                    checked: selection.is_selected(&f.category, name),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters() -> Vec<FilterCategory> {
        vec![
            FilterCategory {
                category: "Use Case".into(),
                options: vec!["Caching".into(), "Analytics".into()],
            },
            FilterCategory {
                category: "Language".into(),
                options: vec!["Rust".into(), "Go".into(), "Java".into()],
            },
        ]
    }

    #[test]
    fn preserves_input_order() {
        let groups = panel_groups(&filters(), &TagSelection::new());
        let cats: Vec<_> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(cats, ["Use Case", "Language"]);
        let langs: Vec<_> = groups[1].options.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(langs, ["Rust", "Go", "Java"]);
    }

    #[test]
    fn checked_state_comes_from_selection() {
        let mut sel = TagSelection::new();
        sel.set("Language", "Go", true);
        sel.set("Language", "Rust", false);
        let groups = panel_groups(&filters(), &sel);
        let checked: Vec<_> = groups[1].options.iter().map(|o| o.checked).collect();
        assert_eq!(checked, [false, true, false]);
        assert!(groups[0].options.iter().all(|o| !o.checked));
    }

    #[test]
    fn toggle_flips_current_value() {
        let mut sel = TagSelection::new();
        sel.set("Use Case", "Caching", true);
        let groups = panel_groups(&filters(), &sel);
        let ev = groups[0].options[0].toggle(&groups[0].category);
        assert_eq!(
            ev,
            TagToggle {
                category: "Use Case".into(),
                option: "Caching".into(),
                selected: false,
            }
        );
        assert!(groups[0].options[1].toggle("Use Case").selected);
    }
}
