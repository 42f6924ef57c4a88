//! Filter sidebar — tag checkboxes grouped by category.

mod tag_filter;

pub use tag_filter::FilterSidebar;
