//! Page arithmetic and the item list behind the pagination control.

use crate::types::PAGE_SIZE;

/// 1-based page containing `offset`.
pub fn current_page(offset: usize) -> usize {
    offset / PAGE_SIZE + 1
}

/// Page count shown by the pagination control.
///
/// Always at least 1: an empty or missing total still has an (empty) page 1.
pub fn total_pages(total_results: Option<u64>) -> usize {
    let pages = total_results.unwrap_or(0) / PAGE_SIZE as u64 + 1;
    usize::try_from(pages).unwrap_or(usize::MAX)
}

/// Offset of the first row on `page`. Page numbers below 1 clamp to page 1.
///
/// Saturates at the last whole page that fits in `usize`.
pub fn offset_for_page(page: usize) -> usize {
    (page.max(1) - 1)
        .checked_mul(PAGE_SIZE)
        .unwrap_or(usize::MAX / PAGE_SIZE * PAGE_SIZE)
}

// ---------------------------------------------------------------------------
// Pagination control items
// ---------------------------------------------------------------------------

/// Pages always shown at each end of the control.
const BOUNDARY_COUNT: i64 = 1;
/// Pages shown on each side of the current page.
const SIBLING_COUNT: i64 = 1;

/// One slot in the pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Previous { target: usize, disabled: bool },
    Page { number: usize, selected: bool },
    Ellipsis,
    Next { target: usize, disabled: bool },
}

/// Build the control for `current` of `total` pages: previous, first page,
/// a window around the current page, last page, next, with ellipses where
/// pages are skipped.
pub fn pagination_items(current: usize, total: usize) -> Vec<PageItem> {
    let total = total.max(1) as i64;
    let page = (current as i64).clamp(1, total);

    let start_pages = range(1, BOUNDARY_COUNT.min(total));
    let end_pages = range((total - BOUNDARY_COUNT + 1).max(BOUNDARY_COUNT + 1), total);

    let siblings_start = (page - SIBLING_COUNT)
        .min(total - BOUNDARY_COUNT - SIBLING_COUNT * 2 - 1)
        .max(BOUNDARY_COUNT + 2);
    let siblings_end = (page + SIBLING_COUNT)
        .max(BOUNDARY_COUNT + SIBLING_COUNT * 2 + 2)
        .min(end_pages.first().map(|&first| first - 2).unwrap_or(total - 1));

    let mut numbers: Vec<Option<i64>> = start_pages.into_iter().map(Some).collect();

    if siblings_start > BOUNDARY_COUNT + 2 {
        numbers.push(None);
    } else if BOUNDARY_COUNT + 1 < total - BOUNDARY_COUNT {
        numbers.push(Some(BOUNDARY_COUNT + 1));
    }

    numbers.extend(range(siblings_start, siblings_end).into_iter().map(Some));

    if siblings_end < total - BOUNDARY_COUNT - 1 {
        numbers.push(None);
    } else if total - BOUNDARY_COUNT > BOUNDARY_COUNT {
        numbers.push(Some(total - BOUNDARY_COUNT));
    }

    numbers.extend(end_pages.into_iter().map(Some));

    let mut items = Vec::with_capacity(numbers.len() + 2);
    items.push(PageItem::Previous {
        target: (page - 1).max(1) as usize,
        disabled: page <= 1,
    });
    items.extend(numbers.into_iter().map(|n| match n {
        Some(number) => PageItem::Page {
            number: number as usize,
            selected: number == page,
        },
        None => PageItem::Ellipsis,
    }));
    items.push(PageItem::Next {
        target: (page + 1).min(total) as usize,
        disabled: page >= total,
    });
    items
}

/// Inclusive range, empty when `end < start`.
fn range(start: i64, end: i64) -> Vec<i64> {
    if end < start {
        Vec::new()
    } else {
        (start..=end).collect()
    }
}
