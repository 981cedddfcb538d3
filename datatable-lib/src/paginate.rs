//! Page slicing. Pages are numbered from 1.

use std::ops::Range;

/// Rows per page when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Number of pages needed for `total` rows.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Index range of `page` within `total` rows, clipped to bounds.
///
/// Page 0 and pages past the end produce an empty range.
pub fn page_bounds(total: usize, page: usize, page_size: usize) -> Range<usize> {
    if page == 0 || page_size == 0 {
        return 0..0;
    }

    let start = (page - 1).saturating_mul(page_size);
    if start >= total {
        return total..total;
    }
    let end = start.saturating_add(page_size).min(total);
    start..end
}

/// The items on `page`.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    &items[page_bounds(items.len(), page, page_size)]
}
