//! Pagination control model.
//!
//! Computes which page buttons a pagination bar shows. Near the edges the bar
//! shows a run of leading or trailing pages; in the middle it shows the first
//! page, the current page with its siblings, and the last page, with `Dots`
//! standing in for the skipped runs.

use crate::paginate::page_count;

/// Sibling pages shown on each side of the current page.
pub const DEFAULT_SIBLING_COUNT: usize = 1;

/// One slot of a pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A page button (1-based).
    Page(usize),
    /// An ellipsis standing for skipped pages.
    Dots,
}

/// Pagination bar state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: usize,
    pub total_count: usize,
    pub page_size: usize,
    pub sibling_count: usize,
}

impl Pagination {
    pub fn new(current_page: usize, total_count: usize, page_size: usize) -> Self {
        Self {
            current_page,
            total_count,
            page_size,
            sibling_count: DEFAULT_SIBLING_COUNT,
        }
    }

    /// Set the number of siblings around the current page.
    pub fn with_siblings(mut self, sibling_count: usize) -> Self {
        self.sibling_count = sibling_count;
        self
    }

    pub fn total_pages(&self) -> usize {
        page_count(self.total_count, self.page_size)
    }

    /// The buttons to show.
    pub fn range(&self) -> Vec<PageItem> {
        pagination_range(
            self.total_count,
            self.page_size,
            self.sibling_count,
            self.current_page,
        )
    }

    /// Whether the bar is drawn at all.
    ///
    /// Hidden when there is no current page or fewer than two buttons.
    pub fn is_visible(&self) -> bool {
        self.current_page != 0 && self.range().len() >= 2
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Target of the "previous" arrow, or `None` when it is disabled.
    pub fn previous(&self) -> Option<usize> {
        self.has_previous().then(|| self.current_page - 1)
    }

    /// Target of the "next" arrow, or `None` when it is disabled.
    pub fn next(&self) -> Option<usize> {
        self.has_next().then(|| self.current_page + 1)
    }
}

fn pages(range: std::ops::RangeInclusive<usize>) -> impl Iterator<Item = PageItem> {
    range.map(PageItem::Page)
}

/// Page buttons for a bar over `total_count` rows.
///
/// When every page fits (first, last, current, two dots and the siblings) all
/// pages are listed. Otherwise skipped runs collapse into [`PageItem::Dots`].
pub fn pagination_range(
    total_count: usize,
    page_size: usize,
    sibling_count: usize,
    current_page: usize,
) -> Vec<PageItem> {
    let total_pages = page_count(total_count, page_size);

    // first + last + current + 2 dots
    let total_page_numbers = sibling_count + 5;
    if total_page_numbers >= total_pages {
        return pages(1..=total_pages).collect();
    }

    let left_sibling = current_page.saturating_sub(sibling_count).max(1);
    let right_sibling = current_page.saturating_add(sibling_count).min(total_pages);

    let show_left_dots = left_sibling > 2;
    let show_right_dots = right_sibling < total_pages.saturating_sub(2);

    let edge_item_count = 3 + 2 * sibling_count;
    let trailing_start = (total_pages + 1).saturating_sub(edge_item_count);

    match (show_left_dots, show_right_dots) {
        (false, true) if edge_item_count + 1 < total_pages => pages(1..=edge_item_count)
            .chain([PageItem::Dots, PageItem::Page(total_pages)])
            .collect(),
        (true, false) if trailing_start > 2 => [PageItem::Page(1), PageItem::Dots]
            .into_iter()
            .chain(pages(trailing_start..=total_pages))
            .collect(),
        (true, true) => [PageItem::Page(1), PageItem::Dots]
            .into_iter()
            .chain(pages(left_sibling..=right_sibling))
            .chain([PageItem::Dots, PageItem::Page(total_pages)])
            .collect(),
        // Too few pages for the dots to skip anything.
        _ => pages(1..=total_pages).collect(),
    }
}
