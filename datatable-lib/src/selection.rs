//! Row selection by deep equality.

use crate::record::Record;

/// Selected rows.
///
/// Rows are compared structurally, so a row stays selected across sorting,
/// filtering and paging as long as its contents are unchanged. Each distinct
/// row appears at most once, in the order it was selected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    rows: Vec<Record>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a row is selected.
    pub fn is_selected(&self, row: &Record) -> bool {
        self.rows.iter().any(|selected| selected == row)
    }

    /// Select a row. Returns `true` if it was not selected before.
    pub fn select(&mut self, row: &Record) -> bool {
        if self.is_selected(row) {
            return false;
        }
        self.rows.push(row.clone());
        true
    }

    /// Deselect a row. Returns `true` if it was selected.
    pub fn deselect(&mut self, row: &Record) -> bool {
        let before = self.rows.len();
        self.rows.retain(|selected| selected != row);
        self.rows.len() != before
    }

    /// Flip a row's selection. Returns whether the row is now selected.
    pub fn toggle(&mut self, row: &Record) -> bool {
        if self.deselect(row) {
            false
        } else {
            self.rows.push(row.clone());
            true
        }
    }

    /// Whether every row of `page` is selected. Vacuously true for an empty page.
    pub fn all_selected(&self, page: &[&Record]) -> bool {
        let selected = page.iter().filter(|row| self.is_selected(row)).count();
        selected == page.len()
    }

    /// Select the whole page, or deselect it if it is already fully selected.
    ///
    /// Returns whether the page is selected afterwards.
    pub fn toggle_page(&mut self, page: &[&Record]) -> bool {
        if self.all_selected(page) {
            self.rows.retain(|selected| !page.contains(&selected));
            false
        } else {
            for row in page {
                self.select(row);
            }
            true
        }
    }

    /// Selected rows in selection order.
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }
}
