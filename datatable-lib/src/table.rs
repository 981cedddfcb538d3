//! Table view state and the derived sort → filter → paginate pipeline.

use log::debug;

use crate::column::Column;
use crate::error::{Result, TableError};
use crate::filter::{FilterScope, filter_records};
use crate::paginate::{DEFAULT_PAGE_SIZE, page_count, page_slice};
use crate::pagination::Pagination;
use crate::record::Record;
use crate::selection::Selection;
use crate::sort::{SortDirection, SortState, sort_records};

/// A sortable, filterable, paginated, row-selectable table.
///
/// `DataTable` owns the rows and column definitions together with the view
/// state a user manipulates. Nothing derived is cached: [`DataTable::view`]
/// re-runs the pipeline over the current state each time it is called.
///
/// # Example
///
/// ```
/// use datatable_lib::{Column, DataTable, Record};
///
/// let rows = vec![
///     Record::new().set("id", 1).set("name", "Linus"),
///     Record::new().set("id", 2).set("name", "Ada"),
///     Record::new().set("id", 3).set("name", "Grace"),
/// ];
/// let columns = vec![Column::new("id", "ID"), Column::new("name", "Name")];
///
/// let mut table = DataTable::new(rows, columns).with_page_size(2).unwrap();
/// table.handle_sort("name");
///
/// let view = table.view();
/// let names: Vec<String> = view.page_rows().iter().map(|r| r.display("name")).collect();
/// assert_eq!(names, ["Ada", "Grace"]);
/// assert_eq!(view.page_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DataTable {
    records: Vec<Record>,
    columns: Vec<Column>,
    page_size: usize,
    sort: Option<SortState>,
    filter: FilterScope,
    search: String,
    current_page: usize,
    hidden: Vec<String>,
    selection: Selection,
}

/// One evaluation of the pipeline.
///
/// Borrows the table's rows; holds the filtered rows in display order.
#[derive(Debug, Clone)]
pub struct TableView<'a> {
    filtered: Vec<&'a Record>,
    current_page: usize,
    page_size: usize,
}

impl<'a> TableView<'a> {
    /// Rows passing the filter, in sort order.
    pub fn filtered(&self) -> &[&'a Record] {
        &self.filtered
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    /// Rows on the current page.
    pub fn page_rows(&self) -> &[&'a Record] {
        page_slice(&self.filtered, self.current_page, self.page_size)
    }

    pub fn page_count(&self) -> usize {
        page_count(self.filtered.len(), self.page_size)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }
}

impl DataTable {
    /// Create a table with the default page size.
    pub fn new(records: Vec<Record>, columns: Vec<Column>) -> Self {
        Self {
            records,
            columns,
            page_size: DEFAULT_PAGE_SIZE,
            sort: None,
            filter: FilterScope::All,
            search: String::new(),
            current_page: 1,
            hidden: Vec::new(),
            selection: Selection::new(),
        }
    }

    /// Set the page size. Fails for 0.
    pub fn with_page_size(mut self, page_size: usize) -> Result<Self> {
        self.set_page_size(page_size)?;
        Ok(self)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Find a column by key.
    pub fn column(&self, key: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.key == key)
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    pub fn filter(&self) -> &FilterScope {
        &self.filter
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn hidden_columns(&self) -> &[String] {
        &self.hidden
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    // -------------------------------------------------------------------------
    // Data
    // -------------------------------------------------------------------------

    /// Replace the rows. View state and selection are kept.
    pub fn set_records(&mut self, records: Vec<Record>) {
        debug!("replacing {} rows with {}", self.records.len(), records.len());
        self.records = records;
        self.clamp_page();
    }

    /// Change the page size, keeping the current page in range.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        if page_size == 0 {
            return Err(TableError::InvalidPageSize(page_size));
        }
        self.page_size = page_size;
        self.clamp_page();
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Derived view
    // -------------------------------------------------------------------------

    /// Run the pipeline over the current state.
    pub fn view(&self) -> TableView<'_> {
        let sorted = sort_records(&self.records, self.sort.as_ref());
        let filtered = filter_records(&sorted, &self.filter, &self.search);
        TableView {
            filtered,
            current_page: self.current_page,
            page_size: self.page_size,
        }
    }

    /// All rows in sort order.
    pub fn sorted(&self) -> Vec<&Record> {
        sort_records(&self.records, self.sort.as_ref())
    }

    /// Sorted rows passing the filter.
    pub fn filtered(&self) -> Vec<&Record> {
        self.view().filtered
    }

    /// Rows on the current page.
    pub fn page_rows(&self) -> Vec<&Record> {
        self.view().page_rows().to_vec()
    }

    pub fn filtered_count(&self) -> usize {
        self.view().filtered_count()
    }

    pub fn page_count(&self) -> usize {
        self.view().page_count()
    }

    /// Pagination bar for the filtered rows.
    pub fn pagination(&self, sibling_count: usize) -> Pagination {
        Pagination::new(self.current_page, self.filtered_count(), self.page_size)
            .with_siblings(sibling_count)
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Sort by a column: flips direction on the active column, otherwise
    /// sorts the new column ascending. Unknown keys are ignored.
    pub fn handle_sort(&mut self, key: &str) -> bool {
        if self.column(key).is_none() {
            debug!("ignoring sort on unknown column {:?}", key);
            return false;
        }

        let direction = match &self.sort {
            Some(sort) if sort.column == key => sort.direction.toggle(),
            _ => SortDirection::Asc,
        };
        debug!("sort by {} {:?}", key, direction);
        self.sort = Some(SortState::new(key, direction));
        true
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    // -------------------------------------------------------------------------
    // Filtering
    // -------------------------------------------------------------------------

    /// Scope the search to a visible column, or to all fields.
    ///
    /// `None`, unknown and hidden keys select all fields. Returns to page 1.
    pub fn set_filter_column(&mut self, key: Option<&str>) {
        self.filter = match key {
            Some(key) if self.column(key).is_some() && !self.is_hidden(key) => {
                FilterScope::Column(key.to_string())
            }
            _ => FilterScope::All,
        };
        debug!("filter scope {:?}", self.filter);
        self.current_page = 1;
    }

    /// Advance the filter scope: all fields, then each visible column in turn.
    pub fn cycle_filter_column(&mut self) {
        let visible: Vec<String> = self
            .visible_columns()
            .into_iter()
            .map(|column| column.key.clone())
            .collect();

        let next = match self.filter.column() {
            None => visible.first().cloned(),
            Some(current) => visible
                .iter()
                .position(|key| key == current)
                .and_then(|index| visible.get(index + 1).cloned()),
        };
        self.set_filter_column(next.as_deref());
    }

    /// Replace the search term. Returns to page 1.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        debug!("search {:?}", self.search);
        self.current_page = 1;
    }

    pub fn push_search_char(&mut self, c: char) {
        let mut term = std::mem::take(&mut self.search);
        term.push(c);
        self.set_search(term);
    }

    pub fn pop_search_char(&mut self) {
        let mut term = std::mem::take(&mut self.search);
        term.pop();
        self.set_search(term);
    }

    pub fn clear_search(&mut self) {
        self.set_search(String::new());
    }

    // -------------------------------------------------------------------------
    // Paging
    // -------------------------------------------------------------------------

    /// Go to a page, clamped to the pages that exist. Returns whether the
    /// page changed.
    pub fn set_page(&mut self, page: usize) -> bool {
        let last = self.page_count().max(1);
        let page = page.clamp(1, last);
        let changed = page != self.current_page;
        self.current_page = page;
        if changed {
            debug!("page {}/{}", page, last);
        }
        changed
    }

    pub fn next_page(&mut self) -> bool {
        self.set_page(self.current_page.saturating_add(1))
    }

    pub fn previous_page(&mut self) -> bool {
        self.set_page(self.current_page.saturating_sub(1))
    }

    fn clamp_page(&mut self) {
        let last = self.page_count().max(1);
        self.current_page = self.current_page.clamp(1, last);
    }

    // -------------------------------------------------------------------------
    // Column visibility
    // -------------------------------------------------------------------------

    pub fn is_hidden(&self, key: &str) -> bool {
        self.hidden.iter().any(|hidden| hidden == key)
    }

    /// Hide a column. Hiding the filter column resets the filter scope.
    pub fn hide_column(&mut self, key: &str) -> bool {
        if self.is_hidden(key) || self.column(key).is_none() {
            return false;
        }
        self.hidden.push(key.to_string());
        debug!("hide column {}", key);

        if self.filter.column() == Some(key) {
            self.set_filter_column(None);
        }
        true
    }

    pub fn show_column(&mut self, key: &str) -> bool {
        let before = self.hidden.len();
        self.hidden.retain(|hidden| hidden != key);
        self.hidden.len() != before
    }

    pub fn show_all_columns(&mut self) {
        self.hidden.clear();
    }

    /// Columns not hidden, in definition order.
    pub fn visible_columns(&self) -> Vec<&Column> {
        self.columns
            .iter()
            .filter(|column| !self.is_hidden(&column.key))
            .collect()
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    pub fn is_row_selected(&self, row: &Record) -> bool {
        self.selection.is_selected(row)
    }

    /// Flip one row's selection. Returns whether it is now selected.
    pub fn toggle_row(&mut self, row: &Record) -> bool {
        let selected = self.selection.toggle(row);
        debug!(
            "row {} ({} selected)",
            if selected { "selected" } else { "deselected" },
            self.selection.len()
        );
        selected
    }

    /// Select every row on the current page, or deselect them all if the page
    /// is already fully selected.
    pub fn toggle_page_selection(&mut self) -> bool {
        let page: Vec<Record> = self.page_rows().into_iter().cloned().collect();
        let refs: Vec<&Record> = page.iter().collect();
        let selected = self.selection.toggle_page(&refs);
        debug!("page selection {} ({} selected)", selected, self.selection.len());
        selected
    }

    /// Whether the current page is non-empty and fully selected.
    pub fn page_all_selected(&self) -> bool {
        let view = self.view();
        let page = view.page_rows();
        !page.is_empty() && self.selection.all_selected(page)
    }

    pub fn selected_rows(&self) -> &[Record] {
        self.selection.rows()
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }
}
