//! User intents, produced by key presses and mouse clicks.

/// Something the user asked the table to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Sort by a column key, flipping direction if already sorted by it.
    Sort(String),
    /// Hide a column by key.
    Hide(String),
    ShowAllColumns,
    /// Toggle the row at this index of the current page.
    ToggleRow(usize),
    /// Select or deselect the whole current page.
    TogglePage,
    ClearSelection,
    GoToPage(usize),
    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,
    CursorUp,
    CursorDown,
    /// Move the header column cursor by this many columns, wrapping.
    MoveColumn(isize),
    SortFocusedColumn,
    HideFocusedColumn,
    CycleFilter,
    FocusSearch,
    FocusTable,
    SearchInput(char),
    SearchBackspace,
    ClearSearch,
    Quit,
}
