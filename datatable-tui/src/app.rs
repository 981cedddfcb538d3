//! Application state: the table plus host-side focus and cursors.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use log::debug;

use datatable_lib::DataTable;
use datatable_lib::pagination::DEFAULT_SIBLING_COUNT;

use crate::action::Action;
use crate::buffer::Buffer;
use crate::hit::HitMap;
use crate::theme::Theme;
use crate::view;

/// Which part of the screen receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Table,
    Search,
}

/// The running table application.
///
/// Owns the [`DataTable`] and the state only the terminal host needs: key
/// focus, the row cursor within the current page, the header column cursor,
/// and the click targets of the last render.
#[derive(Debug)]
pub struct App {
    table: DataTable,
    sibling_count: usize,
    theme: Theme,
    focus: Focus,
    /// Row index within the current page.
    cursor: usize,
    /// Index into the visible columns.
    column_cursor: usize,
    hit_map: HitMap,
    should_quit: bool,
}

impl App {
    pub fn new(table: DataTable) -> Self {
        Self {
            table,
            sibling_count: DEFAULT_SIBLING_COUNT,
            theme: Theme::default(),
            focus: Focus::Table,
            cursor: 0,
            column_cursor: 0,
            hit_map: HitMap::new(),
            should_quit: false,
        }
    }

    /// Set the number of pagination siblings around the current page.
    pub fn with_siblings(mut self, sibling_count: usize) -> Self {
        self.sibling_count = sibling_count;
        self
    }

    pub fn table(&self) -> &DataTable {
        &self.table
    }

    pub fn sibling_count(&self) -> usize {
        self.sibling_count
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn column_cursor(&self) -> usize {
        self.column_cursor
    }

    pub fn hit_map(&self) -> &HitMap {
        &self.hit_map
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Key of the visible column under the header cursor.
    pub fn focused_column(&self) -> Option<String> {
        self.table
            .visible_columns()
            .get(self.column_cursor)
            .map(|column| column.key.clone())
    }

    /// Draw the whole screen and remember its click targets.
    pub fn render(&mut self, buf: &mut Buffer) {
        self.hit_map = view::render(self, buf);
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Handle a terminal event. Returns whether the screen needs a redraw.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            Event::Resize(_, _) => true,
            _ => false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match self.action_for_key(key) {
            Some(action) => {
                self.dispatch(action);
                true
            }
            None => false,
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        let action = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let action = self.hit_map.hit(mouse.column, mouse.row).cloned();
                // Clicking anywhere but the search box leaves it.
                if action != Some(Action::FocusSearch) {
                    self.focus = Focus::Table;
                }
                action
            }
            MouseEventKind::ScrollUp => Some(Action::CursorUp),
            MouseEventKind::ScrollDown => Some(Action::CursorDown),
            _ => return false,
        };

        if let Some(action) = action {
            self.dispatch(action);
        }
        true
    }

    fn action_for_key(&self, key: KeyEvent) -> Option<Action> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match self.focus {
            Focus::Search => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => Some(Action::FocusTable),
                KeyCode::Backspace => Some(Action::SearchBackspace),
                KeyCode::Char('u') if ctrl => Some(Action::ClearSearch),
                KeyCode::Char(c) if !ctrl => Some(Action::SearchInput(c)),
                _ => None,
            },
            Focus::Table => match key.code {
                KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Up | KeyCode::Char('k') => Some(Action::CursorUp),
                KeyCode::Down | KeyCode::Char('j') => Some(Action::CursorDown),
                KeyCode::Char(' ') => Some(Action::ToggleRow(self.cursor)),
                KeyCode::Char('a') => Some(Action::TogglePage),
                KeyCode::Char('c') => Some(Action::ClearSelection),
                KeyCode::Left | KeyCode::PageUp | KeyCode::Char('h') => Some(Action::PreviousPage),
                KeyCode::Right | KeyCode::PageDown | KeyCode::Char('l') => Some(Action::NextPage),
                KeyCode::Home => Some(Action::FirstPage),
                KeyCode::End => Some(Action::LastPage),
                KeyCode::Tab => Some(Action::MoveColumn(1)),
                KeyCode::BackTab => Some(Action::MoveColumn(-1)),
                KeyCode::Char('s') | KeyCode::Enter => Some(Action::SortFocusedColumn),
                KeyCode::Char('x') => Some(Action::HideFocusedColumn),
                KeyCode::Char('u') => Some(Action::ShowAllColumns),
                KeyCode::Char('f') => Some(Action::CycleFilter),
                KeyCode::Char('/') => Some(Action::FocusSearch),
                _ => None,
            },
        }
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    /// Apply an action to the table and host state.
    pub fn dispatch(&mut self, action: Action) {
        debug!("dispatch {:?}", action);

        match action {
            Action::Sort(key) => {
                if self.table.handle_sort(&key) {
                    self.focus_column(&key);
                }
            }
            Action::Hide(key) => {
                self.table.hide_column(&key);
            }
            Action::ShowAllColumns => self.table.show_all_columns(),
            Action::ToggleRow(index) => {
                let row = self.table.page_rows().get(index).map(|row| (*row).clone());
                if let Some(row) = row {
                    self.table.toggle_row(&row);
                    self.cursor = index;
                }
            }
            Action::TogglePage => {
                self.table.toggle_page_selection();
            }
            Action::ClearSelection => self.table.clear_selection(),
            Action::GoToPage(page) => self.change_page(|table| table.set_page(page)),
            Action::NextPage => self.change_page(DataTable::next_page),
            Action::PreviousPage => self.change_page(DataTable::previous_page),
            Action::FirstPage => self.change_page(|table| table.set_page(1)),
            Action::LastPage => self.change_page(|table| {
                let last = table.page_count();
                table.set_page(last)
            }),
            Action::CursorUp => self.cursor = self.cursor.saturating_sub(1),
            Action::CursorDown => self.cursor = self.cursor.saturating_add(1),
            Action::MoveColumn(delta) => {
                let count = self.table.visible_columns().len() as isize;
                if count > 0 {
                    self.column_cursor =
                        (self.column_cursor as isize + delta).rem_euclid(count) as usize;
                }
            }
            Action::SortFocusedColumn => {
                if let Some(key) = self.focused_column() {
                    self.table.handle_sort(&key);
                }
            }
            Action::HideFocusedColumn => {
                if let Some(key) = self.focused_column() {
                    self.table.hide_column(&key);
                }
            }
            Action::CycleFilter => self.table.cycle_filter_column(),
            Action::FocusSearch => self.focus = Focus::Search,
            Action::FocusTable => self.focus = Focus::Table,
            Action::SearchInput(c) => {
                self.table.push_search_char(c);
                self.cursor = 0;
            }
            Action::SearchBackspace => {
                self.table.pop_search_char();
                self.cursor = 0;
            }
            Action::ClearSearch => {
                self.table.clear_search();
                self.cursor = 0;
            }
            Action::Quit => self.should_quit = true,
        }

        self.clamp_cursors();
    }

    fn change_page(&mut self, change: impl FnOnce(&mut DataTable) -> bool) {
        if change(&mut self.table) {
            self.cursor = 0;
        }
    }

    fn focus_column(&mut self, key: &str) {
        if let Some(index) = self
            .table
            .visible_columns()
            .iter()
            .position(|column| column.key == key)
        {
            self.column_cursor = index;
        }
    }

    fn clamp_cursors(&mut self) {
        let rows = self.table.page_rows().len();
        self.cursor = self.cursor.min(rows.saturating_sub(1));

        let columns = self.table.visible_columns().len();
        self.column_cursor = self.column_cursor.min(columns.saturating_sub(1));
    }
}
