//! Tests for input handling and rendering of the table app.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use datatable_lib::{Column, DataTable, FilterScope, Record, SortDirection};
use datatable_tui::action::Action;
use datatable_tui::buffer::Buffer;
use datatable_tui::{App, Focus};

fn people() -> Vec<Record> {
    let names = [
        ("Maud", "Female", "Engineer"),
        ("Bert", "Male", "Designer"),
        ("Ines", "Female", "Engineer"),
        ("Omar", "Male", "Analyst"),
        ("Zoe", "Female", "Designer"),
        ("Ari", "Male", "Engineer"),
        ("Lena", "Female", "Analyst"),
    ];
    names
        .iter()
        .enumerate()
        .map(|(i, (name, gender, job))| {
            Record::new()
                .set("id", i as i64 + 1)
                .set("firstName", *name)
                .set("gender", *gender)
                .set("jobTitle", *job)
        })
        .collect()
}

fn app() -> App {
    let columns = vec![
        Column::new("id", "ID").width(4),
        Column::new("firstName", "Name"),
        Column::new("gender", "Gender"),
        Column::new("jobTitle", "Job"),
    ];
    let table = DataTable::new(people(), columns)
        .with_page_size(3)
        .unwrap();
    App::new(table)
}

fn frame(app: &mut App) -> Buffer {
    let mut buf = Buffer::new(100, 20);
    app.render(&mut buf);
    buf
}

fn lines(buf: &Buffer) -> Vec<String> {
    (0..buf.height()).map(|y| buf.row_text(y)).collect()
}

fn screen_contains(app: &mut App, text: &str) -> bool {
    let buf = frame(app);
    lines(&buf).iter().any(|line| line.contains(text))
}

/// Render, then left-click the first region registered for `action`.
fn click(app: &mut App, action: &Action) -> bool {
    frame(app);
    let rect = app
        .hit_map()
        .regions()
        .iter()
        .find(|(_, a)| a == action)
        .map(|(rect, _)| *rect)
        .unwrap_or_else(|| panic!("no click target for {:?}", action));
    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: rect.x,
        row: rect.y,
        modifiers: KeyModifiers::NONE,
    })
}

fn has_target(app: &mut App, action: &Action) -> bool {
    frame(app);
    app.hit_map().regions().iter().any(|(_, a)| a == action)
}

fn press(app: &mut App, code: KeyCode) -> bool {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn page_names(app: &App) -> Vec<String> {
    app.table()
        .page_rows()
        .iter()
        .map(|r| r.display("firstName"))
        .collect()
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_render_shows_first_page() {
    let mut app = app();
    let buf = frame(&mut app);
    let lines = lines(&buf);

    assert!(lines[0].contains("Data Table"));
    assert!(lines.iter().any(|l| l.contains("Name") && l.contains("Gender")));
    for name in ["Maud", "Bert", "Ines"] {
        assert!(lines.iter().any(|l| l.contains(name)), "missing {}", name);
    }
    assert!(!lines.iter().any(|l| l.contains("Omar")));
}

#[test]
fn test_render_status_line() {
    let mut app = app();
    assert!(screen_contains(&mut app, "7 of 7 rows · page 1/3 · 0 selected"));
}

#[test]
fn test_render_search_placeholder_and_scope() {
    let mut app = app();
    assert!(screen_contains(&mut app, "Search..."));
    assert!(screen_contains(&mut app, "[All ▾]"));
}

#[test]
fn test_render_pagination_bar() {
    let mut app = app();
    let buf = frame(&mut app);
    let bar = lines(&buf)
        .into_iter()
        .find(|l| l.contains('›'))
        .expect("pagination bar");
    assert!(bar.contains(" 1 "));
    assert!(bar.contains(" 2 "));
    assert!(bar.contains(" 3 "));
    assert!(bar.contains('‹'));
}

#[test]
fn test_no_previous_target_on_first_page() {
    let mut app = app();
    assert!(!has_target(&mut app, &Action::GoToPage(0)));
    assert!(has_target(&mut app, &Action::GoToPage(2)));
}

#[test]
fn test_empty_result_message_and_no_pagination() {
    let mut app = app();
    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "nobody");

    let buf = frame(&mut app);
    let lines = lines(&buf);
    assert!(lines.iter().any(|l| l.contains("No matching rows")));
    assert!(!lines.iter().any(|l| l.contains('›')));
}

#[test]
fn test_single_page_hides_pagination() {
    let columns = vec![Column::new("firstName", "Name")];
    let table = DataTable::new(people(), columns).with_page_size(10).unwrap();
    let mut app = App::new(table);
    assert!(!screen_contains(&mut app, "›"));
}

fn numbered_app(count: usize, page_size: usize) -> App {
    let rows = (0..count)
        .map(|i| {
            Record::new()
                .set("id", i as u64 + 1)
                .set("firstName", format!("Row {}", i + 1))
        })
        .collect();
    let columns = vec![Column::new("id", "ID"), Column::new("firstName", "Name")];
    let table = DataTable::new(rows, columns)
        .with_page_size(page_size)
        .unwrap();
    App::new(table)
}

#[test]
fn test_huge_page_size_renders() {
    let mut app = numbered_app(7, usize::MAX);
    let mut buf = Buffer::new(80, 24);
    app.render(&mut buf);

    let lines = lines(&buf);
    assert!(lines.iter().any(|l| l.contains("7 of 7 rows · page 1/1")));
    assert!(lines.iter().any(|l| l.contains("Row 7")));
}

#[test]
fn test_tall_page_keeps_bar_and_status_on_short_screen() {
    let mut app = numbered_app(200, 50);
    let mut buf = Buffer::new(80, 24);
    app.render(&mut buf);

    let lines = lines(&buf);
    assert!(lines.iter().any(|l| l.contains('›')));
    assert!(lines.iter().any(|l| l.contains("200 of 200 rows · page 1/4")));
    assert!(lines[23].contains("↑↓ move"));

    let page_targets: Vec<_> = app
        .hit_map()
        .regions()
        .iter()
        .filter(|(_, action)| matches!(action, Action::GoToPage(_)))
        .map(|(rect, _)| *rect)
        .collect();
    assert!(!page_targets.is_empty());
    assert!(page_targets.iter().all(|rect| rect.bottom() <= 24));
    assert!(app.hit_map().regions().iter().all(|(rect, _)| rect.y < 24));
}

#[test]
fn test_tiny_screen_renders_without_panic() {
    let mut app = numbered_app(20, 5);
    let mut buf = Buffer::new(10, 3);
    app.render(&mut buf);
    assert!(app.hit_map().regions().iter().all(|(rect, _)| rect.y < 3));
}

// ============================================================================
// Mouse
// ============================================================================

#[test]
fn test_click_header_sorts_then_flips() {
    let mut app = app();

    assert!(click(&mut app, &Action::Sort("firstName".into())));
    let sort = app.table().sort().unwrap();
    assert_eq!(sort.column, "firstName");
    assert_eq!(sort.direction, SortDirection::Asc);
    assert_eq!(page_names(&app), ["Ari", "Bert", "Ines"]);
    assert_eq!(app.column_cursor(), 1);

    click(&mut app, &Action::Sort("firstName".into()));
    assert_eq!(app.table().sort().unwrap().direction, SortDirection::Desc);
    assert_eq!(page_names(&app), ["Zoe", "Omar", "Maud"]);
}

#[test]
fn test_click_hide_removes_column() {
    let mut app = app();
    click(&mut app, &Action::Hide("gender".into()));

    assert!(app.table().is_hidden("gender"));
    assert!(!has_target(&mut app, &Action::Sort("gender".into())));
    assert!(!screen_contains(&mut app, "Gender"));
    assert!(screen_contains(&mut app, "1 hidden"));
}

#[test]
fn test_click_row_toggles_selection() {
    let mut app = app();
    click(&mut app, &Action::ToggleRow(1));

    assert_eq!(app.table().selected_rows().len(), 1);
    assert_eq!(app.table().selected_rows()[0].display("firstName"), "Bert");
    assert_eq!(app.cursor(), 1);

    let buf = frame(&mut app);
    let bert = lines(&buf)
        .into_iter()
        .find(|l| l.contains("Bert"))
        .unwrap();
    assert!(bert.contains("[x]"));

    click(&mut app, &Action::ToggleRow(1));
    assert!(app.table().selected_rows().is_empty());
}

#[test]
fn test_click_header_checkbox_selects_page() {
    let mut app = app();
    click(&mut app, &Action::TogglePage);
    assert_eq!(app.table().selected_rows().len(), 3);
    assert!(app.table().page_all_selected());

    click(&mut app, &Action::TogglePage);
    assert!(app.table().selected_rows().is_empty());
}

#[test]
fn test_click_page_button() {
    let mut app = app();
    press(&mut app, KeyCode::Down);
    click(&mut app, &Action::GoToPage(3));

    assert_eq!(app.table().current_page(), 3);
    assert_eq!(page_names(&app), ["Lena"]);
    assert_eq!(app.cursor(), 0);
    assert!(screen_contains(&mut app, "page 3/3"));
}

#[test]
fn test_click_filter_selector_cycles_scope() {
    let mut app = app();
    click(&mut app, &Action::CycleFilter);
    assert_eq!(app.table().filter(), &FilterScope::Column("id".into()));
    assert!(screen_contains(&mut app, "[ID ▾]"));
}

#[test]
fn test_click_search_box_focuses_search() {
    let mut app = app();
    click(&mut app, &Action::FocusSearch);
    assert_eq!(app.focus(), Focus::Search);

    click(&mut app, &Action::ToggleRow(0));
    assert_eq!(app.focus(), Focus::Table);
}

#[test]
fn test_click_outside_targets_redraws_without_action() {
    let mut app = app();
    frame(&mut app);
    let handled = app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 99,
        row: 1,
        modifiers: KeyModifiers::NONE,
    });
    assert!(handled);
    assert!(app.table().selected_rows().is_empty());
}

#[test]
fn test_scroll_moves_cursor() {
    let mut app = app();
    let scroll = |kind| MouseEvent {
        kind,
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    };
    app.handle_mouse(scroll(MouseEventKind::ScrollDown));
    assert_eq!(app.cursor(), 1);
    app.handle_mouse(scroll(MouseEventKind::ScrollUp));
    assert_eq!(app.cursor(), 0);
}

// ============================================================================
// Keyboard
// ============================================================================

#[test]
fn test_search_typing_filters_rows() {
    let mut app = app();
    press(&mut app, KeyCode::Char('/'));
    assert_eq!(app.focus(), Focus::Search);

    type_text(&mut app, "zoe");
    assert_eq!(app.table().search(), "zoe");
    assert_eq!(app.table().filtered_count(), 1);
    assert!(screen_contains(&mut app, "zoe_"));

    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.table().search(), "zo");

    app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
    assert_eq!(app.table().search(), "");

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.focus(), Focus::Table);
    assert!(!app.should_quit());
}

#[test]
fn test_search_focus_types_quit_key() {
    let mut app = app();
    press(&mut app, KeyCode::Char('/'));
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit());
    assert_eq!(app.table().search(), "q");
}

#[test]
fn test_quit_keys() {
    let mut app = app();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());

    let mut app = self::app();
    press(&mut app, KeyCode::Char('/'));
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

#[test]
fn test_cursor_stays_on_page() {
    let mut app = app();
    for _ in 0..5 {
        press(&mut app, KeyCode::Down);
    }
    assert_eq!(app.cursor(), 2);

    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.table().selected_rows()[0].display("firstName"), "Ines");

    press(&mut app, KeyCode::Up);
    assert_eq!(app.cursor(), 1);
}

#[test]
fn test_page_keys() {
    let mut app = app();
    press(&mut app, KeyCode::Down);

    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.table().current_page(), 2);
    assert_eq!(app.cursor(), 0);

    press(&mut app, KeyCode::End);
    assert_eq!(app.table().current_page(), 3);

    press(&mut app, KeyCode::Right);
    assert_eq!(app.table().current_page(), 3);

    press(&mut app, KeyCode::Left);
    assert_eq!(app.table().current_page(), 2);

    press(&mut app, KeyCode::Home);
    assert_eq!(app.table().current_page(), 1);
}

#[test]
fn test_column_cursor_sort_and_hide() {
    let mut app = app();
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.column_cursor(), 3);

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focused_column().as_deref(), Some("firstName"));

    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.table().sort().unwrap().column, "firstName");

    press(&mut app, KeyCode::Char('x'));
    assert!(app.table().is_hidden("firstName"));
    assert_eq!(app.focused_column().as_deref(), Some("gender"));

    press(&mut app, KeyCode::Char('u'));
    assert!(app.table().hidden_columns().is_empty());
}

#[test]
fn test_select_page_and_clear_keys() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.table().selected_rows().len(), 3);
    assert!(screen_contains(&mut app, "3 selected"));

    press(&mut app, KeyCode::Char('c'));
    assert!(app.table().selected_rows().is_empty());
}

#[test]
fn test_escape_twice_from_search_does_not_quit() {
    let mut app = app();
    press(&mut app, KeyCode::Char('/'));
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.focus(), Focus::Table);
    press(&mut app, KeyCode::Esc);
    assert!(!app.should_quit());
}

#[test]
fn test_enter_sorts_focused_column() {
    let mut app = app();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.table().sort().unwrap().column, "firstName");
}

#[test]
fn test_unbound_key_needs_no_redraw() {
    let mut app = app();
    assert!(!press(&mut app, KeyCode::F(5)));
}

#[test]
fn test_resize_needs_redraw() {
    let mut app = app();
    assert!(app.handle_event(&Event::Resize(80, 24)));
}
