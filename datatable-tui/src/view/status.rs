//! Status and key-hint lines.

use datatable_lib::TableView;

use crate::app::{App, Focus};
use crate::buffer::{Buffer, Rect, Style};

pub(super) fn render(app: &App, view: &TableView<'_>, buf: &mut Buffer, area: Rect) {
    let theme = app.theme();
    let table = app.table();
    let muted = Style::new(theme.text_muted, theme.background);

    let mut status = format!(
        "{} of {} rows · page {}/{} · {} selected",
        view.filtered_count(),
        table.records().len(),
        view.current_page(),
        view.page_count().max(1),
        table.selection().len(),
    );

    let hidden = table.hidden_columns().len();
    if hidden > 0 {
        status.push_str(&format!(" · {} hidden (u to show)", hidden));
    }

    buf.put_str(area.x, area.y, &status, muted);
}

pub(super) fn render_hints(app: &App, buf: &mut Buffer, area: Rect) {
    let theme = app.theme();
    let hints = match app.focus() {
        Focus::Table => concat!(
            "↑↓ move  space select  a page  ←→ page  tab column  ",
            "s sort  x hide  f filter  / search  q quit",
        ),
        Focus::Search => "type to search  backspace delete  ctrl+u clear  enter/esc done",
    };
    let style = Style::new(theme.text_muted, theme.background).dim();
    buf.put_str(area.x, area.y, hints, style);
}
