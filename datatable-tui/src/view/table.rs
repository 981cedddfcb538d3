//! Table header and rows.

use datatable_lib::{Column, Record, SortDirection, TableView};

use crate::action::Action;
use crate::app::{App, Focus};
use crate::buffer::{Buffer, Rect, Style};
use crate::hit::HitMap;
use crate::text::{display_width, pad_to_width};

/// Width of the checkbox column, `[x]`.
const CHECK_WIDTH: u16 = 3;
/// Cells after a header title: ` ▲▼ ✕`.
const HEADER_DECORATION: usize = 5;
const MIN_COLUMN_WIDTH: usize = HEADER_DECORATION + 1;
/// Widest a content-sized column grows.
const MAX_AUTO_WIDTH: usize = 32;

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

/// Widths of the given columns for a page of rows.
///
/// Fixed-width columns keep their width (at least wide enough for the header
/// controls). Other columns fit the wider of their header and the page's
/// cell text, capped.
pub fn column_widths(columns: &[&Column], rows: &[&Record]) -> Vec<u16> {
    columns
        .iter()
        .map(|column| {
            let width = match column.width {
                Some(width) => (width as usize).max(MIN_COLUMN_WIDTH),
                None => {
                    let content = rows
                        .iter()
                        .map(|row| display_width(&column.cell_text(row)))
                        .max()
                        .unwrap_or(0);
                    let header = display_width(&column.title) + HEADER_DECORATION;
                    content.max(header).clamp(MIN_COLUMN_WIDTH, MAX_AUTO_WIDTH)
                }
            };
            width as u16
        })
        .collect()
}

pub(super) fn render(
    app: &App,
    view: &TableView<'_>,
    buf: &mut Buffer,
    hits: &mut HitMap,
    area: Rect,
) {
    let theme = app.theme();
    let table = app.table();
    let columns = table.visible_columns();
    let rows = view.page_rows();
    let widths = column_widths(&columns, rows);

    // Header
    let header = Style::new(theme.text, theme.surface).bold();
    buf.fill(Rect::new(area.x, area.y, area.width, 1), header);

    let page_selected = !rows.is_empty() && table.selection().all_selected(rows);
    let mut x = buf.put_str(area.x, area.y, checkbox(page_selected), header);
    hits.register(Rect::new(area.x, area.y, CHECK_WIDTH, 1), Action::TogglePage);
    x += 1;

    for (index, (column, &width)) in columns.iter().zip(&widths).enumerate() {
        let focused = index == app.column_cursor();
        let sort = table.sort().filter(|sort| sort.column == column.key);
        render_header_cell(
            app,
            buf,
            hits,
            (x, area.y),
            column,
            width,
            focused,
            sort.map(|sort| sort.direction),
        );
        x = x.saturating_add(width + 1);
    }

    // Rows
    let base = Style::new(theme.text, theme.background);
    if rows.is_empty() {
        buf.put_str(
            area.x,
            area.y + 1,
            "No matching rows",
            base.fg(theme.warning),
        );
        return;
    }

    for (index, row) in rows.iter().enumerate() {
        let y = area.y + 1 + index as u16;
        if y >= area.bottom() {
            break;
        }

        let selected = table.is_row_selected(row);
        let under_cursor = app.focus() == Focus::Table && index == app.cursor();
        let bg = if under_cursor {
            theme.cursor
        } else if selected {
            theme.selected
        } else {
            theme.background
        };
        let style = base.bg(bg);
        let row_rect = Rect::new(area.x, y, area.width, 1);
        buf.fill(row_rect, style);

        let check_style = if selected { style.fg(theme.primary) } else { style };
        let mut x = buf.put_str(area.x, y, checkbox(selected), check_style);
        x += 1;

        for (column, &width) in columns.iter().zip(&widths) {
            let text = pad_to_width(&column.cell_text(row), width as usize, column.align);
            buf.put_str(x, y, &text, style.bold_if(column.emphasis));
            x = x.saturating_add(width + 1);
        }

        hits.register(row_rect, Action::ToggleRow(index));
    }
}

#[allow(clippy::too_many_arguments)]
fn render_header_cell(
    app: &App,
    buf: &mut Buffer,
    hits: &mut HitMap,
    (x, y): (u16, u16),
    column: &Column,
    width: u16,
    focused: bool,
    sort: Option<SortDirection>,
) {
    let theme = app.theme();
    let header = Style::new(theme.text, theme.surface).bold();
    let title_style = if focused { header.fg(theme.secondary) } else { header };
    let title_width = (width as usize).saturating_sub(HEADER_DECORATION);

    let title = pad_to_width(&column.title, title_width, column.align);
    let mut cx = buf.put_str(x, y, &title, title_style);
    cx = buf.put_str(cx, y, " ", header);

    let arrow = |active: bool| {
        if active {
            header.fg(theme.primary)
        } else {
            header.fg(theme.text_muted)
        }
    };
    cx = buf.put_str(cx, y, "▲", arrow(sort == Some(SortDirection::Asc)));
    cx = buf.put_str(cx, y, "▼", arrow(sort == Some(SortDirection::Desc)));
    cx = buf.put_str(cx, y, " ", header);

    hits.register(
        Rect::new(x, y, width.saturating_sub(1), 1),
        Action::Sort(column.key.clone()),
    );

    buf.put_str(cx, y, "✕", header.fg(theme.text_muted));
    hits.register(Rect::new(cx, y, 1, 1), Action::Hide(column.key.clone()));
}
