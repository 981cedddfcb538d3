//! Screen rendering.
//!
//! Every frame is drawn from scratch out of the [`App`] state. While drawing,
//! each clickable element registers its screen rectangle in a [`HitMap`] so
//! mouse clicks can be routed back to an [`Action`](crate::action::Action).

mod pagination;
mod status;
mod table;
mod toolbar;

pub use table::column_widths;

use crate::app::App;
use crate::buffer::{Buffer, Rect, Style};
use crate::hit::HitMap;

/// Left and right margin in cells.
const MARGIN: u16 = 1;
/// Title, gap, toolbar, gap.
const ROWS_ABOVE_TABLE: u16 = 4;
/// Gap, pagination bar, gap, status line, key hints.
const ROWS_BELOW_TABLE: u16 = 5;

/// Render the full screen into `buf`, returning the click targets.
pub fn render(app: &App, buf: &mut Buffer) -> HitMap {
    let theme = app.theme();
    let mut hits = HitMap::new();

    buf.fill(buf.area(), Style::new(theme.text, theme.background));

    let width = buf.width().saturating_sub(MARGIN * 2);
    let view = app.table().view();

    let mut y = 0;
    toolbar::render_title(buf, Rect::new(MARGIN, y, width, 1), theme);
    y += 2;

    toolbar::render(app, buf, &mut hits, Rect::new(MARGIN, y, width, 1));
    y += 2;

    // Header plus a full page of rows, so the bar below never jumps, unless
    // the screen is too short to fit them.
    let page_rows = u16::try_from(app.table().page_size()).unwrap_or(u16::MAX);
    let room = buf
        .height()
        .saturating_sub(ROWS_ABOVE_TABLE + ROWS_BELOW_TABLE)
        .max(1);
    let table_height = page_rows.saturating_add(1).min(room);
    // Anything starting below the last row is skipped on very small screens.
    if y < buf.height() {
        table::render(
            app,
            &view,
            buf,
            &mut hits,
            Rect::new(MARGIN, y, width, table_height),
        );
    }
    y = y.saturating_add(table_height).saturating_add(1);

    if y < buf.height() {
        pagination::render(app, buf, &mut hits, Rect::new(MARGIN, y, width, 1));
    }
    y = y.saturating_add(2);

    if y < buf.height() {
        status::render(app, &view, buf, Rect::new(MARGIN, y, width, 1));
    }
    status::render_hints(
        app,
        buf,
        Rect::new(MARGIN, buf.height().saturating_sub(1), width, 1),
    );

    hits
}
