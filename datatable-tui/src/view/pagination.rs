//! Pagination bar: `‹ 1 … 4 5 6 … 10 ›`.

use datatable_lib::PageItem;

use crate::action::Action;
use crate::app::App;
use crate::buffer::{Buffer, Rect, Style};
use crate::hit::HitMap;

pub(super) fn render(app: &App, buf: &mut Buffer, hits: &mut HitMap, area: Rect) {
    let theme = app.theme();
    let pagination = app.table().pagination(app.sibling_count());
    if !pagination.is_visible() {
        return;
    }

    let base = Style::new(theme.text, theme.background);
    let disabled = base.fg(theme.text_muted).dim();
    let mut x = area.x;

    // Draws one button followed by a gap; `target` makes it clickable.
    let mut button =
        |buf: &mut Buffer, x: &mut u16, label: &str, style: Style, target: Option<usize>| {
            let start = *x;
            *x = buf.put_str(*x, area.y, label, style);
            if let Some(page) = target {
                let rect = Rect::new(start, area.y, *x - start, 1);
                hits.register(rect, Action::GoToPage(page));
            }
            *x = buf.put_str(*x, area.y, " ", base);
        };

    let previous = pagination.previous();
    button(
        buf,
        &mut x,
        " ‹ ",
        if previous.is_some() { base } else { disabled },
        previous,
    );

    for item in pagination.range() {
        match item {
            PageItem::Page(page) if page == pagination.current_page => {
                let current = Style::new(theme.background, theme.primary).bold();
                button(buf, &mut x, format!(" {} ", page).as_str(), current, Some(page));
            }
            PageItem::Page(page) => {
                let style = base.bg(theme.surface);
                button(buf, &mut x, format!(" {} ", page).as_str(), style, Some(page));
            }
            PageItem::Dots => button(buf, &mut x, " … ", base.fg(theme.text_muted), None),
        }
    }

    let next = pagination.next();
    button(
        buf,
        &mut x,
        " › ",
        if next.is_some() { base } else { disabled },
        next,
    );
}
