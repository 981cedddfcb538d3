//! Title line, filter-scope selector and search input.

use crate::action::Action;
use crate::app::{App, Focus};
use crate::buffer::{Buffer, Rect, Style};
use crate::hit::HitMap;
use crate::text::{char_width, pad_to_width};
use crate::theme::Theme;

use datatable_lib::Alignment;

/// Inner width of the search box.
const SEARCH_WIDTH: usize = 30;
const PLACEHOLDER: &str = "Search...";

pub(super) fn render_title(buf: &mut Buffer, area: Rect, theme: &Theme) {
    let style = Style::new(theme.primary, theme.background).bold();
    buf.put_str(area.x, area.y, "Data Table", style);
}

pub(super) fn render(app: &App, buf: &mut Buffer, hits: &mut HitMap, area: Rect) {
    let theme = app.theme();
    let table = app.table();
    let base = Style::new(theme.text, theme.background);
    let muted = base.fg(theme.text_muted);

    let mut x = buf.put_str(area.x, area.y, "Filter ", muted);

    let scope = table
        .filter()
        .column()
        .and_then(|key| table.column(key))
        .map(|column| column.title.as_str())
        .unwrap_or("All");
    let selector = format!("[{} ▾]", scope);
    let start = x;
    x = buf.put_str(x, area.y, &selector, base.bg(theme.surface));
    hits.register(Rect::new(start, area.y, x - start, 1), Action::CycleFilter);

    x = buf.put_str(x, area.y, "  ", base);

    let focused = app.focus() == Focus::Search;
    let search = table.search();
    let (content, content_style) = if search.is_empty() && !focused {
        (PLACEHOLDER.to_string(), muted.bg(theme.surface))
    } else {
        let mut text = search.to_string();
        if focused {
            text.push('_');
        }
        (tail_to_width(&text, SEARCH_WIDTH), base.bg(theme.surface))
    };

    let frame = if focused {
        base.fg(theme.primary).bold()
    } else {
        base.fg(theme.text_muted)
    };

    let start = x;
    x = buf.put_str(x, area.y, "[", frame);
    x = buf.put_str(
        x,
        area.y,
        &pad_to_width(&content, SEARCH_WIDTH, Alignment::Left),
        content_style,
    );
    x = buf.put_str(x, area.y, "]", frame);
    hits.register(Rect::new(start, area.y, x - start, 1), Action::FocusSearch);
}

/// The last `width` cells of `s`, so the end of a long search stays visible.
fn tail_to_width(s: &str, width: usize) -> String {
    let mut tail: Vec<char> = Vec::new();
    let mut used = 0;
    for ch in s.chars().rev() {
        let w = char_width(ch);
        if used + w > width {
            break;
        }
        tail.push(ch);
        used += w;
    }
    tail.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::tail_to_width;

    #[test]
    fn tail_keeps_end_of_text() {
        assert_eq!(tail_to_width("abcdef", 3), "def");
        assert_eq!(tail_to_width("ab", 3), "ab");
    }
}
