//! Tests for layout helpers and low-level drawing.

use datatable_lib::{Alignment, Column, Record};
use datatable_tui::action::Action;
use datatable_tui::buffer::{Buffer, Rect, Style};
use datatable_tui::hit::HitMap;
use datatable_tui::text::{pad_to_width, truncate_to_width};
use datatable_tui::theme::Rgb;
use datatable_tui::view::column_widths;

fn style() -> Style {
    Style::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0))
}

// ============================================================================
// Column widths
// ============================================================================

#[test]
fn test_fixed_width_has_room_for_header_controls() {
    let narrow = Column::new("id", "ID").width(2);
    let wide = Column::new("email", "E-Mail").width(20);
    assert_eq!(column_widths(&[&narrow, &wide], &[]), [6, 20]);
}

#[test]
fn test_auto_width_fits_header_or_content() {
    let rows = [
        Record::new().set("a", "xyz").set("b", "a much longer cell value"),
    ];
    let refs: Vec<&Record> = rows.iter().collect();
    let a = Column::new("a", "A");
    let b = Column::new("b", "B");
    // "A" plus the five decoration cells beats three content cells.
    assert_eq!(column_widths(&[&a, &b], &refs), [6, 24]);
}

#[test]
fn test_auto_width_is_capped() {
    let long = "x".repeat(80);
    let rows = [Record::new().set("notes", long.as_str())];
    let refs: Vec<&Record> = rows.iter().collect();
    let notes = Column::new("notes", "Notes");
    assert_eq!(column_widths(&[&notes], &refs), [32]);
}

// ============================================================================
// Buffer
// ============================================================================

#[test]
fn test_put_str_clips_at_edge() {
    let mut buf = Buffer::new(5, 1);
    let end = buf.put_str(2, 0, "hello", style());
    assert_eq!(end, 5);
    assert_eq!(buf.row_text(0), "  hel");
}

#[test]
fn test_put_str_wide_chars() {
    let mut buf = Buffer::new(6, 1);
    let end = buf.put_str(0, 0, "日本x", style());
    assert_eq!(end, 5);
    assert!(buf.get(1, 0).unwrap().wide_continuation);
    assert_eq!(buf.row_text(0), "日本x ");
}

#[test]
fn test_diff_reports_changed_cells() {
    let a = Buffer::new(4, 2);
    let mut b = a.clone();
    b.put_str(1, 1, "z", style());
    let changed: Vec<(u16, u16)> = b.diff(&a).map(|(x, y, _)| (x, y)).collect();
    assert_eq!(changed, [(1, 1)]);
}

#[test]
fn test_invalidate_forces_full_diff() {
    let a = Buffer::new(3, 2);
    let mut b = a.clone();
    b.invalidate();
    assert_eq!(a.diff(&b).count(), 6);
}

// ============================================================================
// Hit map
// ============================================================================

#[test]
fn test_hit_prefers_later_region() {
    let mut hits = HitMap::new();
    hits.register(Rect::new(0, 0, 10, 1), Action::Sort("name".into()));
    hits.register(Rect::new(8, 0, 1, 1), Action::Hide("name".into()));

    assert_eq!(hits.hit(3, 0), Some(&Action::Sort("name".into())));
    assert_eq!(hits.hit(8, 0), Some(&Action::Hide("name".into())));
    assert_eq!(hits.hit(3, 1), None);
}

#[test]
fn test_empty_regions_are_ignored() {
    let mut hits = HitMap::new();
    hits.register(Rect::new(0, 0, 0, 1), Action::TogglePage);
    assert!(hits.regions().is_empty());
}

// ============================================================================
// Text
// ============================================================================

#[test]
fn test_pad_and_truncate() {
    assert_eq!(pad_to_width("42", 5, Alignment::Right), "   42");
    assert_eq!(pad_to_width("ab", 4, Alignment::Center), " ab ");
    assert_eq!(pad_to_width("abcdef", 4, Alignment::Left), "abc…");
    assert_eq!(truncate_to_width("abc", 3), "abc");
}
