//! Column definitions for table display.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::record::Record;

/// Custom cell renderer.
///
/// Receives the raw field value (`Value::Null` when the row lacks the field)
/// and the whole row, and returns the cell text.
pub type CellRenderer = Arc<dyn Fn(&Value, &Record) -> String + Send + Sync>;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Column configuration.
///
/// A column reads the field named by `key` from every row and shows it under
/// `title`.
///
/// # Examples
///
/// ```
/// use datatable_lib::{Alignment, Column};
///
/// let columns = vec![
///     Column::new("id", "ID").width(4).align(Alignment::Right),
///     Column::new("firstName", "First Name"),
///     Column::new("gender", "Gender")
///         .emphasis()
///         .render(|value, _row| value.as_str().unwrap_or_default().to_uppercase()),
/// ];
/// assert_eq!(columns[2].title, "Gender");
/// ```
#[derive(Clone)]
pub struct Column {
    /// Field read from each row.
    pub key: String,
    /// Header text.
    pub title: String,
    /// Fixed width in terminal cells. `None` sizes the column to its content.
    pub width: Option<u16>,
    /// Horizontal alignment.
    pub align: Alignment,
    /// Render cell text in bold.
    pub emphasis: bool,
    renderer: Option<CellRenderer>,
}

impl Column {
    /// Create a column reading `key`, titled `title`.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            width: None,
            align: Alignment::Left,
            emphasis: false,
            renderer: None,
        }
    }

    /// Use a custom renderer for this column's cells.
    pub fn render<F>(mut self, renderer: F) -> Self
    where
        F: Fn(&Value, &Record) -> String + Send + Sync + 'static,
    {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    /// Set a fixed width.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Render cells in bold.
    pub fn emphasis(mut self) -> Self {
        self.emphasis = true;
        self
    }

    pub fn has_renderer(&self) -> bool {
        self.renderer.is_some()
    }

    /// Text shown for this column in `row`.
    pub fn cell_text(&self, row: &Record) -> String {
        match &self.renderer {
            Some(renderer) => renderer(row.get(&self.key).unwrap_or(&Value::Null), row),
            None => row.display(&self.key),
        }
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("width", &self.width)
            .field("align", &self.align)
            .field("emphasis", &self.emphasis)
            .field("renderer", &self.renderer.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// One column per field, in first-seen order, titled by key.
///
/// Numeric columns are right-aligned when every present value is a number.
pub fn infer_columns(records: &[Record]) -> Vec<Column> {
    let mut keys: Vec<&str> = Vec::new();
    for record in records {
        for key in record.fields().keys() {
            if !keys.contains(&key.as_str()) {
                keys.push(key);
            }
        }
    }

    keys.into_iter()
        .map(|key| {
            let numeric = records
                .iter()
                .filter_map(|record| record.get(key))
                .filter(|value| !value.is_null())
                .all(Value::is_number);
            let column = Column::new(key, key);
            if numeric {
                column.align(Alignment::Right)
            } else {
                column
            }
        })
        .collect()
}
