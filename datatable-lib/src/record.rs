//! Dynamic table rows

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Number;
use serde_json::Value;

use crate::error::{Result, TableError};

/// A single table row.
///
/// Rows hold their fields as an insertion-ordered `Map<String, Value>`, so the
/// "All" search sees field values in the order they appeared in the source
/// document. Two records are equal when their field maps are structurally
/// equal; key order does not matter.
///
/// # Example
///
/// ```
/// use datatable_lib::Record;
///
/// let row = Record::new()
///     .set("id", 7)
///     .set("firstName", "Ada")
///     .set("active", true);
///
/// assert_eq!(row.display("firstName"), "Ada");
/// assert_eq!(row.display("missing"), "");
/// assert_eq!(row.joined(), "7Adatrue");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, returning the record for chaining.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets a field in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Returns the raw value of a field, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns all fields in insertion order.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Cell text for a field. Absent and `null` fields are empty.
    pub fn display(&self, key: &str) -> String {
        self.get(key).map(stringify).unwrap_or_default()
    }

    /// All field values stringified and concatenated without a separator.
    pub fn joined(&self) -> String {
        self.fields.values().map(stringify).collect()
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Converts a JSON value into the text shown in a table cell.
///
/// | Value | Text |
/// |-------|------|
/// | `null` | empty |
/// | bool | `true` / `false` |
/// | number | decimal form, integral floats without a fraction |
/// | string | itself |
/// | array | elements joined with `,` |
/// | object | `[object]` |
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(stringify).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object]".to_string(),
    }
}

/// Largest float magnitude printed as a plain integer.
const MAX_INTEGRAL_FLOAT: f64 = 1e15;

fn format_number(n: &Number) -> String {
    if n.is_f64()
        && let Some(f) = n.as_f64()
        && f.fract() == 0.0
        && f.abs() < MAX_INTEGRAL_FLOAT
    {
        return format!("{}", f as i64);
    }
    n.to_string()
}

/// Short name of a JSON value's type, for error messages.
pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Converts a parsed JSON document into rows.
///
/// The document must be an array whose elements are all objects.
pub fn records_from_value(value: Value) -> Result<Vec<Record>> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(TableError::NotAnArray {
                found: kind_name(&other),
            });
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(fields) => Ok(Record::from(fields)),
            _ => Err(TableError::RowNotObject { index }),
        })
        .collect()
}

/// Parses rows from a JSON string.
pub fn records_from_str(json: &str) -> Result<Vec<Record>> {
    records_from_value(serde_json::from_str(json)?)
}

/// Reads rows from a JSON file.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let records = records_from_str(&text)?;
    log::debug!("loaded {} rows from {}", records.len(), path.display());
    Ok(records)
}
