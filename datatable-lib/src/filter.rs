//! Case-insensitive substring filtering.

use crate::record::Record;

/// Which part of a row the search term is matched against.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterScope {
    /// Every field value, concatenated.
    #[default]
    All,
    /// A single column, by key.
    Column(String),
}

impl FilterScope {
    /// The scoped column key, if any.
    pub fn column(&self) -> Option<&str> {
        match self {
            FilterScope::All => None,
            FilterScope::Column(key) => Some(key),
        }
    }

    /// Text of `record` the term is matched against.
    pub fn haystack(&self, record: &Record) -> String {
        match self {
            FilterScope::All => record.joined(),
            FilterScope::Column(key) => record.display(key),
        }
    }
}

/// Returns `true` if `record` contains `term` within `scope`, ignoring case.
pub fn matches(record: &Record, scope: &FilterScope, term: &str) -> bool {
    term.is_empty()
        || scope
            .haystack(record)
            .to_lowercase()
            .contains(&term.to_lowercase())
}

/// Keeps the records matching `term` within `scope`, preserving order.
///
/// An empty term keeps every record.
pub fn filter_records<'a>(
    records: &[&'a Record],
    scope: &FilterScope,
    term: &str,
) -> Vec<&'a Record> {
    records
        .iter()
        .copied()
        .filter(|record| matches(record, scope, term))
        .collect()
}
