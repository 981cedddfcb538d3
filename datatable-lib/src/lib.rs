//! Data table view-state library
//!
//! Sorting, filtering, pagination and row selection over an in-memory array of
//! JSON records. A host renders [`DataTable::view`] and feeds user actions back
//! through the table's mutating methods; every derived value is recomputed from
//! the records and the current view state.

pub mod column;
pub mod error;
pub mod filter;
pub mod paginate;
pub mod pagination;
pub mod record;
pub mod selection;
pub mod sort;

mod table;

pub use column::{Alignment, CellRenderer, Column, infer_columns};
pub use error::{Result, TableError};
pub use filter::FilterScope;
pub use pagination::{PageItem, Pagination};
pub use record::{Record, load_records};
pub use selection::Selection;
pub use sort::{SortDirection, SortState};
pub use table::*;
