//! Terminal front end for `datatable-lib`.
//!
//! Renders a [`DataTable`](datatable_lib::DataTable) with a search box, a
//! filter-scope selector, sortable and hideable column headers, row
//! checkboxes and a pagination bar. Everything is reachable by keyboard and
//! by mouse.

pub mod action;
pub mod app;
pub mod buffer;
pub mod cli;
pub mod config;
pub mod demo;
pub mod error;
pub mod event_loop;
pub mod hit;
pub mod logging;
pub mod paths;
pub mod terminal;
pub mod text;
pub mod theme;
pub mod view;

pub use app::{App, Focus};
pub use error::AppError;
