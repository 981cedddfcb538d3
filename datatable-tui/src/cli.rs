//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Browse a JSON array of rows as a sortable, searchable table.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "datatable-tui", version, about)]
pub struct Cli {
    /// JSON file holding an array of row objects. Uses demo data when omitted.
    pub data: Option<PathBuf>,

    /// Rows per page.
    #[arg(short = 'p', long)]
    pub page_size: Option<usize>,

    /// Page buttons shown on each side of the current page.
    #[arg(short = 's', long)]
    pub siblings: Option<usize>,

    /// Config file to use instead of the default location.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,
}
