use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use datatable_lib::{DataTable, infer_columns, load_records};
use datatable_tui::cli::Cli;
use datatable_tui::config::Config;
use datatable_tui::{App, AppError, demo, event_loop, logging};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_cli(&cli);
    config.validate()?;

    if logging::init(config.level()?).is_none() {
        eprintln!("Warning: could not create a log file, continuing without logs");
    }

    let (records, columns) = match &config.data {
        Some(path) => {
            let records = load_records(path)?;
            info!("loaded {} rows from {}", records.len(), path.display());
            let columns = infer_columns(&records);
            (records, columns)
        }
        None => (demo::records(), demo::columns()),
    };

    let table = DataTable::new(records, columns).with_page_size(config.page_size)?;
    let app = App::new(table).with_siblings(config.sibling_count);

    event_loop::run(app).await
}
