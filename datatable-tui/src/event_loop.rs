//! Main event loop.

use crossterm::event::EventStream;
use futures::StreamExt;
use log::{info, trace};

use crate::app::App;
use crate::error::AppError;
use crate::terminal::TerminalGuard;

/// Run `app` until it asks to quit or the input stream ends.
///
/// Every event that changes state is followed by a full re-render; the
/// terminal guard only writes the cells that changed.
pub async fn run(mut app: App) -> Result<(), AppError> {
    let mut terminal = TerminalGuard::new()?;
    let mut events = EventStream::new();

    let (width, height) = terminal.size();
    info!("event loop started ({}x{})", width, height);

    terminal.draw(|buf| app.render(buf))?;

    while !app.should_quit() {
        let Some(event) = events.next().await else {
            break;
        };
        let event = event?;
        trace!("event {:?}", event);

        if app.handle_event(&event) {
            terminal.draw(|buf| app.render(buf))?;
        }
    }

    info!(
        "event loop finished with {} rows selected",
        app.table().selection().len()
    );
    Ok(())
}
