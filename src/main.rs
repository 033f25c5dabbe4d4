//! Binary entry point: resolve the data directory, start file logging, open
//! the SQLite store and drive the Ratatui event loop until the user exits.
use anyhow::Context;
use log::info;
use vocab_keeper::config::AppPaths;
use vocab_keeper::logging::init_logging;
use vocab_keeper::{run_app, App, VocabStore};

/// Failing to open the store is fatal; the error is printed to the terminal
/// instead of starting a UI that cannot save anything.
fn main() -> anyhow::Result<()> {
    let paths = AppPaths::resolve()?;
    paths.prepare()?;
    init_logging(&paths.log_dir)?;

    let store = VocabStore::open(&paths.db_file).with_context(|| {
        format!(
            "could not open vocabulary store at {}",
            paths.db_file.display()
        )
    })?;

    let mut app = App::new(store);
    let result = run_app(&mut app);
    let status = if result.is_ok() { "ok" } else { "error" };
    info!("event=app_exit module=core status={status}");
    result
}
