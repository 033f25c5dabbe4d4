//! File logging bootstrap. The terminal is owned by the UI while the app runs,
//! so diagnostics go to rotating files inside the data directory instead of
//! stdout. `RUST_LOG` overrides the default level.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;

const LOG_FILE_BASENAME: &str = "vocab-keeper";
const DEFAULT_LEVEL: &str = "info";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    log_dir: PathBuf,
    _logger: LoggerHandle,
}

/// Start the file logger once per process. Repeating the call with the same
/// directory is a no-op; switching directories is rejected.
pub fn init_logging(log_dir: &Path) -> Result<()> {
    let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState> {
        let logger = Logger::try_with_env_or_str(DEFAULT_LEVEL)
            .map_err(|err| anyhow!("invalid log specification: {err}"))?
            .log_to_file(
                FileSpec::default()
                    .directory(log_dir)
                    .basename(LOG_FILE_BASENAME),
            )
            .rotate(
                Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(MAX_LOG_FILES),
            )
            .write_mode(WriteMode::BufferAndFlush)
            .append()
            .format_for_files(flexi_logger::detailed_format)
            .start()
            .map_err(|err| anyhow!("failed to start logger: {err}"))?;

        info!(
            "event=app_start module=core status=ok version={} log_dir={}",
            env!("CARGO_PKG_VERSION"),
            log_dir.display()
        );

        Ok(LoggingState {
            log_dir: log_dir.to_path_buf(),
            _logger: logger,
        })
    })?;

    if state.log_dir != log_dir {
        return Err(anyhow!(
            "logging already initialized at `{}`; refusing to switch to `{}`",
            state.log_dir.display(),
            log_dir.display()
        ));
    }
    Ok(())
}
