use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

const DEFAULT_FILTER: &str = "warn";
const LOG_FILE_NAME: &str = "daily-wordle.log";

/// Default log file location for the TUI, where stderr belongs to the screen.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("daily-wordle").join(LOG_FILE_NAME))
}

/// Initialise `env_logger`, honouring `RUST_LOG`. With a path, log lines are
/// appended to that file instead of stderr.
pub fn init_logging(log_file: Option<&Path>) -> io::Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_FILTER));

    if let Some(path) = log_file {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    // A second init (e.g. from tests) is harmless
    let _ = builder.try_init();
    Ok(())
}

// Conditional logging macros - only active in debug builds

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}
