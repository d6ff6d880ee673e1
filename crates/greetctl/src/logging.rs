//! Logging for greetctl
//!
//! The TUI owns the terminal, so the form logs to a file. Failed greeting
//! requests end up here and nowhere else.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

/// Explicit log file override
pub const LOG_FILE_ENV: &str = "GREETCTL_LOG_FILE";

const LOG_SUBPATH: &str = "greeter/greetctl.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Pick the log file from the candidates, in priority order:
///
/// 1. explicit override
/// 2. $XDG_STATE_HOME/greeter/greetctl.log
/// 3. platform state dir
/// 4. ~/.local/state/greeter/greetctl.log
pub fn resolve_log_path(
    explicit: Option<PathBuf>,
    xdg_state_home: Option<PathBuf>,
    state_dir: Option<PathBuf>,
    home: Option<PathBuf>,
) -> Option<PathBuf> {
    explicit
        .or_else(|| xdg_state_home.map(|dir| dir.join(LOG_SUBPATH)))
        .or_else(|| state_dir.map(|dir| dir.join(LOG_SUBPATH)))
        .or_else(|| home.map(|dir| dir.join(".local/state").join(LOG_SUBPATH)))
}

/// Log file path from the environment
pub fn discover_log_path() -> Option<PathBuf> {
    let non_empty = |var: &str| {
        std::env::var_os(var)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    };

    resolve_log_path(
        non_empty(LOG_FILE_ENV),
        non_empty("XDG_STATE_HOME"),
        dirs::state_dir(),
        dirs::home_dir(),
    )
}

fn open_log_file(path: &Path) -> std::io::Result<std::fs::File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Send logs to the discovered file.
///
/// Returns the path in use, or `None` when no file could be opened, in which
/// case nothing is logged.
pub fn init_file_logging() -> Option<PathBuf> {
    let path = discover_log_path()?;
    let file = open_log_file(&path).ok()?;

    fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Some(path)
}

/// Send logs to stderr, for one-shot commands
pub fn init_stderr_logging() {
    fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}
