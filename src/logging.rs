//! Tracing setup
//!
//! Log level comes from `IEXPENSE_LOG` (an `EnvFilter` directive string) and
//! otherwise defaults to warnings, or debug output with `--verbose`. The TUI
//! owns the terminal, so while it runs logs go to a file instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "IEXPENSE_LOG";

static TRACING_INIT: Once = Once::new();

/// Where log lines are written
#[derive(Debug, Clone)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Install the global subscriber; later calls are ignored
pub fn init(target: LogTarget, verbose: bool) {
    TRACING_INIT.call_once(|| {
        let default = if verbose { "iexpense=debug" } else { "iexpense=warn" };
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

        match target {
            LogTarget::Stderr => {
                let _ = fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .try_init();
            }
            LogTarget::File(path) => {
                if let Some(parent) = path.parent() {
                    let _ = fs::create_dir_all(parent);
                }
                // No log file means no logs; the TUI must not write to the terminal
                if let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) {
                    let _ = fmt()
                        .with_env_filter(filter)
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .try_init();
                }
            }
        }
    });
}
