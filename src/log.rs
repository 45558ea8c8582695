// src/log.rs
//! Append-only debug log kept next to the saved list.
//!
//! Nothing is written until `init` names the directory; lines logged before
//! that (or in a process that never calls it, like the unit tests) are dropped.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use crate::config::consts::LOG_FILE;

static LOG_LOCK: Mutex<()> = Mutex::new(());
static START: OnceLock<Instant> = OnceLock::new();
static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Point the log at `<dir>/debug.log`. Only the first call takes effect;
/// returns `false` when a path was already set.
pub fn init(dir: &Path) -> bool {
    START.get_or_init(Instant::now);
    let _ = fs::create_dir_all(dir);
    LOG_PATH.set(dir.join(LOG_FILE)).is_ok()
}

/// The active log file, once `init` has run.
pub fn path() -> Option<&'static Path> {
    LOG_PATH.get().map(PathBuf::as_path)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

fn format_line(elapsed_ms: u128, level: &str, msg: &str) -> String {
    format!("[{}][{level}] {msg}\n", fmt_elapsed(elapsed_ms))
}

/// Backing function for the `log*!` macros. Never fails the caller.
pub fn write_log(level: &str, msg: &str) {
    let Some(path) = path() else { return };
    let elapsed = START.get_or_init(Instant::now).elapsed().as_millis();
    let line = format_line(elapsed, level, msg);

    let Ok(_guard) = LOG_LOCK.lock() else { return };
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = file.write_all(line.as_bytes());
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log("INFO", &format!($($arg)*))
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log("DEBUG", &format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log("ERROR", &format!($($arg)*))
    };
}
