// src/progress.rs
/// Status reporting for the fetch → parse pass.
/// Frontends implement this to surface what the scrape is doing.
pub trait Progress {
    /// Number of steps about to run.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One step finished; `detail` says what it produced.
    fn item_done(&mut self, _detail: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Sends every report to the debug log. Used where nobody watches a terminal.
pub struct LogProgress;

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        logd!("Progress: {} step(s)", total);
    }
    fn log(&mut self, msg: &str) {
        logf!("Progress: {}", msg);
    }
    fn item_done(&mut self, detail: &str) {
        logf!("Progress: {}", detail);
    }
    fn finish(&mut self) {
        logd!("Progress: finished");
    }
}
