use std::collections::HashMap;
use std::time::Duration;
use std::time::Instant;

/// Running tally for one `<package>.<test>` key across repeated attempts.
/// Holds `successes <= attempts` for any stream in which a test's `run`
/// precedes its terminating event.
#[derive(Debug, Default)]
pub struct TestRunStats {
    pub attempts: u64,
    pub successes: u64,
}

/// One terminated attempt, ready for display.
#[derive(Debug)]
pub struct Attempt {
    pub successes: u64,
    pub attempts: u64,
    pub elapsed: Duration,
}

/// Folds run/pass/fail/output events into per-test tallies. Exactly one
/// attempt is in flight at a time, so a single start instant and a single
/// captured-output buffer are shared across all keys; output arriving for a
/// key other than the most recently touched one is misattributed.
pub struct Tracker {
    runs: HashMap<String, TestRunStats>,
    started: Option<Instant>,
    captured: String,
}

impl Tracker {
    pub fn new() -> Self {
        Self {
            runs: HashMap::new(),
            started: None,
            captured: String::new(),
        }
    }

    /// An attempt started. Silent: no render happens until it terminates.
    pub fn on_run(&mut self, key: &str) {
        self.entry(key).attempts += 1;
        self.started = Some(Instant::now());
    }

    /// The in-flight attempt passed. Its captured output is discarded.
    pub fn on_pass(&mut self, key: &str) -> Attempt {
        let elapsed = self.elapsed_since_run();
        let stats = self.entry(key);
        stats.successes += 1;
        let attempt = Attempt {
            successes: stats.successes,
            attempts: stats.attempts,
            elapsed,
        };
        self.captured.clear();
        attempt
    }

    /// The in-flight attempt failed. Captured output is left in place so it
    /// can still be shown if nothing further clears it.
    pub fn on_fail(&mut self, key: &str) -> Attempt {
        let elapsed = self.elapsed_since_run();
        let stats = self.entry(key);
        Attempt {
            successes: stats.successes,
            attempts: stats.attempts,
            elapsed,
        }
    }

    pub fn on_output(&mut self, text: &str) {
        self.captured.push_str(text);
    }

    /// Output still buffered once the stream has ended, if any. Non-empty
    /// exactly when the last terminated attempt failed.
    pub fn trailing_output(&self) -> Option<&str> {
        if self.captured.is_empty() {
            None
        } else {
            Some(self.captured.as_str())
        }
    }

    #[cfg(test)]
    pub fn stats(&self, key: &str) -> Option<&TestRunStats> {
        self.runs.get(key)
    }

    fn entry(&mut self, key: &str) -> &mut TestRunStats {
        self.runs
            .entry(key.to_owned())
            .or_insert_with(TestRunStats::default)
    }

    fn elapsed_since_run(&self) -> Duration {
        self.started
            .map(|started| started.elapsed())
            .unwrap_or_default()
    }
}
