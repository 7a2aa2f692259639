use metrics::{counter, histogram};
use std::time::Duration;

/// Counters and latency histograms for command dispatch.
///
/// All metric names share a single prefix so the router's series group
/// together in whatever backend the binary installs.
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            prefix: "gk_router",
        }
    }

    pub fn command_received(&self, command: &str) {
        counter!(format!("{}.commands_received", self.prefix), "command" => command.to_string())
            .increment(1);
    }

    pub fn user_registered(&self) {
        counter!(format!("{}.users_registered", self.prefix)).increment(1);
    }

    pub fn access_denied(&self, command: &str) {
        counter!(format!("{}.access_denied", self.prefix), "command" => command.to_string())
            .increment(1);
    }

    pub fn unknown_command(&self) {
        counter!(format!("{}.unknown_commands", self.prefix)).increment(1);
    }

    pub fn storage_error(&self) {
        counter!(format!("{}.storage_errors", self.prefix)).increment(1);
    }

    pub fn dispatch_latency(&self, elapsed: Duration) {
        histogram!(format!("{}.dispatch_latency_ms", self.prefix))
            .record(elapsed.as_secs_f64() * 1000.0);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
