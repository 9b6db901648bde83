//! Notification sink abstraction.

/// Where reminder messages go.
///
/// Implementations may drop messages silently (no notification permission,
/// no display attached); the scheduler never retries a skipped firing.
pub trait Notifier: Send + Sync {
    /// `tag` identifies the reminder stream, e.g. "monthly-reminder";
    /// sinks may use it to collapse repeats.
    fn notify(&self, title: &str, body: &str, tag: &str);
}

/// Default sink: structured log lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, title: &str, body: &str, tag: &str) {
        tracing::info!(tag, "{}: {}", title, body);
    }
}
