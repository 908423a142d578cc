//! User-facing notification seam. Fire-and-forget; the core never reads a
//! value back from the sink.

use tracing::{info, warn};

pub trait NotificationSink: Send + Sync {
    fn show_error(&self, title: &str, message: &str);
    fn show_toast(&self, title: &str, message: &str);
}

/// Sink for surfaces without their own notification area: errors go to the
/// log at warn level, informational toasts at info level.
pub struct TracingNotificationSink;

impl NotificationSink for TracingNotificationSink {
    fn show_error(&self, title: &str, message: &str) {
        warn!(title, message, "user-facing error notification");
    }

    fn show_toast(&self, title: &str, message: &str) {
        info!(title, message, "user-facing notification");
    }
}
