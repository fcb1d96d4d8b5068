/// Sink for user-visible blocking alerts (geolocation and routing
/// failures). The host implements this against whatever modal facility it
/// has.
pub trait AlertSink: Send + Sync {
    fn alert(&self, message: &str);
}

/// Default sink that forwards alerts to the log, for headless hosts.
#[derive(Debug, Default)]
pub struct LogAlertSink;

impl AlertSink for LogAlertSink {
    fn alert(&self, message: &str) {
        log::warn!("alert: {message}");
    }
}
