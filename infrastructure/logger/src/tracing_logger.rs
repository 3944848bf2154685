use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `tracing`-backed implementation of the domain logging port.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "suggestions", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "suggestions", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "suggestions", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "suggestions", "{}", message);
    }
}
