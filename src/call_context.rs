use std::fmt;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Log scope of a single computation.
///
/// A named context logs its start on creation and its duration when
/// dropped. The default context has no name and only forwards messages
/// at debug level.
pub struct CallContext {
    operation: String,
    start_time: Instant,
}

impl Default for CallContext {
    fn default() -> CallContext {
        CallContext {
            operation: "".to_string(),
            start_time: Instant::now(),
        }
    }
}

impl CallContext {
    pub fn new(operation: &str) -> Self {
        let context = CallContext {
            operation: operation.to_string(),
            start_time: Instant::now(),
        };

        context.log("->", None);
        context
    }

    pub fn log(&self, prefix: &str, suffix: Option<&str>) {
        let suffix_str = suffix.unwrap_or_default();

        if self.operation.is_empty() {
            log::debug!("{}", suffix_str.trim_start());
            return;
        }

        log::info!("{} [{}]{}", prefix, self.operation, suffix_str);
    }

    pub fn log_message(&self, message: &str) {
        self.log("  ", Some(&format!(" {}", message)));
    }
}

impl Drop for CallContext {
    fn drop(&mut self) {
        if self.operation.is_empty() {
            return;
        }
        let call_duration = self.start_time.elapsed().as_millis();
        self.log("<-", Some(&format!(" (took {} ms)", call_duration)));
    }
}

impl Display for CallContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.operation)
    }
}
