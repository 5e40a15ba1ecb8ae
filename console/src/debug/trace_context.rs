//! Trace IDs for correlating the log lines of one command run.
//!
//! Each CLI invocation runs inside a span carrying a fresh `trace_id`, so every
//! request, retry prompt and error it produces can be grepped out of the shared
//! rolling log.

use tracing::Span;
use uuid::Uuid;

/// Generate a new trace ID.
pub fn new_trace_id() -> String {
    Uuid::new_v4().to_string()
}

/// Root span for one console command.
pub fn command_span(command: &'static str) -> Span {
    let trace_id = new_trace_id();
    tracing::info_span!("command", name = command, trace_id = %trace_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_ids_are_unique_uuids() {
        let a = new_trace_id();
        let b = new_trace_id();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }
}
