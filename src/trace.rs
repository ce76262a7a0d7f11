//! Per-call generation trace
//!
//! An ordered list of human-readable lines describing what one generation
//! call did. Tracing is purely observational: it never changes control flow
//! or the returned password. A `Trace` is scoped to a single invocation;
//! callers generating concurrently pass a fresh one per call instead of
//! sharing a collector.

/// Ordered record of a single generation call.
#[derive(Debug, Default)]
pub struct Trace {
    entries: Vec<String>,
}

impl Trace {
    /// Create an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines recorded so far, in emission order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn record(&mut self, line: String) {
        self.entries.push(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_preserves_order() {
        let mut trace = Trace::new();
        assert!(trace.is_empty());

        trace.record("first".to_string());
        trace.record("second".to_string());

        assert_eq!(trace.len(), 2);
        assert_eq!(trace.entries(), ["first", "second"]);
    }
}
