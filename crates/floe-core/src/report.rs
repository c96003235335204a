//! The [`ReportSink`] reporting channel consumed by the bridge.

/// Sink for human-readable warning and error lines.
///
/// The bridge emits through this trait instead of writing to stderr
/// directly: out-of-bounds `getNode` lookups produce a warning line, and a
/// script-side raise has its class and message logged before the host error
/// is returned. Test code substitutes a collecting implementation.
pub trait ReportSink {
    /// Emit one warning line.
    fn warning(&mut self, line: &str);

    /// Emit one error line.
    fn error(&mut self, line: &str);
}

/// Default sink writing lines to stderr.
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrReporter;

impl ReportSink for StderrReporter {
    fn warning(&mut self, line: &str) {
        eprintln!("WARNING: {line}");
    }

    fn error(&mut self, line: &str) {
        eprintln!("ERROR: {line}");
    }
}
