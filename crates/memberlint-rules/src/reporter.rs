//! One-time warning reporting
//!
//! Configuration misuse is reported through a warning side-channel rather
//! than the diagnostic sequence, and each distinct warning key is emitted
//! at most once per reporter. The process-wide reporter deduplicates
//! across invocations so parallel per-file analysis stays quiet after the
//! first report; correctness of diagnostics never depends on it.

use codespan_reporting::diagnostic::Diagnostic as CsDiagnostic;
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use parking_lot::Mutex;
use rustc_hash::FxHashSet;
use std::sync::OnceLock;

/// Sink for one-time warnings, keyed by rule identity
pub trait WarningSink: Send + Sync {
    /// Report `message` unless something was already reported for `key`
    fn warn_once(&self, key: &str, message: &str);
}

/// Deduplicating reporter that renders warnings to stderr
#[derive(Debug, Default)]
pub struct DedupReporter {
    seen: Mutex<FxHashSet<String>>,
}

impl DedupReporter {
    /// Create an empty reporter
    pub fn new() -> Self {
        DedupReporter::default()
    }

    /// The process-wide reporter shared by [`crate::analyze`]
    pub fn shared() -> &'static DedupReporter {
        static SHARED: OnceLock<DedupReporter> = OnceLock::new();
        SHARED.get_or_init(DedupReporter::new)
    }
}

impl WarningSink for DedupReporter {
    fn warn_once(&self, key: &str, message: &str) {
        if self.seen.lock().insert(key.to_string()) {
            emit_warning(message);
        }
    }
}

/// Render one warning to stderr with colors.
fn emit_warning(message: &str) {
    let diagnostic: CsDiagnostic<usize> = CsDiagnostic::warning().with_message(message);
    let mut writer = StandardStream::stderr(ColorChoice::Auto);
    let config = term::Config::default();
    let files: SimpleFiles<String, String> = SimpleFiles::new();
    // A failed render must not affect the analysis result.
    let _ = term::emit(&mut writer, &config, &files, &diagnostic);
}

/// Test reporter that captures warnings instead of rendering them
#[derive(Debug, Default)]
pub struct CollectingSink {
    seen: Mutex<FxHashSet<String>>,
    messages: Mutex<Vec<String>>,
}

impl CollectingSink {
    /// Create an empty sink
    pub fn new() -> Self {
        CollectingSink::default()
    }

    /// The warnings captured so far
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }
}

impl WarningSink for CollectingSink {
    fn warn_once(&self, key: &str, message: &str) {
        if self.seen.lock().insert(key.to_string()) {
            self.messages.lock().push(message.to_string());
        }
    }
}
