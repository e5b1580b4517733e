//! Diagnostics and patches
//!
//! A diagnostic is an immutable record of one violation: its byte span,
//! a message, and, where the rule can compute one, a minimal text patch
//! that fixes exactly that violation. Diagnostics are appended in
//! traversal order and never merged or reordered.

use serde::{Deserialize, Serialize};

/// A minimal text edit fixing one violation.
///
/// Patches from one run never overlap: each one touches only the member it
/// was produced for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Patch {
    /// Delete the text between two byte offsets
    Delete {
        /// Start of the deleted range
        start: u32,
        /// End of the deleted range (exclusive)
        end: u32,
    },
    /// Insert literal text before a byte offset
    InsertBefore {
        /// Offset the text is inserted at
        at: u32,
        /// The inserted text
        text: String,
    },
}

/// One reported violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Start byte offset of the reported span
    pub start: u32,
    /// End byte offset of the reported span (exclusive)
    pub end: u32,
    /// Human-readable failure message
    pub message: String,
    /// Automatic fix, when one could be computed
    pub fix: Option<Patch>,
}

impl Diagnostic {
    /// Create a diagnostic without a fix
    pub fn new(start: u32, end: u32, message: impl Into<String>) -> Self {
        Diagnostic {
            start,
            end,
            message: message.into(),
            fix: None,
        }
    }

    /// Attach a fix
    pub fn with_fix(mut self, fix: Patch) -> Self {
        self.fix = Some(fix);
        self
    }

    /// Convert to JSON for IDE integration
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
