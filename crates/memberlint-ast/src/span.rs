//! Source spans
//!
//! Spans are half-open byte ranges into the analyzed file. Line/column
//! mapping is the host's concern; diagnostics carry offsets only.

use serde::{Deserialize, Serialize};

/// A half-open byte range `[start, end)` in the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Byte offset of the first character
    pub start: u32,
    /// Byte offset one past the last character
    pub end: u32,
}

impl Span {
    /// Create a new span. `start` must not exceed `end`.
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "span start {start} exceeds end {end}");
        Span { start, end }
    }

    /// Length of the span in bytes
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// True if the span covers no text
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// True if `other` lies entirely within this span
    pub fn contains(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}
