//! Shared helpers for the integration tests
//!
//! Tests build trees against real source snippets: a tiny scanner supplies
//! the token stream a host lexer would, and span helpers locate member
//! declarations inside the snippet, so offsets in diagnostics and patches
//! are honest byte positions.

#![allow(dead_code)]

use memberlint_ast::{Span, Token};
use memberlint_rules::Patch;

/// Split source into identifier-ish and single-character punctuation
/// tokens, skipping whitespace. Stands in for the host's lexer output.
pub fn scan(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let bytes = source.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i] as char;
        if c.is_whitespace() {
            i += 1;
            continue;
        }
        let start = i;
        if c.is_alphanumeric() || c == '_' {
            while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                i += 1;
            }
        } else {
            i += 1;
        }
        tokens.push(Token::new(
            &source[start..i],
            Span::new(start as u32, i as u32),
        ));
    }
    tokens
}

/// Span of the first occurrence of `pattern` in `source`
pub fn span_of(source: &str, pattern: &str) -> Span {
    span_of_nth(source, pattern, 0)
}

/// Span of the `n`-th (0-based) occurrence of `pattern` in `source`
pub fn span_of_nth(source: &str, pattern: &str, n: usize) -> Span {
    let mut start = 0;
    let mut remaining = n;
    loop {
        let at = source[start..]
            .find(pattern)
            .unwrap_or_else(|| panic!("pattern '{pattern}' not found in '{source}'"));
        start += at;
        if remaining == 0 {
            return Span::new(start as u32, (start + pattern.len()) as u32);
        }
        remaining -= 1;
        start += 1;
    }
}

/// Span of the first character of `pattern`'s first occurrence, for
/// single-character member names that would otherwise match earlier text.
pub fn first_char_of(source: &str, pattern: &str) -> Span {
    let at = span_of(source, pattern);
    Span::new(at.start, at.start + 1)
}

/// Apply one patch to source text
pub fn apply_patch(source: &str, patch: &Patch) -> String {
    match patch {
        Patch::Delete { start, end } => {
            format!("{}{}", &source[..*start as usize], &source[*end as usize..])
        }
        Patch::InsertBefore { at, text } => {
            format!(
                "{}{}{}",
                &source[..*at as usize],
                text,
                &source[*at as usize..]
            )
        }
    }
}
