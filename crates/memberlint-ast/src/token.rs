//! Lexical tokens
//!
//! The rules never re-lex source text; the host supplies its token stream
//! alongside the tree so adjacency queries (token following a modifier,
//! keyword inside a member) stay consistent with what was actually parsed.

use crate::span::Span;
use serde::{Deserialize, Serialize};

/// One lexical token as reported by the host's tokenizer.
///
/// Only the text and span are needed: the rules look tokens up by position
/// and, for keywords, by literal text. Trivia (whitespace, comments) is
/// expected to be absent from the stream, matching typical lexer output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Source text of the token
    pub text: String,
    /// Location of the token
    pub span: Span,
}

impl Token {
    /// Create a new token
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Token {
            text: text.into(),
            span,
        }
    }
}
