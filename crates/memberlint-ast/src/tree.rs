//! Source tree container
//!
//! Bundles the root node with the host's token stream and answers the
//! positional queries the rules need: the token immediately following a
//! span, and a keyword token inside a span. The rules never recompute
//! token boundaries from raw text.

use crate::node::Node;
use crate::span::Span;
use crate::token::Token;

/// A parsed file: root node plus the token stream it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceTree {
    root: Node,
    tokens: Vec<Token>,
}

impl SourceTree {
    /// Create a tree. Tokens are sorted by start offset so positional
    /// queries are a single forward scan regardless of host ordering.
    pub fn new(root: Node, mut tokens: Vec<Token>) -> Self {
        tokens.sort_by_key(|t| t.span.start);
        SourceTree { root, tokens }
    }

    /// The root node
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// The token stream, in source order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The first token starting at or after the end of `after`.
    ///
    /// This is the `getNextToken`-style adjacency query: given a modifier's
    /// span it yields the syntactically following token, whose start bounds
    /// the deletion range for a removed keyword.
    pub fn next_token(&self, after: Span) -> Option<&Token> {
        self.tokens.iter().find(|t| t.span.start >= after.end)
    }

    /// The first token with the given text lying entirely inside `span`.
    ///
    /// Used to anchor constructor diagnostics at the `constructor` keyword.
    pub fn keyword_in(&self, span: Span, text: &str) -> Option<&Token> {
        self.tokens
            .iter()
            .filter(|t| span.contains(t.span))
            .find(|t| t.text == text)
    }
}
