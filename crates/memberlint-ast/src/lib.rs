//! Syntax tree model for memberlint
//!
//! This crate defines the tree shape the analysis rules consume. The tree
//! is produced by a host parser (parsing is out of scope here); the rules
//! only require:
//! - nodes with a discriminated kind, a source span, an ordered modifier
//!   list, and an optional name ([`node`]),
//! - a token stream supporting adjacency queries ([`tree`]),
//! - a depth-first pre-order traversal ([`visitor`]).
//!
//! # Example
//!
//! ```rust
//! use memberlint_ast::*;
//!
//! let method = Node::new(SyntaxKind::Method, Span::new(10, 18))
//!     .with_name(MemberName::identifier("foo", Span::new(10, 13)));
//! let class = Node::new(SyntaxKind::Class, Span::new(0, 20))
//!     .with_children(vec![method]);
//! let tree = SourceTree::new(class, vec![]);
//! assert!(tree.root().kind.is_class_like());
//! ```

#![warn(missing_docs)]

pub mod node;
pub mod span;
pub mod token;
pub mod tree;
pub mod visitor;

pub use node::{MemberName, Modifier, ModifierKind, NameKind, Node, SyntaxKind};
pub use span::Span;
pub use token::Token;
pub use tree::SourceTree;
pub use visitor::{walk_node, Visitor};
