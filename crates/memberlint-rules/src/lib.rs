//! Memberlint analysis rules
//!
//! Lint rules that walk a host-supplied syntax tree and report class
//! members lacking an explicit accessibility declaration, or carrying a
//! redundant `public` one.
//!
//! This crate provides:
//! - Option resolution into an immutable rule configuration
//! - The member-access walker and per-member checker
//! - Diagnostics with byte-precise spans and optional text patches
//! - A deduplicating warning reporter for configuration misuse
//!
//! # Usage
//!
//! ```rust
//! use memberlint_ast::{MemberName, Node, Span, SourceTree, SyntaxKind};
//! use memberlint_rules::analyze;
//!
//! // class C { foo() {} }
//! let method = Node::new(SyntaxKind::Method, Span::new(10, 18))
//!     .with_name(MemberName::identifier("foo", Span::new(10, 13)));
//! let class = Node::new(SyntaxKind::Class, Span::new(0, 20)).with_children(vec![method]);
//! let tree = SourceTree::new(class, vec![]);
//!
//! let diagnostics = analyze(&tree, &[]).unwrap();
//! assert_eq!(diagnostics.len(), 1);
//! assert!(diagnostics[0].message.contains("class method"));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod diagnostic;
pub mod member_access;
pub mod reporter;

pub use config::{Config, ConfigError, Resolution};
pub use diagnostic::{Diagnostic, Patch};
pub use member_access::{analyze, analyze_with_reporter, MemberKind};
pub use reporter::{CollectingSink, DedupReporter, WarningSink};
