//! Syntax tree nodes
//!
//! This module defines the generic declaration node the rules walk. A node
//! carries:
//! - a discriminated [`SyntaxKind`],
//! - its source [`Span`],
//! - an ordered list of [`Modifier`]s, each with its own span,
//! - an optional [`MemberName`],
//! - its child nodes, in declared order.
//!
//! Container constructs (blocks, statements, expressions) are all
//! represented as [`SyntaxKind::Other`]: traversal only needs children,
//! and the rules only distinguish class-like nodes and member kinds.

use crate::span::Span;
use serde::{Deserialize, Serialize};

/// Kind tag for a syntax node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyntaxKind {
    /// Top-level module / source file
    Module,

    /// Class declaration: `class C { ... }`
    Class,

    /// Class expression: `const C = class { ... }`
    ClassExpression,

    /// Method member
    Method,

    /// Property (field) member
    Property,

    /// Constructor member
    Constructor,

    /// `get` accessor member
    GetAccessor,

    /// `set` accessor member
    SetAccessor,

    /// Index signature member: `[key: string]: T`
    IndexSignature,

    /// Static initialization block member
    StaticBlock,

    /// Any other construct (statement, expression, block, ...)
    Other,
}

impl SyntaxKind {
    /// True for constructs whose members are subject to accessibility
    /// checking (classes and class expressions are checked identically).
    pub fn is_class_like(&self) -> bool {
        matches!(self, SyntaxKind::Class | SyntaxKind::ClassExpression)
    }
}

/// Modifier keyword kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModifierKind {
    /// `public`
    Public,
    /// `protected`
    Protected,
    /// `private`
    Private,
    /// `static`
    Static,
    /// `readonly`
    Readonly,
    /// `abstract`
    Abstract,
    /// `async`
    Async,
}

impl ModifierKind {
    /// True for the three accessibility keywords
    pub fn is_accessibility(&self) -> bool {
        matches!(
            self,
            ModifierKind::Public | ModifierKind::Protected | ModifierKind::Private
        )
    }
}

/// A modifier keyword attached to a declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifier {
    /// Which keyword this is
    pub kind: ModifierKind,
    /// Location of the keyword text
    pub span: Span,
}

impl Modifier {
    /// Create a new modifier
    pub fn new(kind: ModifierKind, span: Span) -> Self {
        Modifier { kind, span }
    }
}

/// The shape of a member's name node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NameKind {
    /// Plain identifier name, with its text
    Identifier(String),
    /// Computed name: `[expr]()`
    Computed,
    /// Any other name shape (string/numeric literal, ...)
    Other,
}

/// A member's name node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberName {
    /// Shape of the name
    pub kind: NameKind,
    /// Location of the name
    pub span: Span,
}

impl MemberName {
    /// Create a plain identifier name
    pub fn identifier(text: impl Into<String>, span: Span) -> Self {
        MemberName {
            kind: NameKind::Identifier(text.into()),
            span,
        }
    }

    /// Create a computed name
    pub fn computed(span: Span) -> Self {
        MemberName {
            kind: NameKind::Computed,
            span,
        }
    }

    /// The name's text, when it is a plain identifier
    pub fn identifier_text(&self) -> Option<&str> {
        match &self.kind {
            NameKind::Identifier(text) => Some(text),
            _ => None,
        }
    }
}

/// A node in the syntax tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Kind of this node
    pub kind: SyntaxKind,
    /// Span of the whole declaration
    pub span: Span,
    /// Modifiers in declared order
    pub modifiers: Vec<Modifier>,
    /// Name, for named members
    pub name: Option<MemberName>,
    /// Child nodes in declared order
    pub children: Vec<Node>,
}

impl Node {
    /// Create a node with no modifiers, name, or children
    pub fn new(kind: SyntaxKind, span: Span) -> Self {
        Node {
            kind,
            span,
            modifiers: Vec::new(),
            name: None,
            children: Vec::new(),
        }
    }

    /// Attach modifiers
    pub fn with_modifiers(mut self, modifiers: Vec<Modifier>) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Attach a name
    pub fn with_name(mut self, name: MemberName) -> Self {
        self.name = Some(name);
        self
    }

    /// Attach children
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Find an accessibility-relevant modifier of the given kind
    pub fn modifier(&self, kind: ModifierKind) -> Option<&Modifier> {
        self.modifiers.iter().find(|m| m.kind == kind)
    }

    /// True if the node carries any of the given modifier kinds
    pub fn has_any_modifier(&self, kinds: &[ModifierKind]) -> bool {
        self.modifiers.iter().any(|m| kinds.contains(&m.kind))
    }
}
