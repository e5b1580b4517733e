//! Member accessibility rule
//!
//! Walks the whole tree depth-first and, at every class-like declaration,
//! checks each direct member for an explicit accessibility declaration
//! (or, under `no-public`, for a redundant `public` one). Each member is
//! classified independently; the checker is a pure function of the member
//! and the configuration, and diagnostics come out in traversal order.

use crate::config::{self, Config, ConfigError, Resolution};
use crate::diagnostic::{Diagnostic, Patch};
use crate::reporter::{DedupReporter, WarningSink};
use memberlint_ast::{
    walk_node, Modifier, ModifierKind, NameKind, Node, SourceTree, Span, SyntaxKind, Visitor,
};

/// Rule identity, used as the warn-once key
pub const RULE_NAME: &str = "member-access";

/// Failure message for a redundant `public` under `no-public`
pub const NO_PUBLIC_FAILURE: &str = "'public' is implicit.";

const PUBLIC_KEYWORD_LEN: u32 = "public".len() as u32;

/// The member kinds subject to accessibility checking.
///
/// Conversion from [`SyntaxKind`] is the scope boundary: kinds outside
/// these five (index signatures, static blocks, non-members) never
/// convert, so the checker can match exhaustively with no fallback arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    /// Class method
    Method,
    /// Class property (field)
    Property,
    /// Class constructor
    Constructor,
    /// `get` accessor
    GetAccessor,
    /// `set` accessor
    SetAccessor,
}

impl MemberKind {
    /// Classify a syntax kind, returning `None` for anything that is not
    /// a checkable member.
    pub fn from_syntax(kind: SyntaxKind) -> Option<MemberKind> {
        match kind {
            SyntaxKind::Method => Some(MemberKind::Method),
            SyntaxKind::Property => Some(MemberKind::Property),
            SyntaxKind::Constructor => Some(MemberKind::Constructor),
            SyntaxKind::GetAccessor => Some(MemberKind::GetAccessor),
            SyntaxKind::SetAccessor => Some(MemberKind::SetAccessor),
            _ => None,
        }
    }

    /// Human-readable member-type label used in failure messages
    pub fn label(&self) -> &'static str {
        match self {
            MemberKind::Method => "class method",
            MemberKind::Property => "class property",
            MemberKind::Constructor => "class constructor",
            MemberKind::GetAccessor => "get property accessor",
            MemberKind::SetAccessor => "set property accessor",
        }
    }
}

/// Analyze one tree with the process-wide warning reporter.
///
/// Returns the diagnostics in traversal order. Unrecognized option tokens
/// fail fast before any analysis; the `no-public` misuse combination warns
/// once and yields an empty sequence.
pub fn analyze(tree: &SourceTree, options: &[&str]) -> Result<Vec<Diagnostic>, ConfigError> {
    analyze_with_reporter(tree, options, DedupReporter::shared())
}

/// Analyze one tree, routing misuse warnings to the given sink.
pub fn analyze_with_reporter(
    tree: &SourceTree,
    options: &[&str],
    warnings: &dyn WarningSink,
) -> Result<Vec<Diagnostic>, ConfigError> {
    let config = match config::resolve(options)? {
        Resolution::Active(config) => config,
        Resolution::Misused => {
            warnings.warn_once(
                RULE_NAME,
                "member-access: if 'no-public' is present, it should be the only option",
            );
            return Ok(Vec::new());
        }
    };

    let mut walker = MemberAccessWalker {
        tree,
        config,
        diagnostics: Vec::new(),
    };
    walker.visit_node(tree.root());
    Ok(walker.diagnostics)
}

/// Walker carrying the configuration and collected diagnostics
struct MemberAccessWalker<'a> {
    tree: &'a SourceTree,
    config: Config,
    diagnostics: Vec<Diagnostic>,
}

impl Visitor for MemberAccessWalker<'_> {
    fn visit_node(&mut self, node: &Node) {
        if node.kind.is_class_like() {
            for member in &node.children {
                if let Some(kind) = MemberKind::from_syntax(member.kind) {
                    if self.in_scope(kind) {
                        self.check_member(kind, member);
                    }
                }
            }
        }
        // Keep going: nested classes anywhere in the tree are checked too.
        walk_node(self, node);
    }
}

impl MemberAccessWalker<'_> {
    fn in_scope(&self, kind: MemberKind) -> bool {
        match kind {
            MemberKind::Constructor => self.config.check_constructor,
            MemberKind::GetAccessor | MemberKind::SetAccessor => self.config.check_accessor,
            MemberKind::Method | MemberKind::Property => true,
        }
    }

    fn check_member(&mut self, kind: MemberKind, member: &Node) {
        if member.has_any_modifier(&[ModifierKind::Protected, ModifierKind::Private]) {
            return;
        }

        let public = member.modifier(ModifierKind::Public).copied();
        if self.config.no_public {
            if let Some(modifier) = public {
                self.report_redundant_public(modifier);
            }
        } else if public.is_none() {
            self.report_missing_modifier(kind, member);
        }
    }

    fn report_redundant_public(&mut self, modifier: Modifier) {
        let end = modifier.span.end;
        let start = end.saturating_sub(PUBLIC_KEYWORD_LEN);
        let mut diagnostic = Diagnostic::new(start, end, NO_PUBLIC_FAILURE);

        // Delete through the start of the following token so the trailing
        // separator goes with the keyword and no dangling space remains.
        if let Some(next) = self.tree.next_token(modifier.span) {
            diagnostic = diagnostic.with_fix(Patch::Delete {
                start: modifier.span.start,
                end: next.span.start,
            });
        }
        self.diagnostics.push(diagnostic);
    }

    fn report_missing_modifier(&mut self, kind: MemberKind, member: &Node) {
        let anchor = self.anchor_span(kind, member);
        let name_part = member
            .name
            .as_ref()
            .and_then(|name| name.identifier_text())
            .map(|text| format!("'{text}' "))
            .unwrap_or_default();
        let message = format!(
            "The {} {}must be marked either 'private', 'public', or 'protected'",
            kind.label(),
            name_part
        );

        self.diagnostics.push(
            Diagnostic::new(anchor.start, anchor.end, message).with_fix(Patch::InsertBefore {
                at: member.span.start,
                text: "public ".to_string(),
            }),
        );
    }

    /// Where the diagnostic points: the `constructor` keyword for
    /// constructors, the name for members with a simple identifier name,
    /// the whole member otherwise.
    fn anchor_span(&self, kind: MemberKind, member: &Node) -> Span {
        if kind == MemberKind::Constructor {
            return self
                .tree
                .keyword_in(member.span, "constructor")
                .map(|token| token.span)
                .unwrap_or(member.span);
        }
        match &member.name {
            Some(name) if matches!(name.kind, NameKind::Identifier(_)) => name.span,
            _ => member.span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_kind_classification() {
        assert_eq!(
            MemberKind::from_syntax(SyntaxKind::Method),
            Some(MemberKind::Method)
        );
        assert_eq!(
            MemberKind::from_syntax(SyntaxKind::GetAccessor),
            Some(MemberKind::GetAccessor)
        );
        // Everything outside the five member kinds stays out of scope.
        assert_eq!(MemberKind::from_syntax(SyntaxKind::IndexSignature), None);
        assert_eq!(MemberKind::from_syntax(SyntaxKind::StaticBlock), None);
        assert_eq!(MemberKind::from_syntax(SyntaxKind::Class), None);
        assert_eq!(MemberKind::from_syntax(SyntaxKind::Other), None);
    }

    #[test]
    fn test_member_labels() {
        assert_eq!(MemberKind::Method.label(), "class method");
        assert_eq!(MemberKind::Property.label(), "class property");
        assert_eq!(MemberKind::Constructor.label(), "class constructor");
        assert_eq!(MemberKind::GetAccessor.label(), "get property accessor");
        assert_eq!(MemberKind::SetAccessor.label(), "set property accessor");
    }
}
