//! Tree visitor
//!
//! Depth-first, pre-order traversal over [`Node`]s. Visitors override
//! `visit_node` and call [`walk_node`] to recurse; the default
//! implementation visits every descendant exactly once with no early
//! termination.
//!
//! # Example
//!
//! ```rust
//! use memberlint_ast::*;
//!
//! struct CountClasses {
//!     count: usize,
//! }
//!
//! impl Visitor for CountClasses {
//!     fn visit_node(&mut self, node: &Node) {
//!         if node.kind.is_class_like() {
//!             self.count += 1;
//!         }
//!         walk_node(self, node);
//!     }
//! }
//! ```

use crate::node::Node;

/// Syntax tree visitor
///
/// The default `visit_node` recurses into children via [`walk_node`];
/// override it to observe nodes, and keep the `walk_node` call to continue
/// into nested declarations (class expressions inside method bodies are
/// reached this way).
pub trait Visitor: Sized {
    /// Visit one node
    fn visit_node(&mut self, node: &Node) {
        walk_node(self, node);
    }
}

/// Visit every child of `node`, in declared order
pub fn walk_node<V: Visitor>(visitor: &mut V, node: &Node) {
    for child in &node.children {
        visitor.visit_node(child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::SyntaxKind;
    use crate::span::Span;

    struct CollectKinds {
        kinds: Vec<SyntaxKind>,
    }

    impl Visitor for CollectKinds {
        fn visit_node(&mut self, node: &Node) {
            self.kinds.push(node.kind);
            walk_node(self, node);
        }
    }

    #[test]
    fn test_preorder_covers_nested_nodes() {
        let inner_class = Node::new(SyntaxKind::ClassExpression, Span::new(20, 40));
        let method = Node::new(SyntaxKind::Method, Span::new(10, 45)).with_children(vec![
            Node::new(SyntaxKind::Other, Span::new(18, 44)).with_children(vec![inner_class]),
        ]);
        let class = Node::new(SyntaxKind::Class, Span::new(0, 50)).with_children(vec![method]);
        let module = Node::new(SyntaxKind::Module, Span::new(0, 50)).with_children(vec![class]);

        let mut visitor = CollectKinds { kinds: Vec::new() };
        visitor.visit_node(&module);

        assert_eq!(
            visitor.kinds,
            vec![
                SyntaxKind::Module,
                SyntaxKind::Class,
                SyntaxKind::Method,
                SyntaxKind::Other,
                SyntaxKind::ClassExpression,
            ]
        );
    }
}
