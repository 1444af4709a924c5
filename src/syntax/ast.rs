//! AST node trait and support utilities.

use super::{SyntaxKind, SyntaxNode, SyntaxToken};

/// Trait for typed AST node wrappers.
///
/// This provides type-safe access to syntax tree nodes with ergonomic APIs.
/// Pattern borrowed from rust-analyzer.
pub trait AstNode: Sized {
    /// Returns the `SyntaxKind` for this node type.
    fn kind() -> SyntaxKind;

    /// Checks if a `SyntaxKind` can be cast to this node type.
    fn can_cast(kind: SyntaxKind) -> bool {
        kind == Self::kind()
    }

    /// Attempts to cast a `SyntaxNode` to this typed wrapper.
    fn cast(syntax: SyntaxNode) -> Option<Self>;

    /// Returns a reference to the underlying `SyntaxNode`.
    fn syntax(&self) -> &SyntaxNode;
}

/// Implements `AstNode` for a newtype around `SyntaxNode`.
macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        impl $crate::syntax::AstNode for $name {
            fn kind() -> $crate::syntax::SyntaxKind {
                $crate::syntax::SyntaxKind::$kind
            }

            fn cast(syntax: $crate::syntax::SyntaxNode) -> Option<Self> {
                if Self::can_cast(syntax.kind()) {
                    Some(Self(syntax))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &$crate::syntax::SyntaxNode {
                &self.0
            }
        }
    };
}

pub(super) use ast_node;

/// Helper functions for accessing children.
pub(super) mod support {
    use super::{SyntaxKind, SyntaxNode, SyntaxToken};

    /// Find the first child node of a specific kind.
    pub(crate) fn child_of_kind(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxNode> {
        node.children().find(|n| n.kind() == kind)
    }

    /// Find the first token of a specific kind.
    pub(crate) fn token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
        node.children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|it| it.kind() == kind)
    }

    /// Collect the direct child tokens of `kind`, in order.
    pub(crate) fn tokens(node: &SyntaxNode, kind: SyntaxKind) -> Vec<SyntaxToken> {
        node.children_with_tokens()
            .filter_map(|it| it.into_token())
            .filter(|it| it.kind() == kind)
            .collect()
    }
}
