//! Concrete syntax tree types and typed AST wrappers.

mod ast;
mod blocks;
mod fenced_containers;
mod kind;

pub use ast::AstNode;
pub use blocks::{CodeBlock, Heading, Paragraph};
pub use fenced_containers::{ContainerElement, DEFAULT_NAV_CLASS, FenceId, FencedContainer};
pub use kind::{FencesLanguage, SyntaxKind};

pub type SyntaxNode = rowan::SyntaxNode<FencesLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<FencesLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<FencesLanguage>;
