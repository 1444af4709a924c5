//! Leaf block AST node wrappers.

use super::ast::{ast_node, support};
use super::{SyntaxKind, SyntaxNode};

pub struct Paragraph(SyntaxNode);

ast_node!(Paragraph, PARAGRAPH);

impl Paragraph {
    /// Returns the paragraph's lines with structural indentation removed.
    pub fn lines(&self) -> Vec<String> {
        support::tokens(&self.0, SyntaxKind::TEXT)
            .iter()
            .map(|t| t.text().trim_start().to_string())
            .collect()
    }

    /// Returns the paragraph text, lines joined by `\n` and trailing
    /// whitespace of the final line removed.
    pub fn text(&self) -> String {
        let joined = self.lines().join("\n");
        joined.trim_end().to_string()
    }
}

pub struct Heading(SyntaxNode);

ast_node!(Heading, HEADING);

impl Heading {
    /// Returns the heading level (1-6).
    pub fn level(&self) -> usize {
        support::token(&self.0, SyntaxKind::ATX_HEADING_MARKER)
            .map(|t| t.text().chars().filter(|&c| c == '#').count())
            .unwrap_or(1)
    }

    /// Returns the heading text as a string.
    pub fn text(&self) -> String {
        support::child_of_kind(&self.0, SyntaxKind::HEADING_CONTENT)
            .map(|content| {
                support::tokens(&content, SyntaxKind::TEXT)
                    .iter()
                    .map(|t| t.text().to_string())
                    .collect()
            })
            .unwrap_or_default()
    }
}

pub struct CodeBlock(SyntaxNode);

ast_node!(CodeBlock, CODE_BLOCK);

impl CodeBlock {
    /// Whether this block was opened by a ``` or ~~~ fence.
    pub fn is_fenced(&self) -> bool {
        support::child_of_kind(&self.0, SyntaxKind::CODE_FENCE_OPEN).is_some()
    }

    /// The first word of the info string, if any.
    pub fn language(&self) -> Option<String> {
        let open = support::child_of_kind(&self.0, SyntaxKind::CODE_FENCE_OPEN)?;
        let info = support::token(&open, SyntaxKind::CODE_INFO)?;
        info.text().split_whitespace().next().map(str::to_string)
    }

    /// The literal code, excluding fences and structural indentation.
    ///
    /// Trailing blank lines are dropped from indented code blocks.
    pub fn content(&self) -> String {
        let mut out = String::new();
        for token in self.0.children_with_tokens().filter_map(|it| it.into_token()) {
            match token.kind() {
                SyntaxKind::TEXT | SyntaxKind::NEWLINE => out.push_str(token.text()),
                _ => {}
            }
        }
        if !self.is_fenced() {
            while out.ends_with("\n\n") {
                out.pop();
            }
        }
        out
    }
}
