//! Shared utilities for block parsing.

use super::context::BlockContext;
use super::line::Line;
use crate::syntax::SyntaxKind;

/// Split input into lines, each keeping its trailing `\n`. A final line
/// without a newline is kept as is.
pub(crate) fn split_lines_inclusive(input: &str) -> Vec<&str> {
    input.split_inclusive('\n').collect()
}

/// Emit the rest of a line as TEXT followed by its NEWLINE and move the
/// cursor to the end of the line.
pub(crate) fn emit_rest_as_text(cx: &mut BlockContext<'_>, line: &mut Line<'_>) {
    cx.token(SyntaxKind::TEXT, line.content());
    cx.token(SyntaxKind::NEWLINE, line.newline());
    line.advance(line.rest().len());
}

/// Like [`emit_rest_as_text`], with leading whitespace split off as a
/// WHITESPACE token.
pub(crate) fn emit_indented_text(cx: &mut BlockContext<'_>, line: &mut Line<'_>) {
    let indent = line.indent();
    cx.token(SyntaxKind::WHITESPACE, &line.rest()[..indent.len]);
    line.advance(indent.len);
    emit_rest_as_text(cx, line);
}

/// Emit trailing whitespace and the newline of a line whose content has
/// been consumed.
pub(crate) fn emit_line_end(cx: &mut BlockContext<'_>, line: &mut Line<'_>) {
    cx.token(SyntaxKind::WHITESPACE, line.content());
    cx.token(SyntaxKind::NEWLINE, line.newline());
    line.advance(line.rest().len());
}
