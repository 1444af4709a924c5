//! ATX heading parsing utilities.

use super::context::BlockContext;
use super::line::Line;
use super::rules::{BlockData, BlockRule, Continuation, Opened};
use super::utils::emit_line_end;
use crate::parser::ParseError;
use crate::syntax::SyntaxKind;

/// Try to parse an ATX heading from content, returns heading level (1-6) if found.
pub(crate) fn try_parse_atx_heading(content: &str) -> Option<usize> {
    let trimmed = content.trim_start();

    // Must start with 1-6 # characters
    let hash_count = trimmed.chars().take_while(|&c| c == '#').count();
    if hash_count == 0 || hash_count > 6 {
        return None;
    }

    // After hashes, must be end of line, space, or tab
    let after_hashes = &trimmed[hash_count..];
    if !after_hashes.is_empty()
        && !after_hashes.starts_with(' ')
        && !after_hashes.starts_with('\t')
        && !after_hashes.starts_with('\n')
    {
        return None;
    }

    Some(hash_count)
}

/// Splits heading text from an optional closing `#` sequence, which only
/// counts when preceded by whitespace or when it is all there is.
fn split_closing_sequence(text: &str) -> (&str, &str) {
    let body = text.trim_end_matches('#');
    if body.len() == text.len() {
        return (text, "");
    }
    if body.is_empty() || body.ends_with([' ', '\t']) {
        (body.trim_end(), &text[body.len()..])
    } else {
        (text, "")
    }
}

pub(crate) struct AtxHeadingRule;

impl BlockRule for AtxHeadingRule {
    fn name(&self) -> &'static str {
        "atx-heading"
    }

    fn trigger(&self) -> &[u8] {
        b"#"
    }

    fn open(&self, line: &mut Line<'_>, cx: &mut BlockContext<'_>) -> Option<Opened> {
        let level = try_parse_atx_heading(line.content())?;
        let indent = line.indent();
        let rest = line.rest();

        cx.start_node(SyntaxKind::HEADING);
        cx.token(SyntaxKind::WHITESPACE, &rest[..indent.len]);
        cx.token(SyntaxKind::ATX_HEADING_MARKER, &rest[indent.len..indent.len + level]);
        line.advance(indent.len + level);

        let after_marker = line.content();
        let spaces = after_marker.len() - after_marker.trim_start().len();
        cx.token(SyntaxKind::WHITESPACE, &after_marker[..spaces]);
        line.advance(spaces);

        let (text, closing) = split_closing_sequence(line.content().trim_end());
        cx.start_node(SyntaxKind::HEADING_CONTENT);
        cx.token(SyntaxKind::TEXT, text);
        cx.finish_node();
        line.advance(text.len());

        if !closing.is_empty() {
            let between = line.content().len() - line.content().trim_start().len();
            cx.token(SyntaxKind::WHITESPACE, &line.content()[..between]);
            line.advance(between);
            cx.token(SyntaxKind::ATX_HEADING_MARKER, closing);
            line.advance(closing.len());
        }
        emit_line_end(cx, line);
        cx.finish_node(); // HEADING

        Some(Opened::Complete)
    }

    fn continue_block(
        &self,
        _data: &mut BlockData,
        _line: &mut Line<'_>,
        _cx: &mut BlockContext<'_>,
    ) -> Result<Continuation, ParseError> {
        Ok(Continuation::Close { consume: false })
    }

    fn can_interrupt_paragraph(&self) -> bool {
        true
    }

    fn can_accept_indented_line(&self) -> bool {
        false
    }
}
