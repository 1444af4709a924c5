//! Fenced code block parsing utilities.

use super::context::BlockContext;
use super::line::Line;
use super::rules::{BlockData, BlockRule, BlockState, Continuation, Opened};
use super::utils::{emit_line_end, emit_rest_as_text};
use crate::parser::ParseError;
use crate::syntax::SyntaxKind;

/// Information about a detected code fence opening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FenceInfo {
    pub fence_char: char,
    pub fence_count: usize,
    pub info_string: String,
}

/// Try to detect a fenced code block opening from content.
/// Returns fence info if this is a valid opening fence.
pub(crate) fn try_parse_fence_open(content: &str) -> Option<FenceInfo> {
    let trimmed = content.trim_start();

    // Check for fence opening (``` or ~~~)
    let fence_char = if trimmed.starts_with('`') {
        '`'
    } else if trimmed.starts_with('~') {
        '~'
    } else {
        return None;
    };

    let fence_count = trimmed.chars().take_while(|&c| c == fence_char).count();

    if fence_count < 3 {
        return None;
    }

    let info_string = trimmed[fence_count..].trim().to_string();

    // Backtick fences cannot carry backticks in their info string.
    if fence_char == '`' && info_string.contains('`') {
        return None;
    }

    Some(FenceInfo {
        fence_char,
        fence_count,
        info_string,
    })
}

/// Check if a line is a valid closing fence for the given fence info.
pub(crate) fn is_closing_fence(content: &str, fence_char: char, fence_count: usize) -> bool {
    let trimmed = content.trim_start();

    if !trimmed.starts_with(fence_char) {
        return false;
    }

    let closing_count = trimmed.chars().take_while(|&c| c == fence_char).count();

    if closing_count < fence_count {
        return false;
    }

    // Rest of line must be empty
    trimmed[closing_count..].trim().is_empty()
}

pub(crate) struct FencedCodeRule;

impl BlockRule for FencedCodeRule {
    fn name(&self) -> &'static str {
        "fenced-code"
    }

    fn trigger(&self) -> &[u8] {
        b"`~"
    }

    fn open(&self, line: &mut Line<'_>, cx: &mut BlockContext<'_>) -> Option<Opened> {
        let fence = try_parse_fence_open(line.content())?;
        let indent = line.indent();

        cx.start_node(SyntaxKind::CODE_BLOCK);
        cx.start_node(SyntaxKind::CODE_FENCE_OPEN);
        cx.token(SyntaxKind::WHITESPACE, &line.rest()[..indent.len]);
        line.advance(indent.len);
        cx.token(SyntaxKind::CODE_FENCE_MARKER, &line.rest()[..fence.fence_count]);
        line.advance(fence.fence_count);

        let after = line.content();
        let gap = after.len() - after.trim_start().len();
        cx.token(SyntaxKind::WHITESPACE, &after[..gap]);
        line.advance(gap);
        cx.token(SyntaxKind::CODE_INFO, &fence.info_string);
        line.advance(fence.info_string.len());
        emit_line_end(cx, line);
        cx.finish_node(); // CODE_FENCE_OPEN

        Some(Opened::Block {
            data: BlockData::FencedCode {
                marker: fence.fence_char as u8,
                length: fence.fence_count,
                indent: indent.width,
            },
            state: BlockState::NoChildren,
        })
    }

    fn continue_block(
        &self,
        data: &mut BlockData,
        line: &mut Line<'_>,
        _cx: &mut BlockContext<'_>,
    ) -> Result<Continuation, ParseError> {
        let BlockData::FencedCode {
            marker,
            length,
            indent,
        } = *data
        else {
            return Ok(Continuation::Close { consume: false });
        };

        if line.indent().width < 4 && is_closing_fence(line.content(), char::from(marker), length) {
            return Ok(Continuation::Close { consume: true });
        }
        line.strip_columns(indent);
        Ok(Continuation::Continue(BlockState::NoChildren))
    }

    fn append(&self, _data: &BlockData, line: &mut Line<'_>, cx: &mut BlockContext<'_>) {
        emit_rest_as_text(cx, line);
    }

    fn close(&self, _data: &BlockData, closer: Option<&mut Line<'_>>, cx: &mut BlockContext<'_>) {
        let Some(line) = closer else {
            return;
        };
        let indent = line.indent();
        let marker = line.content().trim();

        cx.start_node(SyntaxKind::CODE_FENCE_CLOSE);
        cx.token(SyntaxKind::WHITESPACE, &line.rest()[..indent.len]);
        line.advance(indent.len);
        cx.token(SyntaxKind::CODE_FENCE_MARKER, marker);
        line.advance(marker.len());
        emit_line_end(cx, line);
        cx.finish_node();
    }

    fn can_interrupt_paragraph(&self) -> bool {
        true
    }

    fn can_accept_indented_line(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backtick_fence() {
        let fence = try_parse_fence_open("```").unwrap();
        assert_eq!(fence.fence_char, '`');
        assert_eq!(fence.fence_count, 3);
        assert_eq!(fence.info_string, "");
    }

    #[test]
    fn test_tilde_fence_with_info() {
        let fence = try_parse_fence_open("~~~~ rust ignore\n").unwrap();
        assert_eq!(fence.fence_char, '~');
        assert_eq!(fence.fence_count, 4);
        assert_eq!(fence.info_string, "rust ignore");
    }

    #[test]
    fn test_insufficient_fence_chars() {
        assert!(try_parse_fence_open("``").is_none());
    }

    #[test]
    fn test_backtick_in_info_string() {
        assert!(try_parse_fence_open("``` a`b").is_none());
        assert!(try_parse_fence_open("~~~ a`b").is_some());
    }

    #[test]
    fn test_closing_fence() {
        assert!(is_closing_fence("```", '`', 3));
        assert!(is_closing_fence("`````  \n", '`', 3));
        assert!(!is_closing_fence("``", '`', 3));
        assert!(!is_closing_fence("~~~", '`', 3));
        assert!(!is_closing_fence("``` rust", '`', 3));
    }
}
