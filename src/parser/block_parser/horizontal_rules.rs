//! Horizontal rule parsing utilities.

use super::context::BlockContext;
use super::line::Line;
use super::rules::{BlockData, BlockRule, Continuation, Opened};
use super::utils::emit_line_end;
use crate::parser::ParseError;
use crate::syntax::SyntaxKind;

/// Try to parse a horizontal rule from a line.
/// Returns the rule character if this line is a valid horizontal rule.
///
/// A horizontal rule is 3 or more `*`, `-`, or `_` characters,
/// optionally separated by spaces.
pub(crate) fn try_parse_horizontal_rule(line: &str) -> Option<char> {
    let trimmed = line.trim();

    // Must have at least 3 characters
    if trimmed.len() < 3 {
        return None;
    }

    // Determine which character is being used
    let rule_char = trimmed.chars().next()?;
    if !matches!(rule_char, '*' | '-' | '_') {
        return None;
    }

    // Check that the line only contains the rule character and spaces
    let mut count = 0;
    for ch in trimmed.chars() {
        match ch {
            c if c == rule_char => count += 1,
            ' ' | '\t' => continue,
            _ => return None,
        }
    }

    // Must have at least 3 of the rule character
    if count >= 3 { Some(rule_char) } else { None }
}

pub(crate) struct HorizontalRuleRule;

impl BlockRule for HorizontalRuleRule {
    fn name(&self) -> &'static str {
        "horizontal-rule"
    }

    fn trigger(&self) -> &[u8] {
        b"*-_"
    }

    fn open(&self, line: &mut Line<'_>, cx: &mut BlockContext<'_>) -> Option<Opened> {
        try_parse_horizontal_rule(line.content())?;
        let indent = line.indent();
        let rule = line.content().trim();

        cx.start_node(SyntaxKind::HORIZONTAL_RULE);
        cx.token(SyntaxKind::WHITESPACE, &line.rest()[..indent.len]);
        line.advance(indent.len);
        cx.token(SyntaxKind::HORIZONTAL_RULE, rule);
        line.advance(rule.len());
        emit_line_end(cx, line);
        cx.finish_node();

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
