//! Indented code block parsing utilities.
//!
//! A block of lines indented by at least four columns. Blank lines inside
//! the block are kept; the first less-indented line ends it.

use super::context::BlockContext;
use super::line::{Line, TAB_STOP};
use super::rules::{BlockData, BlockRule, BlockState, Continuation, Opened};
use super::utils::emit_rest_as_text;
use crate::parser::ParseError;
use crate::syntax::SyntaxKind;

pub(crate) struct IndentedCodeRule;

impl BlockRule for IndentedCodeRule {
    fn name(&self) -> &'static str {
        "indented-code"
    }

    fn open(&self, line: &mut Line<'_>, cx: &mut BlockContext<'_>) -> Option<Opened> {
        if line.is_blank() || line.indent().width < TAB_STOP {
            return None;
        }
        let start = line.pos();
        line.strip_columns(TAB_STOP);

        cx.start_node(SyntaxKind::CODE_BLOCK);
        cx.token(SyntaxKind::WHITESPACE, &line.text()[start..line.pos()]);
        emit_rest_as_text(cx, line);

        Some(Opened::Block {
            data: BlockData::IndentedCode,
            state: BlockState::NoChildren,
        })
    }

    fn continue_block(
        &self,
        _data: &mut BlockData,
        line: &mut Line<'_>,
        _cx: &mut BlockContext<'_>,
    ) -> Result<Continuation, ParseError> {
        if !line.is_blank() && line.indent().width < TAB_STOP {
            return Ok(Continuation::Close { consume: false });
        }
        line.strip_columns(TAB_STOP);
        Ok(Continuation::Continue(BlockState::NoChildren))
    }

    fn append(&self, _data: &BlockData, line: &mut Line<'_>, cx: &mut BlockContext<'_>) {
        emit_rest_as_text(cx, line);
    }

    fn can_interrupt_paragraph(&self) -> bool {
        false
    }

    fn can_accept_indented_line(&self) -> bool {
        true
    }
}
