//! Paragraphs: runs of non-blank lines no other rule claims.

use super::context::BlockContext;
use super::line::Line;
use super::rules::{BlockData, BlockRule, BlockState, Continuation, Opened};
use super::utils::emit_indented_text;
use crate::parser::ParseError;
use crate::syntax::SyntaxKind;

pub(crate) struct ParagraphRule;

impl BlockRule for ParagraphRule {
    fn name(&self) -> &'static str {
        "paragraph"
    }

    fn open(&self, line: &mut Line<'_>, cx: &mut BlockContext<'_>) -> Option<Opened> {
        if line.is_blank() {
            return None;
        }
        cx.start_node(SyntaxKind::PARAGRAPH);
        emit_indented_text(cx, line);
        Some(Opened::Block {
            data: BlockData::Paragraph,
            state: BlockState::NoChildren,
        })
    }

    fn continue_block(
        &self,
        _data: &mut BlockData,
        line: &mut Line<'_>,
        _cx: &mut BlockContext<'_>,
    ) -> Result<Continuation, ParseError> {
        if line.is_blank() {
            Ok(Continuation::Close { consume: false })
        } else {
            Ok(Continuation::Continue(BlockState::NoChildren))
        }
    }

    fn append(&self, _data: &BlockData, line: &mut Line<'_>, cx: &mut BlockContext<'_>) {
        emit_indented_text(cx, line);
    }

    fn can_interrupt_paragraph(&self) -> bool {
        false
    }

    fn can_accept_indented_line(&self) -> bool {
        true
    }
}
