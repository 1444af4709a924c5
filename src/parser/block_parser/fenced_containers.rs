//! Fenced container parsing: `:::{#id .class}` ... `:::`.
//!
//! An opener is a run of at least three markers followed by something other
//! than whitespace, normally an attribute block. A bare run is never an
//! opener since it cannot be told apart from a closer. A container ends at
//! a bare run at least as long as its opener at the opener's column, at a
//! non-blank line indented less than the opener, or at the end of input.

use super::attributes::parse_attribute_block;
use super::context::BlockContext;
use super::fence_tracker::{FenceRecord, is_closing_run};
use super::line::{Line, indent_at};
use super::rules::{BlockData, BlockRule, BlockState, Continuation, Opened};
use crate::config::FenceOptions;
use crate::parser::ParseError;
use crate::syntax::{FenceId, SyntaxKind};

pub(crate) struct FencedContainerRule {
    trigger: [u8; 1],
    min_length: usize,
}

impl FencedContainerRule {
    pub(crate) fn new(options: &FenceOptions) -> Self {
        let marker = match u8::try_from(options.marker)
            .ok()
            .filter(u8::is_ascii_punctuation)
        {
            Some(marker) => marker,
            None => {
                log::warn!(
                    "Fence marker {:?} is not ASCII punctuation; using ':'",
                    options.marker
                );
                b':'
            }
        };
        Self {
            trigger: [marker],
            min_length: options.min_length,
        }
    }

    fn marker(&self) -> u8 {
        self.trigger[0]
    }

    fn marker_run(&self, text: &str) -> usize {
        text.bytes().take_while(|&b| b == self.marker()).count()
    }

    /// Whether the line after an opener leaves the container without content
    /// on the opener's own line. Columns are absolute here since enclosing
    /// blocks have not stripped the next line yet.
    fn body_is_empty(&self, next: Option<&str>, open_column: usize, run: usize) -> bool {
        let Some(next) = next else {
            return true;
        };
        let indent = indent_at(next, 0);
        let content = next[indent.len..].trim_end_matches('\n');
        content.trim().is_empty()
            || indent.width < open_column
            || (indent.width == open_column && is_closing_run(content, self.marker(), run))
    }
}

impl BlockRule for FencedContainerRule {
    fn name(&self) -> &'static str {
        "fenced-container"
    }

    fn trigger(&self) -> &[u8] {
        &self.trigger
    }

    fn open(&self, line: &mut Line<'_>, cx: &mut BlockContext<'_>) -> Option<Opened> {
        let text = line.text();
        let indent = line.indent();
        let start = line.pos() + indent.len;
        let run = self.marker_run(&text[start..]);
        if run < self.min_length {
            return None;
        }

        let after_run = &text[start + run..];
        if after_run.trim().is_empty() {
            log::trace!(
                "Bare marker run at byte {} is not an opener",
                line.document_offset()
            );
            return None;
        }

        let max_depth = cx.config.fences.max_depth;
        if cx.tracker.depth() >= max_depth {
            log::warn!(
                "Fenced containers nested deeper than {} at byte {}; treating opener as text",
                max_depth,
                line.document_offset() + indent.len
            );
            return None;
        }

        let gap = after_run.len() - after_run.trim_start().len();
        let attr_start = start + run + gap;
        let attr_len = parse_attribute_block(&text[attr_start..]).map(|(_, len)| len);
        if attr_len.is_none() {
            log::trace!("Opener at byte {} has no attribute block", line.document_offset());
        }
        let tail_start = attr_start + attr_len.unwrap_or(0);

        let id = FenceId::from_offset(line.document_offset());
        let state = if self.body_is_empty(cx.next_line(), line.column() + indent.width, run) {
            BlockState::NoChildren
        } else {
            BlockState::HasChildren
        };

        cx.start_node(SyntaxKind::FENCED_CONTAINER);
        cx.start_node(SyntaxKind::DIV_FENCE_OPEN);
        cx.token(SyntaxKind::WHITESPACE, &text[line.pos()..start]);
        cx.token(SyntaxKind::DIV_MARKER, &text[start..start + run]);
        cx.token(SyntaxKind::WHITESPACE, &text[start + run..attr_start]);
        if let Some(len) = attr_len {
            cx.leaf(SyntaxKind::ATTRIBUTE, &text[attr_start..attr_start + len]);
        }

        let tail = &text[tail_start..];
        let tail_content = tail.trim_end_matches('\n');
        let end = if tail_content.trim().is_empty() {
            cx.token(SyntaxKind::WHITESPACE, tail_content);
            cx.token(SyntaxKind::NEWLINE, &tail[tail_content.len()..]);
            text.len()
        } else if state == BlockState::NoChildren {
            let info = tail_content.trim();
            let lead = tail_content.len() - tail_content.trim_start().len();
            cx.token(SyntaxKind::WHITESPACE, &tail_content[..lead]);
            cx.leaf(SyntaxKind::DIV_INFO, info);
            cx.token(SyntaxKind::WHITESPACE, &tail_content[lead + info.len()..]);
            cx.token(SyntaxKind::NEWLINE, &tail[tail_content.len()..]);
            text.len()
        } else {
            // Content after the attributes is parsed as the first child.
            let lead = tail.len() - tail.trim_start().len();
            cx.token(SyntaxKind::WHITESPACE, &tail[..lead]);
            tail_start + lead
        };
        cx.finish_node(); // DIV_FENCE_OPEN
        line.advance(end - line.pos());

        cx.tracker.push(FenceRecord::new(id, self.marker(), indent.width, run));

        Some(Opened::Block {
            data: BlockData::Fence(id),
            state,
        })
    }

    fn continue_block(
        &self,
        data: &mut BlockData,
        line: &mut Line<'_>,
        cx: &mut BlockContext<'_>,
    ) -> Result<Continuation, ParseError> {
        let BlockData::Fence(id) = *data else {
            return Ok(Continuation::Close { consume: false });
        };
        let innermost = cx.tracker.is_top(id);
        let record = cx
            .tracker
            .get_mut(id)
            .ok_or(ParseError::MissingFenceRecord { id })?;

        let indent = line.indent();
        let blank = line.is_blank();
        if !blank {
            record.lock_content_indent(indent.width);
        }

        // Only the innermost container can end on this line. Enclosing ones
        // get their turn once it has closed and the line is offered again.
        if innermost && !blank {
            if indent.width < record.open_column {
                log::debug!(
                    "{id}: line at byte {} indented {} < {}, closing implicitly",
                    line.document_offset(),
                    indent.width,
                    record.open_column
                );
                cx.tracker.pop_through(id);
                return Ok(Continuation::Close { consume: false });
            }
            if record.is_closed_by(indent.width, &line.content()[indent.len..]) {
                cx.tracker.pop_through(id);
                return Ok(Continuation::Close { consume: true });
            }
        }

        if let Some(content_indent) = record.content_indent().filter(|&w| w > 0) {
            line.strip_columns(content_indent);
        }
        Ok(Continuation::Continue(BlockState::HasChildren))
    }

    fn close(&self, data: &BlockData, closer: Option<&mut Line<'_>>, cx: &mut BlockContext<'_>) {
        let BlockData::Fence(id) = *data else {
            return;
        };
        // No-op unless the document ended with the container still open.
        cx.tracker.pop_through(id);

        let Some(line) = closer else {
            return;
        };
        let text = line.text();
        let indent = line.indent();
        let start = line.pos() + indent.len;
        let content = line.content();
        let run = self.marker_run(&content[indent.len..]);

        cx.start_node(SyntaxKind::DIV_FENCE_CLOSE);
        cx.token(SyntaxKind::WHITESPACE, &text[line.pos()..start]);
        cx.token(SyntaxKind::DIV_MARKER, &text[start..start + run]);
        cx.token(SyntaxKind::WHITESPACE, &content[indent.len + run..]);
        cx.token(SyntaxKind::NEWLINE, line.newline());
        cx.finish_node();
        line.advance(line.rest().len());
    }

    fn can_interrupt_paragraph(&self) -> bool {
        true
    }

    fn can_accept_indented_line(&self) -> bool {
        false
    }
}
