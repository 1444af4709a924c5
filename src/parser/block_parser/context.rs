//! Tree-building state shared by the block engine and the block rules.

use rowan::{GreenNode, GreenNodeBuilder};

use super::fence_tracker::FenceTracker;
use crate::config::Config;
use crate::syntax::SyntaxKind;

/// Wraps the green-tree builder so that whitespace consumed by enclosing
/// blocks is emitted lazily, right before the first token or node that
/// follows it.
pub(crate) struct BlockContext<'a> {
    builder: GreenNodeBuilder<'static>,
    pub(crate) tracker: FenceTracker,
    pub(crate) config: &'a Config,
    /// Raw text of the line after the current one.
    next_line: Option<&'a str>,
    /// Raw text of the current line.
    line_text: &'a str,
    /// Bytes of the current line already in the tree.
    flushed: usize,
    /// End of the indentation consumed by enclosing blocks.
    prefix_end: usize,
    /// Set while rules try to interrupt an open paragraph.
    interrupt_paragraph: bool,
    /// Set once an emission has finished that paragraph.
    interrupted: bool,
}

impl<'a> BlockContext<'a> {
    pub(crate) fn new(config: &'a Config) -> Self {
        Self {
            builder: GreenNodeBuilder::new(),
            tracker: FenceTracker::new(),
            config,
            next_line: None,
            line_text: "",
            flushed: 0,
            prefix_end: 0,
            interrupt_paragraph: false,
            interrupted: false,
        }
    }

    pub(crate) fn begin_line(&mut self, text: &'a str, next: Option<&'a str>) {
        self.line_text = text;
        self.next_line = next;
        self.flushed = 0;
        self.prefix_end = 0;
    }

    /// Raw text of the following line, `None` at the end of input.
    pub(crate) fn next_line(&self) -> Option<&'a str> {
        self.next_line
    }

    /// Marks everything before `pos` as consumed by enclosing blocks.
    pub(crate) fn mark(&mut self, pos: usize) {
        self.prefix_end = pos.max(self.flushed);
    }

    /// Records that a rule emitted everything before `pos`.
    pub(crate) fn consumed(&mut self, pos: usize) {
        self.flushed = pos;
        self.prefix_end = pos;
    }

    /// Forgets consumed indentation that was never emitted.
    pub(crate) fn rewind(&mut self) {
        self.prefix_end = self.flushed;
    }

    pub(crate) fn begin_interrupt(&mut self) {
        self.interrupt_paragraph = true;
        self.interrupted = false;
    }

    /// Ends an interruption attempt, returning whether the paragraph was
    /// finished by it.
    pub(crate) fn end_interrupt(&mut self) -> bool {
        let interrupted = self.interrupted;
        self.interrupt_paragraph = false;
        self.interrupted = false;
        interrupted
    }

    fn flush(&mut self) {
        if self.interrupt_paragraph && !self.interrupted {
            self.builder.finish_node(); // PARAGRAPH
            self.interrupted = true;
        }
        if self.prefix_end > self.flushed {
            self.builder.token(
                SyntaxKind::WHITESPACE.into(),
                &self.line_text[self.flushed..self.prefix_end],
            );
            self.flushed = self.prefix_end;
        }
    }

    pub(crate) fn start_node(&mut self, kind: SyntaxKind) {
        self.flush();
        self.builder.start_node(kind.into());
    }

    pub(crate) fn token(&mut self, kind: SyntaxKind, text: &str) {
        if text.is_empty() {
            return;
        }
        self.flush();
        self.builder.token(kind.into(), text);
    }

    pub(crate) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    /// Emits a node wrapping a single token of the same kind.
    pub(crate) fn leaf(&mut self, kind: SyntaxKind, text: &str) {
        self.start_node(kind);
        self.token(kind, text);
        self.finish_node();
    }

    pub(crate) fn finish(self) -> GreenNode {
        self.builder.finish()
    }
}
