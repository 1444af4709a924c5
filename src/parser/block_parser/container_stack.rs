use super::context::BlockContext;
use super::rules::{BlockData, BlockState, RuleSet};

/// A block whose node is still open in the builder.
#[derive(Debug, Clone)]
pub(crate) struct OpenBlock {
    /// Index of the owning rule in the [`RuleSet`].
    pub(crate) rule: usize,
    pub(crate) state: BlockState,
    pub(crate) data: BlockData,
}

impl OpenBlock {
    pub(crate) fn is_paragraph(&self) -> bool {
        matches!(self.data, BlockData::Paragraph)
    }

    pub(crate) fn accepts_children(&self) -> bool {
        self.state == BlockState::HasChildren
    }
}

#[derive(Debug, Default)]
pub(crate) struct ContainerStack {
    pub(crate) stack: Vec<OpenBlock>,
}

impl ContainerStack {
    pub(crate) fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub(crate) fn depth(&self) -> usize {
        self.stack.len()
    }

    pub(crate) fn last(&self) -> Option<&OpenBlock> {
        self.stack.last()
    }

    pub(crate) fn get_mut(&mut self, idx: usize) -> Option<&mut OpenBlock> {
        self.stack.get_mut(idx)
    }

    pub(crate) fn push(&mut self, block: OpenBlock) {
        self.stack.push(block);
    }

    /// Drops the top block without touching the builder; used when its node
    /// was already finished.
    pub(crate) fn discard_top(&mut self) -> Option<OpenBlock> {
        self.stack.pop()
    }

    /// Close blocks from the top down until `keep` remain.
    pub(crate) fn close_to(&mut self, keep: usize, rules: &RuleSet, cx: &mut BlockContext<'_>) {
        while self.stack.len() > keep {
            let Some(block) = self.stack.pop() else {
                break;
            };
            log::trace!("Closing {} at depth {}", rules.get(block.rule).name(), self.stack.len());
            rules.get(block.rule).close(&block.data, None, cx);
            cx.finish_node();
        }
    }
}
