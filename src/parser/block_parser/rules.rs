//! The block rule protocol and the rule registry.

use super::context::BlockContext;
use super::line::Line;
use crate::parser::ParseError;
use crate::syntax::FenceId;

/// Whether a block accepts nested blocks on the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BlockState {
    HasChildren,
    NoChildren,
}

/// Per-block state kept on the open-block stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BlockData {
    Paragraph,
    FencedCode {
        marker: u8,
        length: usize,
        indent: usize,
    },
    IndentedCode,
    Fence(FenceId),
}

/// Result of a successful [`BlockRule::open`].
#[derive(Debug)]
pub(crate) enum Opened {
    /// A block that stays open for following lines.
    Block { data: BlockData, state: BlockState },
    /// A single-line block that is already complete.
    Complete,
}

/// Result of [`BlockRule::continue_block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Continuation {
    Continue(BlockState),
    /// Close the block and every block opened after it. With `consume` the
    /// line belongs to the closed block; otherwise it is offered to the
    /// enclosing blocks again.
    Close { consume: bool },
}

/// A block-level syntax the engine can dispatch lines to.
///
/// Emission contract: `open`, `append` and `close` emit tokens for exactly
/// the bytes between the cursor position they were called with and the
/// position they leave it at. `open` must not move the cursor when it
/// declines, and `continue_block` may only consume leading whitespace.
pub(crate) trait BlockRule {
    fn name(&self) -> &'static str;

    /// Bytes that can start this block; empty means any byte.
    fn trigger(&self) -> &[u8] {
        &[]
    }

    fn open(&self, line: &mut Line<'_>, cx: &mut BlockContext<'_>) -> Option<Opened>;

    fn continue_block(
        &self,
        data: &mut BlockData,
        line: &mut Line<'_>,
        cx: &mut BlockContext<'_>,
    ) -> Result<Continuation, ParseError>;

    /// Adds the rest of a line to a leaf block.
    fn append(&self, _data: &BlockData, _line: &mut Line<'_>, _cx: &mut BlockContext<'_>) {}

    /// Called once when the block closes. `closer` is the line that closed
    /// it when the close consumed that line.
    fn close(
        &self,
        _data: &BlockData,
        _closer: Option<&mut Line<'_>>,
        _cx: &mut BlockContext<'_>,
    ) {
    }

    fn can_interrupt_paragraph(&self) -> bool;

    fn can_accept_indented_line(&self) -> bool;
}

struct Registered {
    priority: i32,
    rule: Box<dyn BlockRule>,
}

/// Block rules in the order they are tried: ascending priority, then
/// registration order.
#[derive(Default)]
pub(crate) struct RuleSet {
    rules: Vec<Registered>,
}

impl RuleSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn register(&mut self, priority: i32, rule: Box<dyn BlockRule>) {
        log::trace!("Registering block rule {} at priority {priority}", rule.name());
        let idx = self.rules.partition_point(|r| r.priority <= priority);
        self.rules.insert(idx, Registered { priority, rule });
    }

    pub(crate) fn get(&self, idx: usize) -> &dyn BlockRule {
        self.rules[idx].rule.as_ref()
    }

    pub(crate) fn len(&self) -> usize {
        self.rules.len()
    }

    pub(crate) fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.rule.name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    impl BlockRule for Named {
        fn name(&self) -> &'static str {
            self.0
        }

        fn open(&self, _line: &mut Line<'_>, _cx: &mut BlockContext<'_>) -> Option<Opened> {
            None
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
            false
        }

        fn can_accept_indented_line(&self) -> bool {
            false
        }
    }

    #[test]
    fn rules_sorted_by_priority_then_registration() {
        let mut rules = RuleSet::new();
        rules.register(1000, Box::new(Named("paragraph")));
        rules.register(100, Box::new(Named("fence")));
        rules.register(600, Box::new(Named("heading")));
        rules.register(100, Box::new(Named("second-fence")));

        assert_eq!(
            rules.names(),
            vec!["fence", "second-fence", "heading", "paragraph"]
        );
        assert_eq!(rules.len(), 4);
        assert_eq!(rules.get(2).name(), "heading");
    }
}
