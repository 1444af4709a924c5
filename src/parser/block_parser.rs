use crate::config::Config;
use crate::parser::ParseError;
use crate::syntax::{SyntaxKind, SyntaxNode};

pub mod attributes; // Public for the typed AST wrappers
mod code_blocks;
mod container_stack;
mod context;
mod fence_tracker;
mod fenced_containers;
mod headings;
mod horizontal_rules;
mod indented_code;
mod line;
mod paragraphs;
mod rules;
mod utils;

use code_blocks::FencedCodeRule;
use container_stack::{ContainerStack, OpenBlock};
use context::BlockContext;
use fenced_containers::FencedContainerRule;
use headings::AtxHeadingRule;
use horizontal_rules::HorizontalRuleRule;
use indented_code::IndentedCodeRule;
use line::{Line, TAB_STOP};
use paragraphs::ParagraphRule;
use rules::{BlockState, Continuation, Opened, RuleSet};
use utils::{emit_rest_as_text, split_lines_inclusive};

const THEMATIC_BREAK_PRIORITY: i32 = 200;
const INDENTED_CODE_PRIORITY: i32 = 500;
const ATX_HEADING_PRIORITY: i32 = 600;
const FENCED_CODE_PRIORITY: i32 = 700;
const PARAGRAPH_PRIORITY: i32 = 1000;

fn build_rules(config: &Config) -> RuleSet {
    let extensions = &config.extensions;
    let mut rules = RuleSet::new();
    if extensions.fenced_containers {
        rules.register(
            config.fences.priority,
            Box::new(FencedContainerRule::new(&config.fences)),
        );
    }
    if extensions.thematic_breaks {
        rules.register(THEMATIC_BREAK_PRIORITY, Box::new(HorizontalRuleRule));
    }
    if extensions.indented_code_blocks {
        rules.register(INDENTED_CODE_PRIORITY, Box::new(IndentedCodeRule));
    }
    if extensions.atx_headings {
        rules.register(ATX_HEADING_PRIORITY, Box::new(AtxHeadingRule));
    }
    if extensions.fenced_code_blocks {
        rules.register(FENCED_CODE_PRIORITY, Box::new(FencedCodeRule));
    }
    rules.register(PARAGRAPH_PRIORITY, Box::new(ParagraphRule));
    rules
}

pub struct BlockParser<'a> {
    lines: Vec<&'a str>,
    pos: usize,
    /// Byte offset of `lines[pos]` in the input.
    offset: usize,
    rules: RuleSet,
    containers: ContainerStack,
    cx: BlockContext<'a>,
}

impl<'a> BlockParser<'a> {
    pub fn new(input: &'a str, config: &'a Config) -> Self {
        let mut cx = BlockContext::new(config);
        cx.start_node(SyntaxKind::ROOT);
        cx.start_node(SyntaxKind::DOCUMENT);
        Self {
            lines: split_lines_inclusive(input),
            pos: 0,
            offset: 0,
            rules: build_rules(config),
            containers: ContainerStack::new(),
            cx,
        }
    }

    pub fn parse(mut self) -> Result<SyntaxNode, ParseError> {
        let len: usize = self.lines.iter().map(|l| l.len()).sum();
        if u32::try_from(len).is_err() {
            return Err(ParseError::InputTooLarge { len });
        }

        log::debug!("Starting document parse with rules {:?}", self.rules.names());
        while self.step()? {}

        let unclosed = self.cx.tracker.clear();
        if unclosed > 0 {
            log::debug!("{unclosed} fenced container(s) left open at end of input");
        }
        self.containers.close_to(0, &self.rules, &mut self.cx);
        self.cx.finish_node(); // DOCUMENT
        self.cx.finish_node(); // ROOT

        Ok(SyntaxNode::new_root(self.cx.finish()))
    }

    /// Parses the next line. Returns `false` once the input is exhausted.
    pub(crate) fn step(&mut self) -> Result<bool, ParseError> {
        let Some(&text) = self.lines.get(self.pos) else {
            return Ok(false);
        };
        let next = self.lines.get(self.pos + 1).copied();
        log::trace!("Parsing line {}: {:?}", self.pos + 1, text);

        self.parse_line(text, next)?;
        self.pos += 1;
        self.offset += text.len();
        Ok(true)
    }

    fn parse_line(&mut self, text: &'a str, next: Option<&'a str>) -> Result<(), ParseError> {
        self.cx.begin_line(text, next);
        let Some(mut line) = self.continue_open_blocks(text)? else {
            return Ok(());
        };
        self.open_new_blocks(&mut line);
        Ok(())
    }

    /// Offers the line to every open block, outermost first. Returns the
    /// line positioned after their indentation, or `None` when a block
    /// consumed it as its closing line.
    fn continue_open_blocks(&mut self, text: &'a str) -> Result<Option<Line<'a>>, ParseError> {
        'restart: loop {
            let mut line = Line::new(text, self.offset);
            self.cx.rewind();

            for idx in 0..self.containers.depth() {
                let Some(block) = self.containers.get_mut(idx) else {
                    break;
                };
                let rule = self.rules.get(block.rule);
                match rule.continue_block(&mut block.data, &mut line, &mut self.cx)? {
                    Continuation::Continue(state) => block.state = state,
                    Continuation::Close { consume: false } => {
                        log::trace!("{} closed at depth {idx}, retrying line", rule.name());
                        self.containers.close_to(idx, &self.rules, &mut self.cx);
                        continue 'restart;
                    }
                    Continuation::Close { consume: true } => {
                        self.containers.close_to(idx + 1, &self.rules, &mut self.cx);
                        self.cx.mark(line.pos());
                        if let Some(block) = self.containers.discard_top() {
                            let rule = self.rules.get(block.rule);
                            rule.close(&block.data, Some(&mut line), &mut self.cx);
                            self.cx.finish_node();
                        }
                        self.cx.consumed(line.pos());
                        return Ok(None);
                    }
                }
            }
            return Ok(Some(line));
        }
    }

    /// Tries to start new blocks in the innermost open container, or adds
    /// the line to the open leaf block.
    fn open_new_blocks(&mut self, line: &mut Line<'a>) {
        self.cx.mark(line.pos());
        loop {
            let tip = self.containers.last();
            if let Some(block) = tip.filter(|b| !b.is_paragraph() && !b.accepts_children()) {
                let rule = self.rules.get(block.rule);
                rule.append(&block.data, line, &mut self.cx);
                self.cx.consumed(line.pos());
                return;
            }

            if line.is_blank() {
                if !line.rest().is_empty() {
                    self.cx.leaf(SyntaxKind::BLANK_LINE, line.rest());
                    line.advance(line.rest().len());
                    self.cx.consumed(line.pos());
                }
                return;
            }

            let in_paragraph = tip.is_some_and(OpenBlock::is_paragraph);
            let opened = self.try_open(line, in_paragraph);

            if in_paragraph && opened.is_some() {
                // The paragraph node was finished before the new block started.
                self.containers.discard_top();
            }

            match opened {
                None => {
                    match self.containers.last() {
                        Some(block) if block.is_paragraph() => {
                            let rule = self.rules.get(block.rule);
                            rule.append(&block.data, line, &mut self.cx);
                        }
                        _ => emit_rest_as_text(&mut self.cx, line),
                    }
                    self.cx.consumed(line.pos());
                    return;
                }
                Some((_, Opened::Complete)) => {
                    self.cx.consumed(line.pos());
                    return;
                }
                Some((rule, Opened::Block { data, state })) => {
                    self.cx.consumed(line.pos());
                    self.containers.push(OpenBlock { rule, state, data });
                    if state == BlockState::NoChildren || line.rest().is_empty() {
                        return;
                    }
                }
            }
        }
    }

    fn try_open(&mut self, line: &mut Line<'a>, in_paragraph: bool) -> Option<(usize, Opened)> {
        let indent = line.indent();
        let first = line.first_content_byte();

        if in_paragraph {
            self.cx.begin_interrupt();
        }
        let mut opened = None;
        for idx in 0..self.rules.len() {
            let rule = self.rules.get(idx);
            if in_paragraph && !rule.can_interrupt_paragraph() {
                continue;
            }
            if indent.width >= TAB_STOP && !rule.can_accept_indented_line() {
                continue;
            }
            let trigger = rule.trigger();
            if !trigger.is_empty() && !first.is_some_and(|b| trigger.contains(&b)) {
                continue;
            }
            if let Some(result) = rule.open(line, &mut self.cx) {
                log::trace!("{} opened at byte {}", rule.name(), line.document_offset());
                opened = Some((idx, result));
                break;
            }
        }
        if in_paragraph {
            self.cx.end_interrupt();
        }
        opened
    }

    #[cfg(test)]
    pub(crate) fn open_fences(&self) -> usize {
        self.cx.tracker.depth()
    }
}
