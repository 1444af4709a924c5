use crate::config::Config;
use crate::parser::block_parser::BlockParser;
use crate::syntax::{SyntaxKind, SyntaxNode};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn parse_blocks(input: &str) -> SyntaxNode {
    parse_blocks_with(input, &Config::default())
}

pub fn parse_blocks_with(input: &str, config: &Config) -> SyntaxNode {
    init_logger();
    BlockParser::new(input, config).parse().unwrap()
}

pub fn find_first(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxNode> {
    node.descendants().find(|n| n.kind() == kind)
}

pub fn find_all(node: &SyntaxNode, kind: SyntaxKind) -> Vec<SyntaxNode> {
    node.descendants().filter(|n| n.kind() == kind).collect()
}

pub fn get_blocks(node: &SyntaxNode) -> Vec<SyntaxNode> {
    let document = node
        .children()
        .find(|n| n.kind() == SyntaxKind::DOCUMENT)
        .unwrap();
    document.children().collect()
}

pub fn assert_block_kinds(input: &str, expected: &[SyntaxKind]) {
    let node = parse_blocks(input);
    let blocks = get_blocks(&node);
    let actual: Vec<_> = blocks.iter().map(|n| n.kind()).collect();
    assert_eq!(
        actual, expected,
        "Block kinds did not match for input:\n{}",
        input
    );
}

/// Kinds of the direct child nodes of `node`.
pub fn child_kinds(node: &SyntaxNode) -> Vec<SyntaxKind> {
    node.children().map(|n| n.kind()).collect()
}

/// Get text content of first node matching the kind
pub fn get_text(node: &SyntaxNode, kind: SyntaxKind) -> Option<String> {
    find_first(node, kind).map(|n| n.text().to_string())
}

/// Print debug tree for inspection
#[allow(dead_code)]
pub fn debug_tree(node: &SyntaxNode) -> String {
    format!("{:#?}", node)
}

/// Count direct children of a specific kind
pub fn count_children(node: &SyntaxNode, kind: SyntaxKind) -> usize {
    node.children().filter(|n| n.kind() == kind).count()
}
