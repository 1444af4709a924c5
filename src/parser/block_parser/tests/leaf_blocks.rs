use crate::config::Config;
use crate::parser::block_parser::tests::helpers::{
    assert_block_kinds, find_first, get_text, parse_blocks, parse_blocks_with,
};
use crate::syntax::{AstNode, CodeBlock, Heading, Paragraph, SyntaxKind};

#[test]
fn paragraph_lines_join() {
    let tree = parse_blocks("one\n  two\nthree\n");
    let paragraph = Paragraph::cast(find_first(&tree, SyntaxKind::PARAGRAPH).unwrap()).unwrap();
    assert_eq!(paragraph.text(), "one\ntwo\nthree");
}

#[test]
fn atx_heading() {
    let tree = parse_blocks("## Title ##\n");
    let heading = Heading::cast(find_first(&tree, SyntaxKind::HEADING).unwrap()).unwrap();
    assert_eq!(heading.level(), 2);
    assert_eq!(heading.text(), "Title");
}

#[test]
fn heading_interrupts_paragraph() {
    assert_block_kinds(
        "text\n# Heading\n",
        &[SyntaxKind::PARAGRAPH, SyntaxKind::HEADING],
    );
}

#[test]
fn horizontal_rule() {
    assert_block_kinds(
        "a\n\n- - -\n",
        &[
            SyntaxKind::PARAGRAPH,
            SyntaxKind::BLANK_LINE,
            SyntaxKind::HORIZONTAL_RULE,
        ],
    );
    let tree = parse_blocks("  ***  \n");
    assert_eq!(get_text(&tree, SyntaxKind::HORIZONTAL_RULE).unwrap(), "  ***  \n");
}

#[test]
fn fenced_code_block() {
    let tree = parse_blocks("```rust\nfn main() {}\n\n  x\n```\n");
    let code = CodeBlock::cast(find_first(&tree, SyntaxKind::CODE_BLOCK).unwrap()).unwrap();
    assert!(code.is_fenced());
    assert_eq!(code.language().as_deref(), Some("rust"));
    assert_eq!(code.content(), "fn main() {}\n\n  x\n");
}

#[test]
fn fenced_code_strips_opener_indent() {
    let tree = parse_blocks("  ```\n    a\n b\n  ```\n");
    let code = CodeBlock::cast(find_first(&tree, SyntaxKind::CODE_BLOCK).unwrap()).unwrap();
    assert_eq!(code.content(), "  a\nb\n");
}

#[test]
fn fenced_code_hides_container_markers() {
    let tree = parse_blocks("```\n:::{.a}\n```\n");
    assert!(find_first(&tree, SyntaxKind::FENCED_CONTAINER).is_none());
}

#[test]
fn indented_code_block() {
    let tree = parse_blocks("    a\n\n      b\n\nafter\n");
    let code = CodeBlock::cast(find_first(&tree, SyntaxKind::CODE_BLOCK).unwrap()).unwrap();
    assert!(!code.is_fenced());
    assert_eq!(code.content(), "a\n\n  b\n");
}

#[test]
fn indented_line_continues_paragraph() {
    assert_block_kinds("text\n    more\n", &[SyntaxKind::PARAGRAPH]);
}

#[test]
fn disabled_indented_code_is_paragraph() {
    let mut config = Config::default();
    config.extensions.indented_code_blocks = false;
    let tree = parse_blocks_with("    a\n", &config);
    assert!(find_first(&tree, SyntaxKind::CODE_BLOCK).is_none());
    assert!(find_first(&tree, SyntaxKind::PARAGRAPH).is_some());
}
