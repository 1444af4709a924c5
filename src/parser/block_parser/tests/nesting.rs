use crate::parser::block_parser::tests::helpers::{find_first, get_blocks, parse_blocks};
use crate::syntax::{AstNode, FencedContainer, Paragraph, SyntaxKind, SyntaxNode};

fn root_container(tree: &SyntaxNode) -> FencedContainer {
    FencedContainer::cast(find_first(tree, SyntaxKind::FENCED_CONTAINER).unwrap()).unwrap()
}

fn classes(container: &FencedContainer) -> Vec<String> {
    container
        .attributes()
        .classes()
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn paragraph_texts(container: &FencedContainer) -> Vec<String> {
    container
        .blocks()
        .filter_map(Paragraph::cast)
        .map(|p| p.text())
        .collect()
}

#[test]
fn nested_with_longer_outer_fence() {
    let tree = parse_blocks("::::{.outer}\n:::{.inner}\nx\n:::\n::::\n");
    let outer = root_container(&tree);
    assert_eq!(classes(&outer), vec!["outer"]);
    assert!(outer.is_explicitly_closed());

    let inner: Vec<_> = outer.containers().collect();
    assert_eq!(inner.len(), 1);
    assert_eq!(classes(&inner[0]), vec!["inner"]);
    assert_eq!(paragraph_texts(&inner[0]), vec!["x"]);
    assert!(inner[0].is_explicitly_closed());
}

#[test]
fn equal_length_fences_close_innermost_first() {
    let tree = parse_blocks(":::{.a}\n:::{.b}\nx\n:::\ny\n:::\n");
    let outer = root_container(&tree);
    let inner: Vec<_> = outer.containers().collect();
    assert_eq!(inner.len(), 1);
    assert_eq!(paragraph_texts(&inner[0]), vec!["x"]);
    assert_eq!(paragraph_texts(&outer), vec!["y"]);
    assert!(outer.is_explicitly_closed());
}

#[test]
fn siblings_inside_container() {
    let input = ":::{.outer}\n:::{.one}\n1\n:::\n:::{.two}\n2\n:::\n:::\n";
    let tree = parse_blocks(input);
    let outer = root_container(&tree);
    let inner: Vec<_> = outer.containers().map(|c| classes(&c)).collect();
    assert_eq!(inner, vec![vec!["one"], vec!["two"]]);
    assert_eq!(get_blocks(&tree).len(), 1);
}

#[test]
fn indented_nested_fences_are_rebased() {
    let input = ":::{.a}\n  :::{.b}\n  x\n  :::\n:::\n";
    let tree = parse_blocks(input);
    let outer = root_container(&tree);
    assert!(outer.is_explicitly_closed());

    let inner: Vec<_> = outer.containers().collect();
    assert_eq!(inner.len(), 1);
    assert!(inner[0].is_explicitly_closed());
    assert_eq!(paragraph_texts(&inner[0]), vec!["x"]);
}

#[test]
fn forgotten_inner_close_before_outer_closer() {
    let input = ":::{.a}\ntext\n  :::{.b}\n  inner\n:::\nafter\n";
    let tree = parse_blocks(input);
    let outer = root_container(&tree);
    assert!(outer.is_explicitly_closed());

    let inner: Vec<_> = outer.containers().collect();
    assert_eq!(inner.len(), 1);
    assert!(!inner[0].is_explicitly_closed());
    assert_eq!(paragraph_texts(&inner[0]), vec!["inner"]);

    let kinds: Vec<_> = get_blocks(&tree).iter().map(|n| n.kind()).collect();
    assert_eq!(kinds, vec![SyntaxKind::FENCED_CONTAINER, SyntaxKind::PARAGRAPH]);
}

#[test]
fn under_indentation_cascades_through_levels() {
    let input = ":::{.a}\ntext\n  :::{.b}\n  inner\n    :::{.c}\n    deep\nafter\n";
    let tree = parse_blocks(input);
    let a = root_container(&tree);
    assert_eq!(paragraph_texts(&a), vec!["text", "after"]);

    let b: Vec<_> = a.containers().collect();
    assert_eq!(b.len(), 1);
    assert_eq!(paragraph_texts(&b[0]), vec!["inner"]);

    let c: Vec<_> = b[0].containers().collect();
    assert_eq!(c.len(), 1);
    assert_eq!(paragraph_texts(&c[0]), vec!["deep"]);
    assert!(!c[0].is_explicitly_closed());
}

#[test]
fn balanced_pairs_yield_one_container_each() {
    let input = "\
::::{#one}
:::{#two}
a
:::
:::{#three}
:::{#four}
b
:::
:::
::::
:::{#five}
c
:::
";
    let tree = parse_blocks(input);
    let ids: Vec<_> = tree
        .descendants()
        .filter_map(FencedContainer::cast)
        .map(|c| c.attributes().id().unwrap_or_default().to_string())
        .collect();
    assert_eq!(ids, vec!["one", "two", "three", "four", "five"]);
    assert!(
        tree.descendants()
            .filter_map(FencedContainer::cast)
            .all(|c| c.is_explicitly_closed())
    );
}
