//! Fenced container AST node wrappers.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::ast::{AstNode, ast_node, support};
use super::{SyntaxKind, SyntaxNode};
use crate::parser::attributes::{Attributes, parse_attribute_block};

/// Class name that turns a container into a `<nav>` element.
pub const DEFAULT_NAV_CLASS: &str = "elem-nav";

static DEFAULT_NAV_CHECK: LazyLock<Regex> = LazyLock::new(|| nav_class_regex(DEFAULT_NAV_CLASS));

fn nav_class_regex(class: &str) -> Regex {
    // An escaped literal between fixed anchors is always a valid pattern.
    Regex::new(&format!(r"(^| |\.){}($| )", regex::escape(class)))
        .unwrap_or_else(|_| unreachable!("escaped class name yields a valid regex"))
}

/// Identity of a fenced container within one parse run.
///
/// The value is the byte offset at which the container's opener starts, which
/// no other container in the same document can share. The block parser and
/// the typed [`FencedContainer`] wrapper derive the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FenceId(u32);

impl FenceId {
    pub(crate) fn from_offset(offset: usize) -> Self {
        Self(u32::try_from(offset).unwrap_or(u32::MAX))
    }

    /// Byte offset of the opener in the parsed document.
    pub fn offset(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for FenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fence@{}", self.0)
    }
}

/// HTML element a container renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerElement {
    Div,
    Nav,
}

impl ContainerElement {
    pub fn as_str(self) -> &'static str {
        match self {
            ContainerElement::Div => "div",
            ContainerElement::Nav => "nav",
        }
    }
}

/// A `:::{#id .class}` ... `:::` container.
pub struct FencedContainer(SyntaxNode);

ast_node!(FencedContainer, FENCED_CONTAINER);

impl FencedContainer {
    pub fn identity(&self) -> FenceId {
        FenceId::from_offset(self.0.text_range().start().into())
    }

    /// Attributes parsed from the opener's `{...}` block.
    ///
    /// Empty when the opener carried no attribute block or an empty `{}`.
    pub fn attributes(&self) -> Attributes {
        self.attribute_text()
            .and_then(|text| parse_attribute_block(&text))
            .map(|(attrs, _)| attrs)
            .unwrap_or_default()
    }

    /// Raw text of the opener's attribute block, braces included.
    pub fn attribute_text(&self) -> Option<String> {
        let open = support::child_of_kind(&self.0, SyntaxKind::DIV_FENCE_OPEN)?;
        let attr = support::child_of_kind(&open, SyntaxKind::ATTRIBUTE)?;
        Some(attr.text().to_string())
    }

    /// Length of the opener's marker run.
    pub fn fence_length(&self) -> usize {
        support::child_of_kind(&self.0, SyntaxKind::DIV_FENCE_OPEN)
            .and_then(|open| support::token(&open, SyntaxKind::DIV_MARKER))
            .map(|t| t.text().len())
            .unwrap_or(0)
    }

    /// Whether an explicit closing fence ended this container.
    pub fn is_explicitly_closed(&self) -> bool {
        support::child_of_kind(&self.0, SyntaxKind::DIV_FENCE_CLOSE).is_some()
    }

    /// Nested block nodes, excluding the fences and blank lines.
    pub fn blocks(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        self.0.children().filter(|n| {
            !matches!(
                n.kind(),
                SyntaxKind::DIV_FENCE_OPEN | SyntaxKind::DIV_FENCE_CLOSE | SyntaxKind::BLANK_LINE
            )
        })
    }

    /// Directly nested fenced containers.
    pub fn containers(&self) -> impl Iterator<Item = FencedContainer> + '_ {
        self.0.children().filter_map(FencedContainer::cast)
    }

    pub fn element(&self) -> ContainerElement {
        self.element_for(None)
    }

    /// Resolves the element name, treating `nav_class` (or
    /// [`DEFAULT_NAV_CLASS`] when `None`) as the navigation marker.
    pub fn element_for(&self, nav_class: Option<&str>) -> ContainerElement {
        let attrs = self.attributes();
        let Some(classes) = attrs.get("class") else {
            return ContainerElement::Div;
        };
        let class = classes.joined();
        let is_nav = match nav_class {
            None | Some(DEFAULT_NAV_CLASS) => DEFAULT_NAV_CHECK.is_match(&class),
            Some(custom) => nav_class_regex(custom).is_match(&class),
        };
        if is_nav {
            ContainerElement::Nav
        } else {
            ContainerElement::Div
        }
    }
}
