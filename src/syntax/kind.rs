//! Syntax kinds and language definition for the fenced-container CST.

use rowan::Language;

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    // Tokens
    WHITESPACE = 0,
    NEWLINE,
    TEXT,
    BLANK_LINE,
    DIV_MARKER,         // :::
    ATTRIBUTE,          // {#id .class key=value}
    HORIZONTAL_RULE,    // --- or *** or ___
    ATX_HEADING_MARKER, // leading #####
    CODE_FENCE_MARKER,  // ``` or ~~~
    CODE_INFO,          // info string after an opening code fence

    // Composite nodes
    ROOT,
    DOCUMENT,
    PARAGRAPH,
    HEADING,
    HEADING_CONTENT,
    CODE_BLOCK,
    CODE_FENCE_OPEN,
    CODE_FENCE_CLOSE,

    // Fenced containers
    FENCED_CONTAINER,
    DIV_FENCE_OPEN,
    DIV_FENCE_CLOSE,
    DIV_INFO, // text trailing the attribute block on an opener without a body
}

impl SyntaxKind {
    const LAST: SyntaxKind = SyntaxKind::DIV_INFO;

    /// Whether this kind is a token kind (as opposed to a node kind).
    pub fn is_token(self) -> bool {
        self < SyntaxKind::ROOT
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FencesLanguage {}

impl Language for FencesLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 <= SyntaxKind::LAST as u16);
        // SAFETY: `SyntaxKind` is `repr(u16)` with contiguous discriminants
        // starting at zero, and the bound is checked above.
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}
