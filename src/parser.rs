//! Parser module containing the block parser.

use thiserror::Error;

use crate::config::Config;
use crate::syntax::{FenceId, SyntaxNode};

pub mod block_parser;

// Re-export commonly used types
pub use block_parser::BlockParser;
pub use block_parser::attributes;

/// Failures that abort parsing a document.
///
/// Malformed fence syntax is never an error; it stays in the tree as text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// An open container lost its bookkeeping record.
    #[error("no open fence record for {id}")]
    MissingFenceRecord { id: FenceId },
    /// Byte offsets are 32-bit throughout the tree.
    #[error("input of {len} bytes is too large to parse")]
    InputTooLarge { len: usize },
}

/// Parses a document string into a syntax tree.
///
/// This function normalizes line endings and runs the block parser to
/// produce a lossless concrete syntax tree (CST) of the normalized input.
///
/// # Examples
///
/// ```rust
/// use fences::parser::parse;
///
/// let input = ":::{#a .b}\ntext\n:::\n";
/// let tree = parse(input, None).unwrap();
/// println!("{:#?}", tree);
/// ```
///
/// # Arguments
///
/// * `input` - The document content to parse
/// * `config` - Optional configuration. If None, uses default config.
pub fn parse(input: &str, config: Option<Config>) -> Result<SyntaxNode, ParseError> {
    let normalized_input = input.replace("\r\n", "\n");
    let config = config.unwrap_or_default();
    BlockParser::new(&normalized_input, &config).parse()
}
