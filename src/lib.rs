pub mod config;
pub mod parser;
pub mod renderer;
pub mod syntax;

pub use config::Config;
pub use config::ConfigBuilder;
pub use parser::{ParseError, parse};
pub use renderer::HtmlRenderer;
pub use syntax::SyntaxNode;

/// Renders a document with fenced containers to HTML.
///
/// # Examples
///
/// ```rust
/// let html = fences::render_html(":::{#a .b}\ntext\n:::\n", None).unwrap();
/// assert_eq!(html, "<div id=\"a\" class=\"b\">\n<p>text</p>\n</div>\n");
/// ```
///
/// # Arguments
///
/// * `input` - The document content to render
/// * `config` - Optional configuration (defaults to default config)
pub fn render_html(input: &str, config: Option<Config>) -> Result<String, ParseError> {
    let config = config.unwrap_or_default();
    let tree = parse(input, Some(config.clone()))?;
    Ok(HtmlRenderer::new(config).render(&tree))
}
