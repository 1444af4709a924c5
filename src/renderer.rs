//! HTML output for parsed documents.

use crate::config::Config;
use crate::parser::attributes::Attributes;
use crate::syntax::{AstNode, CodeBlock, FencedContainer, Heading, Paragraph, SyntaxKind, SyntaxNode};

/// Attributes any HTML element may carry. Container attributes outside this
/// list (and not `data-*`) are dropped unless filtering is turned off.
const GLOBAL_ATTRIBUTES: &[&str] = &[
    "accesskey",
    "autocapitalize",
    "autofocus",
    "class",
    "contenteditable",
    "dir",
    "draggable",
    "enterkeyhint",
    "hidden",
    "id",
    "inert",
    "inputmode",
    "is",
    "itemid",
    "itemprop",
    "itemref",
    "itemscope",
    "itemtype",
    "lang",
    "part",
    "role",
    "slot",
    "spellcheck",
    "style",
    "tabindex",
    "title",
    "translate",
];

fn is_allowed_attribute(name: &str) -> bool {
    name.starts_with("data-") || GLOBAL_ATTRIBUTES.contains(&name)
}

/// Escape text for HTML content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

pub struct HtmlRenderer {
    output: String,
    config: Config,
}

impl HtmlRenderer {
    pub fn new(config: Config) -> Self {
        Self {
            output: String::with_capacity(4096),
            config,
        }
    }

    pub fn render(mut self, node: &SyntaxNode) -> String {
        self.render_node(node);
        self.output
    }

    fn render_children(&mut self, node: &SyntaxNode) {
        for child in node.children() {
            self.render_node(&child);
        }
    }

    fn render_node(&mut self, node: &SyntaxNode) {
        match node.kind() {
            SyntaxKind::ROOT | SyntaxKind::DOCUMENT => self.render_children(node),
            SyntaxKind::FENCED_CONTAINER => {
                if let Some(container) = FencedContainer::cast(node.clone()) {
                    self.render_container(&container);
                }
            }
            SyntaxKind::PARAGRAPH => {
                if let Some(paragraph) = Paragraph::cast(node.clone()) {
                    self.output.push_str("<p>");
                    self.output.push_str(&escape_html(&paragraph.text()));
                    self.output.push_str("</p>\n");
                }
            }
            SyntaxKind::HEADING => {
                if let Some(heading) = Heading::cast(node.clone()) {
                    let level = heading.level();
                    self.output.push_str(&format!(
                        "<h{level}>{}</h{level}>\n",
                        escape_html(heading.text().trim())
                    ));
                }
            }
            SyntaxKind::CODE_BLOCK => {
                if let Some(code) = CodeBlock::cast(node.clone()) {
                    self.render_code_block(&code);
                }
            }
            SyntaxKind::HORIZONTAL_RULE => {
                let rule = if self.config.render.xhtml { "<hr />\n" } else { "<hr>\n" };
                self.output.push_str(rule);
            }
            // Fence delimiters, blank lines and opener info produce no output.
            _ => {}
        }
    }

    fn render_code_block(&mut self, code: &CodeBlock) {
        self.output.push_str("<pre><code");
        if let Some(language) = code.language() {
            self.output
                .push_str(&format!(" class=\"language-{}\"", escape_html(&language)));
        }
        self.output.push('>');
        self.output.push_str(&escape_html(&code.content()));
        self.output.push_str("</code></pre>\n");
    }

    fn render_container(&mut self, container: &FencedContainer) {
        let element = container.element_for(Some(&self.config.fences.nav_class));
        log::trace!("Rendering {} as <{}>", container.identity(), element.as_str());

        self.output.push('<');
        self.output.push_str(element.as_str());
        self.push_attributes(&container.attributes());
        self.output.push_str(">\n");

        for block in container.blocks() {
            self.render_node(&block);
        }

        self.output.push_str("</");
        self.output.push_str(element.as_str());
        self.output.push_str(">\n");
    }

    fn push_attributes(&mut self, attributes: &Attributes) {
        for (name, value) in attributes.iter() {
            if self.config.render.filter_attributes && !is_allowed_attribute(name) {
                log::debug!("Dropping attribute {name:?} from container output");
                continue;
            }
            self.output.push_str(&format!(
                " {}=\"{}\"",
                escape_html(name),
                escape_html(&value.joined())
            ));
        }
    }
}
