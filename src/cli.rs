use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fences")]
#[command(author, version)]
#[command(about = "Parse and render Markdown with fenced containers")]
#[command(
    long_about = "fences parses Markdown documents containing fenced containers \
    (:::{#id .class} ... :::) into a lossless syntax tree and renders them to HTML. \
    Containers nest, learn their content indentation from their first line, and close \
    on a matching fence, on an under-indented line, or at the end of the document."
)]
#[command(after_help = "\
EXAMPLES:

    # Render a file to stdout
    fences render document.md

    # Render from stdin
    cat document.md | fences render

    # Render to a file
    fences render document.md --output document.html

    # Use custom config
    fences render --config custom.toml document.md

    # Parse and inspect the syntax tree
    fences parse document.md

CONFIGURATION:

fences looks for configuration files in this order:
  1. Explicit --config path
  2. fences.toml or .fences.toml in current/parent directories
  3. ~/.config/fences/config.toml (XDG)
  4. Built-in defaults

Example .fences.toml:

    [fences]
    min_length = 3
    max_depth = 64
    nav_class = \"elem-nav\"

    [render]
    xhtml = false")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, fences will \
        search for .fences.toml or fences.toml in the current directory and its parents, \
        then fall back to ~/.config/fences/config.toml."
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a document to HTML
    #[command(
        long_about = "Render a document to HTML. Fenced containers become <div> elements, \
        or <nav> when they carry the configured navigation class. By default the HTML is \
        written to stdout."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Render to stdout
    fences render document.md

    # Render from stdin
    echo ':::{.note}' | fences render

    # Render to a file
    fences render document.md --output document.html")]
    Render {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        #[arg(
            long_help = "Path to the input file to render. If not provided, reads from stdin."
        )]
        file: Option<PathBuf>,

        /// Output file (stdout if not provided)
        #[arg(long, short)]
        #[arg(help = "Write HTML to this file instead of stdout")]
        output: Option<PathBuf>,
    },

    /// Parse a document and print its syntax tree
    #[command(
        long_about = "Parse a document and print the concrete syntax tree. The tree is lossless: \
        concatenating its tokens reproduces the input. Useful for debugging how fences were \
        recognized and where containers close."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Parse a file
    fences parse document.md

    # Parse from stdin
    echo ':::{#a .b}' | fences parse")]
    Parse {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        #[arg(
            long_help = "Path to the input file to parse. If not provided, reads from stdin."
        )]
        file: Option<PathBuf>,
    },
}
