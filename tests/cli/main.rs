//! CLI integration tests for fences.
//!
//! These tests execute the compiled binary and verify CLI behavior including:
//! - Subcommand behavior (parse, render)
//! - Stdin/stdout handling
//! - Exit codes
//! - File I/O operations
//! - Config discovery

mod common;
mod parse;
mod render;
