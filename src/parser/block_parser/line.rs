//! Cursor over the line currently offered to the block rules.

/// Tab stops are every four columns.
pub(crate) const TAB_STOP: usize = 4;

/// Leading whitespace measured from a cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Indent {
    /// Width in columns, tabs expanded.
    pub(crate) width: usize,
    /// Length in bytes.
    pub(crate) len: usize,
}

/// One input line (trailing newline included) and the byte position up to
/// which enclosing blocks have consumed it.
#[derive(Debug, Clone)]
pub(crate) struct Line<'a> {
    text: &'a str,
    offset: usize,
    pos: usize,
}

impl<'a> Line<'a> {
    pub(crate) fn new(text: &'a str, offset: usize) -> Self {
        Self {
            text,
            offset,
            pos: 0,
        }
    }

    pub(crate) fn text(&self) -> &'a str {
        self.text
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Unconsumed part of the line, newline included.
    pub(crate) fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Unconsumed part of the line without its newline.
    pub(crate) fn content(&self) -> &'a str {
        let rest = self.rest();
        rest.strip_suffix('\n').unwrap_or(rest)
    }

    /// The line's newline, or `""` on the last line of input.
    pub(crate) fn newline(&self) -> &'a str {
        if self.text.ends_with('\n') && self.pos < self.text.len() {
            "\n"
        } else {
            ""
        }
    }

    /// Byte offset of the cursor within the whole document.
    pub(crate) fn document_offset(&self) -> usize {
        self.offset + self.pos
    }

    /// Column of the cursor, tabs expanded.
    pub(crate) fn column(&self) -> usize {
        column_of(self.text, self.pos)
    }

    /// Whitespace between the cursor and the first content byte.
    pub(crate) fn indent(&self) -> Indent {
        indent_at(self.text, self.pos)
    }

    pub(crate) fn is_blank(&self) -> bool {
        self.rest().trim().is_empty()
    }

    /// First non-whitespace byte after the cursor.
    pub(crate) fn first_content_byte(&self) -> Option<u8> {
        let indent = self.indent();
        self.text
            .as_bytes()
            .get(self.pos + indent.len)
            .copied()
            .filter(|b| *b != b'\n')
    }

    pub(crate) fn advance(&mut self, bytes: usize) {
        self.pos = (self.pos + bytes).min(self.text.len());
    }

    /// Consumes leading whitespace worth at most `max` columns. A tab that
    /// would overshoot `max` is left in place, and content is never
    /// consumed. Returns the number of columns consumed.
    pub(crate) fn strip_columns(&mut self, max: usize) -> usize {
        let start = self.column();
        let mut col = start;
        let mut idx = self.pos;
        for b in self.text.bytes().skip(self.pos) {
            let next = match b {
                b' ' => col + 1,
                b'\t' => col + TAB_STOP - (col % TAB_STOP),
                _ => break,
            };
            if next - start > max {
                break;
            }
            col = next;
            idx += 1;
        }
        self.pos = idx;
        col - start
    }
}

/// Column reached after `text[..byte]`, tabs expanded.
pub(crate) fn column_of(text: &str, byte: usize) -> usize {
    text[..byte].chars().fold(0, |col, c| match c {
        '\t' => col + TAB_STOP - (col % TAB_STOP),
        _ => col + 1,
    })
}

/// Leading whitespace of `text` from byte `pos`.
pub(crate) fn indent_at(text: &str, pos: usize) -> Indent {
    let start = column_of(text, pos);
    let mut col = start;
    let mut len = 0;
    for b in text.bytes().skip(pos) {
        match b {
            b' ' => col += 1,
            b'\t' => col += TAB_STOP - (col % TAB_STOP),
            _ => break,
        }
        len += 1;
    }
    Indent {
        width: col - start,
        len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indent_counts_tabs_to_next_stop() {
        assert_eq!(indent_at("  x", 0), Indent { width: 2, len: 2 });
        assert_eq!(indent_at("\tx", 0), Indent { width: 4, len: 1 });
        assert_eq!(indent_at(" \tx", 0), Indent { width: 4, len: 2 });
        assert_eq!(indent_at("x", 0), Indent { width: 0, len: 0 });
    }

    #[test]
    fn indent_is_relative_to_cursor() {
        let mut line = Line::new("  \tx\n", 0);
        line.advance(2);
        // The tab at column 2 only reaches column 4.
        assert_eq!(line.indent(), Indent { width: 2, len: 1 });
    }

    #[test]
    fn strip_never_passes_content() {
        let mut line = Line::new("  text\n", 0);
        assert_eq!(line.strip_columns(4), 2);
        assert_eq!(line.content(), "text");
    }

    #[test]
    fn strip_stops_at_max() {
        let mut line = Line::new("      text\n", 0);
        assert_eq!(line.strip_columns(4), 4);
        assert_eq!(line.content(), "  text");
    }

    #[test]
    fn strip_leaves_overshooting_tab() {
        let mut line = Line::new(" \ttext\n", 0);
        assert_eq!(line.strip_columns(2), 1);
        assert_eq!(line.rest(), "\ttext\n");
    }

    #[test]
    fn strip_blank_line_keeps_newline() {
        let mut line = Line::new("\n", 0);
        assert_eq!(line.strip_columns(4), 0);
        assert_eq!(line.rest(), "\n");
        assert!(line.is_blank());
    }

    #[test]
    fn newline_and_content() {
        let line = Line::new("abc\n", 10);
        assert_eq!(line.content(), "abc");
        assert_eq!(line.newline(), "\n");
        assert_eq!(line.document_offset(), 10);

        let last = Line::new("abc", 0);
        assert_eq!(last.newline(), "");
    }

    #[test]
    fn first_content_byte_skips_indent() {
        let line = Line::new("   :::{.a}\n", 0);
        assert_eq!(line.first_content_byte(), Some(b':'));
        assert_eq!(Line::new("   \n", 0).first_content_byte(), None);
    }
}
