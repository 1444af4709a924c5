//! Bookkeeping for the fenced containers that are currently open.

use crate::syntax::FenceId;

/// Parse-time record for one open fenced container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FenceRecord {
    pub(crate) id: FenceId,
    /// Delimiter byte, `:` unless configured otherwise.
    pub(crate) marker: u8,
    /// Indentation of the opener, relative to the enclosing block's offset.
    pub(crate) open_column: usize,
    pub(crate) run_length: usize,
    /// Indentation of the first non-blank content line, once seen.
    content_indent: Option<usize>,
}

impl FenceRecord {
    pub(crate) fn new(id: FenceId, marker: u8, open_column: usize, run_length: usize) -> Self {
        Self {
            id,
            marker,
            open_column,
            run_length,
            content_indent: None,
        }
    }

    pub(crate) fn content_indent(&self) -> Option<usize> {
        self.content_indent
    }

    /// Fixes the content indentation. Later calls leave it unchanged.
    pub(crate) fn lock_content_indent(&mut self, width: usize) {
        if self.content_indent.is_none() {
            log::trace!("{}: content indent locked at {}", self.id, width);
            self.content_indent = Some(width);
        }
    }

    /// Whether `content` (the line after `indent` columns of whitespace)
    /// closes this record.
    pub(crate) fn is_closed_by(&self, indent: usize, content: &str) -> bool {
        indent == self.open_column && is_closing_run(content, self.marker, self.run_length)
    }
}

/// Whether `content` is a run of at least `min_run` `marker` bytes followed
/// only by whitespace.
pub(crate) fn is_closing_run(content: &str, marker: u8, min_run: usize) -> bool {
    let run = content.bytes().take_while(|&b| b == marker).count();
    run >= min_run && content[run..].trim().is_empty()
}

/// Stack of open fence records, innermost last.
///
/// One tracker belongs to one document parse and is dropped with it.
#[derive(Debug, Default)]
pub(crate) struct FenceTracker {
    records: Vec<FenceRecord>,
}

impl FenceTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, record: FenceRecord) {
        log::debug!(
            "Opened {} (column {}, {} markers, depth {})",
            record.id,
            record.open_column,
            record.run_length,
            self.records.len() + 1
        );
        self.records.push(record);
    }

    pub(crate) fn top(&self) -> Option<&FenceRecord> {
        self.records.last()
    }

    pub(crate) fn is_top(&self, id: FenceId) -> bool {
        self.top().is_some_and(|r| r.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: FenceId) -> Option<&mut FenceRecord> {
        // Lookups almost always hit the innermost records.
        self.records.iter_mut().rev().find(|r| r.id == id)
    }

    /// Removes `id` and every record opened after it. Returns how many
    /// records were removed.
    pub(crate) fn pop_through(&mut self, id: FenceId) -> usize {
        match self.records.iter().rposition(|r| r.id == id) {
            Some(idx) => {
                let removed = self.records.len() - idx;
                self.records.truncate(idx);
                log::debug!("Closed {id} ({removed} level(s), depth now {})", self.records.len());
                removed
            }
            None => 0,
        }
    }

    /// Drops every record; used when the document ends.
    pub(crate) fn clear(&mut self) -> usize {
        let open = self.records.len();
        if open > 0 {
            log::debug!("Implicitly closing {open} fence(s) at end of input");
        }
        self.records.clear();
        open
    }

    pub(crate) fn depth(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
