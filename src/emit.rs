//! Indentation decisions and the output buffer.
//!
//! A "shift" is a line break followed by one indentation unit per open
//! element. Trailing spaces left by collapsed preambles are trimmed before
//! every tag write, so re-feeding the output reproduces it exactly.

use crate::state::StreamState;

pub(crate) struct IndentWriter<'a> {
    buf: String,
    unit: &'a str,
}

impl<'a> IndentWriter<'a> {
    pub(crate) fn new(unit: &'a str, capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity + capacity / 8),
            unit,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Normalized preamble text.
    pub(crate) fn text(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    /// Verbatim bytes from an isolated body.
    pub(crate) fn raw(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    /// Canonical tag text (`<name` / `</name`), optionally shifted onto a
    /// fresh indented line. `padded` restores the single space that separated
    /// the name from its attributes.
    pub(crate) fn tag(&mut self, shift: Option<usize>, closing: bool, name: &str, padded: bool) {
        self.trim_trailing_spaces();
        if let Some(depth) = shift {
            let unit = self.unit;
            self.buf.push('\n');
            for _ in 0..depth {
                self.buf.push_str(unit);
            }
        }
        self.buf.push('<');
        if closing {
            self.buf.push('/');
        }
        self.buf.push_str(name);
        if padded {
            self.buf.push(' ');
        }
    }

    /// Bare end-of-tag delimiter; always written inline.
    pub(crate) fn sole(&mut self, self_closing: bool) {
        self.trim_trailing_spaces();
        self.buf.push_str(if self_closing { "/>" } else { ">" });
    }

    fn trim_trailing_spaces(&mut self) {
        while self.buf.ends_with(' ') {
            self.buf.pop();
        }
    }

    pub(crate) fn finish(self) -> String {
        self.buf
    }
}

/// Shift decision for an opening tag. The start flag suppresses exactly one
/// leading shift, and only while nothing has been written to the current
/// fragment yet.
pub(crate) fn open_boundary_shift(state: &mut StreamState, out: &IndentWriter<'_>) -> Option<usize> {
    if state.start {
        state.start = false;
        if out.is_empty() {
            return None;
        }
    }
    Some(state.depth())
}

/// Shift decision for a closing tag; the indent matches the element's own
/// nesting level, one less than its children's. Closing the same tag that
/// was last opened collapses onto the current line, once per run.
pub(crate) fn close_boundary_shift(state: &mut StreamState, name: &str) -> Option<usize> {
    if name == state.last_tag && !state.just_closed {
        state.just_closed = true;
        return None;
    }
    Some(state.depth().saturating_sub(1))
}
