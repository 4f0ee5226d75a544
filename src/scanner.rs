//! Tag-boundary scanning over one literal fragment.
//!
//! The lexer is deliberately lenient: an opening/closing tag start is `<`,
//! optional whitespace and `/`, then a name of `[A-Za-z0-9_-]`; a bare `>`
//! (optionally preceded by `/`) terminates an attribute list. Everything
//! else (comments, doctypes, stray `<`) is ordinary text. Trailing
//! whitespace belongs to the boundary token, which is how whitespace next to
//! delimiters disappears outside isolation and survives byte-for-byte inside
//! it.

use memchr::memchr2;

use crate::emit::{self, IndentWriter};
use crate::error::StructuralCloseError;
use crate::normalize::{self, is_ws};
use crate::rules::RuleTables;
use crate::state::StreamState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TagEvent<'a> {
    /// `<name`; `padded` records whitespace between the name and what
    /// followed it in the source.
    Open { name: &'a str, padded: bool },
    /// `</name`.
    Close { name: &'a str, padded: bool },
    /// Bare end-of-tag delimiter, `>` or `/>`.
    Sole { self_closing: bool },
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Boundary<'a> {
    /// Text between the previous boundary and this one.
    pub(crate) preamble: &'a str,
    pub(crate) event: TagEvent<'a>,
    /// Exact source bytes of the boundary, for isolated copy-through.
    pub(crate) raw: &'a str,
}

#[inline]
fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}

/// Restartable lexer producing (preamble, tag-event) pairs for one fragment.
pub(crate) struct TagLexer<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> TagLexer<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// Text after the last boundary of the fragment.
    pub(crate) fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    pub(crate) fn next_boundary(&mut self) -> Option<Boundary<'a>> {
        let bytes = self.src.as_bytes();
        let mut search = self.pos;
        while let Some(off) = memchr2(b'<', b'>', &bytes[search..]) {
            let at = search + off;
            if bytes[at] == b'<' {
                match self.lex_tag_start(at) {
                    Some((event, end)) => {
                        let boundary = Boundary {
                            preamble: &self.src[self.pos..at],
                            event,
                            raw: &self.src[at..end],
                        };
                        self.pos = end;
                        return Some(boundary);
                    }
                    // Not a tag; the `<` stays in the preamble.
                    None => search = at + 1,
                }
            } else {
                // A preceding `/` marks the delimiter self-closing and is
                // pulled out of the preamble, whitespace and all.
                let mut self_closing = false;
                let mut back = at;
                while back > self.pos && is_ws(bytes[back - 1]) {
                    back -= 1;
                }
                let mut start = back;
                if back > self.pos && bytes[back - 1] == b'/' {
                    self_closing = true;
                    start = back - 1;
                }
                let mut end = at + 1;
                while end < bytes.len() && is_ws(bytes[end]) {
                    end += 1;
                }
                let boundary = Boundary {
                    preamble: &self.src[self.pos..start],
                    event: TagEvent::Sole { self_closing },
                    raw: &self.src[start..end],
                };
                self.pos = end;
                return Some(boundary);
            }
        }
        None
    }

    fn lex_tag_start(&self, at: usize) -> Option<(TagEvent<'a>, usize)> {
        let bytes = self.src.as_bytes();
        let n = bytes.len();
        let mut i = at + 1;
        while i < n && is_ws(bytes[i]) {
            i += 1;
        }
        let closing = i < n && bytes[i] == b'/';
        if closing {
            i += 1;
            while i < n && is_ws(bytes[i]) {
                i += 1;
            }
        }
        let name_start = i;
        while i < n && is_name_byte(bytes[i]) {
            i += 1;
        }
        if i == name_start {
            return None;
        }
        let name = &self.src[name_start..i];
        let ws_start = i;
        while i < n && is_ws(bytes[i]) {
            i += 1;
        }
        let padded = i > ws_start;
        let event = if closing {
            TagEvent::Close { name, padded }
        } else {
            TagEvent::Open { name, padded }
        };
        Some((event, i))
    }
}

enum PreambleKind {
    /// Between tags: collapse only.
    InterTag,
    /// Inside an attribute list (before a bare `>`, or the tail of a
    /// fragment that may end mid-tag): `=`/quote tightening applies too.
    Attribute,
}

fn write_preamble(out: &mut IndentWriter<'_>, text: &str, isolated: bool, kind: PreambleKind) {
    if text.is_empty() {
        return;
    }
    if isolated {
        out.raw(text);
        return;
    }
    if normalize::is_blank(text) {
        return;
    }
    let normalized = match kind {
        PreambleKind::InterTag => normalize::collapse_ws(text),
        PreambleKind::Attribute => normalize::normalize_attr_text(text),
    };
    out.text(&normalized);
}

/// Runs one literal fragment through normalizer, indenter and stack in
/// sequence, mutating `state` for the next fragment of the pass.
pub(crate) fn scan_chunk(
    rules: &RuleTables,
    indent_unit: &str,
    state: &mut StreamState,
    text: &str,
    line: u32,
) -> Result<String, StructuralCloseError> {
    let mut out = IndentWriter::new(indent_unit, text.len());
    let mut lexer = TagLexer::new(text);
    // True while the last boundary was a tag start whose `>` has not been
    // seen yet; decides how the fragment's tail text is normalized.
    let mut in_tag = false;

    while let Some(boundary) = lexer.next_boundary() {
        let isolated = state.isolated(rules);
        in_tag = !matches!(boundary.event, TagEvent::Sole { .. });
        match boundary.event {
            TagEvent::Open { name, padded } => {
                write_preamble(&mut out, boundary.preamble, isolated, PreambleKind::InterTag);
                if isolated {
                    // Tags inside an isolated body are plain bytes; they
                    // neither open elements nor end the isolation.
                    out.raw(boundary.raw);
                } else if name == "br" {
                    // Line breaks are always inline and untracked.
                    out.tag(None, false, name, padded);
                } else {
                    // Resolve implicit closes first so the shift is computed
                    // at the element's final depth.
                    let closed = state.stack.close_implied(name, rules);
                    if closed > 0 {
                        tracing::trace!("<{}> implicitly closed {} element(s)", name, closed);
                    }
                    let shift = emit::open_boundary_shift(state, &out);
                    out.tag(shift, false, name, padded);
                    state.note_tag(name);
                    if state.stack.enter(name, rules) {
                        state.just_closed = false;
                    }
                }
            }
            TagEvent::Close { name, padded } => {
                write_preamble(&mut out, boundary.preamble, isolated, PreambleKind::InterTag);
                if isolated {
                    out.raw(boundary.raw);
                } else if name == "br" {
                    out.tag(None, true, name, padded);
                } else {
                    let shift = emit::close_boundary_shift(state, name);
                    out.tag(shift, true, name, padded);
                }
                // Closing the isolating element itself ends the isolation.
                if name != "br" {
                    state.stack.leave(name).map_err(|_| StructuralCloseError {
                        tag: name.to_owned(),
                        line,
                        template: state.template().to_owned(),
                    })?;
                }
            }
            TagEvent::Sole { self_closing } => {
                write_preamble(&mut out, boundary.preamble, isolated, PreambleKind::Attribute);
                if isolated {
                    out.raw(boundary.raw);
                } else {
                    out.sole(self_closing);
                }
            }
        }
    }
    let tail_kind = if in_tag {
        PreambleKind::Attribute
    } else {
        PreambleKind::InterTag
    };
    write_preamble(&mut out, lexer.rest(), state.isolated(rules), tail_kind);
    Ok(out.finish())
}
