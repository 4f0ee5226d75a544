//! Pure whitespace transforms, applied only outside isolated context.
//!
//! The transforms operate on bytes; every byte they inspect or replace is
//! ASCII, so multi-byte UTF-8 sequences pass through untouched.

use std::borrow::Cow;

#[inline]
pub(crate) fn is_ws(b: u8) -> bool {
    b == b' ' || b == b'\t' || b == b'\n' || b == b'\r'
}

/// True when the text is empty or whitespace only.
pub(crate) fn is_blank(s: &str) -> bool {
    s.bytes().all(is_ws)
}

/// Collapses every run of space/tab/CR/LF to a single space.
pub(crate) fn collapse_ws(s: &str) -> Cow<'_, str> {
    let bytes = s.as_bytes();
    let mut prev_ws = false;
    let mut dirty = false;
    for &b in bytes {
        let ws = is_ws(b);
        if ws && (prev_ws || b != b' ') {
            dirty = true;
            break;
        }
        prev_ws = ws;
    }
    if !dirty {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < bytes.len() {
        if is_ws(bytes[i]) {
            out.push(' ');
            while i < bytes.len() && is_ws(bytes[i]) {
                i += 1;
            }
        } else {
            let start = i;
            while i < bytes.len() && !is_ws(bytes[i]) {
                i += 1;
            }
            out.push_str(&s[start..i]);
        }
    }
    Cow::Owned(out)
}

/// Normalizes attribute text: tightens whitespace around `=` and the opening
/// quote of an attribute value, then collapses the remaining runs.
pub(crate) fn normalize_attr_text(s: &str) -> Cow<'_, str> {
    if !s.bytes().any(|b| b == b'=' || b == b'"') {
        return collapse_ws(s);
    }
    let tightened = tighten_attr(s);
    match collapse_ws(&tightened) {
        Cow::Borrowed(_) => Cow::Owned(tightened),
        Cow::Owned(out) => Cow::Owned(out),
    }
}

/// `a  =  "b"` becomes `a="b"`, and a quote preceded by whitespace loses that
/// whitespace. A `=` not followed by a double quote is left alone.
fn tighten_attr(s: &str) -> String {
    let bytes = s.as_bytes();
    let n = bytes.len();
    let mut out = String::with_capacity(n);
    let mut i = 0;
    while i < n {
        let mut j = i;
        while j < n && is_ws(bytes[j]) {
            j += 1;
        }
        if j < n && bytes[j] == b'=' {
            let mut k = j + 1;
            while k < n && is_ws(bytes[k]) {
                k += 1;
            }
            if k < n && bytes[k] == b'"' {
                k += 1;
                while k < n && is_ws(bytes[k]) {
                    k += 1;
                }
                out.push_str("=\"");
                i = k;
                continue;
            }
            // Unquoted assignment: keep as written.
            out.push_str(&s[i..j]);
            out.push('=');
            i = j + 1;
            continue;
        }
        if j > i && j < n && bytes[j] == b'"' {
            out.push('"');
            i = j + 1;
            continue;
        }
        if j > i {
            out.push_str(&s[i..j]);
            i = j;
            continue;
        }
        let start = i;
        while i < n && !is_ws(bytes[i]) && bytes[i] != b'=' {
            i += 1;
        }
        out.push_str(&s[start..i]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_leaves_clean_text_borrowed() {
        assert!(matches!(collapse_ws("a b c"), Cow::Borrowed(_)));
        assert!(matches!(collapse_ws(""), Cow::Borrowed(_)));
    }

    #[test]
    fn collapse_squeezes_runs() {
        assert_eq!(collapse_ws("a  \t\r\n  b"), "a b");
        assert_eq!(collapse_ws("  x  "), " x ");
        assert_eq!(collapse_ws("\n\t\r"), " ");
    }

    #[test]
    fn collapse_preserves_multibyte_text() {
        assert_eq!(collapse_ws("é\u{3000}"), "é\u{3000}"); // U+3000 is not ASCII whitespace
        assert_eq!(collapse_ws("héllo   wörld"), "héllo wörld");
    }

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\r\n"));
        assert!(!is_blank(" x "));
    }

    #[test]
    fn attr_text_tightens_equals_and_quotes() {
        assert_eq!(normalize_attr_text("href  \n\t\r  = \n\t\r \"#\""), "href=\"#\"");
        assert_eq!(normalize_attr_text("href=\"#\""), "href=\"#\"");
        assert_eq!(
            normalize_attr_text("href=\"#\"  \n\t\r class=\"t\""),
            "href=\"#\" class=\"t\""
        );
    }

    #[test]
    fn attr_text_leaves_unquoted_assignments() {
        assert_eq!(normalize_attr_text("a = b"), "a = b");
        assert_eq!(normalize_attr_text("a  =  b"), "a = b");
    }

    #[test]
    fn quote_preceded_by_whitespace_is_tightened() {
        assert_eq!(normalize_attr_text("x \t \"y\""), "x\"y\"");
    }
}
