//! Stream-structural HTML pretty-printing for template output.
//!
//! The engine rewrites the literal markup a template engine emits: it
//! collapses insignificant whitespace, re-indents nested elements and applies
//! the implicit-closing rules of HTML, while leaving dynamic expression
//! output untouched. Markup arrives as a stream of fragments and the
//! structural state carries across them, so an element opened in one fragment
//! indents text rendered three fragments later.
//!
//! ```
//! use prettahtml::PrettyPrinter;
//!
//! let printer = PrettyPrinter::new();
//! let mut state = printer.begin("demo.html");
//! let out = printer.normalize(&mut state, "<ul><li>a</li><li>b</li></ul>", 1)?;
//! assert_eq!(out, "<ul>\n  <li>a</li>\n  <li>b</li>\n</ul>");
//! assert!(state.is_balanced());
//! # Ok::<(), prettahtml::StructuralCloseError>(())
//! ```

mod emit;
mod error;
mod normalize;
mod rules;
mod scanner;
mod stack;
mod state;

pub use error::StructuralCloseError;
pub use rules::{BreakingSet, RuleTables};
pub use state::StreamState;

/// One piece of template output, in document order.
#[derive(Clone, Copy, Debug)]
pub enum Fragment<'a> {
    /// Literal markup from the template source; gets normalized. `line` is
    /// the source line the fragment starts on, for error reporting.
    Literal { text: &'a str, line: u32 },
    /// Dynamic output (expression results, escaped values); forwarded
    /// byte-for-byte without touching structural state.
    PassThrough(&'a str),
}

/// The engine itself: rule tables plus the indentation unit. Stateless
/// across passes and shareable; all per-pass state lives in [`StreamState`].
#[derive(Clone, Debug)]
pub struct PrettyPrinter {
    rules: RuleTables,
    indent_unit: String,
}

impl PrettyPrinter {
    /// Engine with the stock HTML rule tables and two-space indentation.
    pub fn new() -> Self {
        Self::with_rules(RuleTables::html())
    }

    pub fn with_rules(rules: RuleTables) -> Self {
        Self {
            rules,
            indent_unit: "  ".to_owned(),
        }
    }

    /// Replaces the two-space indentation unit.
    pub fn with_indent_unit(mut self, unit: impl Into<String>) -> Self {
        self.indent_unit = unit.into();
        self
    }

    pub fn rules(&self) -> &RuleTables {
        &self.rules
    }

    /// Opens a render pass. `template` names the template for error messages
    /// and logging only.
    pub fn begin(&self, template: impl Into<String>) -> StreamState {
        StreamState::new(template)
    }

    /// Normalizes one literal fragment, mutating `state` so the next
    /// fragment of the pass continues where this one left off.
    pub fn normalize(
        &self,
        state: &mut StreamState,
        text: &str,
        line: u32,
    ) -> Result<String, StructuralCloseError> {
        tracing::debug!(
            "normalizing fragment of {} byte(s) at {}:{}",
            text.len(),
            state.template(),
            line
        );
        scanner::scan_chunk(&self.rules, &self.indent_unit, state, text, line)
    }

    /// Runs a whole pass over an ordered fragment stream, concatenating the
    /// normalized literals and the untouched pass-through pieces.
    pub fn render_fragments<'a, I>(
        &self,
        template: &str,
        fragments: I,
    ) -> Result<String, StructuralCloseError>
    where
        I: IntoIterator<Item = Fragment<'a>>,
    {
        let mut state = self.begin(template);
        let mut out = String::new();
        for fragment in fragments {
            match fragment {
                Fragment::Literal { text, line } => {
                    out.push_str(&self.normalize(&mut state, text, line)?);
                }
                Fragment::PassThrough(text) => out.push_str(text),
            }
        }
        Ok(out)
    }
}

impl Default for PrettyPrinter {
    fn default() -> Self {
        Self::new()
    }
}
