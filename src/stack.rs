//! Stack of currently-open elements and the implicit-closing rules.

use crate::rules::RuleTables;

/// Signal that a closing tag arrived with nothing left open. The scanner
/// turns this into a `StructuralCloseError` with source location attached.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct StackUnderflow;

/// Ordered list of open element names; the top is the innermost element.
/// Void elements are never present, so the length doubles as the depth.
#[derive(Clone, Debug, Default)]
pub(crate) struct ElementStack {
    items: Vec<String>,
}

impl ElementStack {
    pub(crate) fn depth(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn top(&self) -> Option<&str> {
        self.items.last().map(String::as_str)
    }

    /// Pops open elements that the incoming tag implicitly closes, repeating
    /// while the new top still matches a breaking rule. Returns the number of
    /// elements closed.
    pub(crate) fn close_implied(&mut self, incoming: &str, rules: &RuleTables) -> usize {
        let mut closed = 0;
        while let Some(top) = self.top() {
            if !rules.closes(top, incoming) {
                break;
            }
            self.items.pop();
            closed += 1;
        }
        closed
    }

    /// Handles an opening tag after its breaking rules have been resolved.
    /// `br` is always inline and untracked; other void elements are noted by
    /// the caller but never pushed. Returns true when the element was pushed.
    pub(crate) fn enter(&mut self, name: &str, rules: &RuleTables) -> bool {
        self.close_implied(name, rules);
        if name == "br" || rules.is_void(name) {
            return false;
        }
        self.items.push(name.to_owned());
        true
    }

    /// Handles a closing tag: pops down to and including the nearest open
    /// element of the same name. A close that matches nothing on a non-empty
    /// stack is absorbed without popping.
    pub(crate) fn leave(&mut self, name: &str) -> Result<(), StackUnderflow> {
        if self.items.is_empty() {
            return Err(StackUnderflow);
        }
        if let Some(at) = self.items.iter().rposition(|open| open == name) {
            self.items.truncate(at);
        }
        Ok(())
    }
}
