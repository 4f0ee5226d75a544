//! Per-pass mutable state.

use crate::rules::RuleTables;
use crate::stack::ElementStack;

/// Live state of one render pass: the open-element stack plus the small
/// amount of bookkeeping the indentation rules need.
///
/// Create a fresh one per pass and thread it through every literal fragment
/// in document order. It must be exclusively owned by that pass; sharing it
/// between interleaved passes corrupts the stack and the indentation.
#[derive(Clone, Debug)]
pub struct StreamState {
    pub(crate) stack: ElementStack,
    /// Most recently processed opening-tag name (void elements included,
    /// `br` excluded); drives the adjacent-identical-close collapse.
    pub(crate) last_tag: String,
    /// Set when a closing tag's shift was just suppressed; one suppression
    /// per run of identical closes.
    pub(crate) just_closed: bool,
    /// True until the first tag of the pass is written, suppressing exactly
    /// one leading line break.
    pub(crate) start: bool,
    template: String,
}

impl StreamState {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            stack: ElementStack::default(),
            last_tag: String::new(),
            just_closed: false,
            start: true,
            template: template.into(),
        }
    }

    /// Number of currently open elements; the indentation level. Void
    /// elements never contribute.
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// True when every opened element has been closed again. Hosts can check
    /// this at end of pass to detect unclosed markup.
    pub fn is_balanced(&self) -> bool {
        self.stack.depth() == 0
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Isolation is judged by the innermost open element only, not by any
    /// deeper ancestor.
    pub(crate) fn isolated(&self, rules: &RuleTables) -> bool {
        self.stack.top().is_some_and(|top| rules.is_isolated(top))
    }

    pub(crate) fn note_tag(&mut self, name: &str) {
        self.last_tag.clear();
        self.last_tag.push_str(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleTables;

    #[test]
    fn isolation_follows_the_top_of_stack_only() {
        let rules = RuleTables::html();
        let mut state = StreamState::new("t");
        assert!(!state.isolated(&rules));
        state.stack.enter("pre", &rules);
        assert!(state.isolated(&rules));
        // An element opened inside the isolated body takes over the check.
        state.stack.enter("div", &rules);
        assert!(!state.isolated(&rules));
    }
}
