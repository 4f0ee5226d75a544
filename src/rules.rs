//! Static markup rules: which elements are void, which isolate their body,
//! which count as block-level, and which implicitly close an open ancestor.
//!
//! Built once at engine construction and shared read-only across passes.

use std::collections::{HashMap, HashSet};

/// The set of tag names whose appearance implicitly closes an open element.
///
/// `any_block` is the wildcard: any block-level element (per the block table)
/// closes the open element, the way any block closes an open `<p>`.
#[derive(Clone, Debug, Default)]
pub struct BreakingSet {
    names: HashSet<String>,
    any_block: bool,
}

impl BreakingSet {
    pub fn of<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            any_block: false,
        }
    }

    /// Wildcard-only set: closed by any block-level element.
    pub fn any_block() -> Self {
        Self {
            names: HashSet::new(),
            any_block: true,
        }
    }

    pub fn with_any_block(mut self) -> Self {
        self.any_block = true;
        self
    }
}

/// Immutable rule tables driving the engine. Names compare case-sensitively,
/// exactly as written in the source markup.
#[derive(Clone, Debug)]
pub struct RuleTables {
    void: HashSet<String>,
    isolated: HashSet<String>,
    block: HashSet<String>,
    breaking: HashMap<String, BreakingSet>,
}

fn set(names: &[&str]) -> HashSet<String> {
    names.iter().map(|n| (*n).to_owned()).collect()
}

impl RuleTables {
    /// The default HTML tables.
    pub fn html() -> Self {
        let mut breaking = HashMap::new();
        breaking.insert("p".to_owned(), BreakingSet::any_block());
        breaking.insert("li".to_owned(), BreakingSet::of(["li"]));
        for cell in ["td", "th"] {
            breaking.insert(
                cell.to_owned(),
                BreakingSet::of(["td", "th", "tr", "tbody", "thead", "tfoot"]),
            );
        }
        breaking.insert(
            "tr".to_owned(),
            BreakingSet::of(["tr", "tbody", "thead", "tfoot"]),
        );
        for section in ["thead", "tbody", "tfoot"] {
            breaking.insert(
                section.to_owned(),
                BreakingSet::of(["thead", "tbody", "tfoot"]),
            );
        }
        for term in ["dd", "dt"] {
            breaking.insert(term.to_owned(), BreakingSet::of(["dl", "dt", "dd"]));
        }

        Self {
            void: set(&[
                "br", "img", "area", "hr", "param", "input", "embed", "col", "meta", "link",
                "path",
            ]),
            isolated: set(&["script", "style", "noscript", "textarea", "pre"]),
            block: set(&[
                "div", "p", "form", "ul", "ol", "li", "table", "tr", "tbody", "thead", "tfoot",
                "td", "th", "dl", "dt", "dd", "blockquote", "h1", "h2", "h3", "h4", "h5", "h6",
                "pre",
            ]),
            breaking,
        }
    }

    /// No rules at all; a starting point for fully custom tables.
    pub fn empty() -> Self {
        Self {
            void: HashSet::new(),
            isolated: HashSet::new(),
            block: HashSet::new(),
            breaking: HashMap::new(),
        }
    }

    /// Replaces the void-element table.
    pub fn void<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.void = names.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the isolated-element table.
    pub fn isolated<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.isolated = names.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the block-element table.
    pub fn block<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.block = names.into_iter().map(Into::into).collect();
        self
    }

    /// Registers (or replaces) the breaking rule for one open element.
    pub fn breaking(mut self, open: impl Into<String>, closed_by: BreakingSet) -> Self {
        self.breaking.insert(open.into(), closed_by);
        self
    }

    pub fn is_void(&self, name: &str) -> bool {
        self.void.contains(name)
    }

    pub fn is_isolated(&self, name: &str) -> bool {
        self.isolated.contains(name)
    }

    pub fn is_block(&self, name: &str) -> bool {
        self.block.contains(name)
    }

    /// Does `incoming` implicitly close the open element `open`?
    pub fn closes(&self, open: &str, incoming: &str) -> bool {
        match self.breaking.get(open) {
            Some(rule) => {
                rule.names.contains(incoming) || (rule.any_block && self.is_block(incoming))
            }
            None => false,
        }
    }
}

impl Default for RuleTables {
    fn default() -> Self {
        Self::html()
    }
}
