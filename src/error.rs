//! The engine's single failure mode.

use thiserror::Error;

/// A closing tag arrived with no open element left to close.
///
/// This aborts the whole render pass as a template-level syntax failure; all
/// other markup irregularities are absorbed by the implicit-closing and
/// normalization rules and never raise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unexpected closing tag </{tag}> with nothing left open ({template}, line {line})")]
pub struct StructuralCloseError {
    /// Offending tag name, as written in the source.
    pub tag: String,
    /// Line of the fragment that was being processed.
    pub line: u32,
    /// Template identity, as handed to `PrettyPrinter::begin`.
    pub template: String,
}
