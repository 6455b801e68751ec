//! Content generation request boundary.
//!
//! # Responsibility
//! - Define the outbound seam for per-cell content generation.
//!
//! # Invariants
//! - Dispatch is fire-and-forget: no return value, no cancel path.
//! - Results come back only through the editor's content mutation;
//!   against concurrent manual edits, the last write wins.

/// One outbound generation request for a single cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    /// Index of the cell whose content is requested.
    pub cell_index: usize,
    /// The cell's current content, used as prompt context. May be
    /// empty; an empty cell may still request generation.
    pub prompt_seed: String,
}

/// Generation collaborator seam.
///
/// Implementations are expected to eventually apply their output via
/// the session's generated-content callback. The core places no
/// ordering constraint between a request and later manual edits, and
/// performs no staleness detection.
pub trait ContentGenerator {
    fn generate(&self, request: GenerateRequest);
}
