//! Cell domain model.
//!
//! # Responsibility
//! - Define the atomic unit of proposed notebook content.
//! - Decide which editor widget family displays a cell.
//!
//! # Invariants
//! - `type_tag` is stored verbatim as supplied; it is never normalized.
//! - Render dispatch is case-insensitive and two-way only: anything
//!   that is not `code` takes the markdown path.

use serde::{Deserialize, Serialize};

/// Canonical type tag for markdown cells, the default for new cells.
pub const MARKDOWN_TYPE_TAG: &str = "markdown";
/// Canonical type tag for code cells.
pub const CODE_TYPE_TAG: &str = "code";

/// Widget family a cell is routed to when displayed.
///
/// There is deliberately no third variant: unrecognized type tags stay
/// in the cell but degrade to the markdown rendering path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderKind {
    /// Free-form markdown editor.
    Markdown,
    /// Code editor with the single implicit notebook language.
    Code,
}

/// One unit of proposed notebook content: a type tag plus free text.
///
/// Cells have no identity beyond their position inside a structure;
/// every editing operation addresses them by index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Serialized as `type` to match the external proposal schema.
    /// Kept verbatim; see [`Cell::render_kind`] for dispatch.
    #[serde(rename = "type")]
    pub type_tag: String,
    /// Markdown text or a code fragment. May be empty; code cells use
    /// one fixed implicit language, with no per-cell selection.
    pub content: String,
}

impl Cell {
    /// Creates a cell with an explicit type tag and content.
    pub fn new(type_tag: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            type_tag: type_tag.into(),
            content: content.into(),
        }
    }

    /// Creates the default cell appended by the add-cell operation:
    /// markdown type, empty content.
    pub fn markdown() -> Self {
        Self::new(MARKDOWN_TYPE_TAG, "")
    }

    /// Decides which editor widget family displays this cell.
    ///
    /// The comparison is case-insensitive and used for rendering
    /// selection only; the stored tag keeps its original casing.
    pub fn render_kind(&self) -> RenderKind {
        if self.type_tag.eq_ignore_ascii_case(CODE_TYPE_TAG) {
            RenderKind::Code
        } else {
            RenderKind::Markdown
        }
    }
}
