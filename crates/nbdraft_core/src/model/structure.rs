//! Proposed notebook structure model.
//!
//! # Responsibility
//! - Hold one proposal: a notebook name plus its ordered cells.
//! - Serialize to and from the feedback-channel wire shape.
//!
//! # Invariants
//! - `cells` order equals the order operations appended or supplied
//!   them; index-based addressing stays valid for a whole session.
//! - Wire keys are `notebook_name` and `cells` (`type`, `content` per
//!   cell) to match the external proposal schema.

use crate::model::cell::Cell;
use serde::{Deserialize, Serialize};

/// Ordered collection of cells plus a human-readable notebook name.
///
/// Produced externally once per proposal cycle, replaced wholesale
/// when a revision cycle yields a new proposal, and released when the
/// session confirms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Structure {
    /// Human-readable label for the whole notebook.
    #[serde(rename = "notebook_name")]
    pub name: String,
    /// Ordered cells; position is the only cell identity.
    pub cells: Vec<Cell>,
}

impl Structure {
    /// Creates a structure from an externally produced proposal.
    pub fn new(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    /// Serializes this structure for the feedback channel.
    pub fn to_feedback_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parses a feedback payload as a proposed structure revision.
    ///
    /// Used by the receiving side of the feedback channel to tell a
    /// structure update apart from free-text critique.
    pub fn from_feedback_json(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }
}
