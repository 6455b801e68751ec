//! Feedback channel contracts and payload classification.
//!
//! # Responsibility
//! - Define the collaborator seams for revision and confirmation.
//! - Classify the dual-purpose feedback payload on the receiving side.
//!
//! # Invariants
//! - Empty payloads are legal and forwarded unchanged.
//! - Both payload shapes (free text, serialized structure) stay
//!   accepted on one channel.

use crate::model::structure::Structure;

/// Revision collaborator seam.
///
/// Receives either free-text critique or the JSON-serialized current
/// structure, and may later produce a new proposal as a fresh input.
pub trait RevisionSink {
    /// Fire-and-forget handoff; implementations must accept empty
    /// payloads as a no-op revision signal.
    fn submit(&self, payload: &str);
}

/// Confirmation collaborator seam.
///
/// Told that the current structure is accepted; reads the final
/// structure through a reference held outside this core.
pub trait ConfirmationSink {
    fn confirm(&self);
}

/// Decoded shape of a feedback payload.
///
/// The channel deliberately carries both prose critique and whole
/// structure revisions in a single string parameter; receivers tell
/// them apart by whether the payload parses as structure JSON. A
/// tagged wire format would remove the ambiguity, but both raw shapes
/// remain accepted for compatibility with existing producers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackPayload {
    /// Free-text critique, possibly empty.
    Text(String),
    /// Full serialized structure sent in place of prose, asking for a
    /// revision of the edited structure itself.
    ProposedRevision(Structure),
}

impl FeedbackPayload {
    /// Classifies a raw feedback payload by shape.
    pub fn classify(payload: &str) -> Self {
        match Structure::from_feedback_json(payload) {
            Ok(structure) => Self::ProposedRevision(structure),
            Err(_) => Self::Text(payload.to_string()),
        }
    }
}

/// Returns whether a key event is the plain submit gesture.
///
/// Plain Enter submits the typed feedback and must suppress the
/// default text insertion; Shift+Enter keeps inserting a line break.
/// The actual key event plumbing lives in the rendering layer.
pub fn is_submit_gesture(key: &str, shift_held: bool) -> bool {
    key == "Enter" && !shift_held
}
