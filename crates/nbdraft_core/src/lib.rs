//! Core editing model for machine-proposed notebook structures.
//! This crate is the single source of truth for proposal invariants.

pub mod editor;
pub mod generate;
pub mod logging;
pub mod model;
pub mod protocol;
pub mod session;

pub use editor::structure_editor::{EditError, EditResult, EditorObserver, StructureEditor};
pub use generate::{ContentGenerator, GenerateRequest};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::cell::{Cell, RenderKind, CODE_TYPE_TAG, MARKDOWN_TYPE_TAG};
pub use model::structure::Structure;
pub use protocol::feedback::{is_submit_gesture, ConfirmationSink, FeedbackPayload, RevisionSink};
pub use session::{ProposalSession, ProtocolError, ProtocolResult, SessionCollaborators};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
