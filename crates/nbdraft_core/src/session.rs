//! Proposal session orchestration.
//!
//! # Responsibility
//! - Wire the structure editor to its external collaborators.
//! - Expose the render-facing operation surface one-to-one with the
//!   editor and generation boundary.
//!
//! # Invariants
//! - All mutation routes through the owned editor.
//! - Collaborator dispatches never block and never return values.
//! - Log events carry metadata only, never cell content.

use crate::editor::structure_editor::{EditResult, EditorObserver, StructureEditor};
use crate::generate::{ContentGenerator, GenerateRequest};
use crate::model::structure::Structure;
use crate::protocol::feedback::{ConfirmationSink, RevisionSink};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use uuid::Uuid;

pub type ProtocolResult<T> = Result<T, ProtocolError>;

/// Protocol-level failures outside the editor's index contract.
#[derive(Debug)]
pub enum ProtocolError {
    /// The current structure could not be serialized for the feedback
    /// channel.
    Serialize(serde_json::Error),
}

impl Display for ProtocolError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialize(err) => write!(f, "failed to serialize structure for feedback: {err}"),
        }
    }
}

impl Error for ProtocolError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ProtocolError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// External collaborators wired into one proposal session.
pub struct SessionCollaborators {
    pub revision: Arc<dyn RevisionSink>,
    pub confirmation: Arc<dyn ConfirmationSink>,
    pub generator: Arc<dyn ContentGenerator>,
}

/// One interactive review cycle over a proposed notebook structure.
///
/// The session is active from construction until the reviewer either
/// submits feedback (and a revised proposal arrives from outside) or
/// confirms. Confirmation is terminal by convention only: the editor
/// is not locked afterwards, matching the permissive source semantics.
pub struct ProposalSession {
    session_id: Uuid,
    editor: StructureEditor,
    collaborators: SessionCollaborators,
}

impl ProposalSession {
    /// Opens a session over an externally produced proposal.
    pub fn new(structure: Structure, collaborators: SessionCollaborators) -> Self {
        let session_id = Uuid::new_v4();
        info!(
            "event=session_open module=session status=ok session={} cells={}",
            session_id,
            structure.cells.len()
        );
        Self {
            session_id,
            editor: StructureEditor::new(structure),
            collaborators,
        }
    }

    /// Stable session identifier used in diagnostics.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Returns the live structure for rendering and inspection.
    pub fn structure(&self) -> &Structure {
        self.editor.structure()
    }

    /// Registers a rendering observer on the owned editor.
    pub fn register_observer(&mut self, observer: Arc<dyn EditorObserver>) {
        self.editor.register_observer(observer);
    }

    /// Appends a default markdown cell. See [`StructureEditor::add_cell`].
    pub fn add_cell(&mut self) {
        self.editor.add_cell();
        debug!(
            "event=cell_added module=session status=ok session={} cells={}",
            self.session_id,
            self.editor.cell_count()
        );
    }

    /// Changes one cell's type tag.
    /// See [`StructureEditor::change_cell_type`].
    pub fn change_cell_type(
        &mut self,
        index: usize,
        new_type: impl Into<String>,
    ) -> EditResult<()> {
        self.editor.change_cell_type(index, new_type)
    }

    /// Changes one cell's content.
    /// See [`StructureEditor::change_cell_content`].
    pub fn change_cell_content(
        &mut self,
        index: usize,
        new_content: impl Into<String>,
    ) -> EditResult<()> {
        self.editor.change_cell_content(index, new_content)
    }

    /// Requests generated content for one cell, seeding the prompt
    /// with the cell's current content.
    ///
    /// Fire-and-forget: the collaborator applies its result later via
    /// [`ProposalSession::apply_generated_content`].
    pub fn request_generation(&self, index: usize) -> EditResult<()> {
        let cell = self.editor.cell(index)?;
        debug!(
            "event=generation_requested module=session status=ok session={} index={} seed_len={}",
            self.session_id,
            index,
            cell.content.len()
        );
        self.collaborators.generator.generate(GenerateRequest {
            cell_index: index,
            prompt_seed: cell.content.clone(),
        });
        Ok(())
    }

    /// Applies a generation result to the addressed cell.
    ///
    /// Implemented as a plain content change: against any manual edit
    /// made since the request was dispatched, the last write wins.
    pub fn apply_generated_content(
        &mut self,
        index: usize,
        content: impl Into<String>,
    ) -> EditResult<()> {
        self.editor.change_cell_content(index, content)
    }

    /// Sends free-text feedback to the revision collaborator.
    ///
    /// The payload may be empty; the live structure is not touched. A
    /// revised proposal arrives, if at all, as a fresh input via
    /// [`ProposalSession::replace_structure`].
    pub fn submit_feedback(&self, text: &str) {
        debug!(
            "event=feedback_submitted module=session status=ok session={} payload_len={}",
            self.session_id,
            text.len()
        );
        self.collaborators.revision.submit(text);
    }

    /// Serializes the current structure and submits it as feedback,
    /// asking for a revision of the edited structure rather than
    /// sending prose. Shares the channel with free-text feedback.
    pub fn submit_structure_update(&self) -> ProtocolResult<()> {
        let payload = self.editor.structure().to_feedback_json()?;
        debug!(
            "event=structure_update_submitted module=session status=ok session={} payload_len={}",
            self.session_id,
            payload.len()
        );
        self.collaborators.revision.submit(&payload);
        Ok(())
    }

    /// Replaces the proposal wholesale when a revision cycle yields a
    /// new structure. Rendering observers are notified.
    pub fn replace_structure(&mut self, structure: Structure) {
        info!(
            "event=structure_replaced module=session status=ok session={} cells={}",
            self.session_id,
            structure.cells.len()
        );
        self.editor.replace_structure(structure);
    }

    /// Accepts the current structure for downstream generation.
    ///
    /// The confirmation collaborator reads the final structure through
    /// a reference held outside this core. No payload, no error path.
    pub fn confirm(&self) {
        info!(
            "event=structure_confirmed module=session status=ok session={} cells={}",
            self.session_id,
            self.editor.cell_count()
        );
        self.collaborators.confirmation.confirm();
    }
}
