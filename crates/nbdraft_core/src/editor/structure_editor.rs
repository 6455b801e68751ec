//! Structure editor operations and observer notification.
//!
//! # Responsibility
//! - Mediate all mutations of the owned [`Structure`] as discrete
//!   operations.
//! - Notify rendering observers after each successful mutation.
//!
//! # Invariants
//! - The relative order of pre-existing cells never changes.
//! - Out-of-range addressing fails without touching the structure.
//! - Observers are notified after, never during, a mutation.

use crate::model::cell::Cell;
use crate::model::structure::Structure;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub type EditResult<T> = Result<T, EditError>;

/// Editing errors.
///
/// Out-of-range addressing signals a caller bug: the rendering layer
/// must only pass indices obtained from the current structure. The
/// error must propagate so integration mistakes surface in testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    IndexOutOfRange { index: usize, len: usize },
}

impl Display for EditError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "cell index {index} out of range for structure with {len} cells")
            }
        }
    }
}

impl Error for EditError {}

/// Rendering-layer hook invoked after every successful mutation so the
/// displayed state stays synchronized with the owned structure.
pub trait EditorObserver {
    fn structure_changed(&self, structure: &Structure);
}

/// Exclusive owner of the live proposal structure for one session.
///
/// Per-cell handlers are a pure function of editor plus index; no
/// per-cell state is retained between renders.
pub struct StructureEditor {
    structure: Structure,
    observers: Vec<Arc<dyn EditorObserver>>,
}

impl StructureEditor {
    /// Takes ownership of an externally produced proposal.
    pub fn new(structure: Structure) -> Self {
        Self {
            structure,
            observers: Vec::new(),
        }
    }

    /// Registers a rendering observer, notified in registration order.
    pub fn register_observer(&mut self, observer: Arc<dyn EditorObserver>) {
        self.observers.push(observer);
    }

    /// Returns the live structure for rendering and serialization.
    pub fn structure(&self) -> &Structure {
        &self.structure
    }

    /// Returns one cell by index.
    pub fn cell(&self, index: usize) -> EditResult<&Cell> {
        let len = self.structure.cells.len();
        self.structure
            .cells
            .get(index)
            .ok_or(EditError::IndexOutOfRange { index, len })
    }

    /// Returns the current number of cells.
    pub fn cell_count(&self) -> usize {
        self.structure.cells.len()
    }

    /// Appends a default markdown cell with empty content.
    ///
    /// Unconditional: capacity is unbounded and previously handed-out
    /// indices stay valid.
    pub fn add_cell(&mut self) {
        self.structure.cells.push(Cell::markdown());
        self.notify();
    }

    /// Sets one cell's type tag, keeping the supplied tag verbatim.
    ///
    /// Unrecognized tags are legal, not errors; they degrade to the
    /// markdown rendering path at display time.
    pub fn change_cell_type(
        &mut self,
        index: usize,
        new_type: impl Into<String>,
    ) -> EditResult<()> {
        let len = self.structure.cells.len();
        let cell = self
            .structure
            .cells
            .get_mut(index)
            .ok_or(EditError::IndexOutOfRange { index, len })?;
        cell.type_tag = new_type.into();
        self.notify();
        Ok(())
    }

    /// Replaces one cell's content. Empty content is legal.
    pub fn change_cell_content(
        &mut self,
        index: usize,
        new_content: impl Into<String>,
    ) -> EditResult<()> {
        let len = self.structure.cells.len();
        let cell = self
            .structure
            .cells
            .get_mut(index)
            .ok_or(EditError::IndexOutOfRange { index, len })?;
        cell.content = new_content.into();
        self.notify();
        Ok(())
    }

    /// Replaces the proposal wholesale, e.g. when a revision cycle
    /// yields a new structure from the revision collaborator.
    pub fn replace_structure(&mut self, structure: Structure) {
        self.structure = structure;
        self.notify();
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer.structure_changed(&self.structure);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EditError, EditorObserver, StructureEditor};
    use crate::model::cell::Cell;
    use crate::model::structure::Structure;
    use std::sync::{Arc, Mutex};

    struct CountingObserver {
        notifications: Mutex<Vec<usize>>,
    }

    impl CountingObserver {
        fn new() -> Self {
            Self {
                notifications: Mutex::new(Vec::new()),
            }
        }

        fn seen_cell_counts(&self) -> Vec<usize> {
            self.notifications
                .lock()
                .expect("observer mutex should not be poisoned")
                .clone()
        }
    }

    impl EditorObserver for CountingObserver {
        fn structure_changed(&self, structure: &Structure) {
            self.notifications
                .lock()
                .expect("observer mutex should not be poisoned")
                .push(structure.cells.len());
        }
    }

    fn demo_editor() -> StructureEditor {
        StructureEditor::new(Structure::new(
            "Demo",
            vec![Cell::new("markdown", "# Intro")],
        ))
    }

    #[test]
    fn observers_are_notified_after_each_mutation() {
        let mut editor = demo_editor();
        let observer = Arc::new(CountingObserver::new());
        editor.register_observer(observer.clone());

        editor.add_cell();
        editor
            .change_cell_type(1, "code")
            .expect("index 1 should exist after add_cell");
        editor
            .change_cell_content(1, "print(1)")
            .expect("index 1 should exist after add_cell");

        assert_eq!(observer.seen_cell_counts(), vec![2, 2, 2]);
    }

    #[test]
    fn failed_mutation_does_not_notify() {
        let mut editor = demo_editor();
        let observer = Arc::new(CountingObserver::new());
        editor.register_observer(observer.clone());

        let err = editor
            .change_cell_content(5, "x")
            .expect_err("index 5 must be out of range");
        assert_eq!(err, EditError::IndexOutOfRange { index: 5, len: 1 });
        assert!(observer.seen_cell_counts().is_empty());
    }

    #[test]
    fn replace_structure_notifies_with_new_proposal() {
        let mut editor = demo_editor();
        let observer = Arc::new(CountingObserver::new());
        editor.register_observer(observer.clone());

        editor.replace_structure(Structure::new("Revised", vec![]));

        assert_eq!(editor.structure().name, "Revised");
        assert_eq!(observer.seen_cell_counts(), vec![0]);
    }
}
