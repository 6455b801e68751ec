use nbdraft_core::{
    Cell, ConfirmationSink, ContentGenerator, EditError, GenerateRequest, ProposalSession,
    RevisionSink, SessionCollaborators, Structure,
};
use std::sync::{Arc, Mutex};

struct RecordingGenerator {
    requests: Mutex<Vec<GenerateRequest>>,
}

impl RecordingGenerator {
    fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<GenerateRequest> {
        self.requests
            .lock()
            .expect("generator mutex should not be poisoned")
            .clone()
    }
}

impl ContentGenerator for RecordingGenerator {
    fn generate(&self, request: GenerateRequest) {
        self.requests
            .lock()
            .expect("generator mutex should not be poisoned")
            .push(request);
    }
}

struct NullRevisionSink;

impl RevisionSink for NullRevisionSink {
    fn submit(&self, _payload: &str) {}
}

struct NullConfirmationSink;

impl ConfirmationSink for NullConfirmationSink {
    fn confirm(&self) {}
}

fn open_session(structure: Structure) -> (ProposalSession, Arc<RecordingGenerator>) {
    let generator = Arc::new(RecordingGenerator::new());
    let session = ProposalSession::new(
        structure,
        SessionCollaborators {
            revision: Arc::new(NullRevisionSink),
            confirmation: Arc::new(NullConfirmationSink),
            generator: generator.clone(),
        },
    );
    (session, generator)
}

#[test]
fn request_carries_current_content_as_prompt_seed() {
    let (session, generator) = open_session(Structure::new(
        "Demo",
        vec![Cell::new("code", "import math")],
    ));

    session
        .request_generation(0)
        .expect("index 0 should be in range");

    assert_eq!(
        generator.requests(),
        vec![GenerateRequest {
            cell_index: 0,
            prompt_seed: "import math".to_string(),
        }]
    );
}

#[test]
fn empty_content_cell_may_still_request_generation() {
    let (mut session, generator) =
        open_session(Structure::new("Demo", vec![Cell::new("markdown", "intro")]));
    session.add_cell();

    session
        .request_generation(1)
        .expect("index 1 should exist after add_cell");

    assert_eq!(generator.requests()[0].prompt_seed, "");
}

#[test]
fn generated_content_is_applied_through_content_change() {
    let (mut session, _generator) = open_session(Structure::new(
        "Demo",
        vec![Cell::new("code", "# TODO: load the dataset")],
    ));

    session
        .apply_generated_content(0, "df = pd.read_csv('data.csv')")
        .expect("index 0 should be in range");

    assert_eq!(
        session.structure().cells[0].content,
        "df = pd.read_csv('data.csv')"
    );
}

#[test]
fn late_generation_result_overwrites_a_newer_manual_edit() {
    let (mut session, generator) = open_session(Structure::new(
        "Demo",
        vec![Cell::new("code", "seed")],
    ));

    session
        .request_generation(0)
        .expect("index 0 should be in range");
    session
        .change_cell_content(0, "manual edit while generating")
        .expect("index 0 should be in range");

    // The callback lands after the manual edit; last write wins, with
    // no staleness detection against the recorded seed.
    session
        .apply_generated_content(0, "generated from: seed")
        .expect("index 0 should be in range");

    assert_eq!(generator.requests()[0].prompt_seed, "seed");
    assert_eq!(session.structure().cells[0].content, "generated from: seed");
}

#[test]
fn out_of_range_request_fails_and_dispatches_nothing() {
    let (session, generator) =
        open_session(Structure::new("Demo", vec![Cell::new("markdown", "intro")]));

    let err = session
        .request_generation(3)
        .expect_err("index 3 must be out of range");

    assert_eq!(err, EditError::IndexOutOfRange { index: 3, len: 1 });
    assert!(generator.requests().is_empty());
}
