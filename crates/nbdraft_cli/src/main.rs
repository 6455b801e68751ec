//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `nbdraft_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use nbdraft_core::{Cell, Structure, StructureEditor};

fn main() {
    let structure = Structure::new("Demo", vec![Cell::new("markdown", "# Intro")]);
    let mut editor = StructureEditor::new(structure);

    editor.add_cell();
    if let Err(err) = editor.change_cell_type(1, "code") {
        eprintln!("nbdraft_cli error={err}");
        return;
    }
    if let Err(err) = editor.change_cell_content(1, "print(1)") {
        eprintln!("nbdraft_cli error={err}");
        return;
    }

    match editor.structure().to_feedback_json() {
        Ok(json) => println!("nbdraft_core structure={json}"),
        Err(err) => eprintln!("nbdraft_cli error={err}"),
    }
    println!("nbdraft_core ping={}", nbdraft_core::ping());
    println!("nbdraft_core version={}", nbdraft_core::core_version());
}
