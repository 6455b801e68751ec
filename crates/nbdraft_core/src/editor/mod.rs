//! Structure editing layer.
//!
//! # Responsibility
//! - Route every structure mutation through one owner component.
//! - Keep rendering observers synchronized with the live structure.
//!
//! # Invariants
//! - The editor is the only mutator of the live structure.
//! - A failed operation leaves the structure untouched.

pub mod structure_editor;
