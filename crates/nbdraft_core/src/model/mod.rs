//! Domain model for proposed notebook structures.
//!
//! # Responsibility
//! - Define the canonical cell and structure shapes used by core logic.
//! - Own the JSON wire shape shared with external collaborators.
//!
//! # Invariants
//! - Cells are identified by position only; there is no per-cell ID.
//! - Cell order is insertion order and is never silently rearranged.

pub mod cell;
pub mod structure;
