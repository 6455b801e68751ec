//! Feedback and confirmation protocol contracts.
//!
//! # Responsibility
//! - Define the two terminal interactions available to a reviewer:
//!   request a revision, or accept the structure.
//!
//! # Invariants
//! - Both interactions are fire-and-forget toward collaborators.
//! - Feedback submission never mutates the live structure.

pub mod feedback;
