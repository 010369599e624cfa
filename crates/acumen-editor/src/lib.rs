//! acumen-editor
//!
//! In-memory reconciliation for the question/choice editor. The edited
//! tree diverges from the server copy until an explicit bulk save; these
//! functions keep sibling order dense and draft identities distinct
//! while the user adds, edits, reorders, and deletes.

pub mod reconcile;
pub mod validate;

pub use reconcile::{Reorderable, append, apply_edit, remove, renumber};
pub use validate::{ValidationIssue, validate_question, validate_tree};
