//! acumen-responses
//!
//! Turning a rendered assessment plus the examinee's selections into a
//! submission payload, and mapping a completed score to its diagnostic
//! band. Pure logic — the actual submission goes through `acumen-api`.

pub mod assembly;
pub mod diagnostics;
pub mod error;

pub use assembly::AnswerSheet;
pub use diagnostics::match_diagnostic;
pub use error::AssemblyError;
