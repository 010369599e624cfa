//! acumen-core
//!
//! Pure domain types, identity, and sibling-ordering rules. No I/O —
//! this is the shared vocabulary of the Acumen client.

pub mod error;
pub mod id;
pub mod models;
pub mod ordering;
