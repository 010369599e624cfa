use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

/// Process-local token for an entity that has not been persisted yet.
///
/// Allocated from an atomic counter, so two drafts created in the same
/// clock tick can never collide.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct PendingToken(u64);

impl PendingToken {
    pub fn next() -> Self {
        Self(NEXT_TOKEN.fetch_add(1, Ordering::Relaxed))
    }
}

/// Identity of a question or choice.
///
/// Server ids are always >= 1. Entities drafted client-side carry a
/// `Pending` token until the bulk save returns their canonical row, so
/// "not yet saved" is a type-level fact rather than a sign-bit convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "camelCase")]
#[ts(export)]
pub enum EntityId {
    Persisted { id: i64 },
    Pending { token: PendingToken },
}

impl EntityId {
    pub fn persisted(id: i64) -> Self {
        EntityId::Persisted { id }
    }

    /// Allocate a fresh pending identity for a client-side draft.
    pub fn fresh() -> Self {
        EntityId::Pending {
            token: PendingToken::next(),
        }
    }

    /// The server-assigned id, if this entity has one.
    pub fn as_persisted(self) -> Option<i64> {
        match self {
            EntityId::Persisted { id } => Some(id),
            EntityId::Pending { .. } => None,
        }
    }

    pub fn is_pending(self) -> bool {
        matches!(self, EntityId::Pending { .. })
    }
}
