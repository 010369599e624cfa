use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

use acumen_core::models::User;

/// The authenticated session: bearer token plus the current user once
/// `/auth/me` has answered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub user: Option<User>,
}

/// Explicitly constructed session state, created at application start and
/// torn down at logout. The UI tree holds a shared reference; persistence
/// across reloads goes through [`SessionState::to_storage`] and
/// [`SessionState::restore`], backed by the host's session storage.
#[derive(Debug, Default)]
pub struct SessionState {
    current: Mutex<Option<Session>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Session>> {
        // A poisoned lock only means a panic elsewhere; the data is a
        // plain Option and stays usable.
        self.current.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn set(&self, session: Session) {
        *self.lock() = Some(session);
    }

    /// Attach the user to the existing session, keeping the token.
    pub fn set_user(&self, user: User) {
        if let Some(session) = self.lock().as_mut() {
            session.user = Some(user);
        }
    }

    pub fn get(&self) -> Option<Session> {
        self.lock().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.get().map(|s| s.token)
    }

    pub fn user(&self) -> Option<User> {
        self.get().and_then(|s| s.user)
    }

    pub fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }

    pub fn clear(&self) {
        *self.lock() = None;
    }

    /// Serialize the session for the browser's session storage. `None`
    /// when logged out, meaning the stored entry should be removed.
    pub fn to_storage(&self) -> Result<Option<String>, serde_json::Error> {
        self.get().map(|s| serde_json::to_string(&s)).transpose()
    }

    /// Rehydrate from a previously stored session string.
    pub fn restore(&self, raw: &str) -> Result<(), serde_json::Error> {
        let session: Session = serde_json::from_str(raw)?;
        self.set(session);
        Ok(())
    }
}
