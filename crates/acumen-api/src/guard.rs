use thiserror::Error;

use acumen_core::models::{User, UserRole};

use crate::session::SessionState;

#[derive(Debug, Error)]
pub enum GuardError {
    /// No token. The caller should navigate to `redirect`, which carries
    /// the original path so login can return the user where they were.
    #[error("not authenticated")]
    NotAuthenticated { redirect: String },

    /// Authenticated but the role is not in the allowed set; the caller
    /// should send the user back to the previous screen.
    #[error("role {role:?} is not allowed on this screen")]
    Forbidden { role: UserRole },
}

/// Gates a screen on a valid session and an allowed-role set.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    allowed: Vec<UserRole>,
}

impl RouteGuard {
    pub fn new(allowed: impl Into<Vec<UserRole>>) -> Self {
        Self {
            allowed: allowed.into(),
        }
    }

    /// Any signed-in staff role passes.
    pub fn any_role() -> Self {
        Self::new(UserRole::all())
    }

    /// Check the current session against this guard. `path` is the
    /// screen being entered, echoed into the login redirect.
    pub fn check(&self, session: &SessionState, path: &str) -> Result<User, GuardError> {
        let Some(current) = session.get() else {
            return Err(GuardError::NotAuthenticated {
                redirect: login_redirect(path),
            });
        };

        match current.user {
            Some(user) if self.allowed.contains(&user.role) => Ok(user),
            Some(user) => Err(GuardError::Forbidden { role: user.role }),
            // Token present but the user is still being fetched; treat a
            // missing profile as unauthenticated rather than guessing a
            // role.
            None => Err(GuardError::NotAuthenticated {
                redirect: login_redirect(path),
            }),
        }
    }
}

/// The login surface with a return path, e.g. `/login?redirect=/assessments/3`.
pub fn login_redirect(path: &str) -> String {
    format!("/login?redirect={path}")
}
