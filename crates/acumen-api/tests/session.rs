use uuid::Uuid;

use acumen_api::{GuardError, RouteGuard, Session, SessionState, login_redirect};
use acumen_core::models::{User, UserRole};

fn staff(role: UserRole) -> User {
    User {
        id: Uuid::new_v4(),
        email: "dev@example.org".to_string(),
        first_name: "Dana".to_string(),
        last_name: "Reviewer".to_string(),
        role,
        created_at: None,
    }
}

#[test]
fn session_round_trips_through_storage() {
    let state = SessionState::new();
    state.set(Session {
        token: "tok-1".to_string(),
        user: Some(staff(UserRole::Admin)),
    });

    let raw = state.to_storage().unwrap().unwrap();

    let restored = SessionState::new();
    restored.restore(&raw).unwrap();
    assert_eq!(restored.get(), state.get());
    assert_eq!(restored.token().as_deref(), Some("tok-1"));
}

#[test]
fn cleared_session_stores_nothing() {
    let state = SessionState::new();
    state.set(Session {
        token: "tok-1".to_string(),
        user: None,
    });
    state.clear();

    assert!(!state.is_authenticated());
    assert!(state.to_storage().unwrap().is_none());
}

#[test]
fn set_user_keeps_the_token() {
    let state = SessionState::new();
    state.set(Session {
        token: "tok-1".to_string(),
        user: None,
    });
    state.set_user(staff(UserRole::AssessmentDeveloper));

    assert_eq!(state.token().as_deref(), Some("tok-1"));
    assert_eq!(
        state.user().map(|u| u.role),
        Some(UserRole::AssessmentDeveloper)
    );
}

#[test]
fn guard_redirects_to_login_without_a_session() {
    let state = SessionState::new();
    let err = RouteGuard::any_role()
        .check(&state, "/assessments/3")
        .unwrap_err();

    match err {
        GuardError::NotAuthenticated { redirect } => {
            assert_eq!(redirect, "/login?redirect=/assessments/3");
        }
        other => panic!("expected NotAuthenticated, got {other:?}"),
    }
}

#[test]
fn guard_treats_a_token_without_a_profile_as_unauthenticated() {
    let state = SessionState::new();
    state.set(Session {
        token: "tok-1".to_string(),
        user: None,
    });

    let err = RouteGuard::any_role().check(&state, "/users").unwrap_err();
    assert!(matches!(err, GuardError::NotAuthenticated { .. }));
}

#[test]
fn guard_rejects_a_role_outside_the_allowed_set() {
    let state = SessionState::new();
    state.set(Session {
        token: "tok-1".to_string(),
        user: Some(staff(UserRole::AssessmentReviewer)),
    });

    let err = RouteGuard::new([UserRole::Admin])
        .check(&state, "/users")
        .unwrap_err();
    assert!(matches!(
        err,
        GuardError::Forbidden {
            role: UserRole::AssessmentReviewer
        }
    ));
}

#[test]
fn guard_admits_an_allowed_role() {
    let state = SessionState::new();
    state.set(Session {
        token: "tok-1".to_string(),
        user: Some(staff(UserRole::Admin)),
    });

    let user = RouteGuard::new([UserRole::Admin, UserRole::AssessmentDeveloper])
        .check(&state, "/users")
        .unwrap();
    assert_eq!(user.role, UserRole::Admin);
}

#[test]
fn login_redirect_carries_the_original_path() {
    assert_eq!(login_redirect("/responses"), "/login?redirect=/responses");
}
